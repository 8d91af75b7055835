//! Request extractors that reject with [`ApiError`] instead of axum's
//! plain-text rejections.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has been deserialized and validated
///
/// Unreadable bodies (bad JSON, wrong content type, a top-level value that
/// is not an object, missing or mistyped fields) become `400 bad_request`;
/// rule violations become `400 validation_error`. Nothing reaches the handler in either case.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        // Derived struct visitors would otherwise bind arrays positionally
        if !body.is_object() {
            return Err(ApiError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        }

        let value: T = serde_json::from_value(body).map_err(|e| {
            ApiError::BadRequest(format!("Failed to deserialize the JSON body: {}", e))
        })?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Integer record id taken from the path
///
/// Anything other than a plain decimal id is treated as an unknown resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl RecordId {
    fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(Self)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound("Resource not found".to_string()))?;

        Self::parse(&raw).ok_or_else(|| ApiError::NotFound(format!("No resource with id '{}'", raw)))
    }
}
