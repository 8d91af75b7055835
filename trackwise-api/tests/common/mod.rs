#![allow(dead_code)]

/// Common test utilities for integration tests
///
/// Every `TestContext` owns a fresh, migrated in-memory database and a router
/// built over it. Requests go through the router in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tower::Service as _;
use trackwise_api::app::{build_router, AppState};
use trackwise_api::config::Config;
use trackwise_shared::auth::password::PasswordScheme;
use trackwise_shared::db::migrations::run_migrations;
use trackwise_shared::db::pool::{create_pool, DatabaseConfig};

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a context using the default (plaintext) password scheme
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_scheme(PasswordScheme::Plaintext).await
    }

    /// Creates a context with the given password scheme
    pub async fn with_scheme(scheme: PasswordScheme) -> anyhow::Result<Self> {
        let mut config = Config::from_vars(HashMap::new())?;
        config.password_scheme = scheme;

        let db = create_pool(DatabaseConfig::in_memory()).await?;
        run_migrations(&db).await?;

        let app = build_router(AppState::new(db.clone(), config));

        Ok(TestContext { db, app })
    }

    /// Context whose database has no schema applied
    pub async fn without_schema() -> anyhow::Result<Self> {
        let config = Config::from_vars(HashMap::new())?;
        let db = create_pool(DatabaseConfig::in_memory()).await?;
        let app = build_router(AppState::new(db.clone(), config));
        Ok(TestContext { db, app })
    }

    /// Sends a request and returns the status and parsed JSON body
    ///
    /// An empty body parses as `Value::Null`.
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    /// Sends a raw body with the JSON content type
    pub async fn send_raw(&self, method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();

        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                panic!(
                    "Response body is not JSON ({}): {}",
                    status,
                    String::from_utf8_lossy(&bytes)
                )
            })
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    /// Row count of a table
    pub async fn count(&self, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.db)
            .await
            .unwrap();
        n
    }
}
