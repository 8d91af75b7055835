/// Inventory endpoints
///
/// - `GET    /api/inventory` - List items
/// - `POST   /api/inventory` - Create an item
/// - `PUT    /api/inventory/:id` - Partial update
/// - `DELETE /api/inventory/:id` - Delete

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{RecordId, ValidatedJson},
    routes::SuccessResponse,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use trackwise_shared::models::inventory_item::{
    CreateInventoryItem, InventoryItem, UpdateInventoryItem,
};
use validator::Validate;

/// Create inventory item request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Must be an integer; negative values are accepted
    pub quantity: i64,
}

/// Update inventory item request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInventoryItemRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub quantity: Option<i64>,
}

/// Inventory item as returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryItemResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

impl From<InventoryItem> for InventoryItemResponse {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
        }
    }
}

pub async fn list_inventory(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<InventoryItemResponse>>> {
    let items = state.inventory.list().await?;
    Ok(Json(items.into_iter().map(InventoryItemResponse::from).collect()))
}

pub async fn create_inventory_item(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateInventoryItemRequest>,
) -> ApiResult<Json<InventoryItemResponse>> {
    let item = state
        .inventory
        .create(CreateInventoryItem {
            name: req.name,
            quantity: req.quantity,
        })
        .await?;

    tracing::info!(item_id = item.id, quantity = item.quantity, "Created inventory item");
    Ok(Json(item.into()))
}

/// Updates the supplied fields of an item
///
/// # Errors
///
/// - `400 Bad Request`: Invalid field (e.g. a non-integer quantity)
/// - `404 Not Found`: No item with this id
pub async fn update_inventory_item(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(req): ValidatedJson<UpdateInventoryItemRequest>,
) -> ApiResult<Json<InventoryItemResponse>> {
    let item = state
        .inventory
        .update(
            id,
            UpdateInventoryItem {
                name: req.name,
                quantity: req.quantity,
            },
        )
        .await?;

    tracing::info!(item_id = id, "Updated inventory item");
    Ok(Json(item.into()))
}

pub async fn delete_inventory_item(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<SuccessResponse>> {
    state.inventory.delete(id).await?;
    tracing::info!(item_id = id, "Deleted inventory item");
    Ok(Json(SuccessResponse::ok()))
}
