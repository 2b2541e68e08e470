//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use stockwatch_domain::ItemId;
use stockwatch_shared::{
    routes, CreateItemRequest, DeleteItemResponse, ErrorBody, ItemData, UpdateQuantityRequest,
};

use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::inventory::{CreateItemInput, InventoryError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route(routes::HEALTH, get(health))
        .route(routes::ITEMS, get(list_items).post(create_item))
        .route(
            &format!("{}/{{id}}", routes::ITEMS),
            get(get_item).put(update_item).delete(delete_item),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Items
// =============================================================================

async fn list_items(State(app): State<Arc<App>>) -> Result<Json<Vec<ItemData>>, ApiError> {
    let items = app.use_cases.inventory.ops.list_items().await?;
    Ok(Json(items.into_iter().map(ItemData::from).collect()))
}

async fn create_item(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemData>), ApiError> {
    let Json(body) = body?;
    let input = CreateItemInput {
        name: body.name,
        quantity: body.quantity,
        category: body.category,
        threshold: body.threshold,
    };

    let item = app.use_cases.inventory.create.execute(input).await?;
    Ok((StatusCode::CREATED, Json(ItemData::from(item))))
}

async fn get_item(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<ItemData>, ApiError> {
    let item = app
        .use_cases
        .inventory
        .ops
        .get_item(parse_item_id(&id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(ItemData::from(item)))
}

/// Replies `null` when the id is unknown.
async fn update_item(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateQuantityRequest>, JsonRejection>,
) -> Result<Json<Option<ItemData>>, ApiError> {
    let item_id = parse_item_id(&id)?;
    let Json(body) = body?;

    let updated = app
        .use_cases
        .inventory
        .update_quantity
        .execute(item_id, body.quantity)
        .await?;
    Ok(Json(updated.map(ItemData::from)))
}

async fn delete_item(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteItemResponse>, ApiError> {
    app.use_cases
        .inventory
        .delete
        .execute(parse_item_id(&id)?)
        .await?;
    Ok(Json(DeleteItemResponse::default()))
}

fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid item id: {raw}")))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Item not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        if e.is_invalid_input() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
