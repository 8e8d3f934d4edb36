//! Admin dashboard API handlers.
//!
//! Every handler takes [`RequireAdminApi`], so a missing token is 401, a
//! rejected token is 403, and a non-admin identity is 403 before any work
//! happens.

use axum::{Json, extract::Path, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::{Value, json};

use kedai_core::{OrderId, ProductId};

use crate::db::orders::OrderRepository;
use crate::db::products::ProductRepository;
use crate::db::reservations::ReservationRepository;
use crate::error::{AppError, Result};
use crate::middleware::auth::RequireAdminApi;
use crate::models::order::OrderStatus;
use crate::models::product::ProductPayload;
use crate::state::AppState;

/// `POST /api/admin/products` - add a menu item.
pub async fn create_product(
    State(state): State<AppState>,
    RequireAdminApi(identity): RequireAdminApi,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let product = ProductRepository::new(state.pool()).create(&payload).await?;

    tracing::info!(product_id = %product.id, admin = %identity.user_id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "product": product })),
    ))
}

/// `PUT /api/admin/products/{id}` - replace a menu item.
pub async fn update_product(
    State(state): State<AppState>,
    RequireAdminApi(_identity): RequireAdminApi,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Value>> {
    payload.validate()?;
    let product = ProductRepository::new(state.pool())
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("product".to_string()))?;

    Ok(Json(json!({ "success": true, "product": product })))
}

/// `DELETE /api/admin/products/{id}` - remove a menu item.
pub async fn delete_product(
    State(state): State<AppState>,
    RequireAdminApi(identity): RequireAdminApi,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>> {
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("product".to_string()));
    }

    tracing::info!(product_id = %id, admin = %identity.user_id, "product deleted");
    Ok(Json(json!({ "success": true })))
}

/// `GET /api/admin/orders` - every order.
pub async fn list_orders(
    State(state): State<AppState>,
    RequireAdminApi(_identity): RequireAdminApi,
) -> Result<Json<Value>> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    Ok(Json(json!({ "success": true, "orders": orders })))
}

/// Status update payload.
#[derive(Debug, Deserialize)]
pub struct OrderStatusPayload {
    pub status: OrderStatus,
}

/// `PUT /api/admin/orders/{id}/status` - move an order along the kitchen
/// lifecycle.
pub async fn update_order_status(
    State(state): State<AppState>,
    RequireAdminApi(_identity): RequireAdminApi,
    Path(id): Path<OrderId>,
    Json(payload): Json<OrderStatusPayload>,
) -> Result<Json<Value>> {
    let updated = OrderRepository::new(state.pool())
        .update_status(id, payload.status)
        .await?;
    if !updated {
        return Err(AppError::NotFound("order".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}

/// `GET /api/admin/reservations` - every reservation.
pub async fn list_reservations(
    State(state): State<AppState>,
    RequireAdminApi(_identity): RequireAdminApi,
) -> Result<Json<Value>> {
    let reservations = ReservationRepository::new(state.pool()).list_all().await?;
    Ok(Json(json!({ "success": true, "reservations": reservations })))
}
