//! Checkout and order history handlers.

use std::collections::HashMap;

use axum::{Json, extract::Path, extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use kedai_core::{OrderId, OrderTotals, ProductId, ProductSelection, Role};

use crate::db::orders::OrderRepository;
use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::auth::{CurrentSession, RequireApiAuth};
use crate::models::order::{OrderLineRequest, OrderRequest};
use crate::state::AppState;

/// Resolve requested lines against the menu, capturing server-side prices.
///
/// Clients send product ids and quantities only; the unit price always comes
/// from the products table so a tampered payload cannot set its own prices.
pub(crate) async fn resolve_selections(
    products: &ProductRepository<'_>,
    lines: &[OrderLineRequest],
) -> Result<Vec<ProductSelection>> {
    let ids: Vec<ProductId> = lines.iter().map(|line| line.product_id).collect();
    let found = products.get_many(&ids).await?;
    let prices: HashMap<ProductId, Decimal> =
        found.into_iter().map(|p| (p.id, p.price)).collect();

    lines
        .iter()
        .map(|line| {
            let price = prices
                .get(&line.product_id)
                .copied()
                .ok_or_else(|| AppError::NotFound(format!("product {}", line.product_id)))?;
            Ok(ProductSelection {
                product_id: line.product_id,
                quantity: line.quantity,
                price,
            })
        })
        .collect()
}

/// `POST /api/orders` - checkout.
///
/// Guests may order; a logged-in member gets the member discount. The
/// session decision only feeds the membership flag, so a broken token means
/// guest pricing rather than an error.
pub async fn create_order(
    State(state): State<AppState>,
    CurrentSession(decision): CurrentSession,
    Json(payload): Json<OrderRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let products = ProductRepository::new(state.pool());
    let selections = resolve_selections(&products, &payload.items).await?;

    let is_member = decision.role() == Some(Role::Member);
    let totals = OrderTotals::compute(&selections, is_member);

    let order = OrderRepository::new(state.pool())
        .create(
            decision.identity().map(|identity| identity.user_id),
            payload.customer_name.trim(),
            payload.phone.trim(),
            &selections,
            &totals,
        )
        .await?;

    tracing::info!(order_id = %order.id, total = %order.total, is_member, "order placed");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "order": order })),
    ))
}

/// `GET /api/orders/me` - the caller's order history.
pub async fn my_orders(
    State(state): State<AppState>,
    RequireApiAuth(identity): RequireApiAuth,
) -> Result<Json<Value>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(identity.user_id)
        .await?;
    Ok(Json(json!({ "success": true, "orders": orders })))
}

/// `GET /api/orders/{id}` - order detail, visible to its owner and admins.
///
/// Someone else's order id answers 404, not 403, to avoid confirming that
/// the order exists.
pub async fn order_detail(
    State(state): State<AppState>,
    RequireApiAuth(identity): RequireApiAuth,
    Path(id): Path<OrderId>,
) -> Result<Json<Value>> {
    let order = OrderRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("order".to_string()))?;

    let is_owner = order.user_id == Some(identity.user_id);
    if !is_owner && identity.role != Role::Admin {
        return Err(AppError::NotFound("order".to_string()));
    }
    Ok(Json(json!({ "success": true, "order": order })))
}
