//! Menu browsing handlers (public).

use axum::{Json, extract::Path, extract::State};
use serde_json::{Value, json};

use kedai_core::ProductId;

use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// `GET /api/menu` - the full menu.
pub async fn list_menu(State(state): State<AppState>) -> Result<Json<Value>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(json!({ "success": true, "products": products })))
}

/// `GET /api/menu/{id}` - one menu item.
pub async fn menu_item(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("product".to_string()))?;
    Ok(Json(json!({ "success": true, "product": product })))
}
