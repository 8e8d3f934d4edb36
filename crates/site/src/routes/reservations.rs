//! Table reservation handlers (account required).

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use kedai_core::{OrderTotals, Role, reservation_due};

use crate::db::products::ProductRepository;
use crate::db::reservations::ReservationRepository;
use crate::error::Result;
use crate::middleware::auth::RequireApiAuth;
use crate::models::reservation::ReservationRequest;
use crate::routes::orders::resolve_selections;
use crate::state::AppState;

/// `POST /api/reservations` - book a table with a menu pre-order.
///
/// The pre-order is priced like a normal order; the payment status then
/// decides whether the full total or half of it is due at booking time.
pub async fn create_reservation(
    State(state): State<AppState>,
    RequireApiAuth(identity): RequireApiAuth,
    Json(payload): Json<ReservationRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let products = ProductRepository::new(state.pool());
    let selections = resolve_selections(&products, &payload.items).await?;

    let is_member = identity.role == Role::Member;
    let totals = OrderTotals::compute(&selections, is_member);
    let amount_due = reservation_due(payload.payment, totals.total);

    let reservation = ReservationRepository::new(state.pool())
        .create(
            identity.user_id,
            payload.reserved_for,
            payload.party_size,
            payload.payment,
            totals.total,
            amount_due,
        )
        .await?;

    tracing::info!(
        reservation_id = %reservation.id,
        amount_due = %reservation.amount_due,
        "reservation booked"
    );
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "reservation": reservation })),
    ))
}

/// `GET /api/reservations/me` - the caller's reservations.
pub async fn my_reservations(
    State(state): State<AppState>,
    RequireApiAuth(identity): RequireApiAuth,
) -> Result<Json<Value>> {
    let reservations = ReservationRepository::new(state.pool())
        .list_for_user(identity.user_id)
        .await?;
    Ok(Json(json!({ "success": true, "reservations": reservations })))
}
