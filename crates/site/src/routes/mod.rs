//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                - Landing page
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (DB ping)
//!
//! # Pages (session-gated, redirect on mismatch)
//! GET  /login                           - Login page (anonymous only)
//! GET  /member                          - Member dashboard (member only)
//! GET  /admin                           - Admin dashboard (admin only)
//!
//! # Menu
//! GET  /api/menu                        - Menu listing
//! GET  /api/menu/{id}                   - Menu item detail
//!
//! # Auth
//! POST /api/auth/register               - Create a member account
//! POST /api/auth/login                  - Login, sets the session cookie
//! POST /api/auth/logout                 - Logout, clears the session cookie
//! GET  /api/auth/me                     - Current session decision
//!
//! # Orders
//! POST /api/orders                      - Checkout (guests allowed)
//! GET  /api/orders/me                   - Caller's order history
//! GET  /api/orders/{id}                 - Order detail (owner or admin)
//!
//! # Reservations (account required)
//! POST /api/reservations                - Book a table with a menu pre-order
//! GET  /api/reservations/me             - Caller's reservations
//!
//! # Admin API (admin role required)
//! POST   /api/admin/products            - Create menu item
//! PUT    /api/admin/products/{id}       - Replace menu item
//! DELETE /api/admin/products/{id}       - Delete menu item
//! GET    /api/admin/orders              - All orders
//! PUT    /api/admin/orders/{id}/status  - Update order status
//! GET    /api/admin/reservations        - All reservations
//! ```

pub mod admin;
pub mod auth;
pub mod menu;
pub mod orders;
pub mod pages;
pub mod reservations;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Build the full application with health endpoints and state attached.
///
/// Shared by `main` and the in-process integration tests; observability
/// layers (trace, sentry) are added by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Assemble every application route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login_page))
        .route("/member", get(pages::member_home))
        .route("/admin", get(pages::admin_home))
        .merge(api_routes())
        .merge(admin_routes())
}

/// Public and member API routes.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/menu", get(menu::list_menu))
        .route("/api/menu/{id}", get(menu::menu_item))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/me", get(orders::my_orders))
        .route("/api/orders/{id}", get(orders::order_detail))
        .route("/api/reservations", post(reservations::create_reservation))
        .route("/api/reservations/me", get(reservations::my_reservations))
}

/// Admin dashboard API routes.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/products", post(admin::create_product))
        .route("/api/admin/products/{id}", put(admin::update_product))
        .route("/api/admin/products/{id}", delete(admin::delete_product))
        .route("/api/admin/orders", get(admin::list_orders))
        .route("/api/admin/orders/{id}/status", put(admin::update_order_status))
        .route("/api/admin/reservations", get(admin::list_reservations))
}
