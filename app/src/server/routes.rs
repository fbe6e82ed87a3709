//! Router configuration for the booking service.
//!
//! Builds the complete Axum router. The `/api` routes proxy directly to the
//! hosted database tables: no pagination, no auth check on reads, equality
//! filters only.

use super::health::health_check;
use super::state::AppState;
use crate::api::{bookings, events, seats};
use axum::{
    Router,
    routing::{get, post},
};

/// Build the complete Axum router.
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
///
/// # Returns
///
/// Configured Axum router ready to serve requests.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/:id", get(events::get_event))
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/:user_id", get(bookings::list_user_bookings))
        .route("/seats/:event_id", get(seats::list_event_seats));

    Router::new()
        // Health check (no authentication)
        .route("/health", get(health_check))
        // API routes under /api prefix
        .nest("/api", api_routes)
        .with_state(state)
}
