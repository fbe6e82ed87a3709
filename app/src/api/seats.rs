//! Seat listing endpoint.
//!
//! - `GET /api/seats/:event_id` - seats for an event, ordered by label
//!
//! Proxies directly to the hosted `seats` table.

use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use samosa_gateway::SeatRow;

/// List seats for an event.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/seats/ev-101
/// ```
///
/// # Errors
///
/// Returns 502 when the hosted service is unreachable.
pub async fn list_event_seats(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<SeatRow>>, ApiError> {
    let rows = state.gateway.seats_for_event(&event_id).await?;
    Ok(Json(rows))
}
