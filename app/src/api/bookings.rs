//! Booking endpoints.
//!
//! - `POST /api/bookings` - insert a booking row
//! - `GET /api/bookings/:user_id` - list a user's bookings, newest first
//!
//! Inserts carry no idempotency key; a double submit produces duplicate
//! rows, exactly like the hosted table would.

use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use samosa_gateway::{BookingRow, NewBooking};
use uuid::Uuid;

/// Insert a booking row.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/bookings \
///   -H "Content-Type: application/json" \
///   -d '{
///     "booking_token": "K7QM2XB4A",
///     "seats": ["East Stand - 1"],
///     "total_amount": 1000,
///     "payment_method": "upi",
///     "booked_at": "2024-04-15T12:00:00Z"
///   }'
/// ```
///
/// # Errors
///
/// Returns 502 when the hosted service is unreachable.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(booking): Json<NewBooking>,
) -> Result<(StatusCode, Json<BookingRow>), ApiError> {
    let row = state.gateway.create_booking(booking).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// List a user's bookings, newest first.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/bookings/550e8400-e29b-41d4-a716-446655440000
/// ```
///
/// # Errors
///
/// Returns 502 when the hosted service is unreachable.
pub async fn list_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<BookingRow>>, ApiError> {
    let rows = state.gateway.bookings_for_user(user_id).await?;
    Ok(Json(rows))
}
