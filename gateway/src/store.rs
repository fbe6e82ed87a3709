//! The `DataGateway` abstraction
//!
//! Object-safe trait over the hosted service so the booking flow, HTTP
//! handlers, tests and the demo binary can share one interface. Production
//! code uses [`crate::RemoteGateway`]; tests and demos use
//! [`crate::InMemoryGateway`].

use crate::error::GatewayResult;
use crate::types::{
    BookingRow, Category, EventRow, NewBooking, NewEvent, Profile, ProfilePatch, SeatRow, Session,
};
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

/// Boxed future returned by gateway operations
pub type GatewayFuture<T> = Pin<Box<dyn Future<Output = GatewayResult<T>> + Send>>;

/// Abstraction over the hosted auth/database service
///
/// Every operation suspends the caller until the response arrives; there is
/// no cancellation, retry or timeout policy anywhere in the gateway.
pub trait DataGateway: Send + Sync {
    /// Register a new account and upsert its profile row
    ///
    /// # Errors
    ///
    /// Returns `EmptyCredentials` before any request when either input is
    /// empty, and whatever the service reports otherwise.
    fn sign_up(&self, email: &str, password: &str) -> GatewayFuture<Session>;

    /// Sign in with email and password
    ///
    /// # Errors
    ///
    /// Returns `EmptyCredentials` for empty inputs and `InvalidCredentials`
    /// when the service rejects the pair.
    fn sign_in(&self, email: &str, password: &str) -> GatewayFuture<Session>;

    /// Invalidate a session token
    ///
    /// # Errors
    ///
    /// Returns a gateway error if the service call fails.
    fn sign_out(&self, access_token: &str) -> GatewayFuture<()>;

    /// List events, optionally filtered by category
    ///
    /// # Errors
    ///
    /// Returns a gateway error if the service call fails.
    fn list_events(&self, category: Option<Category>) -> GatewayFuture<Vec<EventRow>>;

    /// Fetch a single event by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no row matches.
    fn get_event(&self, id: &str) -> GatewayFuture<EventRow>;

    /// Insert an event row
    ///
    /// # Errors
    ///
    /// Returns a gateway error if the service call fails.
    fn create_event(&self, event: NewEvent) -> GatewayFuture<EventRow>;

    /// Insert a booking row
    ///
    /// No idempotency key is attached: a double submit produces duplicate
    /// rows.
    ///
    /// # Errors
    ///
    /// Returns a gateway error if the service call fails.
    fn create_booking(&self, booking: NewBooking) -> GatewayFuture<BookingRow>;

    /// List bookings for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns a gateway error if the service call fails.
    fn bookings_for_user(&self, user_id: Uuid) -> GatewayFuture<Vec<BookingRow>>;

    /// List seats for an event, ordered by seat number
    ///
    /// # Errors
    ///
    /// Returns a gateway error if the service call fails.
    fn seats_for_event(&self, event_id: &str) -> GatewayFuture<Vec<SeatRow>>;

    /// Fetch a profile row
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no row matches.
    fn get_profile(&self, user_id: Uuid) -> GatewayFuture<Profile>;

    /// Patch a profile row and return the updated row
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no row matches.
    fn update_profile(&self, user_id: Uuid, patch: ProfilePatch) -> GatewayFuture<Profile>;
}

/// Reject empty credentials before any request is sent
///
/// # Errors
///
/// Returns `EmptyCredentials` when either input is empty.
pub(crate) fn require_credentials(email: &str, password: &str) -> GatewayResult<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(crate::error::GatewayError::EmptyCredentials);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(matches!(
            require_credentials("", "secret"),
            Err(GatewayError::EmptyCredentials)
        ));
        assert!(matches!(
            require_credentials("user@example.com", ""),
            Err(GatewayError::EmptyCredentials)
        ));
        assert!(matches!(
            require_credentials("   ", "secret"),
            Err(GatewayError::EmptyCredentials)
        ));
    }

    #[test]
    fn test_nonempty_credentials_accepted() {
        assert!(require_credentials("user@example.com", "secret").is_ok());
    }
}
