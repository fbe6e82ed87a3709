//! In-memory gateway for tests and demos
//!
//! Implements [`DataGateway`] over process-local hash maps so the booking
//! flow, HTTP handlers and the demo binary can run without a hosted
//! service. Semantics intentionally match the remote layer: sign-up upserts
//! a profile row, lookups of missing rows return `NotFound`, and repeated
//! booking inserts create duplicate rows.

use crate::error::GatewayError;
use crate::store::{DataGateway, GatewayFuture, require_credentials};
use crate::types::{
    AuthUser, BookingRow, Category, EventRow, NewBooking, NewEvent, Profile, ProfilePatch,
    SeatRow, Session,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Account {
    id: Uuid,
    password: String,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    profiles: HashMap<Uuid, Profile>,
    events: Vec<EventRow>,
    seats: HashMap<String, Vec<SeatRow>>,
    bookings: Vec<BookingRow>,
}

/// Process-local implementation of [`DataGateway`]
#[derive(Clone, Debug, Default)]
pub struct InMemoryGateway {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryGateway {
    /// Create an empty in-memory gateway
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the `events` table
    #[must_use]
    pub fn with_events(self, events: Vec<EventRow>) -> Self {
        self.lock().events = events;
        self
    }

    /// Seed the `seats` table for one event
    #[must_use]
    pub fn with_seats(self, event_id: impl Into<String>, seats: Vec<SeatRow>) -> Self {
        self.lock().seats.insert(event_id.into(), seats);
        self
    }

    /// Number of booking rows currently stored
    #[must_use]
    pub fn booking_count(&self) -> usize {
        self.lock().bookings.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn session_for(user: &AuthUser) -> Session {
        Session {
            access_token: format!("mem-{}", Uuid::new_v4()),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            refresh_token: format!("mem-refresh-{}", Uuid::new_v4()),
            user: user.clone(),
        }
    }
}

impl DataGateway for InMemoryGateway {
    fn sign_up(&self, email: &str, password: &str) -> GatewayFuture<Session> {
        let this = self.clone();
        let email = email.to_string();
        let password = password.to_string();
        Box::pin(async move {
            require_credentials(&email, &password)?;

            let mut inner = this.lock();
            if inner.accounts.contains_key(&email) {
                return Err(GatewayError::ApiError {
                    status: 422,
                    message: "User already registered".to_string(),
                });
            }

            let id = Uuid::new_v4();
            inner.accounts.insert(
                email.clone(),
                Account {
                    id,
                    password: password.clone(),
                },
            );

            // Same side effect as the remote layer: a profile row keyed by
            // the new user id.
            let username = email.split('@').next().unwrap_or(&email).to_string();
            inner.profiles.insert(
                id,
                Profile {
                    id,
                    username,
                    email: email.clone(),
                },
            );

            let user = AuthUser { id, email };
            Ok(Self::session_for(&user))
        })
    }

    fn sign_in(&self, email: &str, password: &str) -> GatewayFuture<Session> {
        let this = self.clone();
        let email = email.to_string();
        let password = password.to_string();
        Box::pin(async move {
            require_credentials(&email, &password)?;

            let inner = this.lock();
            let Some(account) = inner.accounts.get(&email) else {
                return Err(GatewayError::InvalidCredentials);
            };
            if account.password != password {
                return Err(GatewayError::InvalidCredentials);
            }

            let user = AuthUser {
                id: account.id,
                email,
            };
            Ok(Self::session_for(&user))
        })
    }

    fn sign_out(&self, _access_token: &str) -> GatewayFuture<()> {
        Box::pin(async { Ok(()) })
    }

    fn list_events(&self, category: Option<Category>) -> GatewayFuture<Vec<EventRow>> {
        let this = self.clone();
        Box::pin(async move {
            let inner = this.lock();
            Ok(inner
                .events
                .iter()
                .filter(|event| category.is_none_or(|c| event.category == c))
                .cloned()
                .collect())
        })
    }

    fn get_event(&self, id: &str) -> GatewayFuture<EventRow> {
        let this = self.clone();
        let id = id.to_string();
        Box::pin(async move {
            let inner = this.lock();
            inner
                .events
                .iter()
                .find(|event| event.id == id)
                .cloned()
                .ok_or_else(|| GatewayError::not_found("events", &id))
        })
    }

    fn create_event(&self, event: NewEvent) -> GatewayFuture<EventRow> {
        let this = self.clone();
        Box::pin(async move {
            let mut inner = this.lock();
            let row = EventRow {
                id: format!("ev-{}", inner.events.len() + 1),
                title: event.title,
                category: event.category,
                venue: event.venue,
                date: event.date,
                image_url: event.image_url,
                price: event.price,
                status: event.status,
                created_at: Some(chrono::Utc::now()),
            };
            inner.events.push(row.clone());
            Ok(row)
        })
    }

    fn create_booking(&self, booking: NewBooking) -> GatewayFuture<BookingRow> {
        let this = self.clone();
        Box::pin(async move {
            let mut inner = this.lock();
            // No idempotency key: every insert is a fresh row.
            let row = BookingRow {
                id: format!("bk-{}", inner.bookings.len() + 1),
                booking,
                created_at: Some(chrono::Utc::now()),
            };
            inner.bookings.push(row.clone());
            Ok(row)
        })
    }

    fn bookings_for_user(&self, user_id: Uuid) -> GatewayFuture<Vec<BookingRow>> {
        let this = self.clone();
        Box::pin(async move {
            let inner = this.lock();
            let mut rows: Vec<BookingRow> = inner
                .bookings
                .iter()
                .filter(|row| row.booking.user_id == Some(user_id))
                .cloned()
                .collect();
            rows.reverse(); // newest first, like the remote ordering
            Ok(rows)
        })
    }

    fn seats_for_event(&self, event_id: &str) -> GatewayFuture<Vec<SeatRow>> {
        let this = self.clone();
        let event_id = event_id.to_string();
        Box::pin(async move {
            let inner = this.lock();
            Ok(inner.seats.get(&event_id).cloned().unwrap_or_default())
        })
    }

    fn get_profile(&self, user_id: Uuid) -> GatewayFuture<Profile> {
        let this = self.clone();
        Box::pin(async move {
            let inner = this.lock();
            inner
                .profiles
                .get(&user_id)
                .cloned()
                .ok_or_else(|| GatewayError::not_found("profiles", user_id.to_string()))
        })
    }

    fn update_profile(&self, user_id: Uuid, patch: ProfilePatch) -> GatewayFuture<Profile> {
        let this = self.clone();
        Box::pin(async move {
            let mut inner = this.lock();
            let Some(profile) = inner.profiles.get_mut(&user_id) else {
                return Err(GatewayError::not_found("profiles", user_id.to_string()));
            };
            if let Some(username) = patch.username {
                profile.username = username;
            }
            if let Some(email) = patch.email {
                profile.email = email;
            }
            Ok(profile.clone())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_booking() -> NewBooking {
        NewBooking {
            booking_token: "K7QM2XB4A".to_string(),
            user_id: None,
            event_id: None,
            section: Some("Gold".to_string()),
            seats: vec!["Gold - 1".to_string(), "Gold - 2".to_string()],
            total_amount: 7000,
            payment_method: "card".to_string(),
            gate_number: None,
            booked_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in_yields_a_session() {
        let gateway = InMemoryGateway::new();

        let signed_up = gateway
            .sign_up("priya@example.com", "secret")
            .await
            .unwrap();
        let signed_in = gateway
            .sign_in("priya@example.com", "secret")
            .await
            .unwrap();

        assert_eq!(signed_up.user.id, signed_in.user.id);
        assert!(!signed_in.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_upserts_profile_row() {
        let gateway = InMemoryGateway::new();
        let session = gateway
            .sign_up("priya@example.com", "secret")
            .await
            .unwrap();

        let profile = gateway.get_profile(session.user.id).await.unwrap();
        assert_eq!(profile.username, "priya");
        assert_eq!(profile.email, "priya@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let gateway = InMemoryGateway::new();
        gateway
            .sign_up("priya@example.com", "secret")
            .await
            .unwrap();

        let err = gateway
            .sign_in("priya@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_double_submit_creates_duplicate_rows() {
        let gateway = InMemoryGateway::new();
        gateway.create_booking(sample_booking()).await.unwrap();
        gateway.create_booking(sample_booking()).await.unwrap();
        assert_eq!(gateway.booking_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_event_is_not_found() {
        let gateway = InMemoryGateway::new();
        let err = gateway.get_event("nope").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_profile_patches_fields() {
        let gateway = InMemoryGateway::new();
        let session = gateway
            .sign_up("priya@example.com", "secret")
            .await
            .unwrap();

        let updated = gateway
            .update_profile(
                session.user.id,
                ProfilePatch {
                    username: Some("priya_k".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.username, "priya_k");
        assert_eq!(updated.email, "priya@example.com");
    }
}
