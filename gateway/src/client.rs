//! HTTP client for the hosted auth/database service
//!
//! The service exposes an auth endpoint (`/auth/v1`) and a generated REST
//! layer (`/rest/v1/<table>`) addressed with equality filters. This client
//! wraps both behind the [`DataGateway`] trait.

use crate::error::{GatewayError, GatewayResult};
use crate::store::{DataGateway, GatewayFuture, require_credentials};
use crate::types::{
    BookingRow, Category, EventRow, NewBooking, NewEvent, Profile, ProfilePatch, SeatRow, Session,
};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

/// Client for the hosted service
///
/// One instance is constructed at startup from [`RemoteGateway::new`] and
/// shared by reference for the lifetime of the process; no teardown is
/// required.
#[derive(Clone)]
pub struct RemoteGateway {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl RemoteGateway {
    /// Create a new gateway client for the given service URL and public key
    #[must_use]
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            anon_key: anon_key.into(),
        }
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn with_keys(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Send a request and parse the JSON response body
    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> GatewayResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| GatewayError::ResponseParseFailed(e.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GatewayError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(GatewayError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Send a request where only the status matters
    async fn send_ok(request: RequestBuilder) -> GatewayResult<()> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GatewayError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(GatewayError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Fetch rows from a table and expect exactly one
    async fn single_row<T: DeserializeOwned>(
        request: RequestBuilder,
        resource: &str,
        id: &str,
    ) -> GatewayResult<T> {
        let mut rows: Vec<T> = Self::send_json(request).await?;
        if rows.is_empty() {
            return Err(GatewayError::not_found(resource, id));
        }
        Ok(rows.swap_remove(0))
    }

    /// Upsert the profile row created alongside a new account
    ///
    /// The username defaults to the email local part, mirroring what the
    /// sign-up screen shows before the user edits their profile.
    async fn upsert_profile(&self, user_id: Uuid, email: &str) -> GatewayResult<()> {
        let username = email.split('@').next().unwrap_or(email);
        let request = self
            .with_keys(self.client.post(self.rest_url("profiles")))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&json!([{
                "id": user_id,
                "username": username,
                "email": email,
            }]));
        Self::send_ok(request).await
    }
}

impl DataGateway for RemoteGateway {
    fn sign_up(&self, email: &str, password: &str) -> GatewayFuture<Session> {
        let this = self.clone();
        let email = email.to_string();
        let password = password.to_string();
        Box::pin(async move {
            require_credentials(&email, &password)?;

            let request = this
                .with_keys(this.client.post(this.auth_url("signup")))
                .json(&json!({ "email": email, "password": password }));
            let session: Session = RemoteGateway::send_json(request).await?;

            // Side effect of sign-up: a profile row keyed by the new user id.
            this.upsert_profile(session.user.id, &email).await?;

            tracing::info!(user_id = %session.user.id, "account created");
            Ok(session)
        })
    }

    fn sign_in(&self, email: &str, password: &str) -> GatewayFuture<Session> {
        let this = self.clone();
        let email = email.to_string();
        let password = password.to_string();
        Box::pin(async move {
            require_credentials(&email, &password)?;

            let request = this
                .with_keys(this.client.post(this.auth_url("token?grant_type=password")))
                .json(&json!({ "email": email, "password": password }));

            match RemoteGateway::send_json::<Session>(request).await {
                Ok(session) => Ok(session),
                // The auth endpoint reports a bad email/password pair as 400.
                Err(GatewayError::ApiError { status: 400, .. } | GatewayError::Unauthorized) => {
                    Err(GatewayError::InvalidCredentials)
                }
                Err(other) => Err(other),
            }
        })
    }

    fn sign_out(&self, access_token: &str) -> GatewayFuture<()> {
        let this = self.clone();
        let access_token = access_token.to_string();
        Box::pin(async move {
            let request = this
                .client
                .post(this.auth_url("logout"))
                .header("apikey", &this.anon_key)
                .bearer_auth(access_token);
            RemoteGateway::send_ok(request).await
        })
    }

    fn list_events(&self, category: Option<Category>) -> GatewayFuture<Vec<EventRow>> {
        let this = self.clone();
        Box::pin(async move {
            let mut url = format!(
                "{}?select=*&order=created_at.desc",
                this.rest_url("events")
            );
            if let Some(category) = category {
                url.push_str("&type=eq.");
                url.push_str(category.as_str());
            }
            RemoteGateway::send_json(this.with_keys(this.client.get(url))).await
        })
    }

    fn get_event(&self, id: &str) -> GatewayFuture<EventRow> {
        let this = self.clone();
        let id = id.to_string();
        Box::pin(async move {
            let url = format!("{}?select=*&id=eq.{id}", this.rest_url("events"));
            RemoteGateway::single_row(this.with_keys(this.client.get(url)), "events", &id).await
        })
    }

    fn create_event(&self, event: NewEvent) -> GatewayFuture<EventRow> {
        let this = self.clone();
        Box::pin(async move {
            let title = event.title.clone();
            let request = this
                .with_keys(this.client.post(this.rest_url("events")))
                .header("Prefer", "return=representation")
                .json(&json!([event]));
            RemoteGateway::single_row(request, "events", &title).await
        })
    }

    fn create_booking(&self, booking: NewBooking) -> GatewayFuture<BookingRow> {
        let this = self.clone();
        Box::pin(async move {
            let token = booking.booking_token.clone();
            let request = this
                .with_keys(this.client.post(this.rest_url("bookings")))
                .header("Prefer", "return=representation")
                .json(&json!([booking]));
            let row: BookingRow = RemoteGateway::single_row(request, "bookings", &token).await?;
            tracing::info!(
                booking_token = %row.booking.booking_token,
                total_amount = row.booking.total_amount,
                "booking row inserted"
            );
            Ok(row)
        })
    }

    fn bookings_for_user(&self, user_id: Uuid) -> GatewayFuture<Vec<BookingRow>> {
        let this = self.clone();
        Box::pin(async move {
            let url = format!(
                "{}?select=*&user_id=eq.{user_id}&order=created_at.desc",
                this.rest_url("bookings")
            );
            RemoteGateway::send_json(this.with_keys(this.client.get(url))).await
        })
    }

    fn seats_for_event(&self, event_id: &str) -> GatewayFuture<Vec<SeatRow>> {
        let this = self.clone();
        let event_id = event_id.to_string();
        Box::pin(async move {
            let url = format!(
                "{}?select=*&event_id=eq.{event_id}&order=seat_number.asc",
                this.rest_url("seats")
            );
            RemoteGateway::send_json(this.with_keys(this.client.get(url))).await
        })
    }

    fn get_profile(&self, user_id: Uuid) -> GatewayFuture<Profile> {
        let this = self.clone();
        Box::pin(async move {
            let url = format!("{}?select=*&id=eq.{user_id}", this.rest_url("profiles"));
            RemoteGateway::single_row(
                this.with_keys(this.client.get(url)),
                "profiles",
                &user_id.to_string(),
            )
            .await
        })
    }

    fn update_profile(&self, user_id: Uuid, patch: ProfilePatch) -> GatewayFuture<Profile> {
        let this = self.clone();
        Box::pin(async move {
            let url = format!("{}?id=eq.{user_id}", this.rest_url("profiles"));
            let request = this
                .with_keys(this.client.patch(url))
                .header("Prefer", "return=representation")
                .json(&patch);
            RemoteGateway::single_row(request, "profiles", &user_id.to_string()).await
        })
    }
}
