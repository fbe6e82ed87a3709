//! Row and session types for the hosted service tables
//!
//! These mirror the generated REST layer's JSON shapes: `events`, `seats`,
//! `bookings` and `profiles` tables plus the auth session payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Event category, stored in the `events.type` column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cinema screening
    Movie,
    /// Sports fixture
    Sport,
    /// Live concert
    Concert,
}

impl Category {
    /// Column value used in equality filters (`type=eq.<value>`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Sport => "sport",
            Self::Concert => "concert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insert payload for the `events` table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event title
    pub title: String,
    /// Event category
    #[serde(rename = "type")]
    pub category: Category,
    /// Venue name
    pub venue: String,
    /// Event date and time
    pub date: DateTime<Utc>,
    /// Poster/cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Base price in whole rupees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Lifecycle status (`upcoming`, `ongoing`, `completed`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A row from the `events` table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    /// Row id
    pub id: String,
    /// Event title
    pub title: String,
    /// Event category
    #[serde(rename = "type")]
    pub category: Category,
    /// Venue name
    pub venue: String,
    /// Event date and time
    pub date: DateTime<Utc>,
    /// Poster/cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Base price in whole rupees (section-priced events leave this unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Lifecycle status (`upcoming`, `ongoing`, `completed`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Row creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A row from the `seats` table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatRow {
    /// Row id
    pub id: String,
    /// Event this seat belongs to
    pub event_id: String,
    /// Seat label (e.g. `A7`)
    pub seat_number: String,
    /// Whether the seat is already booked
    pub is_booked: bool,
    /// Unit price in whole rupees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

/// Insert payload for the `bookings` table
///
/// There is no idempotency key: submitting the same payload twice produces
/// two rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    /// Booking reference token shown to the user
    pub booking_token: String,
    /// Owning user, when a session exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Booked event id, when the event came from the hosted catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Section/tier name, when the flow had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Seat labels (or synthesized per-ticket labels for section flows)
    pub seats: Vec<String>,
    /// Total amount in whole rupees
    pub total_amount: i64,
    /// Payment method (`card` or `upi`)
    pub payment_method: String,
    /// Entry gate, for stadium/arena flows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_number: Option<u8>,
    /// When the booking was made
    pub booked_at: DateTime<Utc>,
}

/// A row from the `bookings` table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRow {
    /// Row id
    pub id: String,
    /// The inserted booking payload
    #[serde(flatten)]
    pub booking: NewBooking,
    /// Row creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A row from the `profiles` table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// User id (same as the auth user id)
    pub id: Uuid,
    /// Display name, defaulted to the email local part at sign-up
    pub username: String,
    /// Email address
    pub email: String,
}

/// Partial update for the `profiles` table
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The authenticated user inside a session payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// User id
    pub id: Uuid,
    /// Email address
    pub email: String,
}

/// An auth session, as returned by sign-up and sign-in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for authenticated calls
    pub access_token: String,
    /// Token type (always `bearer`)
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    /// Refresh token
    pub refresh_token: String,
    /// The signed-in user
    pub user: AuthUser,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        let json = serde_json::to_string(&Category::Sport).unwrap();
        assert_eq!(json, "\"sport\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Sport);
    }

    #[test]
    fn test_event_row_parses_minimal_payload() {
        let json = r#"{
            "id": "ev-1",
            "title": "IPL 2024: MI vs CSK",
            "type": "sport",
            "venue": "Wankhede Stadium",
            "date": "2024-04-15T19:30:00Z"
        }"#;
        let row: EventRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.category, Category::Sport);
        assert!(row.price.is_none());
        assert!(row.status.is_none());
    }

    #[test]
    fn test_booking_row_flattens_payload() {
        let booking = NewBooking {
            booking_token: "K7QM2XB4A".to_string(),
            user_id: None,
            event_id: Some("ev-1".to_string()),
            section: Some("East Stand".to_string()),
            seats: vec!["East Stand - 1".to_string()],
            total_amount: 1000,
            payment_method: "upi".to_string(),
            gate_number: Some(4),
            booked_at: "2024-04-15T12:00:00Z".parse().unwrap(),
        };
        let row = BookingRow {
            id: "bk-1".to_string(),
            booking,
            created_at: None,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["booking_token"], "K7QM2XB4A");
        assert_eq!(value["id"], "bk-1");
    }
}
