//! Domain types for the Samosa booking application.
//!
//! This module contains the value objects and entities shared by the
//! catalog, the selection workflow and the ticket renderer.

use chrono::{DateTime, Utc};
use samosa_gateway::NewBooking;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use samosa_gateway::Category;

/// Maximum tickets or seat picks in a single booking
pub const MAX_TICKETS_PER_BOOKING: u32 = 10;

// ============================================================================
// Money Value Object (whole rupees - the catalog never prices in paise)
// ============================================================================

/// Represents an amount in whole rupees
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from rupees
    #[must_use]
    pub const fn from_rupees(rupees: u64) -> Self {
        Self(rupees)
    }

    /// Returns the amount in rupees
    #[must_use]
    pub const fn rupees(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the unit price by a quantity with overflow checking
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies the unit price by a quantity
    ///
    /// # Panics
    ///
    /// Panics if the multiplication would overflow.
    /// Use `checked_multiply` for non-panicking multiplication.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn multiply(self, quantity: u32) -> Self {
        match self.checked_multiply(quantity) {
            Some(result) => result,
            None => panic!("Money::multiply overflow"),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a catalog event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Booking reference shown to the user (9 uppercase alphanumeric characters)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingToken(String);

impl BookingToken {
    /// Wraps an already-generated token
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A seat label (`A7`, `23`, or a synthesized `Gold - 2` for section flows)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatLabel(String);

impl SeatLabel {
    /// Creates a new `SeatLabel`
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Catalog Entities
// ============================================================================

/// Event lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Not yet on sale / coming soon
    Upcoming,
    /// Currently showing or selling
    Ongoing,
    /// Over
    Completed,
}

/// How an event is priced
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pricing {
    /// One price for every ticket (movies; the per-class theater price
    /// overrides this once a showtime is picked)
    Flat(Money),
    /// Named sections/tiers with fixed unit prices
    Sections(Vec<Section>),
}

/// A named pricing bucket (stand or tier) with a fixed unit price
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable slug (`east`, `vip`, `gold`, ...)
    pub id: String,
    /// Display name (`East Stand`, `Gold`, ...)
    pub name: String,
    /// Unit price
    pub price: Money,
}

impl Section {
    /// Creates a new `Section`
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Whether this section uses assigned seats (the VIP stand flow)
    #[must_use]
    pub fn has_assigned_seats(&self) -> bool {
        self.id == "vip"
    }
}

/// A catalog event (movie, sports fixture, or concert)
///
/// Created from static catalog data; immutable during a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier
    pub id: EventId,
    /// Event title
    pub title: String,
    /// Event category
    pub category: Category,
    /// Venue name
    pub venue: String,
    /// City / area
    pub location: String,
    /// Event date and time
    pub starts_at: DateTime<Utc>,
    /// Poster/cover image URL
    pub image_url: String,
    /// Lifecycle status
    pub status: EventStatus,
    /// Pricing model
    pub pricing: Pricing,
    /// Blurb shown on the listing card
    pub description: String,
}

impl Event {
    /// Summary snapshot handed to the selection workflow
    #[must_use]
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            id: Some(self.id),
            title: self.title.clone(),
            category: self.category,
            venue: self.venue.clone(),
            starts_at: Some(self.starts_at),
            image_url: Some(self.image_url.clone()),
        }
    }
}

/// Per-class ticket prices at a movie theater
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheaterPrices {
    /// Standard rows
    pub classic: Money,
    /// Middle prime rows
    pub prime: Money,
    /// Recliner rows
    pub recliner: Money,
}

/// A movie theater with its showtimes and pricing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theater {
    /// Theater name
    pub name: String,
    /// Neighbourhood
    pub location: String,
    /// Daily showtimes
    pub showtimes: Vec<String>,
    /// Per-class prices
    pub prices: TheaterPrices,
}

/// A pricing tier inside a last-minute deal
///
/// The discounted price IS the unit price for the deal flow; the original
/// price exists only for display and is never used to re-derive anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DealTier {
    /// Tier display name
    pub name: String,
    /// Struck-through original price
    pub original_price: Money,
    /// Discounted unit price
    pub price: Money,
}

/// A last-minute discounted listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Unique deal identifier
    pub id: u32,
    /// Deal title
    pub title: String,
    /// Event category
    pub category: Category,
    /// Venue name
    pub venue: String,
    /// Display label such as `70%`
    pub discount_label: String,
    /// Remaining seats advertised on the card
    pub seats_left: u32,
    /// Human-readable start (`Today, 9:30 PM`)
    pub when: String,
    /// Discounted tiers (single `General` tier for flat-priced deals)
    pub tiers: Vec<DealTier>,
}

// ============================================================================
// Selection Workflow Snapshot Types
// ============================================================================

/// Snapshot of an event carried through the selection workflow
///
/// Downstream screens receive this by value, never a shared reference back
/// into the catalog. Optional fields render as "not available" placeholders
/// on the ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Catalog id, when the event came from the static catalog
    pub id: Option<EventId>,
    /// Event title
    pub title: String,
    /// Event category
    pub category: Category,
    /// Venue name (a theater name for movie flows)
    pub venue: String,
    /// Event date and time
    pub starts_at: Option<DateTime<Utc>>,
    /// Poster/cover image URL
    pub image_url: Option<String>,
}

/// Payment method chosen on the payment screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit/debit card
    Card,
    /// UPI / wallets
    Upi,
}

impl PaymentMethod {
    /// Column value stored in the `bookings` table
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Booking
// ============================================================================

/// The finalized record produced after simulated payment settles
///
/// Never mutated after creation; lives for the user's session, with a
/// fire-and-forget copy persisted through the remote gateway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking reference token
    pub token: BookingToken,
    /// Snapshot of the booked event
    pub event: EventSummary,
    /// Section/tier name, when the flow had one
    pub section: Option<String>,
    /// Seat labels (synthesized per-ticket labels for section flows)
    pub seats: Vec<SeatLabel>,
    /// Ticket count
    pub quantity: u32,
    /// Unit price the total was derived from
    pub unit_price: Money,
    /// Total amount, always `unit_price × quantity`
    pub total_amount: Money,
    /// Payment method
    pub payment_method: PaymentMethod,
    /// Entry gate, for stadium/arena flows
    pub gate_number: Option<u8>,
    /// When payment settled
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    /// Insert payload for the remote `bookings` table
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_row(&self) -> NewBooking {
        NewBooking {
            booking_token: self.token.as_str().to_string(),
            user_id: None,
            event_id: self.event.id.map(|id| id.to_string()),
            section: self.section.clone(),
            seats: self.seats.iter().map(|s| s.as_str().to_string()).collect(),
            total_amount: self.total_amount.rupees() as i64,
            payment_method: self.payment_method.as_str().to_string(),
            gate_number: self.gate_number,
            booked_at: self.booked_at,
        }
    }
}

// ============================================================================
// OTP input
// ============================================================================

/// Error produced when an OTP string is malformed
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OtpError {
    /// Not exactly six characters
    #[error("OTP must be exactly 6 digits")]
    WrongLength,
    /// Contains a non-digit character
    #[error("OTP may only contain digits")]
    NonDigit,
}

/// A six-digit one-time password, validated locally before submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode(String);

impl OtpCode {
    /// Returns the code as a string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OtpCode {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 {
            return Err(OtpError::WrongLength);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OtpError::NonDigit);
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
