//! Actions driving the selection workflow.
//!
//! User interactions and effect feedback share one action type, so the
//! payment timer and the booking persist feed back through the same
//! reducer that handles screen taps.

use crate::types::{BookingToken, EventSummary, Money, PaymentMethod, SeatLabel};
use serde::{Deserialize, Serialize};

/// All inputs to the booking flow reducer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FlowAction {
    /// An event was picked from a listing; starts a fresh attempt
    SelectEvent {
        /// Snapshot of the picked event
        event: EventSummary,
    },

    /// A theater showtime was picked (movie flow)
    SelectShowtime {
        /// Theater name; becomes the booking venue
        theater: String,
        /// Unit price of the chosen seat class
        unit_price: Money,
    },

    /// A stand or tier was picked (sport/concert/deal flows)
    SelectSection {
        /// Section display name
        section: String,
        /// Fixed unit price for this section
        unit_price: Money,
        /// Whether this section uses a seat map (the VIP stand)
        assigned_seats: bool,
    },

    /// The ticket/seat count was changed on the count screen
    SetCount {
        /// Requested count; out-of-range values are ignored
        count: u32,
    },

    /// A seat was tapped on the seat map
    ToggleSeat {
        /// The tapped seat
        seat: SeatLabel,
    },

    /// The proceed button for the current screen
    Proceed,

    /// Payment was submitted from the review screen
    SubmitPayment {
        /// Chosen payment method
        method: PaymentMethod,
    },

    /// The simulated payment delay elapsed (always succeeds)
    PaymentSettled {
        /// Pre-generated booking reference
        token: BookingToken,
        /// Entry gate for stadium/arena flows
        gate_number: Option<u8>,
    },

    /// The booking row reached the remote store
    BookingPersisted,

    /// The booking row could not be saved; the ticket itself stays valid
    BookingPersistFailed {
        /// Generic user-facing message
        message: String,
    },

    /// Abandon the current attempt and return to the listings
    StartOver,
}
