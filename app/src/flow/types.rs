//! State types for the selection workflow.

use crate::seatmap::SeatMap;
use crate::types::{Booking, EventSummary, Money, PaymentMethod, SeatLabel};
use serde::{Deserialize, Serialize};

/// Upper limit on the size of a [`Selection`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionBound {
    /// Exactly this many seats must be picked (movie flow: the count chosen
    /// in the prior step)
    Exactly(u32),
    /// Any number from one up to this cap (VIP stand flow)
    AtMost(u32),
}

impl SelectionBound {
    /// The largest selection size this bound permits
    #[must_use]
    pub const fn cap(self) -> u32 {
        match self {
            Self::Exactly(n) | Self::AtMost(n) => n,
        }
    }

    /// Whether a selection of `len` seats may proceed to checkout
    #[must_use]
    pub const fn is_satisfied_by(self, len: u32) -> bool {
        match self {
            Self::Exactly(n) => len == n,
            Self::AtMost(_) => len >= 1,
        }
    }
}

/// The set of seats chosen so far, bounded by a [`SelectionBound`]
///
/// Invariants: the size never exceeds the bound, and a booked seat never
/// enters the set. Violating toggles are silent no-ops, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    bound: SelectionBound,
    chosen: Vec<SeatLabel>,
}

impl Selection {
    /// Creates an empty selection with the given bound
    #[must_use]
    pub const fn new(bound: SelectionBound) -> Self {
        Self {
            bound,
            chosen: Vec::new(),
        }
    }

    /// Flip membership of a seat
    ///
    /// A booked seat, or an addition beyond the bound, changes nothing and
    /// returns `false`.
    pub fn toggle(&mut self, label: &SeatLabel, booked: bool) -> bool {
        if let Some(position) = self.chosen.iter().position(|chosen| chosen == label) {
            self.chosen.remove(position);
            return true;
        }
        if booked {
            return false;
        }
        if self.chosen.len() >= self.bound.cap() as usize {
            return false;
        }
        self.chosen.push(label.clone());
        true
    }

    /// Number of chosen seats
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn len(&self) -> u32 {
        self.chosen.len() as u32
    }

    /// Whether nothing is chosen
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Whether a seat is currently chosen
    #[must_use]
    pub fn contains(&self, label: &SeatLabel) -> bool {
        self.chosen.iter().any(|chosen| chosen == label)
    }

    /// Chosen seats in pick order
    #[must_use]
    pub fn labels(&self) -> &[SeatLabel] {
        &self.chosen
    }

    /// The bound this selection enforces
    #[must_use]
    pub const fn bound(&self) -> SelectionBound {
        self.bound
    }

    /// Whether the selection may proceed to checkout
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.bound.is_satisfied_by(self.len())
    }
}

/// Whether a count screen leads to seat picks or straight to the total
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountMode {
    /// The chosen count becomes the required seat-pick count (movie flow)
    SeatPicks,
    /// Seats are unassigned; the count alone prices the order
    TicketsOnly,
}

/// Everything needed to price and pay for an order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    /// Snapshot of the booked event
    pub event: EventSummary,
    /// Section/tier name, when the flow had one
    pub section: Option<String>,
    /// Unit price the total derives from
    pub unit_price: Money,
    /// Picked seat labels (empty for section-ticket flows)
    pub seats: Vec<SeatLabel>,
    /// Ticket count
    pub quantity: u32,
    /// Entry gate, assigned when a stadium flow reaches checkout
    pub gate_number: Option<u8>,
}

impl Checkout {
    /// The derived total: `unit_price × quantity`, never entered directly
    #[must_use]
    pub const fn total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Position of a booking attempt in the workflow
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    /// Browsing listings; nothing picked yet
    ChoosingEvent,
    /// Event picked; waiting for a showtime (movies) or section pick
    ChoosingVenue {
        /// The picked event
        event: EventSummary,
    },
    /// Choosing how many tickets/seats
    ChoosingCount {
        /// The picked event (venue already narrowed for movie flows)
        event: EventSummary,
        /// Section name for ticket flows
        section: Option<String>,
        /// Unit price carried from the showtime/section pick
        unit_price: Money,
        /// What the count leads to
        mode: CountMode,
        /// Current count (starts at 1)
        count: u32,
    },
    /// Picking specific seats on a freshly rolled map
    ChoosingSeats {
        /// The picked event
        event: EventSummary,
        /// Section name for the VIP stand flow
        section: Option<String>,
        /// Unit price every seat inherits
        unit_price: Money,
        /// Availability rolled at screen load; not persisted
        seats: SeatMap,
        /// Seats chosen so far
        selection: Selection,
    },
    /// Order assembled; total on display
    ReviewingTotal {
        /// The priced order
        checkout: Checkout,
    },
    /// Simulated payment in flight
    Paying {
        /// The priced order
        checkout: Checkout,
        /// Chosen payment method
        method: PaymentMethod,
    },
    /// Terminal: booking produced. Only starting a new booking leaves this
    /// stage, and nothing preserves the old selection.
    Completed {
        /// The finalized booking
        booking: Booking,
    },
}

/// State for one booking attempt
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    /// Current workflow stage
    pub stage: Stage,
    /// Guidance or failure message for the current screen
    pub last_error: Option<String>,
}

impl FlowState {
    /// A fresh attempt at the start of the workflow
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: Stage::ChoosingEvent,
            last_error: None,
        }
    }

    /// The running total, where one is defined for the current stage
    #[must_use]
    pub fn total(&self) -> Option<Money> {
        match &self.stage {
            Stage::ChoosingSeats {
                unit_price,
                selection,
                ..
            } => Some(unit_price.multiply(selection.len())),
            Stage::ReviewingTotal { checkout } | Stage::Paying { checkout, .. } => {
                Some(checkout.total())
            }
            Stage::Completed { booking } => Some(booking.total_amount),
            Stage::ChoosingEvent | Stage::ChoosingVenue { .. } | Stage::ChoosingCount { .. } => {
                None
            }
        }
    }

    /// The finalized booking, once the attempt completed
    #[must_use]
    pub const fn booking(&self) -> Option<&Booking> {
        match &self.stage {
            Stage::Completed { booking } => Some(booking),
            _ => None,
        }
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}
