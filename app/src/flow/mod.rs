//! The selection workflow.
//!
//! One booking attempt at a time moves through:
//!
//! ```text
//! ChoosingEvent → ChoosingVenue → ChoosingCount → ChoosingSeats (seat flows)
//!              → ReviewingTotal → Paying → Completed
//! ```
//!
//! Section-ticket flows (sports regular stands, concert tiers, deals) skip
//! `ChoosingSeats` entirely; the movie flow requires exactly the seat count
//! chosen in the prior step; the VIP stand flow is open-ended up to a fixed
//! cap. Every transition is a pure function in [`reducer::BookingFlowReducer`];
//! the simulated payment timer and the fire-and-forget booking persist are
//! the only effects.

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod types;

#[cfg(test)]
mod tests;

pub use actions::FlowAction;
pub use environment::{FixedTokenSource, FlowEnvironment, RandomTokenSource, TokenSource};
pub use reducer::BookingFlowReducer;
pub use types::{Checkout, CountMode, FlowState, Selection, SelectionBound, Stage};
