//! Samosa - a ticket booking service for movies, sports and concerts.
//!
//! The application is built from four pieces:
//!
//! - **Catalog** ([`catalog`]): static event listings with nested pricing
//!   tiers, fixed at build time.
//! - **Selection workflow** ([`flow`]): the stateful booking flow - pick an
//!   event, a showtime or section, a seat count or specific seats, review
//!   the derived total, pay (simulated), and receive a [`types::Booking`].
//!   Every transition is a pure reducer function.
//! - **Ticket renderer** ([`ticket`]): pure formatting of a completed
//!   booking, including the scannable venue-map code.
//! - **HTTP server** ([`server`] + [`api`]): thin REST proxies over the
//!   remote data gateway.
//!
//! Mock seat availability ([`seatmap`]) is re-rolled on every screen load
//! behind a seeded generator interface - it is a stand-in for a real
//! inventory service, not a double-booking guarantee.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod flow;
pub mod seatmap;
pub mod server;
pub mod ticket;
pub mod types;

pub use config::Config;
pub use flow::{BookingFlowReducer, FlowAction, FlowEnvironment, FlowState};
pub use ticket::TicketSummary;
