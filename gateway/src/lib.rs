//! # Samosa Gateway
//!
//! The Remote Data Gateway: a thin client for the hosted auth/database
//! service that backs the Samosa booking application.
//!
//! The hosted service exposes two surfaces, both wrapped here:
//!
//! - an auth endpoint (`/auth/v1/...`) for sign-up, sign-in and sign-out
//! - a generated REST layer (`/rest/v1/<table>`) over the `events`,
//!   `seats`, `bookings` and `profiles` tables, queried with equality
//!   filters only
//!
//! Every operation returns a [`error::GatewayResult`]; nothing in this
//! crate panics or retries. Callers inspect the error and surface a generic
//! message — there is no recovery policy beyond that (by contract of the
//! upstream service wrapper this mirrors).
//!
//! The [`store::DataGateway`] trait abstracts the gateway so the booking
//! flow and HTTP handlers can run against [`memory::InMemoryGateway`] in
//! tests and demos without a network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod memory;
pub mod store;
pub mod types;

pub use client::RemoteGateway;
pub use error::{GatewayError, GatewayResult};
pub use memory::InMemoryGateway;
pub use store::{DataGateway, GatewayFuture};
pub use types::{
    AuthUser, BookingRow, Category, EventRow, NewBooking, NewEvent, Profile, ProfilePatch,
    SeatRow, Session,
};
