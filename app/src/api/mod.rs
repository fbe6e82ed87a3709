//! REST API handlers.
//!
//! Thin proxies over the remote data gateway; see [`crate::server::routes`]
//! for the route table.

pub mod bookings;
pub mod events;
pub mod seats;
