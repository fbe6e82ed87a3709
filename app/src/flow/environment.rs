//! Environment dependencies for the selection workflow.

use crate::seatmap::SeatPlanner;
use crate::types::BookingToken;
use rand::Rng;
use samosa_core::environment::Clock;
use samosa_gateway::DataGateway;
use std::sync::Arc;
use std::time::Duration;

/// Characters used in booking reference tokens
const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a booking reference token
const TOKEN_LEN: usize = 9;

/// Source of booking tokens and gate numbers
///
/// Injected so tests can pin the generated identifiers.
pub trait TokenSource: Send + Sync {
    /// A fresh 9-character uppercase alphanumeric booking reference
    fn booking_token(&self) -> BookingToken;

    /// A random entry gate between 1 and 10
    fn gate_number(&self) -> u8;
}

/// Production token source backed by the thread RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTokenSource;

impl TokenSource for RandomTokenSource {
    fn booking_token(&self) -> BookingToken {
        let mut rng = rand::thread_rng();
        let token: String = (0..TOKEN_LEN)
            .map(|_| char::from(TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())]))
            .collect();
        BookingToken::new(token)
    }

    fn gate_number(&self) -> u8 {
        rand::thread_rng().gen_range(1..=10)
    }
}

/// Deterministic token source for tests and demos
#[derive(Clone, Debug)]
pub struct FixedTokenSource {
    /// Token returned by every call
    pub token: String,
    /// Gate returned by every call
    pub gate: u8,
}

impl FixedTokenSource {
    /// Creates a fixed source
    #[must_use]
    pub fn new(token: impl Into<String>, gate: u8) -> Self {
        Self {
            token: token.into(),
            gate,
        }
    }
}

impl TokenSource for FixedTokenSource {
    fn booking_token(&self) -> BookingToken {
        BookingToken::new(self.token.clone())
    }

    fn gate_number(&self) -> u8 {
        self.gate
    }
}

/// Environment dependencies for the booking flow reducer
#[derive(Clone)]
pub struct FlowEnvironment {
    /// Clock for the booking timestamp
    pub clock: Arc<dyn Clock>,
    /// Booking token and gate number generation
    pub tokens: Arc<dyn TokenSource>,
    /// Mock seat availability
    pub planner: Arc<dyn SeatPlanner>,
    /// Remote store the finished booking is persisted through
    pub store: Arc<dyn DataGateway>,
    /// Simulated payment settlement delay
    pub settle_delay: Duration,
}

impl FlowEnvironment {
    /// Creates a new `FlowEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        tokens: Arc<dyn TokenSource>,
        planner: Arc<dyn SeatPlanner>,
        store: Arc<dyn DataGateway>,
        settle_delay: Duration,
    ) -> Self {
        Self {
            clock,
            tokens,
            planner,
            store,
            settle_delay,
        }
    }
}
