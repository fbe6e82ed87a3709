//! # Samosa Testing
//!
//! Testing utilities for the Samosa booking flows.
//!
//! This crate provides:
//! - A fluent Given/When/Then harness for reducer tests ([`ReducerTest`])
//! - Assertion helpers for effect lists ([`reducer_test::assertions`])
//! - Deterministic mock implementations of environment traits ([`mocks`])
//!
//! ## Example
//!
//! ```ignore
//! use samosa_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(BookingFlowReducer::new())
//!     .with_env(test_environment())
//!     .given_state(FlowState::new())
//!     .when_action(FlowAction::StartOver)
//!     .then_state(|state| assert!(state.last_error.is_none()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use samosa_core::environment::Clock;


/// Mock implementations of environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making booking timestamps reproducible.
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2024-04-01 12:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which should never
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2024-04-01T12:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
