//! # Samosa Core
//!
//! Core traits and types for the Samosa booking application.
//!
//! This crate provides the fundamental abstractions the booking flows are
//! built on: a pure [`reducer::Reducer`] that turns user interactions into
//! state transitions, and [`effect::Effect`] values describing the side
//! effects those transitions request (the payment-settlement timer, remote
//! gateway calls).
//!
//! ## Core Concepts
//!
//! - **State**: the current position in a booking attempt
//! - **Action**: all possible inputs to a reducer (user interactions and
//!   effect feedback)
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//!
//! Reducers never perform I/O themselves. The shell driving a flow (an HTTP
//! handler, the demo binary, a test harness) executes the returned effects
//! and feeds any produced actions back in.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - the core trait for flow logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all transition logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effects;

    /// The Reducer trait - core abstraction for flow logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: the flow state this reducer operates on
    /// - `Action`: the action type this reducer processes
    /// - `Environment`: the injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for BookingFlowReducer {
    ///     type State = FlowState;
    ///     type Action = FlowAction;
    ///     type Environment = FlowEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut FlowState,
    ///         action: FlowAction,
    ///         env: &FlowEnvironment,
    ///     ) -> Effects<FlowAction> {
    ///         match action {
    ///             FlowAction::StartOver => {
    ///                 *state = FlowState::new();
    ///                 Effects::new()
    ///             }
    ///             _ => Effects::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the shell
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Effects<Self::Action>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects describe side effects to be performed by the shell driving the
/// flow. They are values (not execution); the booking flows only ever need
/// a delayed action (the simulated payment timer) and an arbitrary async
/// computation (remote gateway calls).
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// The effect collection returned by reducers.
    ///
    /// Flow transitions produce at most a couple of effects, so a small
    /// inline vector avoids heap allocation on the common paths.
    pub type Effects<Action> = smallvec::SmallVec<[Effect<Action>; 4]>;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by whatever drives
    /// the flow. There is deliberately no cancellation: a flow abandoned
    /// mid-payment lets its timer fire into a reset state, which ignores it.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Delayed action (the simulated payment settlement timer)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after the delay
            action: Box<Action>,
        },

        /// Arbitrary async computation (remote gateway calls)
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Build a delayed action effect
        #[must_use]
        pub fn delay(duration: Duration, action: Action) -> Effect<Action> {
            Effect::Delay {
                duration,
                action: Box::new(action),
            }
        }

        /// Wrap a future producing an optional feedback action
        #[must_use]
        pub fn future<F>(future: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(future))
        }
    }
}

/// Environment module - dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter, so tests can substitute deterministic
/// implementations.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// Production code uses [`SystemClock`]; tests pin time with a fixed
    /// implementation so booking timestamps are deterministic.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Clock implementation backed by the system clock
    #[derive(Clone, Copy, Debug, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::effect::{Effect, Effects};
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    enum TestAction {
        Tick,
    }

    #[test]
    fn delay_effect_carries_action() {
        let effect = Effect::delay(Duration::from_secs(2), TestAction::Tick);
        match effect {
            Effect::Delay { duration, action } => {
                assert_eq!(duration, Duration::from_secs(2));
                assert_eq!(*action, TestAction::Tick);
            }
            other => panic!("expected Delay, got {other:?}"),
        }
    }

    #[test]
    fn future_effect_resolves_to_feedback_action() {
        let effect = Effect::future(async { Some(TestAction::Tick) });
        let Effect::Future(future) = effect else {
            panic!("expected Future effect");
        };
        assert_eq!(tokio_test::block_on(future), Some(TestAction::Tick));
    }

    #[test]
    fn effects_start_inline() {
        let effects: Effects<TestAction> = Effects::new();
        assert!(!effects.spilled());
    }
}
