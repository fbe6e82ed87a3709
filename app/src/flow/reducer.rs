//! Reducer for the selection workflow.
//!
//! Every transition is a pure function of `(state, action, environment)`.
//! Invalid actions never crash a screen: out-of-order navigation records a
//! guidance message on the state, and disallowed seat toggles are silent
//! no-ops.

use super::actions::FlowAction;
use super::environment::FlowEnvironment;
use super::types::{Checkout, CountMode, FlowState, Selection, SelectionBound, Stage};
use crate::types::{Booking, Category, MAX_TICKETS_PER_BOOKING, SeatLabel};
use samosa_core::effect::{Effect, Effects};
use samosa_core::reducer::Reducer;
use samosa_core::smallvec;
use std::mem;

/// Generic message recorded when the booking row cannot be saved remotely
const PERSIST_FAILED_MESSAGE: &str =
    "Could not save your booking online. Your ticket remains valid for this session.";

/// Reducer for one booking attempt
#[derive(Clone, Copy, Debug, Default)]
pub struct BookingFlowReducer;

impl BookingFlowReducer {
    /// Creates a new `BookingFlowReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Guidance message for an action arriving at the wrong stage
    const fn guidance(action: &FlowAction) -> &'static str {
        match action {
            FlowAction::SelectShowtime { .. } => "Pick a movie before choosing a showtime",
            FlowAction::SelectSection { .. } => "Pick an event before choosing a section",
            FlowAction::SetCount { .. } => "Pick a showtime or section first",
            FlowAction::ToggleSeat { .. } => "Select the number of seats first",
            FlowAction::Proceed => "Nothing to confirm yet",
            FlowAction::SubmitPayment { .. } => "Review your order before paying",
            _ => "That action is not available right now",
        }
    }
}

/// Per-ticket labels for section flows, where seats are unassigned
fn synthesized_labels(section: Option<&str>, quantity: u32) -> Vec<SeatLabel> {
    let section = section.unwrap_or("Standard");
    (1..=quantity)
        .map(|n| SeatLabel::new(format!("{section} - {n}")))
        .collect()
}

impl Reducer for BookingFlowReducer {
    type State = FlowState;
    type Action = FlowAction;
    type Environment = FlowEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per (stage, action) transition
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        let stage = mem::replace(&mut state.stage, Stage::ChoosingEvent);
        match (stage, action) {
            // ========== Abandon (allowed from anywhere) ==========
            // Nothing preserves the old selection.
            (_, FlowAction::StartOver) => {
                *state = FlowState::new();
                Effects::new()
            }

            // ========== Payment settles (always succeeds) ==========
            (
                Stage::Paying { checkout, method },
                FlowAction::PaymentSettled { token, gate_number },
            ) => {
                let seats = if checkout.seats.is_empty() {
                    synthesized_labels(checkout.section.as_deref(), checkout.quantity)
                } else {
                    checkout.seats
                };
                let total_amount = checkout.unit_price.multiply(checkout.quantity);
                let booking = Booking {
                    token,
                    event: checkout.event,
                    section: checkout.section,
                    seats,
                    quantity: checkout.quantity,
                    unit_price: checkout.unit_price,
                    total_amount,
                    payment_method: method,
                    gate_number,
                    booked_at: env.clock.now(),
                };

                tracing::info!(
                    booking_token = %booking.token,
                    total_amount = booking.total_amount.rupees(),
                    "payment settled, booking issued"
                );

                // Fire-and-forget persist; a failure only records a generic
                // message, the ticket itself stays valid.
                let persist = env.store.create_booking(booking.to_row());
                state.stage = Stage::Completed { booking };
                state.last_error = None;

                smallvec![Effect::future(async move {
                    match persist.await {
                        Ok(row) => {
                            tracing::info!(row_id = %row.id, "booking row persisted");
                            Some(FlowAction::BookingPersisted)
                        }
                        Err(error) => {
                            tracing::warn!(%error, "booking persist failed");
                            Some(FlowAction::BookingPersistFailed {
                                message: PERSIST_FAILED_MESSAGE.to_string(),
                            })
                        }
                    }
                })]
            }

            // While payment is in flight nothing else is accepted.
            (stage @ Stage::Paying { .. }, _) => {
                state.stage = stage;
                state.last_error = Some("Payment in progress".to_string());
                Effects::new()
            }

            // A settle timer from an abandoned attempt; ignore.
            (stage, FlowAction::PaymentSettled { .. }) => {
                state.stage = stage;
                Effects::new()
            }

            // ========== Picking an event starts a fresh attempt ==========
            (_, FlowAction::SelectEvent { event }) => {
                state.stage = Stage::ChoosingVenue { event };
                state.last_error = None;
                Effects::new()
            }

            // ========== Showtime pick (movie flow) ==========
            (
                Stage::ChoosingVenue { mut event },
                FlowAction::SelectShowtime {
                    theater,
                    unit_price,
                },
            ) => {
                if event.category != Category::Movie {
                    state.stage = Stage::ChoosingVenue { event };
                    state.last_error = Some("Showtimes only apply to movie bookings".to_string());
                    return Effects::new();
                }
                // The theater becomes the booking venue.
                event.venue = theater;
                state.stage = Stage::ChoosingCount {
                    event,
                    section: None,
                    unit_price,
                    mode: CountMode::SeatPicks,
                    count: 1,
                };
                state.last_error = None;
                Effects::new()
            }

            // ========== Section pick (sport/concert/deal flows) ==========
            (
                Stage::ChoosingVenue { event },
                FlowAction::SelectSection {
                    section,
                    unit_price,
                    assigned_seats,
                },
            ) => {
                if event.category == Category::Movie {
                    state.stage = Stage::ChoosingVenue { event };
                    state.last_error =
                        Some("Movies are booked by showtime, not section".to_string());
                    return Effects::new();
                }
                state.last_error = None;
                if assigned_seats {
                    // VIP stand: straight to the seat map, open-ended up to
                    // the per-booking cap.
                    let seats = env.planner.vip_grid(unit_price);
                    state.stage = Stage::ChoosingSeats {
                        event,
                        section: Some(section),
                        unit_price,
                        seats,
                        selection: Selection::new(SelectionBound::AtMost(MAX_TICKETS_PER_BOOKING)),
                    };
                } else {
                    state.stage = Stage::ChoosingCount {
                        event,
                        section: Some(section),
                        unit_price,
                        mode: CountMode::TicketsOnly,
                        count: 1,
                    };
                }
                Effects::new()
            }

            // ========== Count screen ==========
            (
                Stage::ChoosingCount {
                    event,
                    section,
                    unit_price,
                    mode,
                    count,
                },
                FlowAction::SetCount { count: requested },
            ) => {
                // The stepper clamps to 1..=10; anything else is ignored.
                let count = if (1..=MAX_TICKETS_PER_BOOKING).contains(&requested) {
                    requested
                } else {
                    count
                };
                state.stage = Stage::ChoosingCount {
                    event,
                    section,
                    unit_price,
                    mode,
                    count,
                };
                Effects::new()
            }

            (
                Stage::ChoosingCount {
                    event,
                    section,
                    unit_price,
                    mode,
                    count,
                },
                FlowAction::Proceed,
            ) => {
                state.last_error = None;
                match mode {
                    CountMode::SeatPicks => {
                        // Availability is rolled fresh at screen load and
                        // not persisted.
                        let seats = env.planner.theater_grid(unit_price);
                        state.stage = Stage::ChoosingSeats {
                            event,
                            section,
                            unit_price,
                            seats,
                            selection: Selection::new(SelectionBound::Exactly(count)),
                        };
                    }
                    CountMode::TicketsOnly => {
                        let gate_number =
                            (event.category == Category::Sport).then(|| env.tokens.gate_number());
                        state.stage = Stage::ReviewingTotal {
                            checkout: Checkout {
                                event,
                                section,
                                unit_price,
                                seats: Vec::new(),
                                quantity: count,
                                gate_number,
                            },
                        };
                    }
                }
                Effects::new()
            }

            // ========== Seat map ==========
            (
                Stage::ChoosingSeats {
                    event,
                    section,
                    unit_price,
                    seats,
                    mut selection,
                },
                FlowAction::ToggleSeat { seat },
            ) => {
                // Unknown labels and booked seats are silent no-ops, as is
                // adding beyond the bound.
                if let Some(target) = seats.seat(&seat) {
                    let booked = target.booked;
                    selection.toggle(&seat, booked);
                }
                state.stage = Stage::ChoosingSeats {
                    event,
                    section,
                    unit_price,
                    seats,
                    selection,
                };
                Effects::new()
            }

            (
                Stage::ChoosingSeats {
                    event,
                    section,
                    unit_price,
                    seats,
                    selection,
                },
                FlowAction::Proceed,
            ) => {
                if !selection.is_satisfied() {
                    // The proceed button is disabled until the bound is met.
                    state.stage = Stage::ChoosingSeats {
                        event,
                        section,
                        unit_price,
                        seats,
                        selection,
                    };
                    return Effects::new();
                }
                let gate_number =
                    (event.category == Category::Sport).then(|| env.tokens.gate_number());
                let quantity = selection.len();
                state.stage = Stage::ReviewingTotal {
                    checkout: Checkout {
                        event,
                        section,
                        unit_price,
                        seats: selection.labels().to_vec(),
                        quantity,
                        gate_number,
                    },
                };
                state.last_error = None;
                Effects::new()
            }

            // ========== Review → simulated payment ==========
            (Stage::ReviewingTotal { mut checkout }, FlowAction::SubmitPayment { method }) => {
                let token = env.tokens.booking_token();
                // Every non-movie booking leaves through a numbered gate.
                if checkout.gate_number.is_none() && checkout.event.category != Category::Movie {
                    checkout.gate_number = Some(env.tokens.gate_number());
                }
                let gate_number = checkout.gate_number;
                let duration = env.settle_delay;

                tracing::info!(
                    total_amount = checkout.total().rupees(),
                    method = %method,
                    "payment submitted"
                );

                state.stage = Stage::Paying { checkout, method };
                state.last_error = None;

                smallvec![Effect::delay(
                    duration,
                    FlowAction::PaymentSettled { token, gate_number },
                )]
            }

            // ========== Persist feedback ==========
            (stage, FlowAction::BookingPersisted) => {
                state.stage = stage;
                Effects::new()
            }

            (stage, FlowAction::BookingPersistFailed { message }) => {
                state.stage = stage;
                state.last_error = Some(message);
                Effects::new()
            }

            // ========== Anything else: guidance, never a crash ==========
            (stage, action) => {
                state.stage = stage;
                state.last_error = Some(Self::guidance(&action).to_string());
                Effects::new()
            }
        }
    }
}
