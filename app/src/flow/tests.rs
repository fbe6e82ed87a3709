//! Reducer tests for the selection workflow.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::actions::FlowAction;
use super::environment::{FixedTokenSource, FlowEnvironment};
use super::reducer::BookingFlowReducer;
use super::types::{Checkout, FlowState, Selection, SelectionBound, Stage};
use crate::seatmap::{RandomSeatPlanner, Seat, SeatMap, SeatPlanner};
use crate::types::{
    Category, EventId, EventSummary, Money, PaymentMethod, SeatLabel,
};
use samosa_core::environment::Clock;
use samosa_core::reducer::Reducer;
use samosa_gateway::InMemoryGateway;
use samosa_testing::{ReducerTest, assertions, test_clock};
use std::sync::Arc;
use std::time::Duration;

const SETTLE: Duration = Duration::from_secs(2);

fn test_env() -> FlowEnvironment {
    FlowEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(FixedTokenSource::new("K7QM2XB4A", 4)),
        Arc::new(RandomSeatPlanner::seeded(7)),
        Arc::new(InMemoryGateway::new()),
        SETTLE,
    )
}

fn movie() -> EventSummary {
    EventSummary {
        id: Some(EventId(1)),
        title: "Avatar 3".to_string(),
        category: Category::Movie,
        venue: "Hyderabad multiplexes".to_string(),
        starts_at: Some(test_clock().now()),
        image_url: None,
    }
}

fn fixture() -> EventSummary {
    EventSummary {
        id: Some(EventId(101)),
        title: "IPL 2024: MI vs CSK".to_string(),
        category: Category::Sport,
        venue: "Wankhede Stadium".to_string(),
        starts_at: Some(test_clock().now()),
        image_url: None,
    }
}

fn concert() -> EventSummary {
    EventSummary {
        id: Some(EventId(201)),
        title: "Anirudh Live in Concert".to_string(),
        category: Category::Concert,
        venue: "Palace Grounds".to_string(),
        starts_at: Some(test_clock().now()),
        image_url: None,
    }
}

/// A tiny hand-built map: seats 1-6, seat 5 already booked
fn small_map(unit_price: Money) -> SeatMap {
    SeatMap {
        seats: (1..=6)
            .map(|n| Seat {
                label: SeatLabel::new(n.to_string()),
                booked: n == 5,
                price: unit_price,
            })
            .collect(),
    }
}

fn seats_stage(unit_price: Money, bound: SelectionBound) -> Stage {
    Stage::ChoosingSeats {
        event: movie(),
        section: None,
        unit_price,
        seats: small_map(unit_price),
        selection: Selection::new(bound),
    }
}

fn checkout(event: EventSummary, quantity: u32, unit_price: Money) -> Checkout {
    Checkout {
        event,
        section: None,
        unit_price,
        seats: Vec::new(),
        quantity,
        gate_number: None,
    }
}

#[test]
fn test_movie_flow_reaches_review_with_derived_total() {
    // Seat picks must come from the same seeded map the reducer will roll.
    let unit_price = Money::from_rupees(200);
    let map = RandomSeatPlanner::seeded(7).theater_grid(unit_price);
    let picks: Vec<SeatLabel> = map.available_labels().into_iter().take(3).collect();
    assert_eq!(picks.len(), 3);

    let mut test = ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::SelectEvent { event: movie() })
        .when_action(FlowAction::SelectShowtime {
            theater: "PVR: GVK One Mall".to_string(),
            unit_price,
        })
        .when_action(FlowAction::SetCount { count: 3 })
        .when_action(FlowAction::Proceed);
    for seat in picks {
        test = test.when_action(FlowAction::ToggleSeat { seat });
    }
    test.when_action(FlowAction::Proceed)
        .then_state(|state| {
            let Stage::ReviewingTotal { checkout } = &state.stage else {
                panic!("expected ReviewingTotal, got {:?}", state.stage);
            };
            assert_eq!(checkout.quantity, 3);
            assert_eq!(checkout.seats.len(), 3);
            assert_eq!(checkout.total(), Money::from_rupees(600));
            assert_eq!(checkout.event.venue, "PVR: GVK One Mall");
            // Movie flows never get a gate.
            assert_eq!(checkout.gate_number, None);
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn test_booked_seat_toggle_is_a_noop() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState {
            stage: seats_stage(Money::from_rupees(200), SelectionBound::Exactly(3)),
            last_error: None,
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("5"),
        })
        .then_state(|state| {
            let Stage::ChoosingSeats { selection, .. } = &state.stage else {
                panic!("expected ChoosingSeats");
            };
            assert!(selection.is_empty());
            assert!(state.last_error.is_none());
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn test_selection_never_exceeds_the_bound() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState {
            stage: seats_stage(Money::from_rupees(200), SelectionBound::Exactly(2)),
            last_error: None,
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("1"),
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("2"),
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("3"),
        })
        .then_state(|state| {
            let Stage::ChoosingSeats { selection, .. } = &state.stage else {
                panic!("expected ChoosingSeats");
            };
            assert_eq!(selection.len(), 2);
            assert!(!selection.contains(&SeatLabel::new("3")));
        })
        .run();
}

#[test]
fn test_deselecting_all_seats_returns_to_the_empty_set() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState {
            stage: seats_stage(Money::from_rupees(200), SelectionBound::Exactly(2)),
            last_error: None,
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("1"),
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("2"),
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("1"),
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("2"),
        })
        .then_state(|state| {
            let Stage::ChoosingSeats { selection, .. } = &state.stage else {
                panic!("expected ChoosingSeats");
            };
            assert!(selection.is_empty());
        })
        .run();
}

#[test]
fn test_vip_proceed_with_no_seats_is_a_noop() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::SelectEvent { event: fixture() })
        .when_action(FlowAction::SelectSection {
            section: "VIP Stand".to_string(),
            unit_price: Money::from_rupees(3000),
            assigned_seats: true,
        })
        .when_action(FlowAction::Proceed)
        .then_state(|state| {
            // Still on the seat map: zero seats cannot proceed.
            assert!(matches!(state.stage, Stage::ChoosingSeats { .. }));
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn test_vip_two_seats_at_3000_total_6000() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::SelectEvent { event: fixture() })
        .when_action(FlowAction::SelectSection {
            section: "VIP Stand".to_string(),
            unit_price: Money::from_rupees(3000),
            assigned_seats: true,
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("A1"),
        })
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("A2"),
        })
        .when_action(FlowAction::Proceed)
        .then_state(|state| {
            let Stage::ReviewingTotal { checkout } = &state.stage else {
                panic!("expected ReviewingTotal, got {:?}", state.stage);
            };
            assert_eq!(checkout.total(), Money::from_rupees(6000));
            assert_eq!(checkout.seats.len(), 2);
            assert_eq!(checkout.section.as_deref(), Some("VIP Stand"));
            // Stadium flows get their gate at the section/seat step.
            assert_eq!(checkout.gate_number, Some(4));
        })
        .run();
}

#[test]
fn test_section_ticket_flow_skips_the_seat_map() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::SelectEvent { event: concert() })
        .when_action(FlowAction::SelectSection {
            section: "Gold".to_string(),
            unit_price: Money::from_rupees(3500),
            assigned_seats: false,
        })
        .when_action(FlowAction::SetCount { count: 2 })
        .when_action(FlowAction::Proceed)
        .then_state(|state| {
            let Stage::ReviewingTotal { checkout } = &state.stage else {
                panic!("expected ReviewingTotal, got {:?}", state.stage);
            };
            assert!(checkout.seats.is_empty());
            assert_eq!(checkout.quantity, 2);
            assert_eq!(checkout.total(), Money::from_rupees(7000));
        })
        .run();
}

#[test]
fn test_deal_flow_uses_the_pre_discounted_unit_price() {
    // Deal tiers carry the discounted price as THE unit price; nothing
    // re-derives it from a percentage.
    let deal_tier = crate::catalog::deals()
        .iter()
        .find(|d| d.category == Category::Sport)
        .and_then(|d| d.tiers.first())
        .expect("a discounted sport tier");
    assert_eq!(deal_tier.price, Money::from_rupees(700));

    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::SelectEvent { event: fixture() })
        .when_action(FlowAction::SelectSection {
            section: deal_tier.name.clone(),
            unit_price: deal_tier.price,
            assigned_seats: false,
        })
        .when_action(FlowAction::SetCount { count: 2 })
        .when_action(FlowAction::Proceed)
        .then_state(|state| {
            let Stage::ReviewingTotal { checkout } = &state.stage else {
                panic!("expected ReviewingTotal");
            };
            assert_eq!(checkout.total(), Money::from_rupees(1400));
        })
        .run();
}

#[test]
fn test_set_count_out_of_range_is_ignored() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::SelectEvent { event: concert() })
        .when_action(FlowAction::SelectSection {
            section: "Silver".to_string(),
            unit_price: Money::from_rupees(2500),
            assigned_seats: false,
        })
        .when_action(FlowAction::SetCount { count: 0 })
        .when_action(FlowAction::SetCount { count: 11 })
        .then_state(|state| {
            let Stage::ChoosingCount { count, .. } = &state.stage else {
                panic!("expected ChoosingCount");
            };
            assert_eq!(*count, 1);
        })
        .run();
}

#[test]
fn test_submit_payment_schedules_settlement() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState {
            stage: Stage::ReviewingTotal {
                checkout: checkout(movie(), 3, Money::from_rupees(200)),
            },
            last_error: None,
        })
        .when_action(FlowAction::SubmitPayment {
            method: PaymentMethod::Card,
        })
        .then_state(|state| {
            assert!(matches!(state.stage, Stage::Paying { .. }));
        })
        .then_effects(|effects| {
            assertions::assert_effects_count(effects, 1);
            assertions::assert_has_delay_effect(effects, SETTLE);
        })
        .run();
}

#[test]
fn test_settlement_completes_the_booking() {
    let mut paid = checkout(movie(), 3, Money::from_rupees(200));
    paid.seats = vec![
        SeatLabel::new("1"),
        SeatLabel::new("2"),
        SeatLabel::new("3"),
    ];

    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState {
            stage: Stage::Paying {
                checkout: paid,
                method: PaymentMethod::Card,
            },
            last_error: None,
        })
        .when_action(FlowAction::PaymentSettled {
            token: crate::types::BookingToken::new("K7QM2XB4A".to_string()),
            gate_number: None,
        })
        .then_state(|state| {
            let booking = state.booking().expect("booking after settlement");
            assert_eq!(booking.token.as_str(), "K7QM2XB4A");
            assert_eq!(booking.total_amount, Money::from_rupees(600));
            assert_eq!(booking.seats.len(), 3);
            assert_eq!(booking.booked_at, test_clock().now());
            assert!(state.last_error.is_none());
        })
        .then_effects(|effects| {
            // The fire-and-forget persist call.
            assertions::assert_effects_count(effects, 1);
            assertions::assert_has_future_effect(effects);
        })
        .run();
}

#[test]
fn test_section_bookings_synthesize_per_ticket_labels() {
    let mut order = checkout(fixture(), 2, Money::from_rupees(1000));
    order.section = Some("East Stand".to_string());
    order.gate_number = Some(4);

    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState {
            stage: Stage::Paying {
                checkout: order,
                method: PaymentMethod::Upi,
            },
            last_error: None,
        })
        .when_action(FlowAction::PaymentSettled {
            token: crate::types::BookingToken::new("K7QM2XB4A".to_string()),
            gate_number: Some(4),
        })
        .then_state(|state| {
            let booking = state.booking().expect("booking after settlement");
            assert_eq!(booking.seats.len(), 2);
            assert_eq!(booking.seats[0], SeatLabel::new("East Stand - 1"));
            assert_eq!(booking.seats[1], SeatLabel::new("East Stand - 2"));
            assert_eq!(booking.gate_number, Some(4));
        })
        .run();
}

#[test]
fn test_seat_map_without_a_count_shows_guidance() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::ToggleSeat {
            seat: SeatLabel::new("12"),
        })
        .then_state(|state| {
            assert!(matches!(state.stage, Stage::ChoosingEvent));
            assert_eq!(
                state.last_error.as_deref(),
                Some("Select the number of seats first")
            );
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn test_completed_is_terminal_until_start_over() {
    let env = test_env();
    let reducer = BookingFlowReducer::new();
    let mut state = FlowState {
        stage: Stage::Paying {
            checkout: checkout(concert(), 1, Money::from_rupees(3500)),
            method: PaymentMethod::Card,
        },
        last_error: None,
    };

    let _ = reducer.reduce(
        &mut state,
        FlowAction::PaymentSettled {
            token: crate::types::BookingToken::new("K7QM2XB4A".to_string()),
            gate_number: Some(4),
        },
        &env,
    );
    assert!(state.booking().is_some());

    // Paying again from the terminal stage is refused with guidance.
    let effects = reducer.reduce(
        &mut state,
        FlowAction::SubmitPayment {
            method: PaymentMethod::Card,
        },
        &env,
    );
    assert!(effects.is_empty());
    assert!(state.booking().is_some());
    assert_eq!(
        state.last_error.as_deref(),
        Some("Review your order before paying")
    );

    // Only starting over leaves it, and nothing survives the reset.
    let _ = reducer.reduce(&mut state, FlowAction::StartOver, &env);
    assert_eq!(state, FlowState::new());
}

#[test]
fn test_stale_settlement_timer_is_ignored() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::PaymentSettled {
            token: crate::types::BookingToken::new("STALE0000".to_string()),
            gate_number: None,
        })
        .then_state(|state| {
            assert!(matches!(state.stage, Stage::ChoosingEvent));
            assert!(state.last_error.is_none());
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn test_persist_failure_records_a_generic_message() {
    ReducerTest::new(BookingFlowReducer::new())
        .with_env(test_env())
        .given_state(FlowState::new())
        .when_action(FlowAction::BookingPersistFailed {
            message: "Could not save your booking online.".to_string(),
        })
        .then_state(|state| {
            assert_eq!(
                state.last_error.as_deref(),
                Some("Could not save your booking online.")
            );
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}
