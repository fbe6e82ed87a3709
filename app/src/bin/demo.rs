//! End-to-end walkthrough of a movie booking.
//!
//! Drives the selection workflow with a minimal effect loop against the
//! in-memory gateway, then prints the rendered ticket. Run with:
//!
//! ```bash
//! cargo run --bin demo
//! ```

use anyhow::Context;
use samosa::catalog;
use samosa::flow::{
    BookingFlowReducer, FixedTokenSource, FlowAction, FlowEnvironment, FlowState,
};
use samosa::seatmap::{RandomSeatPlanner, SeatPlanner};
use samosa::ticket::TicketSummary;
use samosa::types::{Category, EventStatus, PaymentMethod, SeatLabel};
use samosa_core::effect::Effect;
use samosa_core::environment::SystemClock;
use samosa_core::reducer::Reducer;
use samosa_gateway::{DataGateway, InMemoryGateway};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

const SEAT_SEED: u64 = 21;

/// Dispatch an action and run the resulting effects to completion,
/// feeding produced actions back into the reducer.
async fn dispatch(
    reducer: &BookingFlowReducer,
    state: &mut FlowState,
    env: &FlowEnvironment,
    action: FlowAction,
) {
    let mut queue = VecDeque::from([action]);
    while let Some(action) = queue.pop_front() {
        for effect in reducer.reduce(state, action, env) {
            match effect {
                Effect::None => {}
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    queue.push_back(*action);
                }
                Effect::Future(future) => {
                    if let Some(action) = future.await {
                        queue.push_back(action);
                    }
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("samosa=info,demo=info")
        .init();

    let gateway = Arc::new(InMemoryGateway::new());
    let planner = RandomSeatPlanner::seeded(SEAT_SEED);
    let env = FlowEnvironment::new(
        Arc::new(SystemClock),
        Arc::new(FixedTokenSource::new("K7QM2XB4A", 4)),
        Arc::new(planner),
        gateway.clone(),
        Duration::from_millis(500),
    );

    // A signed-in user, so the ticket can show who booked it.
    let session = gateway
        .sign_up("priya@example.com", "super-secret")
        .await
        .context("sign up")?;
    let profile = gateway
        .get_profile(session.user.id)
        .await
        .context("fetch profile")?;

    // Pick the first movie that is currently showing.
    let movie = catalog::events()
        .iter()
        .find(|e| e.category == Category::Movie && e.status == EventStatus::Ongoing)
        .context("a movie is showing")?;
    let theater = catalog::theaters().first().context("a theater exists")?;
    let unit_price = theater.prices.classic;

    // The reducer rolls the same seeded map, so these picks are available.
    let picks: Vec<SeatLabel> = planner
        .theater_grid(unit_price)
        .available_labels()
        .into_iter()
        .take(3)
        .collect();

    let reducer = BookingFlowReducer::new();
    let mut state = FlowState::new();

    dispatch(
        &reducer,
        &mut state,
        &env,
        FlowAction::SelectEvent {
            event: movie.summary(),
        },
    )
    .await;
    dispatch(
        &reducer,
        &mut state,
        &env,
        FlowAction::SelectShowtime {
            theater: theater.name.clone(),
            unit_price,
        },
    )
    .await;
    dispatch(&reducer, &mut state, &env, FlowAction::SetCount { count: 3 }).await;
    dispatch(&reducer, &mut state, &env, FlowAction::Proceed).await;
    for seat in picks {
        dispatch(&reducer, &mut state, &env, FlowAction::ToggleSeat { seat }).await;
    }
    dispatch(&reducer, &mut state, &env, FlowAction::Proceed).await;
    dispatch(
        &reducer,
        &mut state,
        &env,
        FlowAction::SubmitPayment {
            method: PaymentMethod::Card,
        },
    )
    .await;

    let booking = state.booking().context("booking completed")?;
    let ticket = TicketSummary::render(booking).with_booked_by(profile.username);
    println!("{ticket}");

    println!(
        "(persisted booking rows in the in-memory store: {})",
        gateway.booking_count()
    );

    Ok(())
}
