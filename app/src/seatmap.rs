//! Mock seat availability generator.
//!
//! Availability is rolled independently for each seat at screen-load time
//! and is NOT persisted - revisiting the same event can show a different
//! map. That matches the upstream behavior this module reproduces; it is a
//! placeholder for a real inventory service, isolated behind [`SeatPlanner`]
//! so tests can pin a seed and get deterministic fixtures.

use crate::types::{Money, SeatLabel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Seats in the flat numbered theater grid
pub const THEATER_SEAT_COUNT: u32 = 48;

/// Rows in the VIP stand grid
pub const VIP_ROWS: [char; 3] = ['A', 'B', 'C'];

/// Seats per VIP row
pub const VIP_SEATS_PER_ROW: u32 = 10;

/// Rows in the preview overlay grid
pub const PREVIEW_ROWS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Seats per preview row
pub const PREVIEW_SEATS_PER_ROW: u32 = 8;

/// Probability that a generated seat is already booked
pub const BOOKED_RATIO: f64 = 0.2;

/// One seat in a generated map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Seat label (`A7` or `23`)
    pub label: SeatLabel,
    /// Whether the seat was rolled as already booked
    pub booked: bool,
    /// Unit price inherited from the event/section
    pub price: Money,
}

/// A generated seat map for one screen load
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SeatMap {
    /// All seats in display order
    pub seats: Vec<Seat>,
}

impl SeatMap {
    /// Look up a seat by label
    #[must_use]
    pub fn seat(&self, label: &SeatLabel) -> Option<&Seat> {
        self.seats.iter().find(|seat| &seat.label == label)
    }

    /// Number of seats not already booked
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|seat| !seat.booked).count()
    }

    /// Labels of seats not already booked, in display order
    #[must_use]
    pub fn available_labels(&self) -> Vec<SeatLabel> {
        self.seats
            .iter()
            .filter(|seat| !seat.booked)
            .map(|seat| seat.label.clone())
            .collect()
    }
}

/// Source of mock seat maps
///
/// Injected into the selection workflow environment so tests can substitute
/// a seeded, deterministic generator.
pub trait SeatPlanner: Send + Sync {
    /// The 48-seat numbered theater grid used by the movie booking screen
    fn theater_grid(&self, unit_price: Money) -> SeatMap;

    /// The VIP stand grid (rows A-C, ten seats each, nothing pre-booked)
    fn vip_grid(&self, unit_price: Money) -> SeatMap;

    /// The preview overlay grid (rows A-F, eight seats each)
    fn preview_grid(&self, unit_price: Money) -> SeatMap;
}

/// Random seat planner
///
/// Unseeded, every call re-rolls availability (the production behavior).
/// [`RandomSeatPlanner::seeded`] pins the RNG for reproducible maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSeatPlanner {
    seed: Option<u64>,
}

impl RandomSeatPlanner {
    /// Planner that re-rolls availability on every call
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: None }
    }

    /// Planner that produces the same map on every call
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }

    fn rolled_rows(
        rng: &mut StdRng,
        rows: &[char],
        seats_per_row: u32,
        unit_price: Money,
        booked_ratio: f64,
    ) -> SeatMap {
        let mut seats = Vec::with_capacity(rows.len() * seats_per_row as usize);
        for row in rows {
            for number in 1..=seats_per_row {
                seats.push(Seat {
                    label: SeatLabel::new(format!("{row}{number}")),
                    booked: booked_ratio > 0.0 && rng.gen_bool(booked_ratio),
                    price: unit_price,
                });
            }
        }
        SeatMap { seats }
    }
}

impl SeatPlanner for RandomSeatPlanner {
    fn theater_grid(&self, unit_price: Money) -> SeatMap {
        let mut rng = self.rng();
        let seats = (1..=THEATER_SEAT_COUNT)
            .map(|number| Seat {
                label: SeatLabel::new(number.to_string()),
                booked: rng.gen_bool(BOOKED_RATIO),
                price: unit_price,
            })
            .collect();
        SeatMap { seats }
    }

    fn vip_grid(&self, unit_price: Money) -> SeatMap {
        // The VIP stand never shows pre-booked seats.
        let mut rng = self.rng();
        Self::rolled_rows(&mut rng, &VIP_ROWS, VIP_SEATS_PER_ROW, unit_price, 0.0)
    }

    fn preview_grid(&self, unit_price: Money) -> SeatMap {
        let mut rng = self.rng();
        Self::rolled_rows(
            &mut rng,
            &PREVIEW_ROWS,
            PREVIEW_SEATS_PER_ROW,
            unit_price,
            BOOKED_RATIO,
        )
    }
}
