//! Static event catalog.
//!
//! Listings are fixed at build time - there is no network fetch and no error
//! path beyond [`CatalogError::NotFound`] for an unknown id. Sports and
//! concert events carry their section pricing; movies are priced per theater
//! class once a showtime is picked.

use crate::types::{
    Category, Deal, DealTier, Event, EventId, EventStatus, Money, Pricing, Section, Theater,
    TheaterPrices,
};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::LazyLock;
use thiserror::Error;

/// Errors produced by catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No event with the given id
    #[error("No event with id {id}")]
    NotFound {
        /// The id that was looked up
        id: EventId,
    },
}

#[allow(clippy::expect_used)] // catalog literals are known-valid
fn date(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid catalog date")
}

fn rupees(amount: u64) -> Money {
    Money::from_rupees(amount)
}

static EVENTS: LazyLock<Vec<Event>> = LazyLock::new(|| {
    vec![
        // ------------------------------------------------------------------
        // Movies (now showing)
        // ------------------------------------------------------------------
        Event {
            id: EventId(1),
            title: "Avatar 3".to_string(),
            category: Category::Movie,
            venue: "Hyderabad multiplexes".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            starts_at: date(2024, 4, 15, 14, 30),
            image_url: "https://images.unsplash.com/photo-1533613220915-609f661a6fe1".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Flat(rupees(200)),
            description: "Sci-Fi · UA · 2h 45m".to_string(),
        },
        Event {
            id: EventId(2),
            title: "Deadpool 3".to_string(),
            category: Category::Movie,
            venue: "Hyderabad multiplexes".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            starts_at: date(2024, 4, 15, 20, 0),
            image_url: "https://images.unsplash.com/photo-1535016120720-40c646be5580".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Flat(rupees(200)),
            description: "Action/Comedy · A · 2h 15m".to_string(),
        },
        Event {
            id: EventId(3),
            title: "Kung Fu Panda 4".to_string(),
            category: Category::Movie,
            venue: "Hyderabad multiplexes".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            starts_at: date(2024, 4, 16, 11, 0),
            image_url: "https://images.unsplash.com/photo-1440404653325-ab127d49abc1".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Flat(rupees(200)),
            description: "Animation · U · 1h 55m".to_string(),
        },
        // ------------------------------------------------------------------
        // Movies (coming soon)
        // ------------------------------------------------------------------
        Event {
            id: EventId(4),
            title: "Joker 2".to_string(),
            category: Category::Movie,
            venue: "Hyderabad multiplexes".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            starts_at: date(2024, 6, 1, 18, 0),
            image_url: "https://images.unsplash.com/photo-1559583109-44c9134a36d6".to_string(),
            status: EventStatus::Upcoming,
            pricing: Pricing::Flat(rupees(200)),
            description: "Drama/Thriller · Expected June 2024".to_string(),
        },
        Event {
            id: EventId(5),
            title: "Captain America: Brave New World".to_string(),
            category: Category::Movie,
            venue: "Hyderabad multiplexes".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            starts_at: date(2024, 7, 1, 18, 0),
            image_url: "https://images.unsplash.com/photo-1612036782180-6f0b6cd846fe".to_string(),
            status: EventStatus::Upcoming,
            pricing: Pricing::Flat(rupees(200)),
            description: "Action/Adventure · Expected July 2024".to_string(),
        },
        // ------------------------------------------------------------------
        // Sports fixtures
        // ------------------------------------------------------------------
        Event {
            id: EventId(101),
            title: "IPL 2024: MI vs CSK".to_string(),
            category: Category::Sport,
            venue: "Wankhede Stadium".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            starts_at: date(2024, 4, 15, 19, 30),
            image_url: "https://images.unsplash.com/photo-1540747913346-19e32dc3e97e".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Sections(vec![
                Section::new("east", "East Stand", rupees(1000)),
                Section::new("west", "West Stand", rupees(1200)),
                Section::new("vip", "VIP Stand", rupees(3000)),
                Section::new("first", "First Floor", rupees(1500)),
            ]),
            description: "Home of Mumbai Indians · 33,000 seats".to_string(),
        },
        Event {
            id: EventId(102),
            title: "FIFA World Cup Qualifier: India vs Australia".to_string(),
            category: Category::Sport,
            venue: "Salt Lake Stadium".to_string(),
            location: "Kolkata, West Bengal".to_string(),
            starts_at: date(2024, 5, 2, 18, 0),
            image_url: "https://images.unsplash.com/photo-1522778119026-d647f0596c20".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Sections(vec![
                Section::new("east", "East Stand", rupees(800)),
                Section::new("west", "West Stand", rupees(1000)),
                Section::new("vip", "VIP Stand", rupees(2500)),
                Section::new("first", "First Floor", rupees(1200)),
            ]),
            description: "India's largest football stadium · 85,000 seats".to_string(),
        },
        Event {
            id: EventId(103),
            title: "IPL 2024: GT vs RCB".to_string(),
            category: Category::Sport,
            venue: "Narendra Modi Stadium".to_string(),
            location: "Ahmedabad, Gujarat".to_string(),
            starts_at: date(2024, 4, 25, 19, 30),
            image_url: "https://images.unsplash.com/photo-1531415074968-036ba1b575da".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Sections(vec![
                Section::new("east", "East Stand", rupees(1200)),
                Section::new("west", "West Stand", rupees(1400)),
                Section::new("vip", "VIP Stand", rupees(3500)),
                Section::new("first", "First Floor", rupees(1800)),
            ]),
            description: "World's largest cricket stadium · 132,000 seats".to_string(),
        },
        // ------------------------------------------------------------------
        // Concerts
        // ------------------------------------------------------------------
        Event {
            id: EventId(201),
            title: "Anirudh Live in Concert".to_string(),
            category: Category::Concert,
            venue: "Palace Grounds".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            starts_at: date(2024, 4, 25, 19, 0),
            image_url: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Sections(concert_tiers()),
            description: "3 hours · Bangalore's premier open-air venue".to_string(),
        },
        Event {
            id: EventId(202),
            title: "Dil se DSP".to_string(),
            category: Category::Concert,
            venue: "MMRDA Grounds".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            starts_at: date(2024, 5, 5, 18, 30),
            image_url: "https://images.unsplash.com/photo-1501612780327-45045538702b".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Sections(concert_tiers()),
            description: "2.5 hours · Mumbai's largest outdoor venue".to_string(),
        },
        Event {
            id: EventId(203),
            title: "AR Rahman - Secret Notes".to_string(),
            category: Category::Concert,
            venue: "Buddh International Circuit".to_string(),
            location: "Greater Noida, UP".to_string(),
            starts_at: date(2024, 6, 10, 20, 0),
            image_url: "https://images.unsplash.com/photo-1540039155733-5bb30b53aa14".to_string(),
            status: EventStatus::Ongoing,
            pricing: Pricing::Sections(concert_tiers()),
            description: "3 hours · Spectacular open-air concert experience".to_string(),
        },
    ]
});

/// Every concert sells the same four tiers
fn concert_tiers() -> Vec<Section> {
    vec![
        Section::new("platinum", "Platinum", rupees(5000)),
        Section::new("gold", "Gold", rupees(3500)),
        Section::new("silver", "Silver", rupees(2500)),
        Section::new("bronze", "Bronze", rupees(1500)),
    ]
}

static THEATERS: LazyLock<Vec<Theater>> = LazyLock::new(|| {
    vec![
        Theater {
            name: "PVR: GVK One Mall".to_string(),
            location: "Banjara Hills".to_string(),
            showtimes: showtimes(&["10:30 AM", "1:45 PM", "4:30 PM", "7:45 PM", "10:30 PM"]),
            prices: TheaterPrices {
                classic: rupees(200),
                prime: rupees(250),
                recliner: rupees(450),
            },
        },
        Theater {
            name: "INOX: GSM Mall".to_string(),
            location: "Miyapur".to_string(),
            showtimes: showtimes(&["11:00 AM", "2:15 PM", "5:00 PM", "8:15 PM", "11:00 PM"]),
            prices: TheaterPrices {
                classic: rupees(180),
                prime: rupees(220),
                recliner: rupees(400),
            },
        },
        Theater {
            name: "AMB Cinemas".to_string(),
            location: "Gachibowli".to_string(),
            showtimes: showtimes(&["9:45 AM", "1:00 PM", "3:45 PM", "7:00 PM", "10:15 PM"]),
            prices: TheaterPrices {
                classic: rupees(250),
                prime: rupees(300),
                recliner: rupees(500),
            },
        },
        Theater {
            name: "Prasads Multiplex".to_string(),
            location: "Necklace Road".to_string(),
            showtimes: showtimes(&["10:00 AM", "1:15 PM", "4:00 PM", "7:15 PM", "10:30 PM"]),
            prices: TheaterPrices {
                classic: rupees(200),
                prime: rupees(250),
                recliner: rupees(450),
            },
        },
    ]
});

fn showtimes(times: &[&str]) -> Vec<String> {
    times.iter().map(|t| (*t).to_string()).collect()
}

static DEALS: LazyLock<Vec<Deal>> = LazyLock::new(|| {
    vec![
        Deal {
            id: 1,
            title: "Last Minute: Avatar 3".to_string(),
            category: Category::Movie,
            venue: "PVR: GVK One Mall".to_string(),
            discount_label: "70%".to_string(),
            seats_left: 15,
            when: "Today, 9:30 PM".to_string(),
            tiers: vec![DealTier {
                name: "General".to_string(),
                original_price: rupees(500),
                price: rupees(150),
            }],
        },
        Deal {
            id: 2,
            title: "IPL: RCB vs KKR".to_string(),
            category: Category::Sport,
            venue: "Chinnaswamy Stadium".to_string(),
            discount_label: "65%".to_string(),
            seats_left: 25,
            when: "Tomorrow, 7:30 PM".to_string(),
            tiers: vec![
                DealTier {
                    name: "East Stand".to_string(),
                    original_price: rupees(2000),
                    price: rupees(700),
                },
                DealTier {
                    name: "West Stand".to_string(),
                    original_price: rupees(2500),
                    price: rupees(875),
                },
                DealTier {
                    name: "VIP Stand".to_string(),
                    original_price: rupees(5000),
                    price: rupees(1750),
                },
            ],
        },
        Deal {
            id: 3,
            title: "Local Indie Concert".to_string(),
            category: Category::Concert,
            venue: "Phoenix Marketcity".to_string(),
            discount_label: "75%".to_string(),
            seats_left: 30,
            when: "Today, 8:00 PM".to_string(),
            tiers: vec![
                DealTier {
                    name: "Silver".to_string(),
                    original_price: rupees(1500),
                    price: rupees(375),
                },
                DealTier {
                    name: "Gold".to_string(),
                    original_price: rupees(2500),
                    price: rupees(625),
                },
                DealTier {
                    name: "Platinum".to_string(),
                    original_price: rupees(4000),
                    price: rupees(1000),
                },
            ],
        },
    ]
});

/// All catalog events
#[must_use]
pub fn events() -> &'static [Event] {
    &EVENTS
}

/// Events filtered by category (all of them when `None`)
#[must_use]
pub fn list(category: Option<Category>) -> Vec<&'static Event> {
    EVENTS
        .iter()
        .filter(|event| category.is_none_or(|c| event.category == c))
        .collect()
}

/// Look up an event by id
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] for an unknown id.
pub fn get(id: EventId) -> Result<&'static Event, CatalogError> {
    EVENTS
        .iter()
        .find(|event| event.id == id)
        .ok_or(CatalogError::NotFound { id })
}

/// Movie theaters available for showtime selection
#[must_use]
pub fn theaters() -> &'static [Theater] {
    &THEATERS
}

/// Last-minute discounted listings
#[must_use]
pub fn deals() -> &'static [Deal] {
    &DEALS
}
