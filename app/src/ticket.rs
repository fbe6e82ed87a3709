//! Booking record renderer.
//!
//! Pure formatting: given a completed [`Booking`], produce the
//! human-readable ticket - title, venue, formatted date and time, seat or
//! section list, amount, and a scannable code pointing at a venue map
//! lookup. No business logic lives here, and missing optional fields render
//! as "not available" placeholders instead of failing.

use crate::types::Booking;
use std::fmt;

/// A reward coupon printed on every confirmed ticket
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coupon {
    /// Redemption code
    pub code: &'static str,
    /// Discount headline
    pub discount: &'static str,
    /// What it applies to
    pub description: &'static str,
}

/// The two fixed reward coupons every booking earns
pub const COUPONS: [Coupon; 2] = [
    Coupon {
        code: "FIRSTSHOW25",
        discount: "25% off",
        description: "on your next booking",
    },
    Coupon {
        code: "POPCORN50",
        discount: "50% off",
        description: "on snacks & beverages",
    },
];

/// Placeholder for absent optional fields
const NOT_AVAILABLE: &str = "not available";

/// A rendered ticket, ready for display
#[derive(Clone, Debug, PartialEq)]
pub struct TicketSummary {
    /// Booking reference
    pub booking_id: String,
    /// Profile name shown as "Booked by", when a session exists
    pub booked_by: Option<String>,
    /// Event title
    pub title: String,
    /// Venue line
    pub venue_line: String,
    /// `Monday, April 15, 2024`-style date
    pub date_line: String,
    /// `7:30 PM`-style time
    pub time_line: String,
    /// `Gate: 4`, for stadium/arena bookings
    pub gate_line: Option<String>,
    /// One `(seat label, section name)` pair per ticket
    pub seat_lines: Vec<(String, String)>,
    /// Amount paid
    pub amount_line: String,
    /// When the booking was made
    pub booking_time_line: String,
    /// Venue lookup URL, when the venue is known
    pub map_url: Option<String>,
    /// Scannable code image URL encoding the venue lookup
    pub qr_url: Option<String>,
    /// Reward coupons
    pub coupons: [Coupon; 2],
}

impl TicketSummary {
    /// Render a completed booking
    #[must_use]
    pub fn render(booking: &Booking) -> Self {
        let date_line = booking.event.starts_at.map_or_else(
            || format!("Date {NOT_AVAILABLE}"),
            |date| date.format("%A, %B %-d, %Y").to_string(),
        );
        let time_line = booking.event.starts_at.map_or_else(
            || format!("Time {NOT_AVAILABLE}"),
            |date| date.format("%-I:%M %p").to_string(),
        );

        let venue = booking.event.venue.trim();
        let venue_line = if venue.is_empty() {
            format!("Venue {NOT_AVAILABLE}")
        } else {
            venue.to_string()
        };

        let map_url = (!venue.is_empty()).then(|| venue_map_url(venue));
        let qr_url = map_url.as_deref().map(scannable_code_url);

        let section = booking
            .section
            .clone()
            .unwrap_or_else(|| "Standard".to_string());
        let seat_lines = booking
            .seats
            .iter()
            .map(|seat| (seat.as_str().to_string(), section.clone()))
            .collect();

        Self {
            booking_id: booking.token.to_string(),
            booked_by: None,
            title: booking.event.title.clone(),
            venue_line,
            date_line,
            time_line,
            gate_line: booking.gate_number.map(|gate| format!("Gate: {gate}")),
            seat_lines,
            amount_line: booking.total_amount.to_string(),
            booking_time_line: booking.booked_at.format("%b %-d, %Y %-I:%M %p").to_string(),
            map_url,
            qr_url,
            coupons: COUPONS,
        }
    }

    /// Attach the profile name shown as "Booked by"
    #[must_use]
    pub fn with_booked_by(mut self, name: impl Into<String>) -> Self {
        self.booked_by = Some(name.into());
        self
    }
}

impl fmt::Display for TicketSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking Confirmed!")?;
        writeln!(f, "Booking ID: {}", self.booking_id)?;
        if let Some(name) = &self.booked_by {
            writeln!(f, "Booked by: {name}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.venue_line)?;
        writeln!(f, "{}", self.date_line)?;
        writeln!(f, "{}", self.time_line)?;
        if let Some(gate) = &self.gate_line {
            writeln!(f, "{gate}")?;
        }
        if !self.seat_lines.is_empty() {
            writeln!(f)?;
            writeln!(f, "Seat Details")?;
            for (seat, section) in &self.seat_lines {
                writeln!(f, "  {seat} ({section})")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Amount Paid: {}", self.amount_line)?;
        writeln!(f, "Booking Time: {}", self.booking_time_line)?;
        writeln!(f)?;
        writeln!(f, "Your Rewards")?;
        for coupon in &self.coupons {
            writeln!(
                f,
                "  {} {} - {}",
                coupon.discount, coupon.description, coupon.code
            )?;
        }
        if let Some(qr) = &self.qr_url {
            writeln!(f)?;
            writeln!(f, "Scan to view the venue location: {qr}")?;
        }
        Ok(())
    }
}

/// Maps lookup URL for a venue name
fn venue_map_url(venue: &str) -> String {
    let query: Vec<&str> = venue.split_whitespace().collect();
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        query.join("+")
    )
}

/// QR image URL encoding the venue lookup link
fn scannable_code_url(map_url: &str) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data={}",
        percent_encode(map_url)
    )
}

/// Minimal percent-encoding for URL query data
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{
        Booking, BookingToken, Category, EventId, EventSummary, Money, PaymentMethod, SeatLabel,
    };

    fn sample_booking() -> Booking {
        Booking {
            token: BookingToken::new("K7QM2XB4A".to_string()),
            event: EventSummary {
                id: Some(EventId(101)),
                title: "IPL 2024: MI vs CSK".to_string(),
                category: Category::Sport,
                venue: "Wankhede Stadium".to_string(),
                starts_at: Some("2024-04-15T19:30:00Z".parse().unwrap()),
                image_url: None,
            },
            section: Some("East Stand".to_string()),
            seats: vec![
                SeatLabel::new("East Stand - 1"),
                SeatLabel::new("East Stand - 2"),
            ],
            quantity: 2,
            unit_price: Money::from_rupees(1000),
            total_amount: Money::from_rupees(2000),
            payment_method: PaymentMethod::Upi,
            gate_number: Some(4),
            booked_at: "2024-04-14T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_render_full_ticket() {
        let ticket = TicketSummary::render(&sample_booking());
        assert_eq!(ticket.booking_id, "K7QM2XB4A");
        assert_eq!(ticket.date_line, "Monday, April 15, 2024");
        assert_eq!(ticket.time_line, "7:30 PM");
        assert_eq!(ticket.gate_line.as_deref(), Some("Gate: 4"));
        assert_eq!(ticket.amount_line, "₹2000");
        assert_eq!(ticket.seat_lines.len(), 2);
        assert_eq!(ticket.seat_lines[0].1, "East Stand");
    }

    #[test]
    fn test_map_url_joins_venue_words() {
        let ticket = TicketSummary::render(&sample_booking());
        assert_eq!(
            ticket.map_url.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=Wankhede+Stadium")
        );
    }

    #[test]
    fn test_qr_encodes_the_map_url() {
        let ticket = TicketSummary::render(&sample_booking());
        let qr = ticket.qr_url.unwrap();
        assert!(qr.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data="));
        assert!(qr.contains("query%3DWankhede%2BStadium"));
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let mut booking = sample_booking();
        booking.event.starts_at = None;
        booking.event.venue = String::new();
        booking.gate_number = None;
        booking.seats.clear();

        let ticket = TicketSummary::render(&booking);
        assert_eq!(ticket.date_line, "Date not available");
        assert_eq!(ticket.time_line, "Time not available");
        assert_eq!(ticket.venue_line, "Venue not available");
        assert!(ticket.gate_line.is_none());
        assert!(ticket.map_url.is_none());
        assert!(ticket.qr_url.is_none());
        assert!(ticket.seat_lines.is_empty());

        // Fails soft: Display still renders.
        let printed = ticket.to_string();
        assert!(printed.contains("Date not available"));
    }

    #[test]
    fn test_display_includes_rewards_and_booked_by() {
        let ticket = TicketSummary::render(&sample_booking()).with_booked_by("priya");
        let printed = ticket.to_string();
        assert!(printed.contains("Booked by: priya"));
        assert!(printed.contains("FIRSTSHOW25"));
        assert!(printed.contains("POPCORN50"));
        assert!(printed.contains("Amount Paid: ₹2000"));
    }
}
