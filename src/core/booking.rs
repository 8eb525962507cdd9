//! # Seat Selection & Booking
//!
//! View-model for the booking flow: a fixed 20-seat pool, a set of
//! pre-blocked seats simulating existing reservations, and a
//! single-selection rule.
//!
//! Invariants:
//! - At most one seat is selected at any time.
//! - A blocked seat can never become selected; selecting one is a silent
//!   no-op, never an error.
//!
//! There is no reservation backend here. The blocked set is fixed for the
//! session (configurable as a stand-in for the external reservation source
//! a real system would consult).

use std::fmt;

/// Number of addressable seats in the sample vehicle.
pub const SEAT_COUNT: u8 = 20;
/// Seats per row in the 5 x 4 grid layout.
pub const SEAT_COLUMNS: u8 = 4;
/// Seats pre-marked as reserved in the sample data.
pub const DEFAULT_BLOCKED: [u8; 5] = [3, 7, 11, 15, 18];

/// A validated seat identifier in `1..=SEAT_COUNT`.
///
/// Out-of-range ids are unrepresentable: `new` is the only constructor and
/// rejects them, so downstream code never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatId(u8);

impl SeatId {
    pub fn new(id: u8) -> Option<SeatId> {
        (1..=SEAT_COUNT).contains(&id).then_some(SeatId(id))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derived display state for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Open,
    Blocked,
    Selected,
}

/// The seat pool for one vehicle, holding the session's single selection.
pub struct SeatMap {
    blocked: Vec<SeatId>,
    selected: Option<SeatId>,
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatMap {
    /// A seat map with the sample blocked set.
    pub fn new() -> Self {
        Self::with_blocked(DEFAULT_BLOCKED.iter().filter_map(|&id| SeatId::new(id)))
    }

    /// A seat map with an explicit blocked set (from config).
    pub fn with_blocked(blocked: impl IntoIterator<Item = SeatId>) -> Self {
        Self {
            blocked: blocked.into_iter().collect(),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<SeatId> {
        self.selected
    }

    pub fn is_blocked(&self, seat: SeatId) -> bool {
        self.blocked.contains(&seat)
    }

    /// Apply a seat click.
    ///
    /// Blocked seats are ignored. Clicking the current selection clears it;
    /// clicking any other open seat replaces the selection. Cannot fail.
    pub fn select(&mut self, seat: SeatId) {
        if self.is_blocked(seat) {
            return;
        }
        self.selected = if self.selected == Some(seat) {
            None
        } else {
            Some(seat)
        };
    }

    pub fn status_of(&self, seat: SeatId) -> SeatStatus {
        if self.is_blocked(seat) {
            SeatStatus::Blocked
        } else if self.selected == Some(seat) {
            SeatStatus::Selected
        } else {
            SeatStatus::Open
        }
    }

    /// All seats in grid order.
    pub fn seats() -> impl Iterator<Item = SeatId> {
        (1..=SEAT_COUNT).filter_map(SeatId::new)
    }
}

/// One departure offered in the booking flow.
pub struct BusOption {
    pub id: &'static str,
    pub route: &'static str,
    pub operator: &'static str,
    pub departure: &'static str,
    pub arrival: &'static str,
    pub duration: &'static str,
    pub price: f64,
    pub rating: f64,
    pub seats_left: u8,
}

/// The two sample departures shown under "Available Buses".
pub fn sample_departures() -> Vec<BusOption> {
    vec![
        BusOption {
            id: "BUS001",
            route: "Express Route 15A",
            operator: "Metro Transit",
            departure: "2:30 PM",
            arrival: "3:45 PM",
            duration: "1h 15m",
            price: 12.50,
            rating: 4.8,
            seats_left: 8,
        },
        BusOption {
            id: "BUS002",
            route: "Standard Route 23B",
            operator: "City Lines",
            departure: "3:00 PM",
            arrival: "4:30 PM",
            duration: "1h 30m",
            price: 8.75,
            rating: 4.5,
            seats_left: 15,
        },
    ]
}

/// State for the whole booking section: route fields, departures, seats.
pub struct BookingState {
    pub seats: SeatMap,
    pub options: Vec<BusOption>,
    /// Index into `options` feeding the booking summary.
    pub chosen_option: usize,
    /// Route search fields. Captured but decorative: nothing filters on
    /// them in this sample.
    pub from: String,
    pub to: String,
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingState {
    pub fn new() -> Self {
        Self {
            seats: SeatMap::new(),
            options: sample_departures(),
            chosen_option: 0,
            from: String::new(),
            to: String::new(),
        }
    }

    /// The departure currently feeding the booking summary.
    pub fn chosen(&self) -> &BusOption {
        &self.options[self.chosen_option]
    }

    /// The confirm action is available iff a seat is selected.
    pub fn can_confirm(&self) -> bool {
        self.seats.selected().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(id: u8) -> SeatId {
        SeatId::new(id).unwrap()
    }

    #[test]
    fn seat_id_rejects_out_of_range() {
        assert!(SeatId::new(0).is_none());
        assert!(SeatId::new(21).is_none());
        assert_eq!(SeatId::new(1).map(SeatId::get), Some(1));
        assert_eq!(SeatId::new(20).map(SeatId::get), Some(20));
    }

    #[test]
    fn blocked_seats_never_change_selection() {
        let mut map = SeatMap::new();
        for id in DEFAULT_BLOCKED {
            map.select(seat(id));
            assert_eq!(map.selected(), None, "seat {id} is blocked");
        }

        map.select(seat(5));
        map.select(seat(3));
        assert_eq!(map.selected(), Some(seat(5)));
    }

    #[test]
    fn selecting_toggles_and_replaces() {
        let mut map = SeatMap::new();

        map.select(seat(5));
        assert_eq!(map.selected(), Some(seat(5)));

        // Same seat again clears
        map.select(seat(5));
        assert_eq!(map.selected(), None);

        // A different seat replaces the prior selection
        map.select(seat(5));
        map.select(seat(9));
        assert_eq!(map.selected(), Some(seat(9)));
    }

    #[test]
    fn at_most_one_seat_reports_selected() {
        let mut map = SeatMap::new();
        map.select(seat(2));
        map.select(seat(10));

        let selected: Vec<SeatId> = SeatMap::seats()
            .filter(|&s| map.status_of(s) == SeatStatus::Selected)
            .collect();
        assert_eq!(selected, vec![seat(10)]);
    }

    #[test]
    fn status_of_reflects_blocked_and_open() {
        let mut map = SeatMap::new();
        assert_eq!(map.status_of(seat(3)), SeatStatus::Blocked);
        assert_eq!(map.status_of(seat(4)), SeatStatus::Open);

        map.select(seat(4));
        assert_eq!(map.status_of(seat(4)), SeatStatus::Selected);
    }

    #[test]
    fn confirm_tracks_selection() {
        let mut booking = BookingState::new();
        assert!(!booking.can_confirm());

        booking.seats.select(seat(5));
        assert!(booking.can_confirm());

        booking.seats.select(seat(5));
        assert!(!booking.can_confirm());
    }

    #[test]
    fn chosen_departure_defaults_to_first() {
        let booking = BookingState::new();
        assert_eq!(booking.chosen().route, "Express Route 15A");
        assert_eq!(booking.chosen().price, 12.50);
    }

    #[test]
    fn custom_blocked_set() {
        let mut map = SeatMap::with_blocked([seat(1)]);
        map.select(seat(1));
        assert_eq!(map.selected(), None);
        map.select(seat(3)); // not blocked in this map
        assert_eq!(map.selected(), Some(seat(3)));
    }
}
