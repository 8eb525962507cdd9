//! # Actions
//!
//! Everything that can happen in Transito becomes an `Action`.
//! User presses Enter on a seat? That's `Action::SelectSeat(id)`.
//! Driver taps the trip button? That's `Action::AdvanceTrip`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No I/O here: anything that would leave the
//! process (a booking request, a trip-status broadcast) is returned as an
//! `Effect` for the adapter to carry out.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable without a terminal, and keeps every
//! operation total: no action can fail, per the UI contract (the adapter
//! only ever offers legal inputs).

use crate::core::booking::SeatId;
use crate::core::state::{App, Screen};
use crate::core::trip::TripStatus;

/// Which decorative text field a keystroke belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Route/destination search above the live map.
    Map,
    /// "From" field in the booking route card.
    BookingFrom,
    /// "To" field in the booking route card.
    BookingTo,
    /// Bus search on the admin fleet tab.
    Fleet,
}

/// Every state change in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SwitchScreen(Screen),

    // Booking flow
    SelectSeat(SeatId),
    ChooseDeparture(usize),
    ConfirmBooking,
    FindRoutes,

    // Live map
    SelectBus(usize),

    // Driver dashboard
    AdvanceTrip,
    ToggleLocationSharing,

    // Admin dashboard
    NextAdminTab,
    PrevAdminTab,

    // Decorative text capture (never filters anything in this sample)
    SearchInput(SearchField, char),
    SearchBackspace(SearchField),
}

/// Side effects requested by `update()`. The TUI adapter executes these;
/// in this sample every external collaborator is a logged stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Outbound booking-confirmation request (stub).
    SubmitBooking(SeatId),
    /// Outbound trip-status update (stub).
    PublishTripStatus(TripStatus),
    /// Outbound route search (stub).
    RequestRoutes,
}

/// Apply an action to the app state. Total: every action is handled, no
/// action returns an error.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::SwitchScreen(screen) => {
            app.screen = screen;
            app.status_message.clear();
            Effect::None
        }

        Action::SelectSeat(seat) => {
            let before = app.booking.seats.selected();
            app.booking.seats.select(seat);
            let after = app.booking.seats.selected();
            // Blocked seats are a silent no-op: leave the status line alone
            if before != after {
                app.status_message = match after {
                    Some(s) => format!("Seat {s} selected"),
                    None => String::from("Seat selection cleared"),
                };
            }
            Effect::None
        }

        Action::ChooseDeparture(index) => {
            if index < app.booking.options.len() {
                app.booking.chosen_option = index;
                app.status_message = format!("Selected {}", app.booking.chosen().route);
            }
            Effect::None
        }

        Action::ConfirmBooking => match app.booking.seats.selected() {
            Some(seat) => {
                app.status_message = format!(
                    "Booking submitted: seat {seat} on {}",
                    app.booking.chosen().route
                );
                Effect::SubmitBooking(seat)
            }
            // Confirm is disabled without a selection; guard anyway
            None => {
                app.status_message = String::from("Select a seat first");
                Effect::None
            }
        },

        Action::FindRoutes => {
            app.status_message = String::from("Route search is not wired up in this demo");
            Effect::RequestRoutes
        }

        Action::SelectBus(index) => {
            app.map.toggle_select(index);
            Effect::None
        }

        Action::AdvanceTrip => {
            let status = app.driver.advance_trip();
            app.status_message = format!("Trip status: {}", status.badge());
            Effect::PublishTripStatus(status)
        }

        Action::ToggleLocationSharing => {
            app.driver.toggle_sharing();
            app.status_message = if app.driver.location_sharing {
                String::from("Location sharing on")
            } else {
                String::from("Location sharing off")
            };
            Effect::None
        }

        Action::NextAdminTab => {
            app.admin.tab = app.admin.tab.next();
            Effect::None
        }

        Action::PrevAdminTab => {
            app.admin.tab = app.admin.tab.prev();
            Effect::None
        }

        Action::SearchInput(field, ch) => {
            search_buffer(app, field).push(ch);
            Effect::None
        }

        Action::SearchBackspace(field) => {
            search_buffer(app, field).pop();
            Effect::None
        }
    }
}

fn search_buffer(app: &mut App, field: SearchField) -> &mut String {
    match field {
        SearchField::Map => &mut app.map.search,
        SearchField::BookingFrom => &mut app.booking.from,
        SearchField::BookingTo => &mut app.booking.to,
        SearchField::Fleet => &mut app.admin.search,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AdminTab;
    use crate::test_support::test_app;

    fn seat(id: u8) -> SeatId {
        SeatId::new(id).unwrap()
    }

    #[test]
    fn quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn select_seat_sets_toggles_and_ignores_blocked() {
        let mut app = test_app();

        update(&mut app, Action::SelectSeat(seat(5)));
        assert_eq!(app.booking.seats.selected(), Some(seat(5)));
        assert_eq!(app.status_message, "Seat 5 selected");

        // Blocked seat: no change, status line untouched
        update(&mut app, Action::SelectSeat(seat(3)));
        assert_eq!(app.booking.seats.selected(), Some(seat(5)));
        assert_eq!(app.status_message, "Seat 5 selected");

        // Toggle off
        update(&mut app, Action::SelectSeat(seat(5)));
        assert_eq!(app.booking.seats.selected(), None);
        assert_eq!(app.status_message, "Seat selection cleared");
    }

    #[test]
    fn confirm_requires_a_selection() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::ConfirmBooking), Effect::None);

        update(&mut app, Action::SelectSeat(seat(12)));
        assert_eq!(
            update(&mut app, Action::ConfirmBooking),
            Effect::SubmitBooking(seat(12))
        );
        assert!(app.status_message.contains("seat 12"));
    }

    #[test]
    fn choose_departure_updates_summary() {
        let mut app = test_app();
        update(&mut app, Action::ChooseDeparture(1));
        assert_eq!(app.booking.chosen().route, "Standard Route 23B");

        // Out of range is ignored
        update(&mut app, Action::ChooseDeparture(9));
        assert_eq!(app.booking.chosen_option, 1);
    }

    #[test]
    fn advance_trip_publishes_each_step() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::AdvanceTrip),
            Effect::PublishTripStatus(TripStatus::Active)
        );
        assert_eq!(
            update(&mut app, Action::AdvanceTrip),
            Effect::PublishTripStatus(TripStatus::Completed)
        );
        // Third press re-arms for the next trip
        assert_eq!(
            update(&mut app, Action::AdvanceTrip),
            Effect::PublishTripStatus(TripStatus::Inactive)
        );
    }

    #[test]
    fn sharing_toggle_does_not_touch_trip_status() {
        let mut app = test_app();
        update(&mut app, Action::AdvanceTrip);
        update(&mut app, Action::ToggleLocationSharing);
        assert!(!app.driver.location_sharing);
        assert_eq!(app.driver.status, TripStatus::Active);
    }

    #[test]
    fn admin_tab_cycling() {
        let mut app = test_app();
        update(&mut app, Action::NextAdminTab);
        assert_eq!(app.admin.tab, AdminTab::Fleet);
        update(&mut app, Action::PrevAdminTab);
        assert_eq!(app.admin.tab, AdminTab::Overview);
    }

    #[test]
    fn search_fields_capture_but_never_filter() {
        let mut app = test_app();
        for ch in "42nd".chars() {
            update(&mut app, Action::SearchInput(SearchField::Map, ch));
        }
        assert_eq!(app.map.search, "42nd");
        update(&mut app, Action::SearchBackspace(SearchField::Map));
        assert_eq!(app.map.search, "42n");

        // The bus list is never filtered by the query
        assert_eq!(app.map.buses.len(), 3);

        update(&mut app, Action::SearchInput(SearchField::BookingFrom, 'a'));
        update(&mut app, Action::SearchInput(SearchField::BookingTo, 'b'));
        update(&mut app, Action::SearchInput(SearchField::Fleet, 'c'));
        assert_eq!(app.booking.from, "a");
        assert_eq!(app.booking.to, "b");
        assert_eq!(app.admin.search, "c");
    }

    #[test]
    fn switch_screen_clears_status() {
        let mut app = test_app();
        update(&mut app, Action::SwitchScreen(Screen::Driver));
        assert_eq!(app.screen, Screen::Driver);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn find_routes_is_a_stub() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::FindRoutes), Effect::RequestRoutes);
    }
}
