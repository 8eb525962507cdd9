//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core modules never import either, so the view-model logic stays
//! testable without a terminal.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (home screen, for the hero accent pulse): draws every
//!   ~80ms.
//! - **Idle** (driver and admin screens): sleeps up to 500ms, only redraws
//!   on events or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};

use crate::core::action::{Action, Effect, SearchField, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::tui::components::booking::RouteField;
use crate::tui::components::seat_map;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane on the home screen receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    Route,
    Buses,
    Departures,
    Seats,
}

impl HomeFocus {
    const ALL: [HomeFocus; 4] = [
        HomeFocus::Route,
        HomeFocus::Buses,
        HomeFocus::Departures,
        HomeFocus::Seats,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    fn next(self) -> HomeFocus {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> HomeFocus {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub home_focus: HomeFocus,
    pub route_field: RouteField,
    /// Zero-based seat grid cursor.
    pub seat_cursor: u8,
    pub bus_cursor: usize,
    pub option_cursor: usize,
    /// Fleet search box on the admin dashboard has keyboard focus.
    pub fleet_search_active: bool,
    // Animation state
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            home_focus: HomeFocus::default(),
            route_field: RouteField::default(),
            seat_cursor: 0,
            bus_cursor: 0,
            option_cursor: 0,
            fleet_search_active: false,
            pulse_value: 0.0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// True when keystrokes are being captured by a text field, which
/// suppresses the global single-letter bindings.
fn typing(app: &App, tui: &TuiState) -> bool {
    match app.screen {
        Screen::Home => tui.home_focus == HomeFocus::Route,
        Screen::Admin => tui.fleet_search_active,
        Screen::Driver => false,
    }
}

/// Translate a keyboard event into a core action, updating presentation
/// state (focus, cursors) along the way. Returns `None` when the event
/// only moved a cursor or was unbound.
pub fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // Global bindings, active whenever no text field is capturing input
    if !typing(app, tui) {
        match event {
            TuiEvent::InputChar('q') => return Some(Action::Quit),
            TuiEvent::InputChar('1') => return Some(Action::SwitchScreen(Screen::Home)),
            TuiEvent::InputChar('2') => return Some(Action::SwitchScreen(Screen::Driver)),
            TuiEvent::InputChar('3') => return Some(Action::SwitchScreen(Screen::Admin)),
            _ => {}
        }
    }

    match app.screen {
        Screen::Home => dispatch_home(app, tui, event),
        Screen::Driver => dispatch_driver(event),
        Screen::Admin => dispatch_admin(app, tui, event),
    }
}

fn dispatch_home(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Tab => {
            tui.home_focus = tui.home_focus.next();
            return None;
        }
        TuiEvent::BackTab => {
            tui.home_focus = tui.home_focus.prev();
            return None;
        }
        _ => {}
    }

    // 'c' confirms the booking from any non-typing pane
    if tui.home_focus != HomeFocus::Route && *event == TuiEvent::InputChar('c') {
        return Some(Action::ConfirmBooking);
    }

    match tui.home_focus {
        HomeFocus::Route => match event {
            TuiEvent::InputChar(c) => {
                let field = match tui.route_field {
                    RouteField::From => SearchField::BookingFrom,
                    RouteField::To => SearchField::BookingTo,
                };
                Some(Action::SearchInput(field, *c))
            }
            TuiEvent::Backspace => {
                let field = match tui.route_field {
                    RouteField::From => SearchField::BookingFrom,
                    RouteField::To => SearchField::BookingTo,
                };
                Some(Action::SearchBackspace(field))
            }
            TuiEvent::CursorUp | TuiEvent::CursorDown => {
                tui.route_field = tui.route_field.other();
                None
            }
            TuiEvent::Submit => Some(Action::FindRoutes),
            _ => None,
        },

        HomeFocus::Buses => match event {
            TuiEvent::CursorUp => {
                tui.bus_cursor = tui.bus_cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if tui.bus_cursor + 1 < app.map.buses.len() {
                    tui.bus_cursor += 1;
                }
                None
            }
            TuiEvent::Submit => Some(Action::SelectBus(tui.bus_cursor)),
            _ => None,
        },

        HomeFocus::Departures => match event {
            TuiEvent::CursorUp => {
                tui.option_cursor = tui.option_cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if tui.option_cursor + 1 < app.booking.options.len() {
                    tui.option_cursor += 1;
                }
                None
            }
            TuiEvent::Submit => Some(Action::ChooseDeparture(tui.option_cursor)),
            _ => None,
        },

        HomeFocus::Seats => match event {
            TuiEvent::CursorUp
            | TuiEvent::CursorDown
            | TuiEvent::CursorLeft
            | TuiEvent::CursorRight => {
                tui.seat_cursor = seat_map::move_cursor(tui.seat_cursor, event);
                None
            }
            TuiEvent::Submit => seat_map::cursor_seat(tui.seat_cursor).map(Action::SelectSeat),
            _ => None,
        },
    }
}

fn dispatch_driver(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Submit | TuiEvent::InputChar('t') => Some(Action::AdvanceTrip),
        TuiEvent::InputChar('s') => Some(Action::ToggleLocationSharing),
        _ => None,
    }
}

fn dispatch_admin(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if tui.fleet_search_active {
        return match event {
            TuiEvent::InputChar(c) => Some(Action::SearchInput(SearchField::Fleet, *c)),
            TuiEvent::Backspace => Some(Action::SearchBackspace(SearchField::Fleet)),
            TuiEvent::Escape | TuiEvent::Submit => {
                tui.fleet_search_active = false;
                None
            }
            _ => None,
        };
    }

    match event {
        TuiEvent::Tab | TuiEvent::CursorRight => Some(Action::NextAdminTab),
        TuiEvent::BackTab | TuiEvent::CursorLeft => Some(Action::PrevAdminTab),
        TuiEvent::InputChar('/') if app.admin.tab == crate::core::state::AdminTab::Fleet => {
            tui.fleet_search_active = true;
            None
        }
        _ => None,
    }
}

/// Execute a side effect requested by the core. Every external
/// collaborator in this sample is a logged stub.
fn run_effect(effect: Effect) -> bool {
    match effect {
        Effect::Quit => return true,
        Effect::SubmitBooking(seat) => {
            info!("Booking request for seat {seat} (stub, not sent)");
        }
        Effect::PublishTripStatus(status) => {
            info!("Trip status update: {} (stub, not sent)", status.badge());
        }
        Effect::RequestRoutes => {
            info!("Route search requested (stub, not sent)");
        }
        Effect::None => {}
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Only the home screen animates (hero accent pulse)
        let animating = app.screen == Screen::Home;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                if run_effect(update(&mut app, Action::Quit)) {
                    should_quit = true;
                }
                continue;
            }

            if let Some(action) = dispatch(&app, &mut tui, &event) {
                debug!("Dispatching {action:?}");
                if run_effect(update(&mut app, action)) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AdminTab;
    use crate::test_support::test_app;

    fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) {
        if let Some(action) = dispatch(app, tui, &event) {
            update(app, action);
        }
    }

    #[test]
    fn number_keys_switch_screens() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        press(&mut app, &mut tui, TuiEvent::InputChar('2'));
        assert_eq!(app.screen, Screen::Driver);
        press(&mut app, &mut tui, TuiEvent::InputChar('3'));
        assert_eq!(app.screen, Screen::Admin);
        press(&mut app, &mut tui, TuiEvent::InputChar('1'));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn tab_cycles_home_focus() {
        let app = test_app();
        let mut tui = TuiState::new();

        assert_eq!(tui.home_focus, HomeFocus::Route);
        for expected in [
            HomeFocus::Buses,
            HomeFocus::Departures,
            HomeFocus::Seats,
            HomeFocus::Route,
        ] {
            dispatch(&app, &mut tui, &TuiEvent::Tab);
            assert_eq!(tui.home_focus, expected);
        }
        dispatch(&app, &mut tui, &TuiEvent::BackTab);
        assert_eq!(tui.home_focus, HomeFocus::Seats);
    }

    #[test]
    fn route_focus_captures_typing() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        // 'q' goes into the From field instead of quitting
        press(&mut app, &mut tui, TuiEvent::InputChar('q'));
        assert_eq!(app.booking.from, "q");

        // Down switches to the To field
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::InputChar('x'));
        assert_eq!(app.booking.to, "x");

        press(&mut app, &mut tui, TuiEvent::Backspace);
        assert_eq!(app.booking.to, "");
    }

    #[test]
    fn seat_pane_selects_the_hovered_seat() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.home_focus = HomeFocus::Seats;

        // Move to seat 6 (row 2, col 2) and select it
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(tui.seat_cursor, 5);
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(
            app.booking.seats.selected().map(|s| s.get()),
            Some(6)
        );
    }

    #[test]
    fn confirm_key_works_outside_the_route_pane() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.home_focus = HomeFocus::Seats;

        press(&mut app, &mut tui, TuiEvent::Submit); // select seat 1
        press(&mut app, &mut tui, TuiEvent::InputChar('c'));
        assert!(app.status_message.contains("Booking submitted"));
    }

    #[test]
    fn bus_pane_toggles_detail_row() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.home_focus = HomeFocus::Buses;

        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.map.selected, Some(1));
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.map.selected, None);

        // Cursor clamps at the list bounds
        for _ in 0..10 {
            press(&mut app, &mut tui, TuiEvent::CursorDown);
        }
        assert_eq!(tui.bus_cursor, app.map.buses.len() - 1);
    }

    #[test]
    fn departures_pane_chooses_an_option() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.home_focus = HomeFocus::Departures;

        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.booking.chosen_option, 1);
    }

    #[test]
    fn driver_keys_drive_the_trip_machine() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('2'));

        press(&mut app, &mut tui, TuiEvent::InputChar('t'));
        assert!(app.driver.trip_details_visible());
        press(&mut app, &mut tui, TuiEvent::InputChar('s'));
        assert!(!app.driver.location_sharing);
    }

    #[test]
    fn admin_fleet_search_captures_and_releases() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('3'));
        press(&mut app, &mut tui, TuiEvent::Tab);
        assert_eq!(app.admin.tab, AdminTab::Fleet);

        press(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert!(tui.fleet_search_active);

        // While searching, 'q' is text, not quit
        press(&mut app, &mut tui, TuiEvent::InputChar('q'));
        assert_eq!(app.admin.search, "q");

        press(&mut app, &mut tui, TuiEvent::Escape);
        assert!(!tui.fleet_search_active);
    }

    #[test]
    fn quit_key_outside_text_fields() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('2'));
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::InputChar('q')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn effects_other_than_quit_do_not_stop_the_loop() {
        assert!(run_effect(Effect::Quit));
        assert!(!run_effect(Effect::None));
        assert!(!run_effect(Effect::RequestRoutes));
    }
}
