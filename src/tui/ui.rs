//! # UI Layout
//!
//! Top-level screen composition: the nav bar, the per-screen body, and the
//! status bar. Each screen is a fixed panel grid sized with ratatui layout
//! constraints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{AdminTab, App, Screen};
use crate::tui::components::admin::{AdminTabBar, FleetTab, OverviewTab, PlaceholderTab, StatCards};
use crate::tui::components::driver::{DevicePanel, PassengerList, ShiftPanel, TripPanel};
use crate::tui::component::Component;
use crate::tui::components::{
    BookingSummary, BusList, DeparturesList, Hero, NavBar, RouteCard, SeatGrid,
};
use crate::tui::{HomeFocus, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [nav_area, body_area, status_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    NavBar::new(app.operator_name.clone(), app.screen).render(frame, nav_area);

    match app.screen {
        Screen::Home => draw_home(frame, body_area, app, tui),
        Screen::Driver => draw_driver(frame, body_area, app),
        Screen::Admin => draw_admin(frame, body_area, app, tui),
    }

    draw_status_bar(frame, status_area, app);
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [left, right] = Layout::horizontal([Percentage(55), Percentage(45)]).areas(area);

    let [hero_area, buses_area] = Layout::vertical([Length(6), Min(0)]).areas(left);
    Hero::new(tui.pulse_value).render(frame, hero_area);
    BusList::new(&app.map, tui.bus_cursor, tui.home_focus == HomeFocus::Buses)
        .render(frame, buses_area);

    let [route_area, departures_area, seats_area, summary_area] =
        Layout::vertical([Length(6), Length(7), Min(9), Length(8)]).areas(right);

    RouteCard {
        from: &app.booking.from,
        to: &app.booking.to,
        active_field: tui.route_field,
        focused: tui.home_focus == HomeFocus::Route,
    }
    .render(frame, route_area);

    DeparturesList {
        options: &app.booking.options,
        chosen: app.booking.chosen_option,
        cursor: tui.option_cursor,
        focused: tui.home_focus == HomeFocus::Departures,
    }
    .render(frame, departures_area);

    SeatGrid::new(
        &app.booking.seats,
        tui.seat_cursor,
        tui.home_focus == HomeFocus::Seats,
    )
    .render(frame, seats_area);

    BookingSummary { booking: &app.booking }.render(frame, summary_area);
}

fn draw_driver(frame: &mut Frame, area: Rect, app: &App) {
    use Constraint::{Length, Min, Percentage};
    let [left, right] = Layout::horizontal([Percentage(65), Percentage(35)]).areas(area);

    if app.driver.trip_details_visible() {
        let [trip_area, passengers_area] =
            Layout::vertical([Min(10), Length(6)]).areas(left);
        TripPanel { driver: &app.driver }.render(frame, trip_area);
        PassengerList { driver: &app.driver }.render(frame, passengers_area);
    } else {
        TripPanel { driver: &app.driver }.render(frame, left);
    }

    let [device_area, shift_area] = Layout::vertical([Length(7), Min(6)]).areas(right);
    DevicePanel { driver: &app.driver }.render(frame, device_area);
    ShiftPanel { driver: &app.driver }.render(frame, shift_area);
}

fn draw_admin(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [stats_area, tabs_area, body_area] =
        Layout::vertical([Length(4), Length(1), Min(0)]).areas(area);

    StatCards { admin: &app.admin }.render(frame, stats_area);
    AdminTabBar { tab: app.admin.tab }.render(frame, tabs_area);

    match app.admin.tab {
        AdminTab::Overview => OverviewTab { admin: &app.admin }.render(frame, body_area),
        AdminTab::Fleet => FleetTab {
            admin: &app.admin,
            search_active: tui.fleet_search_active,
        }
        .render(frame, body_area),
        tab => PlaceholderTab { tab }.render(frame, body_area),
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.screen {
        Screen::Home => "Tab focus | arrows move | Enter act | c book | 1/2/3 screens | q quit",
        Screen::Driver => "t trip | s sharing | 1/2/3 screens | q quit",
        Screen::Admin => "Tab/arrows tabs | / search | 1/2/3 screens | q quit",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {}", app.status_message),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn home_screen_composes_all_panels() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);

        assert!(text.contains("LBTBS"));
        assert!(text.contains("Smart Bus"));
        assert!(text.contains("Nearby Buses"));
        assert!(text.contains("Select Route"));
        assert!(text.contains("Available Buses"));
        assert!(text.contains("Select Your Seat"));
        assert!(text.contains("Booking Summary"));
        assert!(text.contains("Welcome to Transito!"));
    }

    #[test]
    fn driver_screen_idle_and_active() {
        let mut app = test_app();
        app.screen = Screen::Driver;
        let mut tui = TuiState::new();

        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Ready to Start"));
        assert!(!text.contains("Passengers "));

        app.driver.advance_trip();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("TRIP001"));
        assert!(text.contains("John Doe"));
        assert!(text.contains("Device Status"));
        assert!(text.contains("Today's Summary"));
    }

    #[test]
    fn admin_screen_shows_stats_tabs_and_body() {
        let mut app = test_app();
        app.screen = Screen::Admin;
        let mut tui = TuiState::new();

        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Active Buses"));
        assert!(text.contains("Recent Alerts"));

        app.admin.tab = AdminTab::Fleet;
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Fleet Management"));

        app.admin.tab = AdminTab::Analytics;
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Analytics management coming soon"));
    }
}
