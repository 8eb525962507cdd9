//! # Application State
//!
//! Core view-model state for Transito. This module contains domain logic
//! only - no TUI-specific types. Presentation state (cursors, focus) lives
//! in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen            // which dashboard is showing
//! ├── booking: BookingState     // seat map, departures, route fields
//! ├── map: MapState             // nearby buses, detail toggle, search
//! ├── driver: DriverState       // trip machine, sharing, manifest
//! ├── admin: AdminState         // tabs, alerts, fleet table, stats
//! ├── operator_name: String     // masthead branding
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Each view owns its state exclusively; nothing flows between them.

use crate::core::booking::BookingState;
use crate::core::config::ResolvedConfig;
use crate::core::fleet::{
    Alert, Bus, FleetBus, StatCard, sample_alerts, sample_buses, sample_fleet, sample_stats,
};
use crate::core::trip::DriverState;

/// The three top-level views. The home screen composes the marketing hero,
/// the live map, and the booking flow into one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Driver,
    Admin,
}

impl Screen {
    pub fn parse(s: &str) -> Option<Screen> {
        match s {
            "home" => Some(Screen::Home),
            "driver" => Some(Screen::Driver),
            "admin" => Some(Screen::Admin),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Driver => "Driver",
            Screen::Admin => "Admin",
        }
    }
}

/// Live map state: the nearby-buses list with its expandable detail row.
pub struct MapState {
    pub buses: Vec<Bus>,
    /// Index of the bus with its detail row expanded (toggle, like seats).
    pub selected: Option<usize>,
    /// Captured but decorative: nothing filters on it in this sample.
    pub search: String,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            buses: sample_buses(),
            selected: None,
            search: String::new(),
        }
    }
}

impl MapState {
    /// Toggle the detail row for a bus; same-again collapses it.
    pub fn toggle_select(&mut self, index: usize) {
        if index >= self.buses.len() {
            return;
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

/// Tabs on the admin dashboard. Routes, Users, and Analytics are
/// placeholder panels in this sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Fleet,
    Routes,
    Users,
    Analytics,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Overview,
        AdminTab::Fleet,
        AdminTab::Routes,
        AdminTab::Users,
        AdminTab::Analytics,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Fleet => "Fleet",
            AdminTab::Routes => "Routes",
            AdminTab::Users => "Users",
            AdminTab::Analytics => "Analytics",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> AdminTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> AdminTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Admin dashboard state.
pub struct AdminState {
    pub tab: AdminTab,
    pub stats: Vec<StatCard>,
    pub alerts: Vec<Alert>,
    pub fleet: Vec<FleetBus>,
    /// Fleet search box. Captured but decorative in this sample.
    pub search: String,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            tab: AdminTab::default(),
            stats: sample_stats(),
            alerts: sample_alerts(),
            fleet: sample_fleet(),
            search: String::new(),
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub booking: BookingState,
    pub map: MapState,
    pub driver: DriverState,
    pub admin: AdminState,
    pub operator_name: String,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::default(),
            booking: BookingState::new(),
            map: MapState::default(),
            driver: DriverState::default(),
            admin: AdminState::default(),
            operator_name: crate::core::config::DEFAULT_OPERATOR_NAME.to_string(),
            status_message: String::from("Welcome to Transito!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new();
        app.screen = config.start_view;
        app.operator_name = config.operator_name.clone();
        app.driver.driver_name = config.driver_name.clone();
        app.booking.seats =
            crate::core::booking::SeatMap::with_blocked(config.blocked_seats.iter().copied());
        app
    }
}
