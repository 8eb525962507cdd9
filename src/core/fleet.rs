//! # Fleet Display Classification
//!
//! Pure derivation functions mapping live-fleet fields (status, occupancy)
//! to display categories. Nothing here holds state: the live map and the
//! admin views call these on every render.
//!
//! The inputs are constrained at construction (`Occupancy` is a checked
//! percentage), so every function in this module is total; there is no
//! error path.

use std::fmt;

/// Occupancy at or above this percentage is classified as "Almost Full".
pub const ALMOST_FULL_PCT: u8 = 85;
/// Occupancy at or above this percentage (and below `ALMOST_FULL_PCT`)
/// is classified as "Busy".
pub const BUSY_PCT: u8 = 60;

/// Percentage of vehicle capacity currently filled.
///
/// Construction is checked: a value above 100 is a programming error
/// (occupancy feeds would clamp at the ingestion boundary in a real
/// system), so `new` asserts rather than returning a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Occupancy(u8);

impl Occupancy {
    pub fn new(percent: u8) -> Self {
        assert!(percent <= 100, "occupancy is a percentage, got {percent}");
        Self(percent)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Classify occupancy into one of three contiguous bands:
    /// Available [0,59], Busy [60,84], Almost Full [85,100].
    pub fn label(self) -> OccupancyLabel {
        if self.0 >= ALMOST_FULL_PCT {
            OccupancyLabel::AlmostFull
        } else if self.0 >= BUSY_PCT {
            OccupancyLabel::Busy
        } else {
            OccupancyLabel::Available
        }
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Display band for a bus's occupancy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyLabel {
    Available,
    Busy,
    AlmostFull,
}

impl OccupancyLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            OccupancyLabel::Available => "Available",
            OccupancyLabel::Busy => "Busy",
            OccupancyLabel::AlmostFull => "Almost Full",
        }
    }
}

/// Operational status reported for a bus on the live map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusStatus {
    Active,
    Delayed,
}

impl BusStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BusStatus::Active => "On Time",
            BusStatus::Delayed => "Delayed",
        }
    }
}

/// Color-coded indicator derived from status and occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    /// Bus is running late. Always wins over occupancy level.
    Delayed,
    /// On time but at or above the almost-full threshold.
    HighOccupancy,
    /// On time with room to spare.
    OnTime,
}

/// Derive the display indicator for a bus.
///
/// A delayed status always wins; otherwise high occupancy escalates the
/// indicator to a warning.
pub fn status_indicator(status: BusStatus, occupancy: Occupancy) -> StatusIndicator {
    if status == BusStatus::Delayed {
        StatusIndicator::Delayed
    } else if occupancy.percent() >= ALMOST_FULL_PCT {
        StatusIndicator::HighOccupancy
    } else {
        StatusIndicator::OnTime
    }
}

/// A bus shown on the live map. Positions and ETAs are inline sample data;
/// a real deployment would consume these from a live position feed.
pub struct Bus {
    pub id: &'static str,
    pub route: &'static str,
    pub destination: &'static str,
    pub current_location: &'static str,
    pub eta: &'static str,
    pub occupancy: Occupancy,
    pub status: BusStatus,
}

impl Bus {
    pub fn indicator(&self) -> StatusIndicator {
        status_indicator(self.status, self.occupancy)
    }
}

/// The three sample buses shown in the nearby-buses list.
pub fn sample_buses() -> Vec<Bus> {
    vec![
        Bus {
            id: "BUS001",
            route: "Route 15A",
            destination: "Downtown Terminal",
            current_location: "Main St & 5th Ave",
            eta: "3 mins",
            occupancy: Occupancy::new(75),
            status: BusStatus::Active,
        },
        Bus {
            id: "BUS002",
            route: "Route 23B",
            destination: "Airport Express",
            current_location: "Broadway & 42nd St",
            eta: "7 mins",
            occupancy: Occupancy::new(45),
            status: BusStatus::Active,
        },
        Bus {
            id: "BUS003",
            route: "Route 8",
            destination: "University Campus",
            current_location: "Park Ave & 59th St",
            eta: "12 mins",
            occupancy: Occupancy::new(90),
            status: BusStatus::Delayed,
        },
    ]
}

/// Severity of an operations alert on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Warning,
    Error,
}

/// An operations alert line on the admin overview tab.
pub struct Alert {
    pub message: &'static str,
    pub age: &'static str,
    pub severity: AlertSeverity,
}

pub fn sample_alerts() -> Vec<Alert> {
    vec![
        Alert {
            message: "Bus #127 delayed by 15 minutes",
            age: "5 min ago",
            severity: AlertSeverity::Warning,
        },
        Alert {
            message: "Bus #089 reported mechanical issue",
            age: "12 min ago",
            severity: AlertSeverity::Error,
        },
        Alert {
            message: "Route 15A experiencing high demand",
            age: "1 hour ago",
            severity: AlertSeverity::Info,
        },
    ]
}

/// A fleet table row on the admin dashboard.
pub struct FleetBus {
    pub id: &'static str,
    pub route: &'static str,
    pub driver: &'static str,
    pub location: &'static str,
    pub passengers: u8,
    pub status: BusStatus,
}

pub fn sample_fleet() -> Vec<FleetBus> {
    vec![
        FleetBus {
            id: "BUS001",
            route: "Route 15A",
            driver: "John Smith",
            location: "Downtown",
            passengers: 24,
            status: BusStatus::Active,
        },
        FleetBus {
            id: "BUS002",
            route: "Route 23B",
            driver: "Sarah Johnson",
            location: "Airport",
            passengers: 18,
            status: BusStatus::Delayed,
        },
        FleetBus {
            id: "BUS003",
            route: "Route 8",
            driver: "Mike Wilson",
            location: "University",
            passengers: 31,
            status: BusStatus::Active,
        },
    ]
}

/// A headline stat card on the admin dashboard.
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
}

pub fn sample_stats() -> Vec<StatCard> {
    vec![
        StatCard { title: "Active Buses", value: "47" },
        StatCard { title: "Total Routes", value: "23" },
        StatCard { title: "Daily Passengers", value: "1,247" },
        StatCard { title: "Revenue Today", value: "$3,456" },
    ]
}
