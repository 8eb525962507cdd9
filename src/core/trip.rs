//! # Trip Status
//!
//! The driver dashboard's trip lifecycle: a three-state machine advanced by
//! a single user action, plus the static sample data displayed around it.
//!
//! The transition table is strictly linear and cannot fail:
//!
//! ```text
//! Inactive --advance--> Active --advance--> Completed --advance--> Inactive
//! ```
//!
//! The Completed -> Inactive step re-arms the dashboard for a new trip.
//! Whether Completed should instead be terminal per trip is an open
//! question (see DESIGN.md); the full cycle is kept.
//!
//! The location-sharing toggle is an independent boolean with no interaction
//! with trip status.

/// Display status of the driver's current trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripStatus {
    #[default]
    Inactive,
    Active,
    Completed,
}

impl TripStatus {
    /// Move exactly one step along the fixed cycle. Always succeeds.
    pub fn advance(self) -> TripStatus {
        match self {
            TripStatus::Inactive => TripStatus::Active,
            TripStatus::Active => TripStatus::Completed,
            TripStatus::Completed => TripStatus::Inactive,
        }
    }

    /// Badge text shown in the dashboard header.
    pub fn badge(self) -> &'static str {
        match self {
            TripStatus::Inactive => "Available",
            TripStatus::Active => "On Trip",
            TripStatus::Completed => "Trip Completed",
        }
    }

    /// Label for the trip action button (always offers the next legal step).
    pub fn action_label(self) -> &'static str {
        match self {
            TripStatus::Inactive => "Start Trip",
            TripStatus::Active => "End Trip",
            TripStatus::Completed => "Completed",
        }
    }
}

/// Static sample data for the current trip. Never mutated by transitions.
pub struct Trip {
    pub id: &'static str,
    pub route: &'static str,
    pub destination: &'static str,
    pub start_time: &'static str,
    pub estimated_end: &'static str,
    pub total_stops: u8,
    pub current_stop: u8,
    pub passengers: u8,
    pub capacity: u8,
}

impl Trip {
    pub fn sample() -> Self {
        Self {
            id: "TRIP001",
            route: "Route 15A",
            destination: "Downtown Terminal",
            start_time: "09:00 AM",
            estimated_end: "11:30 AM",
            total_stops: 12,
            current_stop: 4,
            passengers: 24,
            capacity: 40,
        }
    }

    /// Progress through the route as a rounded percentage.
    pub fn progress_percent(&self) -> u8 {
        if self.total_stops == 0 {
            return 0;
        }
        let pct = f64::from(self.current_stop) / f64::from(self.total_stops) * 100.0;
        pct.round() as u8
    }
}

/// Check-in state of a passenger on the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerStatus {
    CheckedIn,
    Waiting,
}

impl PassengerStatus {
    pub fn badge(self) -> &'static str {
        match self {
            PassengerStatus::CheckedIn => "Checked In",
            PassengerStatus::Waiting => "Waiting",
        }
    }
}

/// One row of the passenger manifest.
pub struct Passenger {
    pub name: &'static str,
    pub pickup: &'static str,
    pub destination: &'static str,
    pub status: PassengerStatus,
}

pub fn sample_passengers() -> Vec<Passenger> {
    vec![
        Passenger {
            name: "John Doe",
            pickup: "Main St & 5th",
            destination: "Downtown",
            status: PassengerStatus::CheckedIn,
        },
        Passenger {
            name: "Sarah Wilson",
            pickup: "Park Ave",
            destination: "Airport",
            status: PassengerStatus::Waiting,
        },
        Passenger {
            name: "Mike Johnson",
            pickup: "Broadway",
            destination: "University",
            status: PassengerStatus::CheckedIn,
        },
    ]
}

/// Banded indicator for the device battery readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryBand {
    Good,
    Low,
    Critical,
}

/// Sidebar readout for the driver's device. All sample values.
pub struct DeviceStatus {
    pub battery: u8,
    pub gps: &'static str,
    pub network: &'static str,
    pub last_update: &'static str,
}

impl DeviceStatus {
    pub fn sample() -> Self {
        Self {
            battery: 87,
            gps: "Strong",
            network: "4G",
            last_update: "30 seconds ago",
        }
    }

    /// Good above 50%, Low above 20%, Critical at or below.
    pub fn battery_band(&self) -> BatteryBand {
        if self.battery > 50 {
            BatteryBand::Good
        } else if self.battery > 20 {
            BatteryBand::Low
        } else {
            BatteryBand::Critical
        }
    }
}

/// Today's shift summary shown in the driver sidebar.
pub struct ShiftSummary {
    pub trips_completed: u8,
    pub total_passengers: u16,
    pub hours_driven: f32,
    pub on_time_rate: u8,
}

impl ShiftSummary {
    pub fn sample() -> Self {
        Self {
            trips_completed: 3,
            total_passengers: 127,
            hours_driven: 6.5,
            on_time_rate: 94,
        }
    }
}

/// Everything the driver dashboard owns.
pub struct DriverState {
    pub driver_name: String,
    pub status: TripStatus,
    pub location_sharing: bool,
    pub trip: Trip,
    pub passengers: Vec<Passenger>,
    pub device: DeviceStatus,
    pub summary: ShiftSummary,
}

impl Default for DriverState {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_DRIVER_NAME.to_string())
    }
}

impl DriverState {
    pub fn new(driver_name: String) -> Self {
        Self {
            driver_name,
            status: TripStatus::default(),
            location_sharing: true,
            trip: Trip::sample(),
            passengers: sample_passengers(),
            device: DeviceStatus::sample(),
            summary: ShiftSummary::sample(),
        }
    }

    /// Advance the trip one step and return the new status.
    pub fn advance_trip(&mut self) -> TripStatus {
        self.status = self.status.advance();
        self.status
    }

    pub fn toggle_sharing(&mut self) {
        self.location_sharing = !self.location_sharing;
    }

    /// The passenger manifest and live progress show once a trip has begun.
    pub fn trip_details_visible(&self) -> bool {
        self.status != TripStatus::Inactive
    }
}
