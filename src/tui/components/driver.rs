//! # Driver Dashboard Components
//!
//! Panels for the driver view: the current-trip panel with its lifecycle
//! action, the passenger manifest, the device readout sidebar, and the
//! shift summary. All of them read `DriverState`; the only mutations go
//! through core actions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph};

use crate::core::trip::{BatteryBand, DriverState, PassengerStatus, TripStatus};
use crate::tui::component::Component;

/// Header badge color for a trip status.
pub fn status_color(status: TripStatus) -> Color {
    match status {
        TripStatus::Inactive => Color::Gray,
        TripStatus::Active => Color::Green,
        TripStatus::Completed => Color::Blue,
    }
}

fn battery_color(band: BatteryBand) -> Color {
    match band {
        BatteryBand::Good => Color::Green,
        BatteryBand::Low => Color::Yellow,
        BatteryBand::Critical => Color::Red,
    }
}

/// Current-trip panel. Shows the idle prompt until a trip starts, then the
/// trip stats and a progress gauge.
pub struct TripPanel<'a> {
    pub driver: &'a DriverState,
}

impl TripPanel<'_> {
    fn header_line(&self) -> Line<'static> {
        let status = self.driver.status;
        let sharing = if self.driver.location_sharing {
            Span::styled("Sharing ON", Style::default().fg(Color::Green))
        } else {
            Span::styled("Sharing OFF", Style::default().fg(Color::DarkGray))
        };
        Line::from(vec![
            Span::styled(
                format!(" {} ", status.badge()),
                Style::default()
                    .fg(Color::Black)
                    .bg(status_color(status))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            sharing,
            Span::raw("   "),
            Span::styled(
                format!("[t] {}", status.action_label()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[s] Toggle Sharing", Style::default().fg(Color::DarkGray)),
        ])
    }

    fn stat_line(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {label:<12}"), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::Gray)),
        ])
    }
}

impl Component for TripPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" Welcome back, {} ", self.driver.driver_name))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !self.driver.trip_details_visible() {
            let idle = Paragraph::new(vec![
                self.header_line(),
                Line::default(),
                Line::from(Span::styled(
                    " Ready to Start",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    " Press [t] to begin your next trip",
                    Style::default().fg(Color::Gray),
                )),
            ]);
            frame.render_widget(idle, inner);
            return;
        }

        let trip = &self.driver.trip;
        let [text_area, gauge_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let lines = vec![
            self.header_line(),
            Line::default(),
            Self::stat_line("Trip", format!("{}  {}", trip.id, trip.route)),
            Self::stat_line("Destination", trip.destination.to_string()),
            Self::stat_line("Schedule", format!("{} - {}", trip.start_time, trip.estimated_end)),
            Self::stat_line(
                "Stops",
                format!("{} of {}", trip.current_stop, trip.total_stops),
            ),
            Self::stat_line(
                "Passengers",
                format!("{} / {}", trip.passengers, trip.capacity),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), text_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .label(format!("route progress {}%", trip.progress_percent()))
            .percent(u16::from(trip.progress_percent()));
        frame.render_widget(gauge, gauge_area);
    }
}

/// Passenger manifest. The caller only renders this once a trip has begun.
pub struct PassengerList<'a> {
    pub driver: &'a DriverState,
}

impl Component for PassengerList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .driver
            .passengers
            .iter()
            .map(|p| {
                let badge_color = match p.status {
                    PassengerStatus::CheckedIn => Color::Green,
                    PassengerStatus::Waiting => Color::Yellow,
                };
                Line::from(vec![
                    Span::styled(format!(" {:<14}", p.name), Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("{} -> {}", p.pickup, p.destination),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("  "),
                    Span::styled(p.status.badge(), Style::default().fg(badge_color)),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Passengers ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}

/// Device readout sidebar: battery, GPS, network, last update.
pub struct DevicePanel<'a> {
    pub driver: &'a DriverState,
}

impl Component for DevicePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let device = &self.driver.device;
        let color = battery_color(device.battery_band());

        let row = |label: &str, value: Span<'static>| {
            Line::from(vec![
                Span::styled(format!(" {label:<9}"), Style::default().fg(Color::DarkGray)),
                value,
            ])
        };

        let lines = vec![
            row(
                "Battery",
                Span::styled(format!("{}%", device.battery), Style::default().fg(color)),
            ),
            row("GPS", Span::styled(device.gps, Style::default().fg(Color::Green))),
            row("Network", Span::styled(device.network, Style::default().fg(Color::Gray))),
            row(
                "Updated",
                Span::styled(device.last_update, Style::default().fg(Color::DarkGray)),
            ),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Device Status ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}

/// Today's shift summary sidebar.
pub struct ShiftPanel<'a> {
    pub driver: &'a DriverState,
}

impl Component for ShiftPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let summary = &self.driver.summary;
        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!(" {label:<12}"), Style::default().fg(Color::DarkGray)),
                Span::styled(value, Style::default().fg(Color::Gray)),
            ])
        };

        let lines = vec![
            row("Trips", summary.trips_completed.to_string()),
            row("Passengers", summary.total_passengers.to_string()),
            row("Hours", format!("{:.1}h", summary.hours_driven)),
            row("On Time", format!("{}%", summary.on_time_rate)),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Today's Summary ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}
