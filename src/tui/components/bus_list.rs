//! # BusList Component
//!
//! The "Nearby Buses" panel on the home screen: one card per bus with a
//! classified status indicator, an occupancy bar, and an expandable detail
//! row. Selecting the highlighted bus toggles its detail row, the same
//! toggle rule the seat map uses.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::fleet::{Bus, StatusIndicator};
use crate::core::state::MapState;
use crate::tui::component::Component;

/// Terminal color for a derived status indicator.
pub fn indicator_color(indicator: StatusIndicator) -> Color {
    match indicator {
        StatusIndicator::Delayed => Color::Red,
        StatusIndicator::HighOccupancy => Color::Yellow,
        StatusIndicator::OnTime => Color::Green,
    }
}

/// Fixed-width occupancy bar, filled proportionally.
fn occupancy_bar(bus: &Bus, width: usize) -> String {
    let filled = width * usize::from(bus.occupancy.percent()) / 100;
    let mut bar = String::with_capacity(width);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

pub struct BusList<'a> {
    pub map: &'a MapState,
    /// Highlight index (presentation state from `TuiState`).
    pub cursor: usize,
    pub focused: bool,
}

impl<'a> BusList<'a> {
    pub fn new(map: &'a MapState, cursor: usize, focused: bool) -> Self {
        Self { map, cursor, focused }
    }

    fn bus_lines(&self, index: usize, bus: &Bus) -> Vec<Line<'static>> {
        let color = indicator_color(bus.indicator());
        let highlighted = self.focused && index == self.cursor;
        let marker = if highlighted { "> " } else { "  " };
        let title_style = if highlighted {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{marker}{}", bus.route), title_style),
                Span::raw("  "),
                Span::styled(
                    format!("ETA {}", bus.eta),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(bus.status.as_str(), Style::default().fg(color)),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(bus.destination, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(occupancy_bar(bus, 12), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    bus.occupancy.label().as_str(),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ];

        // Expanded detail row for the selected bus
        if self.map.selected == Some(index) {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled("at ", Style::default().fg(Color::DarkGray)),
                Span::styled(bus.current_location, Style::default().fg(Color::Gray)),
                Span::styled(
                    "   [Track Bus]  [Book Seat]",
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        lines.push(Line::default());
        lines
    }
}

impl Component for BusList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines: Vec<Line> = self
            .map
            .buses
            .iter()
            .enumerate()
            .flat_map(|(i, bus)| self.bus_lines(i, bus))
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Nearby Buses ")
                .title_bottom(Line::from(" Live updates ").right_aligned())
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(map: &MapState, cursor: usize) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut list = BusList::new(map, cursor, true);
        terminal.draw(|f| list.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn indicator_colors() {
        assert_eq!(indicator_color(StatusIndicator::Delayed), Color::Red);
        assert_eq!(indicator_color(StatusIndicator::HighOccupancy), Color::Yellow);
        assert_eq!(indicator_color(StatusIndicator::OnTime), Color::Green);
    }

    #[test]
    fn occupancy_bar_fills_proportionally() {
        let buses = crate::core::fleet::sample_buses();
        // 45% of 12 cells = 5 filled
        assert_eq!(occupancy_bar(&buses[1], 12), "█████░░░░░░░");
    }

    #[test]
    fn shows_all_sample_buses() {
        let map = MapState::default();
        let text = render_to_text(&map, 0);
        assert!(text.contains("Route 15A"));
        assert!(text.contains("Route 23B"));
        assert!(text.contains("Route 8"));
        assert!(text.contains("Delayed"));
    }

    #[test]
    fn detail_row_only_when_selected() {
        let mut map = MapState::default();
        let text = render_to_text(&map, 0);
        assert!(!text.contains("Track Bus"));

        map.toggle_select(0);
        let text = render_to_text(&map, 0);
        assert!(text.contains("Track Bus"));
        assert!(text.contains("Main St & 5th Ave"));
    }
}
