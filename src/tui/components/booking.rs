//! # Booking Components
//!
//! The booking flow's three panels: the route card (From/To fields plus
//! the Find Routes action), the available departures list, and the booking
//! summary with the confirm action.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::booking::{BookingState, BusOption, SeatId};
use crate::tui::component::Component;

/// Which text field of the route card is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteField {
    #[default]
    From,
    To,
}

impl RouteField {
    pub fn other(self) -> RouteField {
        match self {
            RouteField::From => RouteField::To,
            RouteField::To => RouteField::From,
        }
    }
}

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let value_style = if active {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    };
    let shown = if value.is_empty() && !active {
        Span::styled("...".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        let caret = if active { "_" } else { "" };
        Span::styled(format!("{value}{caret}"), value_style)
    };
    Line::from(vec![
        Span::styled(format!(" {label:<5}"), Style::default().fg(Color::DarkGray)),
        shown,
    ])
}

/// Route selection card. The fields are captured but decorative; Find
/// Routes is a stubbed collaborator.
pub struct RouteCard<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub active_field: RouteField,
    pub focused: bool,
}

impl Component for RouteCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines = vec![
            field_line("From", self.from, self.focused && self.active_field == RouteField::From),
            field_line("To", self.to, self.focused && self.active_field == RouteField::To),
            Line::default(),
            Line::from(Span::styled(
                " [Enter] Find Routes",
                Style::default().fg(Color::Cyan),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Select Route ")
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);
    }
}

/// The "Available Buses" list in the booking flow.
pub struct DeparturesList<'a> {
    pub options: &'a [BusOption],
    pub chosen: usize,
    /// Highlight index (presentation state).
    pub cursor: usize,
    pub focused: bool,
}

impl DeparturesList<'_> {
    fn option_lines(&self, index: usize, option: &BusOption) -> Vec<Line<'static>> {
        let highlighted = self.focused && index == self.cursor;
        let marker = if index == self.chosen { "* " } else { "  " };
        let title_style = if highlighted {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        vec![
            Line::from(vec![
                Span::styled(format!("{marker}{}", option.route), title_style),
                Span::raw("  "),
                Span::styled(
                    format!("${:.2}", option.price),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} seats left", option.seats_left),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!(
                        "{}  {} - {} ({})  rated {:.1}",
                        option.operator,
                        option.departure,
                        option.arrival,
                        option.duration,
                        option.rating
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ]
    }
}

impl Component for DeparturesList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .flat_map(|(i, option)| self.option_lines(i, option))
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Available Buses ")
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);
    }
}

/// Booking summary: reads derived fields only, never mutates.
pub struct BookingSummary<'a> {
    pub booking: &'a BookingState,
}

impl BookingSummary<'_> {
    fn seat_text(seat: Option<SeatId>) -> String {
        match seat {
            Some(s) => format!("#{s}"),
            None => "Not selected".to_string(),
        }
    }
}

impl Component for BookingSummary<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chosen = self.booking.chosen();
        let seat = self.booking.seats.selected();

        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!(" {label:<10}"), Style::default().fg(Color::DarkGray)),
                Span::styled(value, Style::default().fg(Color::Gray)),
            ])
        };

        let confirm = if self.booking.can_confirm() {
            Span::styled(
                " [c] Complete Booking",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                " Select a seat to book",
                Style::default().fg(Color::DarkGray),
            )
        };

        let lines = vec![
            row("Route", chosen.route.to_string()),
            row("Seat", Self::seat_text(seat)),
            row("Departure", chosen.departure.to_string()),
            row("Total", format!("${:.2}", chosen.price)),
            Line::default(),
            Line::from(confirm),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Booking Summary ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw<C: Component>(component: &mut C, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| component.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn summary_shows_not_selected_without_a_seat() {
        let booking = BookingState::new();
        let mut summary = BookingSummary { booking: &booking };
        let text = draw(&mut summary, 50, 10);
        assert!(text.contains("Not selected"));
        assert!(text.contains("Select a seat to book"));
        assert!(text.contains("$12.50"));
    }

    #[test]
    fn summary_reflects_selection_immediately() {
        let mut booking = BookingState::new();
        booking.seats.select(SeatId::new(5).unwrap());
        let mut summary = BookingSummary { booking: &booking };
        let text = draw(&mut summary, 50, 10);
        assert!(text.contains("#5"));
        assert!(text.contains("Complete Booking"));
    }

    #[test]
    fn departures_show_both_options() {
        let booking = BookingState::new();
        let mut list = DeparturesList {
            options: &booking.options,
            chosen: booking.chosen_option,
            cursor: 0,
            focused: true,
        };
        let text = draw(&mut list, 70, 8);
        assert!(text.contains("Express Route 15A"));
        assert!(text.contains("Standard Route 23B"));
        assert!(text.contains("$8.75"));
    }

    #[test]
    fn route_card_shows_typed_text() {
        let mut card = RouteCard {
            from: "Main St",
            to: "",
            active_field: RouteField::From,
            focused: true,
        };
        let text = draw(&mut card, 40, 7);
        assert!(text.contains("Main St"));
        assert!(text.contains("Find Routes"));
    }

    #[test]
    fn route_field_other_flips() {
        assert_eq!(RouteField::From.other(), RouteField::To);
        assert_eq!(RouteField::To.other(), RouteField::From);
    }
}
