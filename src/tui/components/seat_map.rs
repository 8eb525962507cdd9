//! # SeatGrid Component
//!
//! The 5 x 4 seat picker. The grid cursor is presentation state (owned by
//! `TuiState`); pressing Enter on the hovered seat issues the core
//! `SelectSeat` action. Blocked seats can be hovered but selecting them is
//! a no-op in the core, so the grid needs no special casing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::booking::{SEAT_COLUMNS, SEAT_COUNT, SeatId, SeatMap, SeatStatus};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Move a zero-based seat cursor one cell in the grid, clamping at edges.
pub fn move_cursor(cursor: u8, event: &TuiEvent) -> u8 {
    let cols = SEAT_COLUMNS;
    match event {
        TuiEvent::CursorLeft => {
            if cursor % cols == 0 { cursor } else { cursor - 1 }
        }
        TuiEvent::CursorRight => {
            if cursor % cols == cols - 1 { cursor } else { cursor + 1 }
        }
        TuiEvent::CursorUp => cursor.saturating_sub(cols),
        TuiEvent::CursorDown => {
            if cursor + cols < SEAT_COUNT { cursor + cols } else { cursor }
        }
        _ => cursor,
    }
}

/// The seat under a zero-based cursor. Always valid by construction.
pub fn cursor_seat(cursor: u8) -> Option<SeatId> {
    SeatId::new(cursor + 1)
}

pub struct SeatGrid<'a> {
    pub seats: &'a SeatMap,
    /// Zero-based grid cursor (presentation state).
    pub cursor: u8,
    pub focused: bool,
}

impl<'a> SeatGrid<'a> {
    pub fn new(seats: &'a SeatMap, cursor: u8, focused: bool) -> Self {
        Self { seats, cursor, focused }
    }

    fn cell(&self, seat: SeatId) -> Span<'static> {
        let hovered = self.focused && self.cursor + 1 == seat.get();
        let style = match self.seats.status_of(seat) {
            SeatStatus::Blocked => Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            SeatStatus::Selected => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            SeatStatus::Open => Style::default().fg(Color::Gray),
        };
        let style = if hovered {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        Span::styled(format!(" {:>2} ", seat.get()), style)
    }
}

impl Component for SeatGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut lines = Vec::new();
        let mut row = Vec::new();
        for seat in SeatMap::seats() {
            row.push(self.cell(seat));
            row.push(Span::raw(" "));
            if seat.get() % SEAT_COLUMNS == 0 {
                lines.push(Line::from(std::mem::take(&mut row)));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("open ", Style::default().fg(Color::Gray)),
            Span::styled(" selected ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::styled(" booked", Style::default().fg(Color::DarkGray)),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Select Your Seat ")
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

    #[test]
    fn cursor_moves_within_the_grid() {
        // Start at seat 1 (index 0)
        assert_eq!(move_cursor(0, &TuiEvent::CursorLeft), 0);
        assert_eq!(move_cursor(0, &TuiEvent::CursorRight), 1);
        assert_eq!(move_cursor(0, &TuiEvent::CursorUp), 0);
        assert_eq!(move_cursor(0, &TuiEvent::CursorDown), 4);

        // Right edge of a row does not wrap
        assert_eq!(move_cursor(3, &TuiEvent::CursorRight), 3);
        // Bottom row does not fall off the grid
        assert_eq!(move_cursor(16, &TuiEvent::CursorDown), 16);
        assert_eq!(move_cursor(19, &TuiEvent::CursorDown), 19);
    }

    #[test]
    fn cursor_seat_is_always_valid() {
        for cursor in 0..20u8 {
            let seat = cursor_seat(cursor).unwrap();
            assert_eq!(seat.get(), cursor + 1);
        }
    }

    #[test]
    fn renders_all_twenty_seats_and_legend() {
        let map = SeatMap::new();
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut grid = SeatGrid::new(&map, 0, true);
        terminal.draw(|f| grid.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        for id in [1, 5, 10, 15, 20] {
            assert!(text.contains(&id.to_string()), "seat {id} missing");
        }
        assert!(text.contains("selected"));
    }
}
