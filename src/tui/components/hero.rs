//! # Hero Component
//!
//! The marketing masthead at the top of the home screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct Hero {
    /// Animation phase in [0,1] driving the accent pulse.
    pub pulse_value: f32,
}

impl Hero {
    pub fn new(pulse_value: f32) -> Self {
        Self { pulse_value }
    }
}

impl Component for Hero {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = if self.pulse_value > 0.5 {
            Color::LightCyan
        } else {
            Color::Cyan
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "Smart Bus ",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Tracking",
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "Track buses in real-time, book your seat, and travel smart",
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Real-Time Tracking", Style::default().fg(accent)),
                Span::raw("  |  "),
                Span::styled("Smart Routes", Style::default().fg(accent)),
                Span::raw("  |  "),
                Span::styled("Premium Experience", Style::default().fg(accent)),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn renders_masthead() {
        let backend = TestBackend::new(80, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hero = Hero::new(0.0);
        terminal.draw(|f| hero.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Smart Bus"));
        assert!(text.contains("Tracking"));
    }
}
