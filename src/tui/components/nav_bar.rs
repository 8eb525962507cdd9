//! # NavBar Component
//!
//! Top bar showing the operator brand, the three screen tabs with their
//! numbered hotkeys, and a clock.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Screen;
use crate::tui::component::Component;

/// Stateless: all fields are props from core state.
pub struct NavBar {
    pub operator_name: String,
    pub screen: Screen,
    /// Injectable for tests; `None` renders the current local time.
    pub clock: Option<String>,
}

impl NavBar {
    pub fn new(operator_name: String, screen: Screen) -> Self {
        Self {
            operator_name,
            screen,
            clock: None,
        }
    }

    fn tab_span(&self, key: char, screen: Screen) -> Vec<Span<'static>> {
        let style = if screen == self.screen {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        vec![
            Span::styled(format!("[{key}] "), Style::default().fg(Color::DarkGray)),
            Span::styled(screen.title(), style),
            Span::raw("   "),
        ]
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let clock = self
            .clock
            .clone()
            .unwrap_or_else(|| Local::now().format("%H:%M").to_string());

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.operator_name),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        spans.extend(self.tab_span('1', Screen::Home));
        spans.extend(self.tab_span('2', Screen::Driver));
        spans.extend(self.tab_span('3', Screen::Admin));
        spans.push(Span::styled(clock, Style::default().fg(Color::DarkGray)));

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(nav: &mut NavBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| nav.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_brand_tabs_and_clock() {
        let mut nav = NavBar::new("LBTBS".to_string(), Screen::Home);
        nav.clock = Some("12:34".to_string());
        let text = rendered_text(&mut nav);

        assert!(text.contains("LBTBS"));
        assert!(text.contains("Home"));
        assert!(text.contains("Driver"));
        assert!(text.contains("Admin"));
        assert!(text.contains("12:34"));
    }

    #[test]
    fn renders_each_screen_tab() {
        for screen in [Screen::Home, Screen::Driver, Screen::Admin] {
            let mut nav = NavBar::new("LBTBS".to_string(), screen);
            nav.clock = Some("00:00".to_string());
            let text = rendered_text(&mut nav);
            assert!(text.contains(screen.title()));
        }
    }
}
