//! # Admin Dashboard Components
//!
//! The operations view: headline stat cards, the tab strip, the overview
//! tab (alerts and quick actions), and the fleet table with its search
//! box. The remaining tabs are placeholder panels in this sample.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};

use crate::core::fleet::AlertSeverity;
use crate::core::state::{AdminState, AdminTab};
use crate::tui::component::Component;

/// Line color for an alert severity.
pub fn severity_color(severity: AlertSeverity) -> Color {
    match severity {
        AlertSeverity::Info => Color::Blue,
        AlertSeverity::Warning => Color::Yellow,
        AlertSeverity::Error => Color::Red,
    }
}

/// The row of headline stat cards across the top of the dashboard.
pub struct StatCards<'a> {
    pub admin: &'a AdminState,
}

impl Component for StatCards<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let constraints =
            vec![Constraint::Ratio(1, self.admin.stats.len() as u32); self.admin.stats.len()];
        let cells = Layout::horizontal(constraints).split(area);

        for (stat, cell) in self.admin.stats.iter().zip(cells.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    stat.value,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.title, Style::default().fg(Color::DarkGray))),
            ])
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
            frame.render_widget(card, *cell);
        }
    }
}

/// The tab strip below the stat cards.
pub struct AdminTabBar {
    pub tab: AdminTab,
}

impl Component for AdminTabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = AdminTab::ALL.iter().map(|t| t.title());
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }
}

/// The overview tab: recent alerts plus quick-action hints.
pub struct OverviewTab<'a> {
    pub admin: &'a AdminState,
}

impl Component for OverviewTab<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = self
            .admin
            .alerts
            .iter()
            .map(|alert| {
                Line::from(vec![
                    Span::styled(" ▪ ", Style::default().fg(severity_color(alert.severity))),
                    Span::styled(alert.message, Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("  ({})", alert.age),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Quick Actions: Add New Bus | Create Route | Manage Drivers | View Reports",
            Style::default().fg(Color::Cyan),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Recent Alerts ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}

/// The fleet tab: search box and the fleet table.
pub struct FleetTab<'a> {
    pub admin: &'a AdminState,
    pub search_active: bool,
}

impl Component for FleetTab<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let search = if self.search_active {
            Line::from(vec![
                Span::styled(" Search: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}_", self.admin.search),
                    Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(" Search: ", Style::default().fg(Color::DarkGray)),
                Span::styled(self.admin.search.clone(), Style::default().fg(Color::Gray)),
                Span::styled("   [/] to search", Style::default().fg(Color::DarkGray)),
            ])
        };

        let header = Line::from(Span::styled(
            format!(
                " {:<8} {:<11} {:<14} {:<12} {:>4}  Status",
                "Bus ID", "Route", "Driver", "Location", "Pax"
            ),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ));

        let mut lines = vec![search, Line::default(), header];
        for bus in &self.admin.fleet {
            let status_color = match bus.status {
                crate::core::fleet::BusStatus::Active => Color::Green,
                crate::core::fleet::BusStatus::Delayed => Color::Red,
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        " {:<8} {:<11} {:<14} {:<12} {:>4}  ",
                        bus.id, bus.route, bus.driver, bus.location, bus.passengers
                    ),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(bus.status.as_str(), Style::default().fg(status_color)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Fleet Management ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}

/// Routes, Users, and Analytics have no behavior in this sample.
pub struct PlaceholderTab {
    pub tab: AdminTab,
}

impl Component for PlaceholderTab {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                format!(" {} management coming soon", self.tab.title()),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::bordered()
                .title(format!(" {} ", self.tab.title()))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}
