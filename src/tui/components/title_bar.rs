//! # TitleBar Component
//!
//! Top bar showing the application title, transient status text, and the
//! active theme. Stateless: all fields are props borrowed from app state,
//! so it is trivial to test by checking buffer content.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::theme::{Palette, Theme};
use crate::tui::component::Component;

const APP_TITLE: &str = "Where in the world?";

pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub theme: Theme,
    pub palette: &'a Palette,
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Fill the whole row with the surface color first.
        frame.render_widget(
            ratatui::widgets::Block::new().style(Style::default().bg(self.palette.surface)),
            area,
        );

        let theme_label = format!(" {} (Ctrl+T) ", self.theme.label());

        let [left_area, right_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(theme_label.len() as u16),
        ])
        .areas(area);

        let mut spans = vec![Span::styled(
            APP_TITLE,
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(self.palette.muted),
            ));
        }

        frame.render_widget(
            Line::from(spans).style(Style::default().bg(self.palette.surface)),
            left_area,
        );
        frame.render_widget(
            Span::styled(
                theme_label,
                Style::default()
                    .fg(self.palette.accent)
                    .bg(self.palette.surface),
            ),
            right_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_title_and_status() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Theme::Dark.palette();

        let mut title_bar = TitleBar {
            status_message: "250 countries",
            theme: Theme::Dark,
            palette: &palette,
        };
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Where in the world?"));
        assert!(text.contains("250 countries"));
        assert!(text.contains("Dark (Ctrl+T)"));
    }

    #[test]
    fn test_title_bar_without_status_has_no_separator() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Theme::Light.palette();

        let mut title_bar = TitleBar {
            status_message: "",
            theme: Theme::Light,
            palette: &palette,
        };
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Where in the world?"));
        assert!(!text.contains('|'));
        assert!(text.contains("Light (Ctrl+T)"));
    }
}
