//! # SearchBar Component
//!
//! The list screen's filter row: a free-text search input and the region
//! selector, cycled with ←/→.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchBarState` lives in `TuiState`
//! - `SearchBar` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::filter::Region;
use crate::core::theme::Palette;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search for a country";

/// Persistent filter inputs for the list screen.
pub struct SearchBarState {
    pub query: String,
    pub region: Region,
}

impl SearchBarState {
    pub fn new(region: Region) -> Self {
        Self {
            query: String::new(),
            region,
        }
    }
}

/// Emitted when either filter input changed, so the list selection can
/// reset to the top.
pub enum SearchEvent {
    Changed,
}

impl EventHandler for SearchBarState {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                Some(SearchEvent::Changed)
            }
            TuiEvent::Backspace => self.query.pop().map(|_| SearchEvent::Changed),
            TuiEvent::CursorLeft => {
                self.region = self.region.prev();
                Some(SearchEvent::Changed)
            }
            TuiEvent::CursorRight => {
                self.region = self.region.next();
                Some(SearchEvent::Changed)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the filter row.
pub struct SearchBar<'a> {
    pub state: &'a SearchBarState,
    pub palette: &'a Palette,
}

impl SearchBar<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, region_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(22)]).areas(area);

        let base = Style::default()
            .bg(self.palette.surface)
            .fg(self.palette.text);
        let muted = Style::default()
            .bg(self.palette.surface)
            .fg(self.palette.muted);

        let input_line = if self.state.query.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, muted))
        } else {
            Line::from(vec![
                Span::styled(self.state.query.clone(), base),
                Span::styled("█", muted),
            ])
        };
        let input = Paragraph::new(input_line)
            .style(base)
            .block(Block::bordered().border_style(muted).title(" Search "));
        frame.render_widget(input, input_area);

        let region_line = Line::from(vec![
            Span::styled("◂ ", muted),
            Span::styled(
                self.state.region.label(),
                Style::default()
                    .bg(self.palette.surface)
                    .fg(self.palette.accent),
            ),
            Span::styled(" ▸", muted),
        ]);
        let region = Paragraph::new(region_line)
            .style(base)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(muted).title(" Region "));
        frame.render_widget(region, region_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_and_backspace_edit_query() {
        let mut state = SearchBarState::new(Region::All);
        assert!(matches!(
            state.handle_event(&TuiEvent::InputChar('g')),
            Some(SearchEvent::Changed)
        ));
        state.handle_event(&TuiEvent::InputChar('e'));
        assert_eq!(state.query, "ge");

        state.handle_event(&TuiEvent::Backspace);
        assert_eq!(state.query, "g");
    }

    #[test]
    fn test_backspace_on_empty_query_is_not_a_change() {
        let mut state = SearchBarState::new(Region::All);
        assert!(state.handle_event(&TuiEvent::Backspace).is_none());
    }

    #[test]
    fn test_arrows_cycle_region() {
        let mut state = SearchBarState::new(Region::All);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.region, Region::Africa);
        state.handle_event(&TuiEvent::CursorLeft);
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.region, Region::Oceania);
    }

    #[test]
    fn test_render_shows_placeholder_then_query() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Theme::Dark.palette();

        let mut state = SearchBarState::new(Region::Europe);
        terminal
            .draw(|f| SearchBar { state: &state, palette: &palette }.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("Europe"));

        state.query = "ger".to_string();
        terminal
            .draw(|f| SearchBar { state: &state, palette: &palette }.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("ger"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
