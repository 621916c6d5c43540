//! # CountryList Component
//!
//! The scrollable row-per-country listing on the list screen. Each row is
//! the card of the original layout collapsed to one line: flag, common
//! name, formatted population, region, capital.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState`
//! - `CountryList` is created each frame with the filtered rows

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::core::format::{NumberLocale, format_population};
use crate::core::theme::Palette;
use crate::directory::Country;

const POPULATION_WIDTH: usize = 14;
const REGION_WIDTH: usize = 10;
const CAPITAL_WIDTH: usize = 20;
const FLAG_WIDTH: usize = 3;

/// Persistent selection state for the country list.
pub struct CountryListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for CountryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Back to the top; used when the filter inputs change.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
    }

    pub fn move_up(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    pub fn move_down(&mut self, step: usize, len: usize) {
        if len > 0 {
            self.selected = (self.selected + step).min(len - 1);
        }
    }

    /// Keep the selection inside the current row count. The filtered list
    /// shrinks and grows under the cursor as the user types.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Transient render wrapper for the filtered listing.
pub struct CountryList<'a> {
    pub state: &'a mut CountryListState,
    pub countries: &'a [&'a Country],
    pub locale: NumberLocale,
    pub palette: &'a Palette,
}

impl CountryList<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.countries.len());

        let base = Style::default()
            .bg(self.palette.surface)
            .fg(self.palette.text);
        let block = Block::bordered()
            .border_style(Style::default().fg(self.palette.muted))
            .style(base)
            .padding(Padding::horizontal(1));

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let fixed = FLAG_WIDTH + POPULATION_WIDTH + REGION_WIDTH + CAPITAL_WIDTH + 6;
        let name_width = inner_width.saturating_sub(fixed).max(8);

        let items: Vec<ListItem> = self
            .countries
            .iter()
            .enumerate()
            .map(|(i, country)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(self.palette.text)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    base
                };
                let dim = if i == self.state.selected {
                    style
                } else {
                    Style::default()
                        .bg(self.palette.surface)
                        .fg(self.palette.muted)
                };

                let name = pad(truncate_str(&country.name.common, name_width), name_width);
                let population = format!(
                    "{:>width$}",
                    format_population(country.population, self.locale),
                    width = POPULATION_WIDTH
                );
                let region = pad(truncate_str(&country.region, REGION_WIDTH), REGION_WIDTH);
                let capital =
                    pad(truncate_str(&country.capital_label(), CAPITAL_WIDTH), CAPITAL_WIDTH);

                ListItem::new(Line::from(vec![
                    Span::styled(pad(country.flag.clone(), FLAG_WIDTH), style),
                    Span::styled(name, style),
                    Span::styled("  ", style),
                    Span::styled(population, dim),
                    Span::styled("  ", style),
                    Span::styled(region, dim),
                    Span::styled("  ", style),
                    Span::styled(capital, dim),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Pad a cell to `width` display columns.
fn pad(s: String, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s
    } else {
        s + &" ".repeat(width - current)
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 4 > max_width {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use crate::test_support::sample_country;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut state = CountryListState::new();
        state.move_down(1, 3);
        state.move_down(1, 3);
        state.move_down(1, 3);
        assert_eq!(state.selected, 2); // clamped at len - 1

        state.move_up(1);
        assert_eq!(state.selected, 1);
        state.move_up(5);
        assert_eq!(state.selected, 0);

        state.move_down(10, 3); // page jump clamps too
        assert_eq!(state.selected, 2);
        state.clamp(1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_clamp_on_empty_list_clears_selection() {
        let mut state = CountryListState::new();
        state.move_down(1, 3);
        state.clamp(0);
        assert_eq!(state.selected, 0);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_render_shows_one_row_per_country() {
        let backend = TestBackend::new(100, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Theme::Dark.palette();

        let germany = sample_country("DEU", "Germany", "Europe");
        let france = sample_country("FRA", "France", "Europe");
        let rows = vec![&germany, &france];
        let mut state = CountryListState::new();

        terminal
            .draw(|f| {
                CountryList {
                    state: &mut state,
                    countries: &rows,
                    locale: NumberLocale::De,
                    palette: &palette,
                }
                .render(f, f.area())
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Germany"));
        assert!(text.contains("France"));
        assert!(text.contains("1.000.000"));
        assert!(text.contains("Europe"));
        assert!(text.contains("Germany City"));
    }

    #[test]
    fn test_render_empty_rows_draws_no_names() {
        // An empty filtered result is an empty grid, not a message.
        let backend = TestBackend::new(100, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Theme::Dark.palette();
        let rows: Vec<&Country> = Vec::new();
        let mut state = CountryListState::new();

        terminal
            .draw(|f| {
                CountryList {
                    state: &mut state,
                    countries: &rows,
                    locale: NumberLocale::De,
                    palette: &palette,
                }
                .render(f, f.area())
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!text.contains("No"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Germany", 10), "Germany");
        assert_eq!(truncate_str("United States Minor Outlying Islands", 10), "United ...");
        assert_eq!(truncate_str("Germany", 2), "..");
    }
}
