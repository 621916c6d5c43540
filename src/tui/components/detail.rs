//! # Detail Component
//!
//! One country's full attributes plus its border-country links. The layout
//! mirrors the original detail page: a headline with the flag, two columns
//! of labeled fields, and a border section at the bottom.
//!
//! Border chips are selectable with ←/→ and opened with Enter. A chip
//! whose code is missing from the catalog renders the raw code muted - a
//! placeholder, never an error. An empty borders list renders the literal
//! "No border countries".

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::catalog::Catalog;
use crate::core::format::{NumberLocale, format_population};
use crate::core::theme::Palette;
use crate::directory::Country;

pub const NO_BORDERS_MESSAGE: &str = "No border countries";

/// Persistent selection state for the border chips.
#[derive(Default)]
pub struct DetailState {
    pub selected_border: usize,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.selected_border = 0;
    }

    pub fn move_left(&mut self) {
        self.selected_border = self.selected_border.saturating_sub(1);
    }

    pub fn move_right(&mut self, count: usize) {
        if count > 0 {
            self.selected_border = (self.selected_border + 1).min(count - 1);
        }
    }
}

/// Transient render wrapper for the detail screen.
pub struct DetailView<'a> {
    pub country: &'a Country,
    pub catalog: &'a Catalog,
    pub locale: NumberLocale,
    pub palette: &'a Palette,
    pub selected_border: usize,
}

impl DetailView<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = Style::default()
            .bg(self.palette.surface)
            .fg(self.palette.text);
        let muted = Style::default()
            .bg(self.palette.surface)
            .fg(self.palette.muted);

        let block = Block::bordered()
            .border_style(Style::default().fg(self.palette.muted))
            .style(base)
            .padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [headline_area, flag_alt_area, columns_area, borders_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(inner);

        // Headline: flag + common name
        let headline = Line::from(vec![
            Span::styled(format!("{}  ", self.country.flag), base),
            Span::styled(
                self.country.name.common.clone(),
                Style::default()
                    .bg(self.palette.surface)
                    .fg(self.palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(headline), headline_area);

        if !self.country.flags.alt.is_empty() {
            frame.render_widget(
                Paragraph::new(self.country.flags.alt.clone())
                    .style(muted)
                    .wrap(Wrap { trim: true }),
                flag_alt_area,
            );
        }

        // Two columns of labeled fields, as on the original page.
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(columns_area);

        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label}: "), muted),
                Span::styled(value, base),
            ])
        };

        let left = vec![
            field("Native Name", self.country.native_common_name().to_string()),
            field(
                "Population",
                format_population(self.country.population, self.locale),
            ),
            field("Region", self.country.region.clone()),
            field("Sub Region", self.country.subregion.clone()),
            field("Capital", self.country.capital_label()),
        ];
        let right = vec![
            field("Top Level Domain", self.country.tld_label()),
            field("Currencies", self.country.currency_label()),
            field("Languages", self.country.language_label()),
        ];
        frame.render_widget(Paragraph::new(left).style(base), left_area);
        frame.render_widget(Paragraph::new(right).style(base), right_area);

        // Border countries
        let mut lines = vec![Line::from(Span::styled(
            "Border Countries:",
            Style::default()
                .bg(self.palette.surface)
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ))];

        if self.country.borders.is_empty() {
            lines.push(Line::from(Span::styled(NO_BORDERS_MESSAGE, muted)));
        } else {
            let mut spans = Vec::new();
            for (i, code) in self.country.borders.iter().enumerate() {
                let selected = i == self.selected_border;
                let (label, resolved) = match self.catalog.border_label(code) {
                    Some(name) => (name.to_string(), true),
                    None => (code.clone(), false),
                };
                let mut style = if resolved {
                    base
                } else {
                    muted.add_modifier(Modifier::ITALIC)
                };
                if selected {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                spans.push(Span::styled(format!(" {label} "), style));
                spans.push(Span::styled(" ", base));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(
            Paragraph::new(lines).style(base).wrap(Wrap { trim: true }),
            borders_area,
        );
    }
}
