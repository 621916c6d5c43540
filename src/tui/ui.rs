use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::filter;
use crate::core::state::{App, DetailRoute, Route};
use crate::core::theme::Palette;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CountryList, DetailView, SearchBar, Skeleton, SkeletonKind, TitleBar,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, frame_index: usize) {
    let palette = app.theme.palette();

    // Paint the whole frame in the theme background first.
    frame.render_widget(
        Block::new().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, content_area, help_area] = layout.areas(frame.area());

    TitleBar {
        status_message: &app.status_message,
        theme: app.theme,
        palette: &palette,
    }
    .render(frame, title_area);

    match &app.route {
        Route::List => draw_list_screen(frame, content_area, app, tui, &palette, frame_index),
        Route::Detail(detail) => {
            draw_detail_screen(frame, content_area, app, detail, tui, &palette, frame_index)
        }
    }

    let help = match &app.route {
        Route::List => " ↑/↓ Select  ←/→ Region  Enter Open  Ctrl+T Theme  Esc Quit",
        Route::Detail(_) => " ←/→ Borders  Enter Open  Esc Back  Ctrl+T Theme",
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(palette.muted)),
        help_area,
    );
}

fn draw_list_screen(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    palette: &Palette,
    frame_index: usize,
) {
    if let Some(message) = app.catalog.failure() {
        draw_error_view(frame, area, message, palette);
        return;
    }

    if app.catalog.is_loading() {
        Skeleton {
            kind: SkeletonKind::List,
            frame_index,
            palette,
        }
        .render(frame, area);
        return;
    }

    use Constraint::{Length, Min};
    let [search_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

    SearchBar {
        state: &tui.search,
        palette,
    }
    .render(frame, search_area);

    let rows = filter::visible(&app.catalog, tui.search.region, &tui.search.query);
    CountryList {
        state: &mut tui.list,
        countries: &rows,
        locale: app.locale,
        palette,
    }
    .render(frame, list_area);
}

fn draw_detail_screen(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    detail: &DetailRoute,
    tui: &mut TuiState,
    palette: &Palette,
    frame_index: usize,
) {
    if let Some(message) = &detail.error {
        draw_error_view(frame, area, message, palette);
        return;
    }

    match app.detail_record() {
        Some(country) => DetailView {
            country,
            catalog: &app.catalog,
            locale: app.locale,
            palette,
            selected_border: tui.detail.selected_border,
        }
        .render(frame, area),
        None => Skeleton {
            kind: SkeletonKind::Detail,
            frame_index,
            palette,
        }
        .render(frame, area),
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let text = format!("{message}\n\nPress Ctrl+R to retry");
    let error_paragraph = Paragraph::new(text)
        .block(
            Block::bordered()
                .title(" ERROR ")
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().bg(palette.surface).fg(palette.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
