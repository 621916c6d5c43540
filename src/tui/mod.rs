//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a fetch is outstanding): draws every ~80ms so the
//!   skeleton placeholders pulse.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Fetch tasks
//!
//! Network work never runs on the UI thread. The catalog fetch (once at
//! startup, again only on explicit retry) and any by-code record fetch are
//! spawned as tokio tasks that send exactly one completion `Action` back
//! over an mpsc channel, which the loop drains after each poll.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::filter::{self, Region};
use crate::core::state::{App, Route};
use crate::directory::{CountryDirectory, RestDirectory};
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryListState, DetailState, SearchBarState, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Rows jumped by PageUp/PageDown.
const PAGE_STEP: usize = 10;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search: SearchBarState,
    pub list: CountryListState,
    pub detail: DetailState,
}

impl TuiState {
    pub fn new(initial_region: Region) -> Self {
        Self {
            search: SearchBarState::new(initial_region),
            list: CountryListState::new(),
            detail: DetailState::new(),
        }
    }
}

pub fn run(config: ResolvedConfig, initial_code: Option<String>) -> std::io::Result<()> {
    let directory: Arc<dyn CountryDirectory> =
        Arc::new(RestDirectory::new(config.directory_base_url.clone()));

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &config, initial_code, directory);
    ratatui::restore();
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    config: &ResolvedConfig,
    initial_code: Option<String>,
    directory: Arc<dyn CountryDirectory>,
) -> std::io::Result<()> {
    let mut app = App::new(config);
    let mut tui = TuiState::new(config.region);

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // The one bulk fetch of the session (barring explicit retries).
    app.catalog.begin_load();
    app.status_message = "Loading country directory...".to_string();
    spawn_catalog_fetch(directory.clone(), tx.clone());

    // Deep link: `atlas DEU` opens the detail screen directly.
    if let Some(code) = initial_code {
        let effect = update(
            &mut app,
            Action::OpenDetail {
                code: code.to_uppercase(),
                record: None,
            },
        );
        run_effect(effect, &directory, &tx);
    }

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // A pulsing skeleton is on screen whenever a fetch is outstanding.
        let detail_pending = matches!(&app.route, Route::Detail(d) if d.error.is_none())
            && app.detail_record().is_none();
        let animating = app.catalog.is_loading() || detail_pending;

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let frame_index = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, frame_index))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of screen
            if matches!(tui_event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Theme and retry work on both screens
            if matches!(tui_event, TuiEvent::ToggleTheme) {
                update(&mut app, Action::ToggleTheme);
                continue;
            }
            if matches!(tui_event, TuiEvent::Retry) {
                let effect = update(&mut app, Action::Retry);
                should_quit |= run_effect(effect, &directory, &tx);
                continue;
            }

            match &app.route {
                Route::List => {
                    should_quit |=
                        handle_list_event(&tui_event, &mut app, &mut tui, &directory, &tx);
                }
                Route::Detail(_) => {
                    should_quit |=
                        handle_detail_event(&tui_event, &mut app, &mut tui, &directory, &tx);
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if run_effect(effect, &directory, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}

/// Keyboard handling for the list screen. Returns true to quit.
fn handle_list_event(
    tui_event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    directory: &Arc<dyn CountryDirectory>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    // Filter inputs first: typing edits the query, arrows cycle the region.
    if let Some(SearchEvent::Changed) = tui.search.handle_event(tui_event) {
        tui.list.reset();
        return false;
    }

    match tui_event {
        TuiEvent::Escape => {
            // Esc clears an active search before it quits.
            if !tui.search.query.is_empty() {
                tui.search.query.clear();
                tui.list.reset();
                false
            } else {
                update(app, Action::Quit) == Effect::Quit
            }
        }
        TuiEvent::CursorUp => {
            tui.list.move_up(1);
            false
        }
        TuiEvent::CursorDown => {
            let len = filter::visible(&app.catalog, tui.search.region, &tui.search.query).len();
            tui.list.move_down(1, len);
            false
        }
        TuiEvent::PageUp => {
            tui.list.move_up(PAGE_STEP);
            false
        }
        TuiEvent::PageDown => {
            let len = filter::visible(&app.catalog, tui.search.region, &tui.search.query).len();
            tui.list.move_down(PAGE_STEP, len);
            false
        }
        TuiEvent::Submit => {
            // Carry the selected record into the route, like navigation
            // state on a site, so the common path needs no second fetch.
            let selection = {
                let rows = filter::visible(&app.catalog, tui.search.region, &tui.search.query);
                rows.get(tui.list.selected)
                    .map(|c| (c.cca3.clone(), (*c).clone()))
            };
            if let Some((code, record)) = selection {
                tui.detail.reset();
                let effect = update(
                    app,
                    Action::OpenDetail {
                        code,
                        record: Some(record),
                    },
                );
                return run_effect(effect, directory, tx);
            }
            false
        }
        _ => false,
    }
}

/// Keyboard handling for the detail screen. Returns true to quit.
fn handle_detail_event(
    tui_event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    directory: &Arc<dyn CountryDirectory>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match tui_event {
        TuiEvent::Escape => {
            tui.detail.reset();
            update(app, Action::GoBack);
            false
        }
        TuiEvent::CursorLeft => {
            tui.detail.move_left();
            false
        }
        TuiEvent::CursorRight => {
            let count = app.detail_record().map(|c| c.borders.len()).unwrap_or(0);
            tui.detail.move_right(count);
            false
        }
        TuiEvent::Submit => {
            let target = app
                .detail_record()
                .and_then(|c| c.borders.get(tui.detail.selected_border).cloned());
            if let Some(code) = target {
                tui.detail.reset();
                let effect = update(app, Action::OpenDetail { code, record: None });
                return run_effect(effect, directory, tx);
            }
            false
        }
        _ => false,
    }
}

/// Executes the I/O an update asked for. Returns true to quit.
fn run_effect(
    effect: Effect,
    directory: &Arc<dyn CountryDirectory>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::FetchCatalog => {
            spawn_catalog_fetch(directory.clone(), tx.clone());
            false
        }
        Effect::FetchRecord(code) => {
            spawn_record_fetch(directory.clone(), code, tx.clone());
            false
        }
        Effect::None => false,
    }
}

fn spawn_catalog_fetch(directory: Arc<dyn CountryDirectory>, tx: mpsc::Sender<Action>) {
    info!("Spawning catalog fetch via {}", directory.name());
    tokio::spawn(async move {
        let action = match directory.fetch_all().await {
            Ok(countries) => Action::CatalogLoaded(countries),
            Err(e) => {
                warn!("Catalog fetch failed: {}", e);
                Action::CatalogFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send catalog result: receiver dropped");
        }
    });
}

fn spawn_record_fetch(
    directory: Arc<dyn CountryDirectory>,
    code: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning record fetch for {code}");
    tokio::spawn(async move {
        let action = match directory.fetch_by_code(&code).await {
            Ok(country) => Action::RecordLoaded(country),
            Err(e) => {
                warn!("Record fetch for {code} failed: {}", e);
                Action::RecordFailed {
                    code,
                    message: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send record result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StaticDirectory, sample_country};
    use std::time::Duration;

    #[test]
    fn test_tui_state_starts_with_config_region() {
        let tui = TuiState::new(Region::Europe);
        assert_eq!(tui.search.region, Region::Europe);
        assert!(tui.search.query.is_empty());
        assert_eq!(tui.list.selected, 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawn_catalog_fetch_sends_loaded_action() {
        let directory: Arc<dyn CountryDirectory> = Arc::new(StaticDirectory {
            countries: vec![sample_country("DEU", "Germany", "Europe")],
        });
        let (tx, rx) = mpsc::channel();

        spawn_catalog_fetch(directory, tx);

        let action = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        match action {
            Action::CatalogLoaded(countries) => {
                assert_eq!(countries.len(), 1);
                assert_eq!(countries[0].cca3, "DEU");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawn_record_fetch_maps_miss_to_failure() {
        let directory: Arc<dyn CountryDirectory> =
            Arc::new(StaticDirectory { countries: vec![] });
        let (tx, rx) = mpsc::channel();

        spawn_record_fetch(directory, "XYZ".to_string(), tx);

        let action = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        match action {
            Action::RecordFailed { code, message } => {
                assert_eq!(code, "XYZ");
                assert!(message.contains("404"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
