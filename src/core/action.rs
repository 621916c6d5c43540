//! # Actions
//!
//! Everything that can happen in atlas becomes an `Action`.
//! User opens a country? That's `Action::OpenDetail`.
//! The bulk fetch resolves? That's `Action::CatalogLoaded(records)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state, returning an `Effect` for the I/O the event loop
//! must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use crate::core::state::{App, DetailRoute, Route};
use crate::directory::Country;

#[derive(Debug)]
pub enum Action {
    /// The one bulk fetch resolved with the full collection.
    CatalogLoaded(Vec<Country>),
    /// The bulk fetch failed; message is shown with a retry hint.
    CatalogFailed(String),
    /// A by-code fetch resolved.
    RecordLoaded(Country),
    /// A by-code fetch failed.
    RecordFailed { code: String, message: String },
    /// Navigate to a country's detail screen, optionally carrying the
    /// already-fetched record as navigation state.
    OpenDetail {
        code: String,
        record: Option<Country>,
    },
    /// Navigate back along the visited-route history.
    GoBack,
    /// Retry whatever fetch last failed on the active screen.
    Retry,
    ToggleTheme,
    Quit,
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchCatalog,
    FetchRecord(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CatalogLoaded(countries) => {
            let count = countries.len();
            app.catalog.populate(countries);
            app.status_message = format!("{count} countries");
            // A detail screen opened before the catalog arrived can now
            // resolve from it, unless a by-code fetch already failed.
            if let Route::Detail(detail) = &mut app.route
                && detail.record.is_none()
                && detail.error.is_none()
                && let Some(found) = app.catalog.get(&detail.code)
            {
                detail.record = Some(found.clone());
            }
            Effect::None
        }
        Action::CatalogFailed(message) => {
            app.status_message = "Load failed (Ctrl+R to retry)".to_string();
            app.catalog.fail(message);
            Effect::None
        }
        Action::RecordLoaded(country) => {
            if let Route::Detail(detail) = &mut app.route
                && detail.code == country.cca3
            {
                detail.record = Some(country);
                detail.error = None;
            }
            Effect::None
        }
        Action::RecordFailed { code, message } => {
            if let Route::Detail(detail) = &mut app.route
                && detail.code == code
            {
                detail.error = Some(message);
                app.status_message = "Lookup failed (Ctrl+R to retry)".to_string();
            }
            Effect::None
        }
        Action::OpenDetail { code, record } => {
            // Resolution order: carried state, then catalog, then remote.
            let record = record.or_else(|| app.catalog.get(&code).cloned());
            let needs_fetch = record.is_none();

            let previous = std::mem::replace(
                &mut app.route,
                Route::Detail(DetailRoute::new(code.clone(), record)),
            );
            app.history.push(previous);

            if needs_fetch {
                app.status_message = format!("Looking up {code}...");
                Effect::FetchRecord(code)
            } else {
                app.status_message.clear();
                Effect::None
            }
        }
        Action::GoBack => {
            app.route = app.history.pop().unwrap_or(Route::List);
            Effect::None
        }
        Action::Retry => match &mut app.route {
            Route::Detail(detail) if detail.record.is_none() => {
                detail.error = None;
                app.status_message = format!("Looking up {}...", detail.code);
                Effect::FetchRecord(detail.code.clone())
            }
            _ if app.catalog.failure().is_some() => {
                app.catalog.begin_load();
                app.status_message = "Loading country directory...".to_string();
                Effect::FetchCatalog
            }
            _ => Effect::None,
        },
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            app.status_message = format!("{} mode", app.theme.label());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use crate::test_support::{sample_country, test_app};

    #[test]
    fn test_catalog_loaded_flips_phase_and_status() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::CatalogLoaded(vec![
                sample_country("DEU", "Germany", "Europe"),
                sample_country("FRA", "France", "Europe"),
            ]),
        );
        assert_eq!(effect, Effect::None);
        assert!(app.catalog.is_ready());
        assert_eq!(app.status_message, "2 countries");
    }

    #[test]
    fn test_catalog_loaded_fills_pending_detail() {
        let mut app = test_app();
        update(
            &mut app,
            Action::OpenDetail {
                code: "DEU".to_string(),
                record: None,
            },
        );
        update(
            &mut app,
            Action::CatalogLoaded(vec![sample_country("DEU", "Germany", "Europe")]),
        );
        assert_eq!(app.detail_record().unwrap().name.common, "Germany");
    }

    #[test]
    fn test_catalog_failure_is_captured() {
        let mut app = test_app();
        update(&mut app, Action::CatalogFailed("timeout".to_string()));
        assert_eq!(app.catalog.failure(), Some("timeout"));
        assert!(app.status_message.contains("Ctrl+R"));
    }

    #[test]
    fn test_open_detail_with_carried_record_needs_no_fetch() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::OpenDetail {
                code: "DEU".to_string(),
                record: Some(sample_country("DEU", "Germany", "Europe")),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.history, vec![Route::List]);
        assert_eq!(app.detail_record().unwrap().cca3, "DEU");
    }

    #[test]
    fn test_open_detail_resolves_from_catalog() {
        let mut app = test_app();
        app.catalog
            .populate(vec![sample_country("FRA", "France", "Europe")]);
        let effect = update(
            &mut app,
            Action::OpenDetail {
                code: "FRA".to_string(),
                record: None,
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.detail_record().unwrap().name.common, "France");
    }

    #[test]
    fn test_open_detail_without_record_spawns_fetch() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::OpenDetail {
                code: "BRA".to_string(),
                record: None,
            },
        );
        assert_eq!(effect, Effect::FetchRecord("BRA".to_string()));
        assert!(app.detail_record().is_none());
    }

    #[test]
    fn test_record_loaded_fills_matching_route_only() {
        let mut app = test_app();
        update(
            &mut app,
            Action::OpenDetail {
                code: "BRA".to_string(),
                record: None,
            },
        );
        // A stale response for another code is ignored.
        update(
            &mut app,
            Action::RecordLoaded(sample_country("ARG", "Argentina", "Americas")),
        );
        assert!(app.detail_record().is_none());

        update(
            &mut app,
            Action::RecordLoaded(sample_country("BRA", "Brazil", "Americas")),
        );
        assert_eq!(app.detail_record().unwrap().name.common, "Brazil");
    }

    #[test]
    fn test_record_failed_sets_route_error() {
        let mut app = test_app();
        update(
            &mut app,
            Action::OpenDetail {
                code: "BRA".to_string(),
                record: None,
            },
        );
        update(
            &mut app,
            Action::RecordFailed {
                code: "BRA".to_string(),
                message: "HTTP 500".to_string(),
            },
        );
        match &app.route {
            Route::Detail(detail) => assert_eq!(detail.error.as_deref(), Some("HTTP 500")),
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn test_border_chain_unwinds_in_visit_order() {
        let mut app = test_app();
        app.catalog.populate(vec![
            sample_country("DEU", "Germany", "Europe"),
            sample_country("FRA", "France", "Europe"),
        ]);
        update(
            &mut app,
            Action::OpenDetail {
                code: "DEU".to_string(),
                record: None,
            },
        );
        update(
            &mut app,
            Action::OpenDetail {
                code: "FRA".to_string(),
                record: None,
            },
        );

        update(&mut app, Action::GoBack);
        match &app.route {
            Route::Detail(detail) => assert_eq!(detail.code, "DEU"),
            other => panic!("unexpected route: {other:?}"),
        }

        update(&mut app, Action::GoBack);
        assert_eq!(app.route, Route::List);

        // Back on an empty history stays on the list.
        update(&mut app, Action::GoBack);
        assert_eq!(app.route, Route::List);
    }

    #[test]
    fn test_retry_after_catalog_failure() {
        let mut app = test_app();
        update(&mut app, Action::CatalogFailed("timeout".to_string()));
        let effect = update(&mut app, Action::Retry);
        assert_eq!(effect, Effect::FetchCatalog);
        assert!(app.catalog.is_loading());
    }

    #[test]
    fn test_retry_on_failed_detail_refetches_record() {
        let mut app = test_app();
        update(
            &mut app,
            Action::OpenDetail {
                code: "BRA".to_string(),
                record: None,
            },
        );
        update(
            &mut app,
            Action::RecordFailed {
                code: "BRA".to_string(),
                message: "HTTP 500".to_string(),
            },
        );
        let effect = update(&mut app, Action::Retry);
        assert_eq!(effect, Effect::FetchRecord("BRA".to_string()));
    }

    #[test]
    fn test_retry_is_a_noop_when_nothing_failed() {
        let mut app = test_app();
        app.catalog
            .populate(vec![sample_country("DEU", "Germany", "Europe")]);
        assert_eq!(update(&mut app, Action::Retry), Effect::None);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = test_app();
        assert_eq!(app.theme, Theme::Dark);
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.status_message, "Light mode");
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
