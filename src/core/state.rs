//! # Application State
//!
//! Core business state for atlas. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog           // write-once country store
//! ├── route: Route               // List or Detail(code, record)
//! ├── history: Vec<Route>        // back-navigation stack
//! ├── theme: Theme               // light/dark palette flag
//! ├── locale: NumberLocale       // digit grouping for populations
//! └── status_message: String     // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::format::NumberLocale;
use crate::core::theme::Theme;
use crate::directory::Country;

/// The two screens, mirroring the `/` and `/:code` routes of a directory
/// site. The detail route carries the record handed over by the list view
/// so no second fetch is needed for the common path.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    List,
    Detail(DetailRoute),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRoute {
    /// Three-letter country code from the navigation target.
    pub code: String,
    /// Record carried via navigation, or filled in by a by-code fetch.
    /// `None` while a fetch is outstanding.
    pub record: Option<Country>,
    /// Failure of the by-code fetch, rendered instead of an eternal
    /// placeholder.
    pub error: Option<String>,
}

impl DetailRoute {
    pub fn new(code: String, record: Option<Country>) -> Self {
        Self {
            code,
            record,
            error: None,
        }
    }
}

pub struct App {
    pub catalog: Catalog,
    pub route: Route,
    pub history: Vec<Route>,
    pub theme: Theme,
    pub locale: NumberLocale,
    pub status_message: String,
}

impl App {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            route: Route::List,
            history: Vec::new(),
            theme: config.theme,
            locale: config.locale,
            status_message: String::new(),
        }
    }

    /// The record the active detail route should render: the carried
    /// navigation state first, the catalog second. `None` means a fetch is
    /// still outstanding (or failed).
    pub fn detail_record(&self) -> Option<&Country> {
        match &self.route {
            Route::Detail(detail) => detail
                .record
                .as_ref()
                .or_else(|| self.catalog.get(&detail.code)),
            Route::List => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_country, test_app};

    #[test]
    fn test_app_starts_on_list_route() {
        let app = test_app();
        assert_eq!(app.route, Route::List);
        assert!(app.history.is_empty());
        assert!(app.catalog.is_loading());
    }

    #[test]
    fn test_detail_record_prefers_carried_state() {
        let mut app = test_app();
        app.catalog
            .populate(vec![sample_country("DEU", "Germany", "Europe")]);

        // Carried record wins over the catalog entry with the same code.
        let mut carried = sample_country("DEU", "Germany", "Europe");
        carried.population = 1;
        app.route = Route::Detail(DetailRoute::new(
            "DEU".to_string(),
            Some(carried),
        ));
        assert_eq!(app.detail_record().unwrap().population, 1);
    }

    #[test]
    fn test_detail_record_falls_back_to_catalog() {
        let mut app = test_app();
        app.catalog
            .populate(vec![sample_country("FRA", "France", "Europe")]);
        app.route = Route::Detail(DetailRoute::new("FRA".to_string(), None));
        assert_eq!(app.detail_record().unwrap().name.common, "France");
    }

    #[test]
    fn test_detail_record_none_when_unresolved() {
        let mut app = test_app();
        app.route = Route::Detail(DetailRoute::new("XYZ".to_string(), None));
        assert!(app.detail_record().is_none());
    }
}
