//! # Country Catalog Store
//!
//! The in-memory collection of all fetched country records, keyed by the
//! unique three-letter code. Write-once: created empty, filled by the one
//! successful bulk fetch, read-only for the rest of the session.
//!
//! The load lifecycle is an explicit state machine instead of a bare
//! boolean, so a failed fetch is a renderable state rather than an
//! indefinite spinner:
//!
//! ```text
//! Idle ──begin_load()──▶ Loading ──populate()──▶ Ready
//!                           │
//!                           └──fail()──▶ Failed ──begin_load()──▶ Loading
//! ```

use std::collections::HashMap;

use crate::directory::Country;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, Country>,
    phase: LoadPhase,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// True until the bulk fetch has resolved one way or the other.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Inserts the fetched collection keyed by code and flips to `Ready`.
    /// Later duplicates overwrite earlier ones; codes are unique upstream.
    pub fn populate(&mut self, countries: Vec<Country>) {
        for country in countries {
            self.entries.insert(country.cca3.clone(), country);
        }
        self.phase = LoadPhase::Ready;
    }

    pub fn fail(&mut self, message: String) {
        self.phase = LoadPhase::Failed(message);
    }

    pub fn get(&self, code: &str) -> Option<&Country> {
        self.entries.get(code)
    }

    /// Display name for a border chip. `None` when the code is not in the
    /// catalog — the caller renders a placeholder, never an error.
    pub fn border_label(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(|c| c.name.common.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.entries.values()
    }
}
