//! List-view filtering: a coarse region filter followed by a
//! case-insensitive substring search over common names.
//!
//! Both passes are pure functions over borrowed records. They are cheap
//! enough (a few hundred entries) to recompute on every frame, so there is
//! no caching and the catalog itself is never touched.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::catalog::Catalog;
use crate::directory::Country;

/// Coarse geographic grouping used to narrow the catalog before search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    All,
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::All => "All",
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }

    /// Case-insensitive match against a record's region field.
    /// `All` matches everything.
    pub fn matches(self, country: &Country) -> bool {
        match self {
            Region::All => true,
            other => country.region.eq_ignore_ascii_case(other.label()),
        }
    }

    pub fn next(self) -> Region {
        match self {
            Region::All => Region::Africa,
            Region::Africa => Region::Americas,
            Region::Americas => Region::Asia,
            Region::Asia => Region::Europe,
            Region::Europe => Region::Oceania,
            Region::Oceania => Region::All,
        }
    }

    pub fn prev(self) -> Region {
        match self {
            Region::All => Region::Oceania,
            Region::Africa => Region::All,
            Region::Americas => Region::Africa,
            Region::Asia => Region::Americas,
            Region::Europe => Region::Asia,
            Region::Oceania => Region::Europe,
        }
    }
}

/// The rows the list view shows: region filter, then substring search,
/// ordered by common name so the listing is stable across frames.
pub fn visible<'a>(catalog: &'a Catalog, region: Region, query: &str) -> Vec<&'a Country> {
    let query = query.to_lowercase();
    let mut rows: Vec<&Country> = catalog
        .countries()
        .filter(|c| region.matches(c))
        .filter(|c| query.is_empty() || c.name.common.to_lowercase().contains(&query))
        .collect();
    rows.sort_by(|a, b| {
        a.name
            .common
            .to_lowercase()
            .cmp(&b.name.common.to_lowercase())
    });
    rows
}
