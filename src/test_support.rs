//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::filter::Region;
use crate::core::format::NumberLocale;
use crate::core::state::App;
use crate::core::theme::Theme;
use crate::directory::types::{Country, CountryName, Currency, Flags, NativeName};
use crate::directory::{CountryDirectory, DirectoryError};

/// Builds a minimal record; tests override fields as needed.
pub fn sample_country(code: &str, name: &str, region: &str) -> Country {
    Country {
        name: CountryName {
            common: name.to_string(),
            official: format!("Republic of {name}"),
            native_name: BTreeMap::new(),
        },
        capital: vec![format!("{name} City")],
        currencies: BTreeMap::from([(
            "XTS".to_string(),
            Currency {
                name: "Test Currency".to_string(),
                symbol: "¤".to_string(),
            },
        )]),
        population: 1_000_000,
        region: region.to_string(),
        subregion: format!("Central {region}"),
        tld: vec![format!(".{}", code.to_lowercase())],
        languages: BTreeMap::from([("eng".to_string(), "English".to_string())]),
        borders: Vec::new(),
        flags: Flags::default(),
        flag: "🏳".to_string(),
        cca3: code.to_string(),
    }
}

/// Like `sample_country`, with a localized native name entry.
pub fn sample_country_with_native(
    code: &str,
    name: &str,
    region: &str,
    lang: &str,
    native: &str,
) -> Country {
    let mut country = sample_country(code, name, region);
    country.name.native_name.insert(
        lang.to_string(),
        NativeName {
            official: native.to_string(),
            common: native.to_string(),
        },
    );
    country
}

/// A small catalog spanning several regions.
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.begin_load();
    catalog.populate(vec![
        sample_country_with_native("DEU", "Germany", "Europe", "deu", "Deutschland"),
        sample_country("FRA", "France", "Europe"),
        sample_country("BRA", "Brazil", "Americas"),
        sample_country("ARG", "Argentina", "Americas"),
        sample_country("AUS", "Australia", "Oceania"),
        sample_country("KEN", "Kenya", "Africa"),
        sample_country("JPN", "Japan", "Asia"),
    ]);
    catalog
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        theme: Theme::Dark,
        region: Region::All,
        locale: NumberLocale::De,
        directory_base_url: "http://localhost:0".to_string(),
    }
}

/// Creates a test App with a loading catalog, as at startup.
pub fn test_app() -> App {
    let mut app = App::new(&test_config());
    app.catalog.begin_load();
    app
}

/// An in-memory directory for tests that don't need a mock server.
pub struct StaticDirectory {
    pub countries: Vec<Country>,
}

#[async_trait]
impl CountryDirectory for StaticDirectory {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, DirectoryError> {
        Ok(self.countries.clone())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, DirectoryError> {
        self.countries
            .iter()
            .find(|c| c.cca3 == code)
            .cloned()
            .ok_or(DirectoryError::Api {
                status: 404,
                message: "Not Found".to_string(),
            })
    }
}
