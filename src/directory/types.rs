//! Country record types deserialized from the remote directory.
//!
//! These records are opaque payloads: the application never constructs them
//! outside of tests, it only reads them. The remote shape is loose — whole
//! fields can be missing from a record — so every collection-valued field
//! carries `#[serde(default)]` and readers go through the accessor methods,
//! which define the fallback rules in one place.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One country record as returned by the directory API.
///
/// `cca3` is the unique three-letter code used as the catalog key and in
/// `borders`. Maps use `BTreeMap` so "first entry" is deterministic
/// (smallest key) and rendered lists have a stable order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub tld: Vec<String>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub flags: Flags,
    /// Emoji flag, e.g. "🇩🇪".
    #[serde(default)]
    pub flag: String,
    pub cca3: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(rename = "nativeName", default)]
    pub native_name: BTreeMap<String, NativeName>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

impl Country {
    /// First available localized common name, falling back to the plain
    /// common name when no native entry exists.
    pub fn native_common_name(&self) -> &str {
        self.name
            .native_name
            .values()
            .map(|n| n.common.as_str())
            .find(|s| !s.is_empty())
            .unwrap_or(&self.name.common)
    }

    /// Capital cities joined for display; empty string when unknown.
    pub fn capital_label(&self) -> String {
        self.capital.join(", ")
    }

    pub fn tld_label(&self) -> String {
        self.tld.join(", ")
    }

    pub fn currency_label(&self) -> String {
        self.currencies
            .values()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn language_label(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
