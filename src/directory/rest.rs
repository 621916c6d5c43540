//! REST Countries v3.1 backend.
//!
//! Two endpoints, both GET, both restricted to the field set the views
//! actually render:
//! - bulk:   `{base}/all?fields=<set>`        → JSON array
//! - single: `{base}/alpha/{code}?fields=<set>` → JSON object

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::Country;
use super::{CountryDirectory, DirectoryError};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the API. Keeping the set fixed keeps responses
/// small and the record shape predictable.
const FIELD_SET: &str =
    "name,capital,currencies,population,region,flags,flag,cca3,subregion,tld,languages,borders";

/// Directory backed by the public REST Countries API.
pub struct RestDirectory {
    base_url: String,
    client: reqwest::Client,
}

impl RestDirectory {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Sends a GET and maps non-2xx statuses to `DirectoryError::Api`.
    async fn get(&self, url: String) -> Result<reqwest::Response, DirectoryError> {
        info!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        debug!("directory response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("directory API error: {status} - {message}");
            return Err(DirectoryError::Api { status, message });
        }

        Ok(response)
    }
}

#[async_trait]
impl CountryDirectory for RestDirectory {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, DirectoryError> {
        let url = format!("{}/all?fields={}", self.base_url, FIELD_SET);
        let response = self.get(url).await?;

        let countries: Vec<Country> = response
            .json()
            .await
            .map_err(|e| DirectoryError::Parse(e.to_string()))?;

        info!("fetched {} countries", countries.len());
        Ok(countries)
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, DirectoryError> {
        let url = format!("{}/alpha/{}?fields={}", self.base_url, code, FIELD_SET);
        let response = self.get(url).await?;

        response
            .json()
            .await
            .map_err(|e| DirectoryError::Parse(e.to_string()))
    }
}
