//! REST Countries HTTP source.

use async_trait::async_trait;
use orbis_core::{Error, Result, SourceCountry};

use super::CountrySource;

/// Public REST Countries endpoint, limited to the fields Orbis stores.
pub const DEFAULT_SOURCE_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,capital,population,region,flags";

/// Fetches the dataset with a single GET against a REST Countries endpoint.
pub struct RestCountriesSource {
    client: reqwest::Client,
    url: String,
}

impl RestCountriesSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RestCountriesSource {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL)
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn name(&self) -> &'static str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<SourceCountry>> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("GET {}: {}", self.url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "GET {}: unexpected status {}",
                self.url, status
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("reading body from {}: {}", self.url, e)))?;

        let countries: Vec<SourceCountry> = serde_json::from_slice(&body)
            .map_err(|e| Error::Fetch(format!("decoding payload from {}: {}", self.url, e)))?;

        tracing::debug!(url = %self.url, count = countries.len(), "fetched dataset");
        Ok(countries)
    }
}
