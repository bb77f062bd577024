//! HTTP-backed implementations of the catalog and membership providers.
//!
//! The catalog endpoint serves the platform-wide language listing as a JSON
//! array of `{"value": code, "text": label}` items; the dictionary service
//! endpoint serves the codes already present in a dictionary as a JSON array
//! of strings. Retries, if any, belong to these upstreams, not here.

use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::catalog::LanguageEntry;
use crate::datasource::{DictionaryMembershipProvider, LanguageCatalogProvider};

/// Wire shape of one catalog item.
#[derive(Debug, Deserialize)]
struct CatalogItem {
    value: String,
    text: String,
}

/// Language catalog served over HTTP from `{base_url}/languages`.
#[derive(Debug, Clone)]
pub struct HttpLanguageCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLanguageCatalog {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl LanguageCatalogProvider for HttpLanguageCatalog {
    async fn fetch_languages(&self, display_locale: &str) -> Result<Vec<LanguageEntry>> {
        let url = format!("{}/languages", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("locale", display_locale)])
            .send()
            .await
            .context("Failed to send request to the language catalog endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Language catalog error ({}): {}", status, body);
        }

        let items: Vec<CatalogItem> = response
            .json()
            .await
            .context("Failed to parse language catalog response")?;

        info!("Fetched {} catalog entries for locale {}", items.len(), display_locale);

        Ok(items
            .into_iter()
            .map(|item| LanguageEntry::new(item.value, item.text))
            .collect())
    }
}

/// Dictionary membership served over HTTP from `{base_url}/languages`.
#[derive(Debug, Clone)]
pub struct HttpDictionaryMembership {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDictionaryMembership {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl DictionaryMembershipProvider for HttpDictionaryMembership {
    async fn fetch_dictionary_languages(
        &self,
        dictionary_path: &str,
    ) -> Result<HashSet<String>> {
        let url = format!("{}/languages", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("dictionary", dictionary_path)])
            .send()
            .await
            .context("Failed to send request to the dictionary service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Dictionary service error ({}): {}", status, body);
        }

        let codes: HashSet<String> = response
            .json()
            .await
            .context("Failed to parse dictionary languages response")?;

        info!(
            "Dictionary {} currently holds {} languages",
            dictionary_path,
            codes.len()
        );

        Ok(codes)
    }
}
