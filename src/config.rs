use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Upstream endpoints
    pub catalog_url: String,
    pub dictionary_service_url: String,

    // Target dictionary
    pub dictionary_path: String,

    // Presentation
    pub locale: Option<String>,
    pub hide_non_dictionary_languages: bool,
    pub emit_text_fields: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Upstream endpoints
            catalog_url: std::env::var("CATALOG_URL").context("CATALOG_URL not set")?,
            dictionary_service_url: std::env::var("DICTIONARY_SERVICE_URL")
                .context("DICTIONARY_SERVICE_URL not set")?,

            // Target dictionary
            dictionary_path: std::env::var("DICTIONARY_PATH")
                .context("DICTIONARY_PATH not set")?,

            // Presentation
            locale: std::env::var("DISPLAY_LOCALE").ok(),
            hide_non_dictionary_languages: std::env::var("HIDE_NON_DICTIONARY_LANGUAGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            emit_text_fields: std::env::var("EMIT_TEXT_FIELDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}
