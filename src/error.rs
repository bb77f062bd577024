use thiserror::Error;

/// Errors produced by the language datasource pipeline.
///
/// The taxonomy is deliberately small: bad request input, a failed upstream
/// fetch, or an unexpected internal condition. Duplicate language codes in
/// the catalog are not errors; they are logged and dropped during
/// normalization.
#[derive(Debug, Error)]
pub enum DatasourceError {
    /// The query did not carry a dictionary path.
    #[error("a non-empty dictionary path is required")]
    MissingDictionaryPath,

    /// The requested display locale is not a valid language tag.
    #[error("invalid locale tag '{tag}'")]
    InvalidLocale {
        tag: String,
        #[source]
        source: icu_locale_core::ParseError,
    },

    /// The full language catalog could not be retrieved.
    #[error("failed to retrieve the language catalog")]
    CatalogRetrieval(#[source] anyhow::Error),

    /// The set of languages already in the dictionary could not be retrieved.
    #[error("failed to retrieve the languages of dictionary '{path}'")]
    MembershipRetrieval {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// Any condition the pipeline cannot attribute to input or retrieval.
    #[error("internal datasource error")]
    Internal(#[from] anyhow::Error),
}

impl DatasourceError {
    /// Whether the error is attributable to the caller's input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DatasourceError::MissingDictionaryPath | DatasourceError::InvalidLocale { .. }
        )
    }
}
