//! The language datasource pipeline.
//!
//! Given a dictionary path and presentation flags, this module combines the
//! full language catalog with the dictionary's own languages and returns the
//! ordered list of pick-list items: normalize -> filter -> project -> sort.
//! The two upstream fetches are delegated to provider traits and run
//! concurrently; everything after them is synchronous and side-effect free.

use std::collections::HashSet;
use std::future::Future;

use anyhow::Result;
use tracing::info;

use crate::catalog::{self, LanguageEntry};
use crate::collation;
use crate::error::DatasourceError;
use crate::membership;
use crate::projection::{self, ProjectedItem};

/// Source of the full universe of language/country codes with display names
/// localized for the requested locale.
pub trait LanguageCatalogProvider {
    /// Fetch the raw catalog. Called exactly once per pipeline run.
    fn fetch_languages(
        &self,
        display_locale: &str,
    ) -> impl Future<Output = Result<Vec<LanguageEntry>>> + Send;
}

/// Source of the language codes already present in a dictionary.
pub trait DictionaryMembershipProvider {
    /// Fetch the membership set. Called exactly once per pipeline run.
    fn fetch_dictionary_languages(
        &self,
        dictionary_path: &str,
    ) -> impl Future<Output = Result<HashSet<String>>> + Send;
}

/// Parameters of one datasource invocation.
#[derive(Debug, Clone)]
pub struct LanguageQuery {
    /// Path identifying the target dictionary. Required, non-blank.
    pub dictionary_path: String,

    /// Display/collation locale tag. Falls back to the process locale.
    pub locale: Option<String>,

    /// When set, show only languages already in the dictionary; otherwise
    /// show only languages that can still be added.
    pub hide_non_dictionary_languages: bool,

    /// When set, emit text-field descriptors instead of select options.
    pub emit_text_fields: bool,
}

impl LanguageQuery {
    pub fn new(dictionary_path: impl Into<String>) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
            locale: None,
            hide_non_dictionary_languages: false,
            emit_text_fields: false,
        }
    }

    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    pub fn hide_non_dictionary_languages(mut self, hide: bool) -> Self {
        self.hide_non_dictionary_languages = hide;
        self
    }

    pub fn emit_text_fields(mut self, emit: bool) -> Self {
        self.emit_text_fields = emit;
        self
    }
}

/// Run the pipeline and return the ordered pick-list items.
///
/// Fails fast on a blank dictionary path, before any provider call. Both
/// providers are fetched concurrently and each exactly once; when both fail,
/// the catalog error is the one surfaced. No partial results: any fatal error
/// aborts the whole invocation.
pub async fn fetch_language_options<C, M>(
    catalog_provider: &C,
    membership_provider: &M,
    query: &LanguageQuery,
) -> Result<Vec<ProjectedItem>, DatasourceError>
where
    C: LanguageCatalogProvider,
    M: DictionaryMembershipProvider,
{
    if query.dictionary_path.trim().is_empty() {
        return Err(DatasourceError::MissingDictionaryPath);
    }

    let locale = collation::resolve_locale(query.locale.as_deref())?;
    let locale_tag = locale.to_string();

    let (raw_catalog, members) = tokio::join!(
        catalog_provider.fetch_languages(&locale_tag),
        membership_provider.fetch_dictionary_languages(&query.dictionary_path),
    );
    let raw_catalog = raw_catalog.map_err(DatasourceError::CatalogRetrieval)?;
    let members = members.map_err(|source| DatasourceError::MembershipRetrieval {
        path: query.dictionary_path.clone(),
        source,
    })?;

    let normalized = catalog::normalize(raw_catalog);
    let candidates = membership::candidates(
        &normalized,
        &members,
        query.hide_non_dictionary_languages,
    );

    let mut items: Vec<ProjectedItem> = candidates
        .iter()
        .map(|entry| projection::project(entry, query.emit_text_fields))
        .collect();
    collation::sort_by_display(&mut items, &locale)?;

    info!(
        "Resolved {} language options for dictionary {}",
        items.len(),
        query.dictionary_path
    );
    Ok(items)
}
