//! Locale-aware language pick lists for translation dictionaries.
//!
//! A dictionary holds translated strings for a set of language/country codes.
//! This crate reconciles the full catalog of known languages with the codes a
//! specific dictionary already contains and produces the ordered list a UI
//! needs: either the languages that can still be added, or the ones already
//! present.
//!
//! # Architecture
//!
//! - `catalog`: raw catalog cleanup (sentinel removal, code deduplication)
//! - `membership`: inclusion/exclusion filtering against the dictionary
//! - `projection`: the two output shapes (select option, text field)
//! - `collation`: ICU-based, locale-aware stable ordering
//! - `datasource`: provider traits and the pipeline orchestrator
//! - `providers`: HTTP-backed provider implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use dictionary_languages::datasource::{fetch_language_options, LanguageQuery};
//!
//! let query = LanguageQuery::new("/content/dictionaries/fruit").with_locale("fr_FR");
//! let items = fetch_language_options(&catalog, &membership, &query).await?;
//! ```

pub mod catalog;
pub mod collation;
pub mod config;
pub mod datasource;
pub mod error;
pub mod membership;
pub mod projection;
pub mod providers;

pub use catalog::LanguageEntry;
pub use datasource::{
    fetch_language_options, DictionaryMembershipProvider, LanguageCatalogProvider, LanguageQuery,
};
pub use error::DatasourceError;
pub use projection::ProjectedItem;
