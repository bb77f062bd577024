//! Language catalog normalization.
//!
//! The upstream catalog is a raw listing of language/country codes with
//! localized display names. It is not clean: the access-control policy node
//! of the content repository leaks through as a pseudo-entry, and the same
//! code can appear more than once. Normalization removes the sentinel,
//! deduplicates by code (first occurrence wins), and produces a unique-keyed
//! map ready for filtering.

use std::collections::HashMap;

use tracing::warn;

/// Access-control policy node name that the upstream catalog does not filter
/// out. It is not a language and must never reach users.
pub const ACCESS_CONTROL_POLICY_NODE: &str = "rep:policy";

/// One language/country code with its localized display name.
///
/// `code` is a tag such as `en_US`; `label` is human-readable text (e.g.
/// "English (United States)") and is not guaranteed unique across codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: String,
    pub label: String,
}

impl LanguageEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Normalize the raw catalog into a `code -> label` map with unique keys.
///
/// Entries whose code is the access-control sentinel are removed. When a code
/// appears more than once the first occurrence wins and every later duplicate
/// is logged and dropped; logging is a diagnostic side channel, the result is
/// deterministic either way.
pub fn normalize(entries: Vec<LanguageEntry>) -> HashMap<String, String> {
    let mut catalog: HashMap<String, String> = HashMap::with_capacity(entries.len());

    for entry in entries {
        if entry.code == ACCESS_CONTROL_POLICY_NODE {
            continue;
        }
        if catalog.contains_key(&entry.code) {
            warn!("Duplicate language/country code: {}", entry.code);
            continue;
        }
        catalog.insert(entry.code, entry.label);
    }

    catalog
}
