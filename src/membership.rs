//! Inclusion/exclusion filtering against a dictionary's membership set.

use std::collections::{HashMap, HashSet};

use crate::catalog::LanguageEntry;

/// Select the candidate languages from a normalized catalog.
///
/// With `hide_non_dictionary_languages` set, only languages already present
/// in the dictionary are kept (review/removal use cases). Unset — the default
/// — only languages not yet in the dictionary are kept, for "add language"
/// pickers. The two modes partition the catalog: every code lands in exactly
/// one of them for a given membership set.
pub fn candidates(
    catalog: &HashMap<String, String>,
    members: &HashSet<String>,
    hide_non_dictionary_languages: bool,
) -> Vec<LanguageEntry> {
    catalog
        .iter()
        .filter(|(code, _)| members.contains(*code) == hide_non_dictionary_languages)
        .map(|(code, label)| LanguageEntry::new(code.clone(), label.clone()))
        .collect()
}
