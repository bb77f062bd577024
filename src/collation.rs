//! Locale resolution and locale-aware sorting of projected items.
//!
//! Ordering is linguistic, not codepoint-based: accents, case folding, and
//! locale tailorings (e.g. Swedish "ä" after "z") follow ICU collation for
//! the requested locale. The sort is stable, so items whose display strings
//! collate as equal keep their relative input order.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorPreferences};
use icu_locale_core::{locale, Locale};
use tracing::debug;

use crate::error::DatasourceError;
use crate::projection::ProjectedItem;

/// Fallback display locale when neither the query nor the process environment
/// names one.
const FALLBACK_LOCALE: Locale = locale!("en-US");

/// Parse a locale tag from a query.
///
/// Tags in the Java/POSIX underscore form (`en_US`) are accepted alongside
/// BCP-47 (`en-US`).
pub fn parse_locale(tag: &str) -> Result<Locale, DatasourceError> {
    Locale::try_from_str(&tag.replace('_', "-")).map_err(|source| {
        DatasourceError::InvalidLocale {
            tag: tag.to_string(),
            source,
        }
    })
}

/// Resolve the display/collation locale for a query.
///
/// An explicit tag must parse; when absent, the process locale is used and
/// `en-US` serves as the last resort.
pub fn resolve_locale(tag: Option<&str>) -> Result<Locale, DatasourceError> {
    match tag {
        Some(tag) => parse_locale(tag),
        None => {
            let resolved = sys_locale::get_locale()
                .and_then(|tag| Locale::try_from_str(&tag.replace('_', "-")).ok())
                .unwrap_or(FALLBACK_LOCALE);
            debug!("No display locale requested, using {}", resolved);
            Ok(resolved)
        }
    }
}

/// Sort items ascending by their display string under the locale's collation.
pub fn sort_by_display(
    items: &mut [ProjectedItem],
    locale: &Locale,
) -> Result<(), DatasourceError> {
    let collator = Collator::try_new(
        CollatorPreferences::from(locale.clone()),
        CollatorOptions::default(),
    )
    .map_err(|e| {
        DatasourceError::Internal(anyhow::anyhow!(
            "no collation data for locale '{locale}': {e}"
        ))
    })?;

    // sort_by is stable; equal keys keep input order.
    items.sort_by(|a, b| collator.compare(a.display_text(), b.display_text()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(code: &str, text: &str) -> ProjectedItem {
        ProjectedItem::SelectOption {
            value: code.to_string(),
            text: text.to_string(),
        }
    }

    fn texts(items: &[ProjectedItem]) -> Vec<&str> {
        items.iter().map(|i| i.display_text()).collect()
    }

    #[test]
    fn test_parse_locale_accepts_bcp47() {
        let locale = parse_locale("fr-FR").expect("should parse");
        assert_eq!(locale.to_string(), "fr-FR");
    }

    #[test]
    fn test_parse_locale_accepts_underscore_form() {
        let locale = parse_locale("en_US").expect("should parse");
        assert_eq!(locale.to_string(), "en-US");
    }

    #[test]
    fn test_parse_locale_rejects_garbage() {
        let err = parse_locale("not a locale!!").expect_err("should fail");
        assert!(matches!(
            err,
            DatasourceError::InvalidLocale { ref tag, .. } if tag == "not a locale!!"
        ));
    }

    #[test]
    fn test_resolve_locale_without_tag_always_yields_a_locale() {
        // Environment-dependent value, but never an error.
        assert!(resolve_locale(None).is_ok());
    }

    #[test]
    fn test_sort_ignores_case_differences_in_primary_order() {
        let mut items = vec![
            option("c", "cherry (c)"),
            option("b", "Banana (b)"),
            option("a", "apple (a)"),
        ];

        sort_by_display(&mut items, &locale!("en-US")).expect("sort");

        // Codepoint order would put "Banana" first ('B' < 'a').
        assert_eq!(
            texts(&items),
            vec!["apple (a)", "Banana (b)", "cherry (c)"]
        );
    }

    #[test]
    fn test_sort_places_accented_words_linguistically() {
        let mut items = vec![option("z", "zèbre (z)"), option("e", "éclair (e)")];

        sort_by_display(&mut items, &locale!("fr-FR")).expect("sort");

        // Byte order would keep "zèbre" first ('z' < 'é' in UTF-8).
        assert_eq!(texts(&items), vec!["éclair (e)", "zèbre (z)"]);
    }

    #[test]
    fn test_sort_respects_locale_tailoring() {
        // Swedish places "ä" after "z"; English treats it as a variant of "a".
        let mut swedish = vec![option("a", "ängel"), option("z", "zebra")];
        sort_by_display(&mut swedish, &locale!("sv-SE")).expect("sort");
        assert_eq!(texts(&swedish), vec!["zebra", "ängel"]);

        let mut english = vec![option("z", "zebra"), option("a", "ängel")];
        sort_by_display(&mut english, &locale!("en-US")).expect("sort");
        assert_eq!(texts(&english), vec!["ängel", "zebra"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_display_strings() {
        let mut items = vec![
            option("first", "Same label"),
            option("second", "Same label"),
            option("third", "Same label"),
        ];

        sort_by_display(&mut items, &locale!("en-US")).expect("sort");

        let codes: Vec<&str> = items.iter().map(|i| i.code()).collect();
        assert_eq!(codes, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_empty_slice_is_fine() {
        let mut items: Vec<ProjectedItem> = Vec::new();
        sort_by_display(&mut items, &locale!("en-US")).expect("sort");
        assert!(items.is_empty());
    }
}
