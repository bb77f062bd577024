//! Projection of candidate languages into UI-facing resource shapes.
//!
//! Two shapes exist: a select-field option (`value`/`text`) and a text-field
//! descriptor (`name`/`fieldLabel`). Both carry the same composed display
//! string, which doubles as the sort key during collation. The composition
//! rule is part of the output contract and must not change.

use serde::Serialize;

use crate::catalog::LanguageEntry;

/// A candidate language rendered into one of the two output shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProjectedItem {
    /// Option for a select field: `value` is the code, `text` the display.
    SelectOption { value: String, text: String },

    /// Descriptor for a pre-filled text field: `name` is the code,
    /// `fieldLabel` the display.
    TextField {
        name: String,
        #[serde(rename = "fieldLabel")]
        field_label: String,
    },
}

/// Compose the display string shown to users: `label (code)`.
///
/// The single space before the parenthesis is load-bearing; downstream
/// consumers parse and render this format as-is.
fn display(label: &str, code: &str) -> String {
    format!("{} ({})", label, code)
}

/// Project one candidate into the shape selected by `emit_text_fields`.
pub fn project(entry: &LanguageEntry, emit_text_fields: bool) -> ProjectedItem {
    let text = display(&entry.label, &entry.code);
    if emit_text_fields {
        ProjectedItem::TextField {
            name: entry.code.clone(),
            field_label: text,
        }
    } else {
        ProjectedItem::SelectOption {
            value: entry.code.clone(),
            text,
        }
    }
}

impl ProjectedItem {
    /// The language/country code this item stands for.
    pub fn code(&self) -> &str {
        match self {
            ProjectedItem::SelectOption { value, .. } => value,
            ProjectedItem::TextField { name, .. } => name,
        }
    }

    /// The composed display string, also used as the collation key.
    pub fn display_text(&self) -> &str {
        match self {
            ProjectedItem::SelectOption { text, .. } => text,
            ProjectedItem::TextField { field_label, .. } => field_label,
        }
    }
}
