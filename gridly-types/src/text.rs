//! Localized text records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One translatable string: key, namespace, native text and culture,
/// plus per-culture translations.
///
/// Records are produced from table rows during import and consumed by
/// the exporter and the `.po` writer. Translation keys are unique;
/// inserting an existing culture overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub key: String,
    #[serde(default)]
    pub namespace: String,
    pub native_culture: String,
    pub native_string: String,
    #[serde(default)]
    pub translations: IndexMap<String, String>,
    /// Source location of the string; exported to the context column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Free-form metadata, exported through the metadata mapping.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, String>,
}

impl LocalizedText {
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        native_string: impl Into<String>,
        native_culture: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            namespace: namespace.into(),
            native_culture: native_culture.into(),
            native_string: native_string.into(),
            translations: IndexMap::new(),
            context: None,
            metadata: IndexMap::new(),
        }
    }

    /// Returns the translation for a culture, if present.
    #[must_use]
    pub fn localized_string(&self, culture: &str) -> Option<&str> {
        self.translations.get(culture).map(String::as_str)
    }

    /// Adds or overwrites the translation for a culture.
    pub fn add_localized_string(&mut self, culture: impl Into<String>, value: impl Into<String>) {
        self.translations.insert(culture.into(), value.into());
    }
}
