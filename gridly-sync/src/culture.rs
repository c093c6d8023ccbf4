//! Culture identifier conversion.
//!
//! Two textual formats are in play: the engine format `xx-YY`
//! (`en-US`) and Gridly's compact format `xxYY` (`enUS`). An explicit
//! override mapping from the settings is consulted first; otherwise a
//! structural rule splits or joins the language and region blocks.

use gridly_types::GridlySettings;
use regex_lite::Regex;

/// Bidirectional culture converter over one settings snapshot.
pub struct CultureMapper<'a> {
    settings: &'a GridlySettings,
}

impl<'a> CultureMapper<'a> {
    #[must_use]
    pub fn new(settings: &'a GridlySettings) -> Self {
        Self { settings }
    }

    /// Converts a Gridly culture (`enUS`) to an engine culture
    /// (`en-US`), resolved against the available cultures.
    ///
    /// A custom mapping entry whose value equals `gridly_culture`
    /// wins outright. Otherwise the lowercase block and uppercase
    /// block are split, joined with `-`, and matched against
    /// `available`: exact match first, then language-only fallback.
    /// Returns `None` for empty input, input that does not fit the
    /// structural rule, or an unresolvable culture.
    #[must_use]
    pub fn convert_from_gridly(&self, available: &[String], gridly_culture: &str) -> Option<String> {
        if gridly_culture.is_empty() {
            return None;
        }

        if self.settings.use_custom_culture_mapping {
            if let Some((culture, _)) = self
                .settings
                .custom_culture_mapping
                .iter()
                .find(|(_, mapped)| mapped.as_str() == gridly_culture)
            {
                return Some(culture.clone());
            }
        }

        let pattern = Regex::new("([a-z]+)([A-Z]+)").expect("culture split pattern is valid");
        let captures = pattern.captures(gridly_culture)?;
        let candidate = format!("{}-{}", &captures[1], &captures[2]);

        suitable_culture(available, &candidate)
    }

    /// Converts an engine culture (`en-US`) to a Gridly culture
    /// (`enUS`).
    ///
    /// A custom mapping entry keyed by `culture` wins outright.
    /// Otherwise the first `-` is removed; input without a `-` passes
    /// through unchanged. Returns `None` only for empty input.
    #[must_use]
    pub fn convert_to_gridly(&self, culture: &str) -> Option<String> {
        if culture.is_empty() {
            return None;
        }

        if self.settings.use_custom_culture_mapping {
            if let Some(mapped) = self.settings.custom_culture_mapping.get(culture) {
                return Some(mapped.clone());
            }
        }

        match culture.split_once('-') {
            Some((language, region)) => Some(format!("{language}{region}")),
            None => Some(culture.to_string()),
        }
    }
}

/// Resolves a candidate culture against the available set: exact
/// match first, otherwise the first available culture whose language
/// part matches the candidate's language.
fn suitable_culture(available: &[String], candidate: &str) -> Option<String> {
    if let Some(exact) = available.iter().find(|c| c.as_str() == candidate) {
        return Some(exact.clone());
    }

    let language = candidate.split('-').next().unwrap_or(candidate);
    available
        .iter()
        .find(|c| c.split('-').next().unwrap_or(c) == language)
        .cloned()
}
