//! TOML configuration for the sync tool.
//!
//! A config file holds one or more named sections, each a complete
//! sync profile. Field names match the original plugin's settings so
//! existing sections carry over unchanged.

use anyhow::{Context, Result, bail};
use gridly_types::GridlySettings;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One named sync profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncProfile {
    /// Download records and write `.po` files.
    pub b_import_loc: bool,
    /// Upload source strings from the export manifest.
    pub b_export_loc: bool,
    /// The project's native culture, e.g. `en`.
    pub native_culture: String,
    /// Every culture the project localizes into, native included.
    pub cultures: Vec<String>,
    /// Directory `.po` files are written under, one subdirectory per
    /// target culture.
    pub po_output_dir: PathBuf,
    /// Localization target name; becomes the `.po` file stem.
    pub target_name: String,
    /// JSON manifest of localized text records to export.
    pub export_manifest_path: Option<PathBuf>,
    /// Shell command run after `.po` files are written, typically the
    /// engine's own import step. A failure is logged, not fatal.
    pub import_command: Option<String>,
    #[serde(flatten)]
    pub settings: GridlySettings,
}

impl Default for SyncProfile {
    fn default() -> Self {
        Self {
            b_import_loc: false,
            b_export_loc: false,
            native_culture: "en".to_string(),
            cultures: Vec::new(),
            po_output_dir: PathBuf::from("Localization"),
            target_name: "Game".to_string(),
            export_manifest_path: None,
            import_command: None,
            settings: GridlySettings::default(),
        }
    }
}

/// Parsed config file: a map of section name to profile.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ConfigFile {
    sections: BTreeMap<String, SyncProfile>,
}

impl ConfigFile {
    /// Loads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Looks up one section by name.
    pub fn section(&self, name: &str) -> Result<&SyncProfile> {
        match self.sections.get(name) {
            Some(profile) => Ok(profile),
            None => bail!("config has no [{name}] section"),
        }
    }
}
