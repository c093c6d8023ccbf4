//! `.po` file output.
//!
//! For each record with a non-empty translation in the target
//! culture, three lines are emitted — `msgctxt "{namespace},{key}"`,
//! `msgid "{native}"`, `msgstr "{translation}"` — followed by a blank
//! line.

use crate::error::GridlyResult;
use gridly_types::LocalizedText;
use std::fs;
use std::path::Path;
use tracing::info;

/// Builds the `.po` lines for one target culture.
#[must_use]
pub fn po_lines(records: &[LocalizedText], target_culture: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for record in records {
        let Some(translation) = record.localized_string(target_culture) else {
            continue;
        };
        if translation.is_empty() {
            continue;
        }

        lines.push(format!("msgctxt \"{},{}\"", record.namespace, record.key));
        lines.push(format!("msgid \"{}\"", escape(&record.native_string)));
        lines.push(format!("msgstr \"{}\"", escape(translation)));
        lines.push(String::new());
    }

    lines
}

/// Writes one target culture's translations as a `.po` file, creating
/// parent directories as needed.
pub fn write_po_file(
    records: &[LocalizedText],
    target_culture: &str,
    path: &Path,
) -> GridlyResult<()> {
    let lines = po_lines(records, target_culture);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, lines.join("\n") + "\n")?;

    info!(
        "exported .po file ({} lines): {}",
        lines.len(),
        path.display()
    );
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
