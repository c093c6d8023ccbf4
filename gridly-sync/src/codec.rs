//! Conversion between Gridly table rows and localized text records.
//!
//! Import walks each row's cells looking for the namespace column and
//! the source/target language column prefixes; export builds one row
//! per record with id, namespace (path or cell), source text, and
//! optional context, metadata, and translation cells.

use crate::culture::CultureMapper;
use crate::error::{GridlyError, GridlyResult};
use gridly_types::{ColumnDataType, GridlySettings, LocalizedText, TableCell, TableRow};
use indexmap::IndexMap;
use tracing::warn;

/// Converts downloaded table rows into localized text records keyed
/// by record key. Later rows with a duplicate key overwrite earlier
/// ones.
///
/// Rows without a resolvable source culture and non-empty source text
/// are skipped with a warning; target cells whose culture suffix does
/// not resolve are silently dropped. Fails only when no usable record
/// remains at all.
pub fn table_rows_to_localized_texts(
    rows: &[TableRow],
    available_cultures: &[String],
    settings: &GridlySettings,
) -> GridlyResult<IndexMap<String, LocalizedText>> {
    let mapper = CultureMapper::new(settings);
    let use_combined = settings.use_combined_namespace_id;
    let use_path = settings.use_path_as_namespace();

    let mut records = IndexMap::new();

    for row in rows {
        let mut key = row.id.clone();
        let mut namespace = if use_path {
            row.path.clone().unwrap_or_default()
        } else {
            String::new()
        };
        let mut source_culture = String::new();
        let mut source_text = String::new();
        let mut translations: IndexMap<String, String> = IndexMap::new();

        for cell in &row.cells {
            if !use_path && cell.column_id == settings.namespace_column_id {
                namespace = cell.value_str();
                continue;
            }

            if let Some(suffix) = cell
                .column_id
                .strip_prefix(&settings.source_language_column_id_prefix)
            {
                if let Some(culture) = mapper.convert_from_gridly(available_cultures, suffix) {
                    source_culture = culture;
                    source_text = cell.value_str();
                }
            } else if let Some(suffix) = cell
                .column_id
                .strip_prefix(&settings.target_language_column_id_prefix)
            {
                if let Some(culture) = mapper.convert_from_gridly(available_cultures, suffix) {
                    translations.insert(culture, cell.value_str());
                }
            }
        }

        if use_combined {
            if let Some((ns, rest)) = key.split_once(',') {
                namespace = ns.to_string();
                key = rest.to_string();
            }
        }

        namespace = namespace.replace(' ', "");

        if source_text.is_empty() || source_culture.is_empty() {
            warn!(
                "could not find native culture/source string in imported text with key: {},{}",
                namespace, key
            );
            continue;
        }

        let mut record = LocalizedText::new(namespace, key.clone(), source_text, source_culture);
        for (culture, translation) in translations {
            if !translation.is_empty() {
                record.add_localized_string(culture, translation);
            }
        }

        records.insert(key, record);
    }

    if records.is_empty() {
        return Err(GridlyError::Parse(
            "Failed to parse downloaded content".to_string(),
        ));
    }

    Ok(records)
}

/// Builds export rows from localized text records.
///
/// Each record becomes one row: a plain or combined `{namespace},{key}`
/// id, the namespace as path tag or namespace cell, one source
/// language cell, optional context and metadata cells, and — when
/// `include_target_translations` is set — one cell per target culture
/// with a non-empty translation.
#[must_use]
pub fn localized_texts_to_rows(
    records: &[LocalizedText],
    include_target_translations: bool,
    target_cultures: &[String],
    settings: &GridlySettings,
) -> Vec<TableRow> {
    let mapper = CultureMapper::new(settings);
    let use_combined = settings.use_combined_namespace_id;
    // Export treats "path" as the path tag even with combined ids.
    let use_path = settings.namespace_column_id == "path";

    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let id = if use_combined {
            format!("{},{}", record.namespace, record.key)
        } else {
            record.key.clone()
        };
        let mut row = TableRow::new(id, Vec::new());

        if use_path {
            row.path = Some(record.namespace.clone());
        } else if !settings.namespace_column_id.is_empty()
            && (!use_combined || settings.also_export_namespace_column)
        {
            row.cells.push(TableCell::text(
                settings.namespace_column_id.clone(),
                record.namespace.clone(),
            ));
        }

        if let Some(gridly_culture) = mapper.convert_to_gridly(&record.native_culture) {
            row.cells.push(TableCell::text(
                format!(
                    "{}{}",
                    settings.source_language_column_id_prefix, gridly_culture
                ),
                record.native_string.clone(),
            ));
        }

        if settings.export_context && !settings.context_column_id.is_empty() {
            if let Some(context) = record.context.as_ref().filter(|c| !c.is_empty()) {
                row.cells.push(TableCell::text(
                    settings.context_column_id.clone(),
                    context.clone(),
                ));
            }
        }

        if settings.export_metadata {
            for (field, column) in &settings.metadata_mapping {
                if let Some(value) = record.metadata.get(field) {
                    row.cells
                        .push(metadata_cell(&column.name, value, column.data_type));
                }
            }
        }

        if include_target_translations {
            for culture in target_cultures {
                if culture == &record.native_culture {
                    continue;
                }
                let Some(translation) = record.localized_string(culture) else {
                    continue;
                };
                if translation.is_empty() {
                    continue;
                }
                if let Some(gridly_culture) = mapper.convert_to_gridly(culture) {
                    row.cells.push(TableCell::text(
                        format!(
                            "{}{}",
                            settings.target_language_column_id_prefix, gridly_culture
                        ),
                        translation,
                    ));
                }
            }
        }

        rows.push(row);
    }

    rows
}

/// Builds a metadata cell, numeric when the mapping says so and the
/// value parses, falling back to a string cell otherwise.
fn metadata_cell(column_id: &str, value: &str, data_type: ColumnDataType) -> TableCell {
    match data_type {
        ColumnDataType::Number => match value.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
            Some(number) => TableCell::new(column_id.to_string(), serde_json::Value::Number(number)),
            None => {
                warn!("metadata value for column {column_id} is not numeric, exporting as string");
                TableCell::text(column_id.to_string(), value.to_string())
            }
        },
        ColumnDataType::String => TableCell::text(column_id.to_string(), value.to_string()),
    }
}
