//! Data table interface and row conversion.
//!
//! The engine's data tables are a collaborator; the sync engine sees
//! them only through the [`DataTable`] trait: an explicit ordered
//! schema of scalar columns plus name-keyed rows. Composite fields
//! (arrays, sets, maps, nested structs) are not part of the schema
//! contract and therefore never cross the wire.

use crate::error::GridlyResult;
use gridly_types::{TableCell, TableRow};
use tracing::warn;

/// Scalar column kinds a data table can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    String,
    Integer,
    Float,
    Bool,
    /// Enums export their variant name as a string.
    Enum,
}

impl ColumnKind {
    /// Whether a value agrees with this column's declared kind.
    /// Integer values are acceptable for float columns.
    fn accepts(self, value: &CellValue) -> bool {
        matches!(
            (self, value),
            (Self::String | Self::Enum, CellValue::String(_))
                | (Self::Integer, CellValue::Integer(_))
                | (Self::Float, CellValue::Float(_) | CellValue::Integer(_))
                | (Self::Bool, CellValue::Bool(_))
        )
    }
}

/// One column of a data table schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub id: String,
    pub kind: ColumnKind,
}

/// One field value of a data table row, ordered per the schema.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Integer(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

/// A row handed back to the table on import: the row name plus one
/// value per column id, as downloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRow {
    pub name: String,
    pub fields: Vec<(String, String)>,
}

/// A data table as the sync engine sees it: a remote view id, an
/// ordered scalar schema, and rows keyed by name.
pub trait DataTable {
    /// The remote view this table syncs against.
    fn view_id(&self) -> &str;

    /// Ordered column schema.
    fn columns(&self) -> Vec<ColumnDescriptor>;

    /// All rows, each as (name, values ordered per `columns`).
    fn rows(&self) -> Vec<(String, Vec<CellValue>)>;

    /// Replaces the table's existing contents with imported rows.
    fn replace_contents(&mut self, rows: Vec<ImportedRow>) -> GridlyResult<()>;
}

/// Serializes a data table into export rows: id = row name, one cell
/// per schema column with a string/number/bool value. A value that
/// disagrees with its column's declared kind is dropped with a
/// warning; the rest of the row still exports.
#[must_use]
pub fn data_table_to_rows(table: &dyn DataTable) -> Vec<TableRow> {
    let columns = table.columns();

    table
        .rows()
        .into_iter()
        .map(|(name, values)| {
            let cells = columns
                .iter()
                .zip(values.iter())
                .filter_map(|(column, value)| {
                    if !column.kind.accepts(value) {
                        warn!(
                            "row {name}: value for column {} does not match its declared kind, skipping cell",
                            column.id
                        );
                        return None;
                    }
                    Some(TableCell::new(column.id.clone(), value.to_json()))
                })
                .collect();
            TableRow::new(name, cells)
        })
        .collect()
}

/// Converts downloaded wire rows into name-keyed imported rows for
/// [`DataTable::replace_contents`].
#[must_use]
pub fn rows_to_imported_rows(rows: &[TableRow]) -> Vec<ImportedRow> {
    rows.iter()
        .map(|row| ImportedRow {
            name: row.id.clone(),
            fields: row
                .cells
                .iter()
                .map(|cell| (cell.column_id.clone(), cell.value_str()))
                .collect(),
        })
        .collect()
}
