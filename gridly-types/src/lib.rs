//! Core type definitions for the Gridly localization sync.
//!
//! This crate defines the fundamental types shared by the sync engine
//! and the commandlet:
//! - the Gridly wire format (table rows and their column/value cells)
//! - localized text records (one translatable string with its native
//!   text and per-culture translations)
//! - the sync configuration surface
//!
//! Engine-side collaborators (data tables, localization targets) are
//! modeled as traits in `gridly-sync`, not here.

mod rows;
mod settings;
mod text;

pub use rows::{TableCell, TableRow};
pub use settings::{ColumnDataType, ColumnInfo, GridlySettings};
pub use text::LocalizedText;
