use std::path::PathBuf;

use crate::domain::entities::column::Column;
use crate::domain::entities::dataset::SortSpec;
use crate::domain::entities::row::{Fields, Row};

/// Everything the display layer can ask the table to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetSearchTerm(String),
    /// `None` clears sorting.
    SetSort(Option<SortSpec>),
    /// Header click: ascending first, then flips direction.
    ToggleSort(String),
    SetPage(usize),

    AddRow(Row),
    UpdateRow { id: String, fields: Fields },
    DeleteRow(String),
    SetData(Vec<Row>),

    AddColumn(Column),
    /// Adds a column from a user-typed name.
    AddColumnNamed(String),
    RemoveColumn(String),
    ToggleColumnVisibility(String),
    SetColumns(Vec<Column>),

    EnterEdit(String),
    ToggleEdit(String),
    EditField { id: String, field: String, value: String },
    SaveRow(String),
    CancelRow(String),
    SaveAll,
    CancelAll,

    ImportCsv(PathBuf),
    /// `None` writes the default file name into the default export folder.
    ExportCsv(Option<PathBuf>),
}
