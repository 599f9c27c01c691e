use crate::domain::entities::column::Column;
use crate::domain::entities::row::{Fields, Row};

/// Committed rows plus column configuration.
///
/// Mutations return whether their target was found. Callers treat a miss as
/// a silent no-op.
pub trait RecordStore {
    fn rows(&self) -> &[Row];
    fn columns(&self) -> &[Column];

    fn set_data(&mut self, rows: Vec<Row>);
    /// Appends; the caller guarantees the id is unique.
    fn add_row(&mut self, row: Row);
    fn update_row(&mut self, id: &str, fields: &Fields) -> bool;
    fn delete_row(&mut self, id: &str) -> bool;

    fn set_columns(&mut self, columns: Vec<Column>);
    fn add_column(&mut self, column: Column);
    fn remove_column(&mut self, id: &str) -> bool;
    fn toggle_column_visibility(&mut self, id: &str) -> bool;

    fn row(&self, id: &str) -> Option<&Row> {
        self.rows().iter().find(|row| row.id == id)
    }

    fn column(&self, id: &str) -> Option<&Column> {
        self.columns().iter().find(|column| column.id == id)
    }

    fn visible_columns(&self) -> Vec<&Column> {
        self.columns().iter().filter(|column| column.visible).collect()
    }
}
