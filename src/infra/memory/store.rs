use tracing::debug;

use crate::domain::entities::column::Column;
use crate::domain::entities::row::{Fields, Row};
use crate::domain::seed::{default_columns, seed_rows};
use crate::usecase::ports::store::RecordStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    rows: Vec<Row>,
    columns: Vec<Column>,
}

impl MemoryStore {
    pub fn new(rows: Vec<Row>, columns: Vec<Column>) -> Self {
        Self { rows, columns }
    }

    /// The built-in sample table.
    pub fn seeded() -> Self {
        Self::new(seed_rows(), default_columns())
    }
}

impl RecordStore for MemoryStore {
    fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn set_data(&mut self, rows: Vec<Row>) {
        debug!(rows = rows.len(), "replacing dataset");
        self.rows = rows;
    }

    fn add_row(&mut self, row: Row) {
        debug!(id = %row.id, "adding row");
        self.rows.push(row);
    }

    fn update_row(&mut self, id: &str, fields: &Fields) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            debug!(id, "update skipped, row not found");
            return false;
        };
        row.merge(fields);
        true
    }

    fn delete_row(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        before != self.rows.len()
    }

    fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    fn add_column(&mut self, column: Column) {
        debug!(id = %column.id, "adding column");
        self.columns.push(column);
    }

    fn remove_column(&mut self, id: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|column| column.id != id);
        before != self.columns.len()
    }

    fn toggle_column_visibility(&mut self, id: &str) -> bool {
        match self.columns.iter_mut().find(|column| column.id == id) {
            Some(column) => {
                column.visible = !column.visible;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::row::CellValue;

    #[test]
    fn seeded_store_has_three_rows_and_four_columns() {
        let store = MemoryStore::seeded();

        assert_eq!(store.rows().len(), 3);
        let ids: Vec<&str> = store.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["name", "email", "age", "role"]);
    }

    #[test]
    fn add_row_appends_at_end() {
        let mut store = MemoryStore::seeded();

        store.add_row(Row::new("4").with("name", "Dawit"));

        assert_eq!(store.rows().last().map(|row| row.id.as_str()), Some("4"));
    }

    #[test]
    fn update_row_merges_partial_fields() {
        let mut store = MemoryStore::seeded();
        let mut patch = Fields::new();
        patch.insert("role".to_string(), CellValue::from("Lead"));

        assert!(store.update_row("2", &patch));

        let row = store.row("2").expect("row 2 should exist");
        assert_eq!(row.get("role"), Some(&CellValue::from("Lead")));
        assert_eq!(row.get("name"), Some(&CellValue::from("Borifan Dabasa")));
    }

    #[test]
    fn unknown_targets_are_noops() {
        let mut store = MemoryStore::seeded();
        let before = store.clone();

        assert!(!store.update_row("missing", &Fields::new()));
        assert!(!store.delete_row("missing"));
        assert!(!store.toggle_column_visibility("missing"));
        assert!(!store.remove_column("missing"));

        assert_eq!(store, before);
    }

    #[test]
    fn toggle_visibility_flips_flag_and_filters_visible_columns() {
        let mut store = MemoryStore::seeded();

        assert!(store.toggle_column_visibility("email"));

        let visible: Vec<&str> = store
            .visible_columns()
            .iter()
            .map(|column| column.id.as_str())
            .collect();
        assert_eq!(visible, vec!["name", "age", "role"]);

        store.toggle_column_visibility("email");
        assert_eq!(store.visible_columns().len(), 4);
    }

    #[test]
    fn delete_row_removes_only_the_match() {
        let mut store = MemoryStore::seeded();

        assert!(store.delete_row("1"));

        let ids: Vec<&str> = store.rows().iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }
}
