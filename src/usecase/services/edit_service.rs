use tracing::{debug, warn};

use crate::config::GridConfig;
use crate::domain::coerce::{coerce_integer, is_numeric_input};
use crate::domain::entities::edit::EditBuffer;
use crate::domain::entities::row::{CellValue, Fields};
use crate::error::{GridError, GridResult};
use crate::usecase::ports::store::RecordStore;

/// Moves rows through not-editing → editing → saved/canceled.
pub struct EditService<'a, S: RecordStore + ?Sized> {
    store: &'a mut S,
    buffer: &'a mut EditBuffer,
    config: &'a GridConfig,
}

impl<'a, S: RecordStore + ?Sized> EditService<'a, S> {
    pub fn new(store: &'a mut S, buffer: &'a mut EditBuffer, config: &'a GridConfig) -> Self {
        Self {
            store,
            buffer,
            config,
        }
    }

    /// Seeds the buffer with the row's committed values.
    pub fn enter_edit(&mut self, id: &str) -> bool {
        if self.buffer.is_editing(id) {
            return false;
        }
        let Some(row) = self.store.row(id) else {
            debug!(id, "edit skipped, row not found");
            return false;
        };
        self.buffer.begin(row.id.clone(), row.fields.clone());
        debug!(id, "entered edit mode");
        true
    }

    pub fn toggle_edit(&mut self, id: &str) {
        if self.buffer.is_editing(id) {
            self.cancel_row(id);
        } else {
            self.enter_edit(id);
        }
    }

    pub fn edit_field(&mut self, id: &str, field: &str, raw: &str) -> GridResult<()> {
        if !self.buffer.is_editing(id) {
            debug!(id, field, "field edit ignored, row not in edit mode");
            return Ok(());
        }

        let value = if self.config.is_numeric(field) {
            if !is_numeric_input(raw) {
                let label = self
                    .store
                    .column(field)
                    .map(|column| column.label.as_str())
                    .unwrap_or(field);
                warn!(id, field, raw, "rejected non-numeric input");
                return Err(GridError::validation(
                    field,
                    format!("{label} must be a number"),
                ));
            }
            CellValue::from(coerce_integer(raw))
        } else {
            CellValue::from(raw)
        };

        self.buffer.stage(id, field, value);
        Ok(())
    }

    /// Commits the row's staged values and leaves edit mode.
    pub fn save_row(&mut self, id: &str) -> bool {
        if !self.buffer.is_editing(id) {
            return false;
        }
        let staged = self.buffer.finish(id).unwrap_or_default();
        self.store.update_row(id, &staged);
        debug!(id, fields = staged.len(), "saved row");
        true
    }

    pub fn cancel_row(&mut self, id: &str) -> bool {
        if !self.buffer.is_editing(id) {
            return false;
        }
        self.buffer.finish(id);
        debug!(id, "canceled row edit");
        true
    }

    /// Commits every staged row, then empties the buffer. Returns rows committed.
    pub fn save_all(&mut self) -> usize {
        let staged: Vec<(String, Fields)> = self.buffer.drain();
        let count = staged.len();
        for (id, fields) in staged {
            self.store.update_row(&id, &fields);
        }
        debug!(rows = count, "saved all edits");
        count
    }

    pub fn cancel_all(&mut self) {
        self.buffer.clear();
        debug!("canceled all edits");
    }
}
