use std::collections::{HashMap, HashSet};

use crate::domain::entities::row::{CellValue, Fields, RowId};

/// Rows in edit mode and their staged, uncommitted field values.
///
/// A staged entry only exists for a row that is in edit mode.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    editing: HashSet<RowId>,
    staged: HashMap<RowId, Fields>,
}

impl EditBuffer {
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.editing.is_empty()
    }

    pub fn len(&self) -> usize {
        self.editing.len()
    }

    pub fn staged(&self, id: &str) -> Option<&Fields> {
        self.staged.get(id)
    }

    pub fn begin(&mut self, id: RowId, seed: Fields) {
        self.staged.insert(id.clone(), seed);
        self.editing.insert(id);
    }

    /// Returns false when the row is not in edit mode.
    pub fn stage(&mut self, id: &str, field: &str, value: CellValue) -> bool {
        if !self.editing.contains(id) {
            return false;
        }
        self.staged
            .entry(id.to_string())
            .or_default()
            .insert(field.to_string(), value);
        true
    }

    /// Leaves edit mode for `id`, handing back whatever was staged.
    pub fn finish(&mut self, id: &str) -> Option<Fields> {
        self.editing.remove(id);
        self.staged.remove(id)
    }

    pub fn drain(&mut self) -> Vec<(RowId, Fields)> {
        self.editing.clear();
        self.staged.drain().collect()
    }

    /// Drops edit state for every row `keep` rejects.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.editing.retain(|id| keep(id));
        let editing = &self.editing;
        self.staged.retain(|id, _| editing.contains(id));
    }

    pub fn clear(&mut self) {
        self.editing.clear();
        self.staged.clear();
    }
}
