#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub visible: bool,
    pub sortable: bool,
}

impl Column {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            visible: true,
            sortable: true,
        }
    }

    /// Builds a column whose id is derived from its display label.
    pub fn from_label(label: &str) -> Self {
        Self::new(column_id_from_label(label), label)
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// `"Start Date"` becomes `start_date`.
pub fn column_id_from_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
