use std::collections::BTreeMap;
use std::fmt;

pub type RowId = String;

/// Field values keyed by column id.
pub type Fields = BTreeMap<String, CellValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// One record of the table. The id lives outside `fields` and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub fields: Fields,
}

impl Row {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            fields: Fields::new(),
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    /// Overwrites the given fields, leaving every other field untouched.
    pub fn merge(&mut self, fields: &Fields) {
        for (field, value) in fields {
            self.fields.insert(field.clone(), value.clone());
        }
    }

    /// `needle` must already be lower-cased. The id counts as a field value.
    pub fn contains_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.id.to_lowercase().contains(needle)
            || self
                .fields
                .values()
                .any(|value| value.to_string().to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(CellValue::from(30).to_string(), "30");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from("Developer").to_string(), "Developer");
    }

    #[test]
    fn merge_keeps_untouched_fields() {
        let mut row = Row::new("1").with("name", "Ann").with("age", 30);
        let mut patch = Fields::new();
        patch.insert("age".to_string(), CellValue::from(31));

        row.merge(&patch);

        assert_eq!(row.get("name"), Some(&CellValue::from("Ann")));
        assert_eq!(row.get("age"), Some(&CellValue::from(31)));
        assert_eq!(row.id, "1");
    }

    #[test]
    fn contains_text_checks_id_and_every_field() {
        let row = Row::new("imported-7").with("email", "Ann@Example.com").with("age", 42);

        assert!(row.contains_text("example"));
        assert!(row.contains_text("42"));
        assert!(row.contains_text("imported"));
        assert!(row.contains_text(""));
        assert!(!row.contains_text("bob"));
    }
}
