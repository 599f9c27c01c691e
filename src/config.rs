use std::collections::BTreeSet;
use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};

pub const PAGE_SIZE: usize = 10;
pub const DEFAULT_EXPORT_FILE_NAME: &str = "table-data.csv";
pub const DEFAULT_IMPORT_ID_PREFIX: &str = "imported";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub page_size: usize,
    pub export_file_name: String,
    /// Fields that only hold integers; edits are validated and imports coerced.
    pub numeric_fields: BTreeSet<String>,
    pub import_id_prefix: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            numeric_fields: BTreeSet::from(["age".to_string()]),
            import_id_prefix: DEFAULT_IMPORT_ID_PREFIX.to_string(),
        }
    }
}

impl GridConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }

    pub fn with_numeric_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_import_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.import_id_prefix = prefix.into();
        self
    }

    pub fn is_numeric(&self, field: &str) -> bool {
        self.numeric_fields.contains(field)
    }

    pub fn default_export_path(&self) -> PathBuf {
        default_export_dir().join(&self.export_file_name)
    }
}

/// The user's download folder, then the app data folder, then the working directory.
pub fn default_export_dir() -> PathBuf {
    if let Some(dir) = UserDirs::new().and_then(|dirs| dirs.download_dir().map(PathBuf::from)) {
        return dir;
    }
    ProjectDirs::from("com", "hellhbbd", "datagrid")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_seed_table() {
        let config = GridConfig::default();

        assert_eq!(config.page_size, 10);
        assert_eq!(config.export_file_name, "table-data.csv");
        assert!(config.is_numeric("age"));
        assert!(!config.is_numeric("name"));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(GridConfig::default().with_page_size(0).page_size, 1);
    }

    #[test]
    fn default_export_path_ends_with_file_name() {
        let path = GridConfig::default()
            .with_export_file_name("people.csv")
            .default_export_path();

        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("people.csv")
        );
    }
}
