use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::entities::column::Column;
use crate::domain::entities::row::Row;

/// Writes a header of visible column labels, then one record per row.
pub fn encode_csv<W: Write>(sink: W, rows: &[Row], columns: &[Column]) -> Result<()> {
    let visible: Vec<&Column> = columns.iter().filter(|column| column.visible).collect();

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(sink);

    writer
        .write_record(visible.iter().map(|column| column.label.as_str()))
        .context("failed to write csv header")?;

    for row in rows {
        let record: Vec<String> = visible
            .iter()
            .map(|column| {
                row.get(&column.id)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("failed to write csv row {}", row.id))?;
    }

    writer.flush().context("failed to flush csv writer")?;
    Ok(())
}

pub fn encode_csv_string(rows: &[Row], columns: &[Column]) -> Result<String> {
    let mut buffer = Vec::new();
    encode_csv(&mut buffer, rows, columns)?;
    String::from_utf8(buffer).context("csv output is not valid utf-8")
}

/// Encodes fully in memory, then moves the file into place so a failure
/// never leaves a partial document at `path`.
pub fn export_csv_to_path(path: &Path, rows: &[Row], columns: &[Column]) -> Result<()> {
    let document = encode_csv_string(rows, columns)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let staging = staging_path(path);
    std::fs::write(&staging, document)
        .with_context(|| format!("failed to write {}", staging.display()))?;
    if let Err(err) = std::fs::rename(&staging, path) {
        std::fs::remove_file(&staging).ok();
        return Err(err).with_context(|| format!("failed to move export into {}", path.display()));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::{default_columns, seed_rows};

    #[test]
    fn encode_writes_visible_labels_and_values() {
        let mut columns = default_columns();
        columns[1] = columns[1].clone().hidden();

        let csv = encode_csv_string(&seed_rows(), &columns).expect("encode should succeed");

        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines[0], "Name,Age,Role");
        assert_eq!(lines[2], "Borifan Dabasa,25,Designer");
        assert_eq!(lines.len(), 5, "three rows plus header plus trailing empty: {csv:?}");
    }

    #[test]
    fn missing_fields_encode_as_empty() {
        let rows = vec![Row::new("9").with("name", "Ann")];

        let csv = encode_csv_string(&rows, &default_columns()).expect("encode should succeed");

        assert!(csv.ends_with("Ann,,,\r\n"), "unexpected csv: {csv:?}");
    }

    #[test]
    fn values_with_commas_are_quoted() {
        let rows = vec![Row::new("9").with("name", "Fuad, Bonsan").with("age", 0)];

        let csv = encode_csv_string(&rows, &default_columns()).expect("encode should succeed");

        assert!(csv.contains("\"Fuad, Bonsan\",,0,"), "unexpected csv: {csv:?}");
    }

    #[test]
    fn export_to_missing_directory_leaves_no_file() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("should write blocker file");
        let target = blocker.join("table-data.csv");

        let result = export_csv_to_path(&target, &seed_rows(), &default_columns());

        assert!(result.is_err());
        assert!(!target.exists());
    }
}
