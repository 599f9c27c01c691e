use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::config::GridConfig;
use crate::domain::coerce::coerce_integer;
use crate::domain::entities::column::{column_id_from_label, Column};
use crate::domain::entities::row::{CellValue, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCsv {
    pub rows: Vec<Row>,
    /// Field id each header was mapped to, in file order.
    pub field_ids: Vec<String>,
}

/// Maps a header to a column id: label, then id, then label ignoring case,
/// then the id a new column with that label would get.
pub fn field_id_for_header(header: &str, columns: &[Column]) -> String {
    columns
        .iter()
        .find(|column| column.label == header)
        .or_else(|| columns.iter().find(|column| column.id == header))
        .or_else(|| {
            columns
                .iter()
                .find(|column| column.label.eq_ignore_ascii_case(header))
        })
        .map(|column| column.id.clone())
        .unwrap_or_else(|| column_id_from_label(header))
}

/// Decodes a whole document. Any malformed record fails the entire decode.
pub fn decode_csv<R: Read>(
    source: R,
    columns: &[Column],
    config: &GridConfig,
    batch: i64,
) -> Result<DecodedCsv> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(source);
    let headers = reader
        .headers()
        .context("failed to read csv header")?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let field_ids: Vec<String> = headers
        .iter()
        .map(|header| field_id_for_header(header, columns))
        .collect();

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to parse csv row {}", row_idx + 1))?;
        rows.push(build_row(&record, &field_ids, config, batch, row_idx));
    }

    Ok(DecodedCsv { rows, field_ids })
}

pub fn decode_csv_str(text: &str, columns: &[Column], config: &GridConfig) -> Result<DecodedCsv> {
    decode_csv(text.as_bytes(), columns, config, import_batch())
}

pub fn decode_csv_path(path: &Path, columns: &[Column], config: &GridConfig) -> Result<DecodedCsv> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open csv: {}", path.display()))?;
    decode_csv(file, columns, config, import_batch())
        .with_context(|| format!("failed to import {}", path.display()))
}

/// Millisecond timestamp shared by every id of one import.
pub fn import_batch() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn build_row(
    record: &StringRecord,
    field_ids: &[String],
    config: &GridConfig,
    batch: i64,
    row_idx: usize,
) -> Row {
    let mut row = Row::new(format!("{}-{batch}-{row_idx}", config.import_id_prefix));
    for (field, value) in field_ids.iter().zip(record.iter()) {
        // Ids are always synthetic; an id column in the file is dropped.
        if field == "id" {
            continue;
        }
        let value = if config.is_numeric(field) {
            CellValue::from(coerce_integer(value))
        } else {
            CellValue::from(value)
        };
        row.fields.insert(field.clone(), value);
    }
    for field in &config.numeric_fields {
        row.fields
            .entry(field.clone())
            .or_insert(CellValue::from(0));
    }
    row
}
