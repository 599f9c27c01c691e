use std::path::Path;

use tracing::{info, warn};

use crate::config::GridConfig;
use crate::domain::entities::column::Column;
use crate::domain::entities::row::Row;
use crate::error::{GridError, GridResult};
use crate::infra::import::csv::{decode_csv_path, decode_csv_str};
use crate::usecase::ports::store::RecordStore;

/// Identifies one import from start to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportTicket(u64);

impl ImportTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Admits one import at a time and applies its result all-or-nothing.
#[derive(Debug, Default)]
pub struct ImportService {
    pending: Option<ImportTicket>,
    issued: u64,
}

impl ImportService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn begin(&mut self) -> GridResult<ImportTicket> {
        if self.pending.is_some() {
            warn!("rejected import, another one is pending");
            return Err(GridError::ImportInProgress);
        }
        self.issued += 1;
        let ticket = ImportTicket(self.issued);
        self.pending = Some(ticket);
        Ok(ticket)
    }

    /// Replaces the dataset on success. The ticket is released either way.
    pub fn complete<S: RecordStore + ?Sized>(
        &mut self,
        ticket: ImportTicket,
        outcome: GridResult<Vec<Row>>,
        store: &mut S,
    ) -> GridResult<usize> {
        if self.pending != Some(ticket) {
            return Err(GridError::StaleImport { ticket: ticket.id() });
        }
        self.pending = None;

        let rows = outcome.inspect_err(|err| warn!(ticket = ticket.id(), %err, "import failed"))?;
        let count = rows.len();
        store.set_data(rows);
        info!(ticket = ticket.id(), rows = count, "import applied");
        Ok(count)
    }

    pub fn abandon(&mut self, ticket: ImportTicket) {
        if self.pending == Some(ticket) {
            self.pending = None;
        }
    }
}

pub fn decode_file(path: &Path, columns: &[Column], config: &GridConfig) -> GridResult<Vec<Row>> {
    decode_csv_path(path, columns, config)
        .map(|decoded| decoded.rows)
        .map_err(|err| GridError::import_parse(&err))
}

pub fn decode_text(text: &str, columns: &[Column], config: &GridConfig) -> GridResult<Vec<Row>> {
    decode_csv_str(text, columns, config)
        .map(|decoded| decoded.rows)
        .map_err(|err| GridError::import_parse(&err))
}
