use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::column::{column_id_from_label, Column};
use crate::domain::entities::dataset::{PageResult, SortDirection, SortSpec};
use crate::domain::entities::row::{Fields, Row};
use crate::error::{GridError, GridResult};
use crate::infra::memory::store::MemoryStore;
use crate::platform::background::{self, Poll};
use crate::ui::command::Command;
use crate::ui::state::app_state::{AppState, PendingImport};
use crate::ui::state::notification::Notification;
use crate::usecase::ports::store::RecordStore;
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::{decode_file, decode_text, ImportTicket};
use crate::usecase::services::query_service::QueryService;

impl AppState {
    /// Applies one command. Failures are also queued as notifications.
    pub fn dispatch(&mut self, command: Command) -> GridResult<()> {
        debug!(?command, "dispatch");
        match command {
            Command::SetSearchTerm(term) => self.set_search_term(term),
            Command::SetSort(sort) => self.set_sort(sort),
            Command::ToggleSort(column_id) => self.toggle_sort(&column_id),
            Command::SetPage(page) => self.set_page(page),
            Command::AddRow(row) => self.add_row(row),
            Command::UpdateRow { id, fields } => self.update_row(&id, &fields),
            Command::DeleteRow(id) => self.delete_row(&id),
            Command::SetData(rows) => self.set_data(rows),
            Command::AddColumn(column) => self.add_column(column),
            Command::AddColumnNamed(label) => self.add_column_named(&label)?,
            Command::RemoveColumn(id) => self.remove_column(&id),
            Command::ToggleColumnVisibility(id) => self.toggle_column_visibility(&id),
            Command::SetColumns(columns) => self.set_columns(columns),
            Command::EnterEdit(id) => self.enter_edit(&id),
            Command::ToggleEdit(id) => self.toggle_edit(&id),
            Command::EditField { id, field, value } => self.edit_field(&id, &field, &value)?,
            Command::SaveRow(id) => self.save_row(&id),
            Command::CancelRow(id) => self.cancel_row(&id),
            Command::SaveAll => self.save_all(),
            Command::CancelAll => self.cancel_all(),
            Command::ImportCsv(path) => {
                self.import_csv_file(&path)?;
            }
            Command::ExportCsv(path) => {
                self.export_csv(path)?;
            }
        }
        Ok(())
    }

    // View state.

    /// Also returns to the first page, so a narrower filter never lands on an empty one.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
        self.view.page = 0;
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.view.sort = sort;
    }

    pub fn toggle_sort(&mut self, column_id: &str) {
        if !self.store.column(column_id).is_some_and(|column| column.sortable) {
            debug!(column_id, "sort ignored, column missing or not sortable");
            return;
        }
        let direction = match &self.view.sort {
            Some(sort) if sort.column_id == column_id => sort.direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.view.sort = Some(SortSpec {
            column_id: column_id.to_string(),
            direction,
        });
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.page = page;
    }

    // Rows.

    pub fn add_row(&mut self, row: Row) {
        self.store.add_row(row);
    }

    pub fn update_row(&mut self, id: &str, fields: &Fields) {
        self.store.update_row(id, fields);
    }

    /// A row deleted mid-edit also drops its staged values.
    pub fn delete_row(&mut self, id: &str) {
        if self.store.delete_row(id) {
            self.edits.finish(id);
        }
    }

    /// Edit state survives only for ids present in the new data.
    pub fn set_data(&mut self, rows: Vec<Row>) {
        self.store.set_data(rows);
        self.prune_edits();
    }

    // Columns.

    pub fn add_column(&mut self, column: Column) {
        self.store.add_column(column);
    }

    pub fn add_column_named(&mut self, label: &str) -> GridResult<()> {
        let result = self.try_add_column_named(label);
        self.report(result)
    }

    fn try_add_column_named(&mut self, label: &str) -> GridResult<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(GridError::validation("label", "Column name is required"));
        }
        let id = column_id_from_label(label);
        if self.store.column(&id).is_some() {
            return Err(GridError::validation(
                "label",
                format!("A column named \"{id}\" already exists"),
            ));
        }
        self.store.add_column(Column::new(id, label));
        Ok(())
    }

    /// Row values under the column are kept; only the definition goes.
    pub fn remove_column(&mut self, id: &str) {
        if !self.store.remove_column(id) {
            return;
        }
        if self.view.sort.as_ref().is_some_and(|sort| sort.column_id == id) {
            self.view.sort = None;
        }
    }

    pub fn toggle_column_visibility(&mut self, id: &str) {
        self.store.toggle_column_visibility(id);
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.store.set_columns(columns);
    }

    // Editing.

    fn editor(&mut self) -> EditService<'_, MemoryStore> {
        EditService::new(&mut self.store, &mut self.edits, &self.config)
    }

    pub fn enter_edit(&mut self, id: &str) {
        self.editor().enter_edit(id);
    }

    pub fn toggle_edit(&mut self, id: &str) {
        self.editor().toggle_edit(id);
    }

    pub fn edit_field(&mut self, id: &str, field: &str, value: &str) -> GridResult<()> {
        let result = self.editor().edit_field(id, field, value);
        self.report(result)
    }

    pub fn save_row(&mut self, id: &str) {
        self.editor().save_row(id);
    }

    pub fn cancel_row(&mut self, id: &str) {
        self.editor().cancel_row(id);
    }

    pub fn save_all(&mut self) {
        self.editor().save_all();
    }

    pub fn cancel_all(&mut self) {
        self.editor().cancel_all();
    }

    // Import / export.

    /// Reads and applies a CSV file before returning.
    pub fn import_csv_file(&mut self, path: &Path) -> GridResult<usize> {
        let result = self.imports.begin().and_then(|ticket| {
            let outcome = decode_file(path, self.store.columns(), &self.config);
            self.imports.complete(ticket, outcome, &mut self.store)
        });
        self.report_import(result)
    }

    pub fn import_csv_text(&mut self, text: &str) -> GridResult<usize> {
        let result = self.imports.begin().and_then(|ticket| {
            let outcome = decode_text(text, self.store.columns(), &self.config);
            self.imports.complete(ticket, outcome, &mut self.store)
        });
        self.report_import(result)
    }

    /// Starts decoding `path` on a worker thread; see [`AppState::poll_import`].
    pub fn start_import(&mut self, path: PathBuf) -> GridResult<ImportTicket> {
        let ticket = self.imports.begin();
        let ticket = self.report(ticket)?;
        let columns = self.store.columns().to_vec();
        let config = self.config.clone();
        let task = background::spawn(move || decode_file(&path, &columns, &config));
        self.in_flight = Some(PendingImport { ticket, task });
        Ok(ticket)
    }

    pub fn is_importing(&self) -> bool {
        self.imports.is_pending()
    }

    /// Applies the background import once its decode has finished.
    pub fn poll_import(&mut self) -> Option<GridResult<usize>> {
        let pending = self.in_flight.take()?;
        let outcome = match pending.task.try_take() {
            Poll::Ready(outcome) => outcome,
            Poll::Pending => {
                self.in_flight = Some(pending);
                return None;
            }
            Poll::Lost => Err(GridError::ImportParse {
                message: "import worker stopped before finishing".to_string(),
            }),
        };
        let result = self
            .imports
            .complete(pending.ticket, outcome, &mut self.store);
        Some(self.report_import(result))
    }

    /// Blocks until the background import finishes, then applies it.
    pub fn wait_import(&mut self) -> Option<GridResult<usize>> {
        let pending = self.in_flight.take()?;
        let outcome = pending.task.wait().unwrap_or_else(|| {
            Err(GridError::ImportParse {
                message: "import worker stopped before finishing".to_string(),
            })
        });
        let result = self
            .imports
            .complete(pending.ticket, outcome, &mut self.store);
        Some(self.report_import(result))
    }

    /// Writes visible columns to `path`, or to the default export location.
    pub fn export_csv(&mut self, path: Option<PathBuf>) -> GridResult<PathBuf> {
        let path = path.unwrap_or_else(|| self.config.default_export_path());
        let result = ExportService::new(&self.store)
            .write_to(&path)
            .map(|()| path);
        if result.is_ok() {
            self.notifications.success("Data exported successfully");
        }
        self.report(result)
    }

    pub fn export_csv_string(&mut self) -> GridResult<String> {
        let result = ExportService::new(&self.store).to_csv_string();
        self.report(result)
    }

    // Queries for the display layer.

    pub fn visible_columns(&self) -> Vec<&Column> {
        QueryService::new(&self.store).visible_columns()
    }

    pub fn current_page(&self) -> PageResult<'_> {
        QueryService::new(&self.store).query_page(&self.view)
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.edits.is_editing(id)
    }

    pub fn staged_fields(&self, id: &str) -> Option<&Fields> {
        self.edits.staged(id)
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    fn report_import(&mut self, result: GridResult<usize>) -> GridResult<usize> {
        if let Ok(count) = &result {
            self.prune_edits();
            self.notifications
                .success(format!("Successfully imported {count} rows"));
        }
        self.report(result)
    }

    fn prune_edits(&mut self) {
        let store = &self.store;
        self.edits.retain(|id| store.row(id).is_some());
    }

    fn report<T>(&mut self, result: GridResult<T>) -> GridResult<T> {
        if let Err(err) = &result {
            warn!(%err, "operation failed");
            self.notifications.error(err.to_string());
        }
        result
    }
}
