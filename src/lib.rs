//! Table engine for a spreadsheet-like data grid.
//!
//! [`AppState`] holds the committed rows and columns, the view parameters
//! (search, sort, page) and the rows being edited. A display layer drives it
//! through [`Command`]s and reads back [`AppState::current_page`] and
//! [`AppState::visible_columns`].

mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod platform;
pub mod ui;
pub mod usecase;


pub use config::{GridConfig, DEFAULT_EXPORT_FILE_NAME, PAGE_SIZE};
pub use domain::entities::column::Column;
pub use domain::entities::dataset::{PageResult, SortDirection, SortSpec, ViewState};
pub use domain::entities::row::{CellValue, Fields, Row, RowId};
pub use error::{GridError, GridResult};
pub use ui::command::Command;
pub use ui::state::app_state::AppState;
pub use ui::state::notification::{Notification, Severity};
pub use usecase::ports::store::RecordStore;
