use crate::config::GridConfig;
use crate::domain::entities::dataset::ViewState;
use crate::domain::entities::edit::EditBuffer;
use crate::domain::entities::row::Row;
use crate::error::GridResult;
use crate::infra::memory::store::MemoryStore;
use crate::platform::background::BackgroundTask;
use crate::ui::state::notification::Notifications;
use crate::usecase::services::import_service::{ImportService, ImportTicket};

/// A file import whose decode is running on a worker thread.
pub struct PendingImport {
    pub ticket: ImportTicket,
    pub task: BackgroundTask<GridResult<Vec<Row>>>,
}

/// The whole table session: committed data, view parameters, edits in
/// progress and messages for the user. Commands live in `app.rs`.
pub struct AppState {
    pub(crate) config: GridConfig,
    pub(crate) store: MemoryStore,
    pub(crate) view: ViewState,
    pub(crate) edits: EditBuffer,
    pub(crate) imports: ImportService,
    pub(crate) in_flight: Option<PendingImport>,
    pub(crate) notifications: Notifications,
}

impl AppState {
    pub fn new(config: GridConfig) -> Self {
        Self::with_store(config, MemoryStore::seeded())
    }

    pub fn with_store(config: GridConfig, store: MemoryStore) -> Self {
        let view = ViewState::new(config.page_size);
        Self {
            config,
            store,
            view,
            edits: EditBuffer::default(),
            imports: ImportService::new(),
            in_flight: None,
            notifications: Notifications::default(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn edits(&self) -> &EditBuffer {
        &self.edits
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
