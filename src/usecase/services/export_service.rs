use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{GridError, GridResult};
use crate::infra::export::csv::{encode_csv_string, export_csv_to_path};
use crate::usecase::ports::store::RecordStore;

pub struct ExportService<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> ExportService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn to_csv_string(&self) -> GridResult<String> {
        encode_csv_string(self.store.rows(), self.store.columns()).map_err(|err| {
            GridError::Export {
                path: PathBuf::from("<memory>"),
                message: format!("{err:#}"),
            }
        })
    }

    pub fn write_to(&self, path: &Path) -> GridResult<()> {
        match export_csv_to_path(path, self.store.rows(), self.store.columns()) {
            Ok(()) => {
                info!(path = %path.display(), rows = self.store.rows().len(), "exported csv");
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), "export failed: {err:#}");
                Err(GridError::Export {
                    path: path.to_path_buf(),
                    message: format!("{err:#}"),
                })
            }
        }
    }
}
