use crate::domain::entities::column::Column;
use crate::domain::entities::dataset::{PageResult, ViewState};
use crate::infra::memory::queries::query_page;
use crate::usecase::ports::store::RecordStore;

pub struct QueryService<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> QueryService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn visible_columns(&self) -> Vec<&'a Column> {
        self.store.visible_columns()
    }

    pub fn query_page(&self, view: &ViewState) -> PageResult<'a> {
        query_page(self.store.rows(), view)
    }
}
