use crate::store::ProductoStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: ProductoStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: ProductoStore::new(),
        }
    }
}
