use super::catalog_store::CatalogStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = CatalogStore<FsBackend>;

impl FileStore {
    pub fn new_fs(path: impl Into<PathBuf>) -> Self {
        CatalogStore::with_backend(FsBackend::new(path))
    }
}
