use super::fs_backend::FsBackend;
use super::table_store::TableStore;
use std::path::{Path, PathBuf};

pub type FileStore = TableStore<FsBackend>;

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        TableStore::with_backend(FsBackend::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        self.backend.root()
    }
}
