use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error at [{}]: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Storage format error at [{}]: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error
    }
}

impl StoreError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv { path: path.to_path_buf(), source }
    }
}
