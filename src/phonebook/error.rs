use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Store not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    #[error("Store is malformed ({}): {source}", path.display())]
    StoreMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No such page: {page} (pages: {page_count})")]
    InvalidPage { page: usize, page_count: usize },

    #[error("Invalid position: {position} (records: {len})")]
    InvalidPosition { position: usize, len: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl DirectoryError {
    /// Input-validation failures the interactive layer answers with a re-prompt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DirectoryError::InvalidPage { .. } | DirectoryError::InvalidPosition { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
