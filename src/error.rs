// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CedarError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Unable to grow branch at {}. Try again. ({source})", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to climb branch at {}. Try again. ({source})", .path.display())]
    BranchRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to climb branch at {}: line {line_number} is not a leaf: {line:?}", .path.display())]
    MalformedLeaf {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("Unable to grow leaf in {}. Try again. ({source})", .path.display())]
    LeafWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to sync with remote: `{step}` failed.\n{detail}")]
    RemoteSync { step: String, detail: String },
}

impl CedarError {
    /// True for both ways a branch can fail to be read back.
    pub fn is_branch_read(&self) -> bool {
        matches!(self, CedarError::BranchRead { .. } | CedarError::MalformedLeaf { .. })
    }
}

pub type Result<T> = std::result::Result<T, CedarError>;
