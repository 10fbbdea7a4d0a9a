// src/storage.rs

use crate::error::{CedarError, Result};
use std::fs::{self, DirBuilder, OpenOptions};
use std::path::Path;

/// Creates the journal directory if it does not exist yet.
pub fn ensure_journal_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        return Ok(());
    }
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(dir).map_err(|source| CedarError::Storage {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "created journal directory");
    Ok(())
}

/// Creates an empty branch file if it does not exist yet. An existing file is
/// left untouched.
pub fn ensure_branch_file(path: &Path) -> Result<()> {
    if fs::metadata(path).is_ok() {
        return Ok(());
    }
    // create_new keeps a file that appeared since the check intact
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            tracing::debug!(path = %path.display(), "created branch file");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(CedarError::Storage {
            path: path.to_path_buf(),
            source,
        }),
    }
}
