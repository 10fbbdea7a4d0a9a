// src/branch.rs

use crate::error::{CedarError, Result};
use crate::models::{Branch, Leaf};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};

/// Loads every leaf of `branch` from disk, in file order. Empty lines are
/// skipped; any other line without a delimiter, whitespace-only lines
/// included, fails the whole read and leaves `branch.leaves` untouched.
pub fn read(branch: &mut Branch) -> Result<()> {
    let read_err = |source: std::io::Error| CedarError::BranchRead {
        path: branch.file_path.clone(),
        source,
    };
    let file = File::open(&branch.file_path).map_err(read_err)?;

    let mut leaves = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(read_err)?;
        if line.is_empty() {
            continue;
        }
        let leaf = Leaf::parse_line(&line).ok_or_else(|| CedarError::MalformedLeaf {
            path: branch.file_path.clone(),
            line_number: index + 1,
            line: line.clone(),
        })?;
        leaves.push(leaf);
    }

    branch.leaves = leaves;
    Ok(())
}

/// Appends `leaf` as one line at the end of the branch file, creating the
/// file if needed.
pub fn append(branch: &Branch, leaf: &Leaf) -> Result<()> {
    let write_err = |source: std::io::Error| CedarError::LeafWrite {
        path: branch.file_path.clone(),
        source,
    };
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&branch.file_path)
        .map_err(write_err)?;
    writeln!(file, "{}", leaf.to_line()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    tracing::debug!(path = %branch.file_path.display(), time = %leaf.time, "appended leaf");
    Ok(())
}
