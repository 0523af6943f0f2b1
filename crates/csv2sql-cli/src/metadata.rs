//! The column-name side file, `<table>.clm.txt`.
//!
//! It holds the column list used in generated inserts so it does not have
//! to be retyped for every run. Only the first non-empty line is read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const EXTENSION: &str = ".clm.txt";

pub fn path_for(dir: &Path, table: &str) -> PathBuf {
    dir.join(format!("{table}{EXTENSION}"))
}

/// `Ok(None)` when the file is missing or holds only blank lines.
pub fn load(path: &Path) -> Result<Option<String>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("reading column names from {}", path.display()));
        }
    };
    Ok(text
        .split(['\n', '\r'])
        .find(|line| !line.is_empty())
        .map(str::to_string))
}

pub fn save(path: &Path, columns: &str) -> Result<()> {
    fs::write(path, columns)
        .with_context(|| format!("writing column names to {}", path.display()))
}
