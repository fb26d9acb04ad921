//! Comma-delimited flat-file adapters for the tracker's storage ports.
//!
//! Each adapter holds a directory capability and a file name, and opens the
//! file afresh on every call. Reads are tolerant of a missing file and of
//! structurally damaged rows; writes either append a single row or replace
//! the whole file through a staging file so readers never observe a partial
//! table.

pub mod codec;

mod logs;
mod tasks;
mod users;

pub use logs::CsvLogStore;
pub use tasks::CsvTaskStore;
pub use users::CsvUserDirectory;

use crate::ports::{StoreError, StoreResult};
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

/// Appends one newline-terminated row to `file` inside `dir`, creating the
/// file when absent.
fn append_line(dir: &Dir, file: &str, line: &str) -> StoreResult<()> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    let mut handle = dir
        .open_with(file, &options)
        .map_err(|err| StoreError::io(file, err))?;
    writeln!(handle, "{line}").map_err(|err| StoreError::io(file, err))?;
    Ok(())
}
