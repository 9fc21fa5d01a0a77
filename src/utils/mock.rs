use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::storage::table::Table;
use crate::types::error::Result;

// Distinguishes databases created by concurrent tests in one process.
static NEXT_DB_ID: AtomicU32 = AtomicU32::new(0);

/// Scratch database file under the system temp directory. The file is
/// removed on drop.
pub struct TempDatabase {
    path: PathBuf,
    table: Option<Table>,
}

impl TempDatabase {
    pub fn with_prefix(prefix: &str) -> Self {
        let id = NEXT_DB_ID.fetch_add(1, Ordering::Relaxed);
        let path = env::temp_dir().join(format!("{}_{}_{}.db", prefix, process::id(), id));
        Self { path, table: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open_table(&mut self) -> Result<&mut Table> {
        let table = Table::open(&self.path)?;
        Ok(self.table.insert(table))
    }

    /// Close the open table, flushing every cached page to the file.
    pub fn close_table(&mut self) -> Result<()> {
        self.table.take().map_or(Ok(()), Table::close)
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
