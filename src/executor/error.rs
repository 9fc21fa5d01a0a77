use thiserror::Error;

use crate::types::error::DatabaseError;

/// Statement-level failures the REPL reports and recovers from. A
/// wrapped `DatabaseError` is fatal and terminates the session.
#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("Error: Table full.")]
    TableFull,
    #[error("Error: Duplicate key.")]
    DuplicateKey,
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
