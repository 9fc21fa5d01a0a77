use thiserror::Error;

use crate::types::PageNum;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error seeking: {0}")]
    Seek(std::io::Error),

    #[error("Error writing: {0}")]
    Write(std::io::Error),

    #[error("Db file is not a whole number of pages. Corrupt file.")]
    CorruptFile,

    #[error("Tried to fetch page number out of bounds. {page_num} > {max}")]
    PageOutOfBounds { page_num: PageNum, max: u32 },

    #[error("Tried to flush null page")]
    FlushNullPage,

    #[error("Invalid node type: {0}")]
    InvalidNodeType(u16),

    #[error("Need to implement searching an internal node")]
    InternalNodeSearch,

    #[error("Need to implement splitting a leaf node.")]
    LeafNodeSplit,

    #[error("Serialization error: {details}")]
    Serialization { details: String },
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
