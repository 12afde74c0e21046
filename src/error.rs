//! Error types for huffman_tree

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for huffman_tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the I/O edges. Counting and building never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read input {path}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
