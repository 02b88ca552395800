//! Error types for file reading and assembly

use thiserror::Error;
use vgrid_core::GridError;

/// Errors that can occur while reading and assembling a grid file
#[derive(Debug, Error)]
pub enum ReadError {
    /// Underlying file access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is not valid UTF-8 text
    #[error("file is not valid UTF-8 text")]
    NotUtf8,

    /// File did not pass format detection
    #[error("not a legacy structured-points file")]
    UnrecognizedFormat,

    /// A line failed to parse; `line` is 1-based
    #[error("line {line}: {source}")]
    Format {
        /// 1-based line number in the file
        line: usize,
        /// Underlying format error
        source: GridError,
    },

    /// A format or assembly constraint failed outside any specific line
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl ReadError {
    /// Attach a 1-based line number to a format error
    pub fn at_line(line: usize, source: GridError) -> Self {
        ReadError::Format { line, source }
    }
}

/// Result type for read operations
pub type ReadResult<T> = Result<T, ReadError>;
