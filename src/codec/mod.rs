//! Board persistence.
//!
//! This module converts boards to and from their two on-disk formats: a
//! JSON document that can be read back, and a fixed XML layout that is
//! write-only.

pub mod file;
pub mod json;
pub mod xml;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use file::{encode, open_file, save_file, save_to_last_path, SaveFormat};
pub use json::{decode_json, decode_json_bytes, decode_json_with, encode_json, DecodeOptions};
pub use xml::{encode_xml, XML_HEADER};

/// Errors that can occur while saving or opening a board.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed board JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board JSON has {found} rows, board needs {expected}")]
    MissingRows { expected: usize, found: usize },

    #[error("board JSON row {row} has {found} cells, board needs {expected}")]
    MissingCells {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("declared {declared_rows}x{declared_cols} board, found {actual_rows}x{actual_cols}")]
    DimensionMismatch {
        declared_rows: i64,
        declared_cols: i64,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("board has no file path yet")]
    NoPath,
}

impl CodecError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        CodecError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for malformed or schema-mismatched text, as opposed to I/O failures.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            CodecError::Json(_)
                | CodecError::MissingRows { .. }
                | CodecError::MissingCells { .. }
                | CodecError::DimensionMismatch { .. }
        )
    }
}
