//! Saving boards to and opening boards from disk.
//!
//! The file handle lives only for the duration of one call. A failed save
//! or open leaves the in-memory board unchanged.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::json::{decode_json_bytes, encode_json, DecodeOptions};
use super::xml::encode_xml;
use super::CodecError;
use crate::board::state::Board;

/// On-disk format selected for a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SaveFormat {
    #[default]
    Json,
    Xml,
}

impl SaveFormat {
    /// Returns the format keyword.
    pub const fn name(self) -> &'static str {
        match self {
            SaveFormat::Json => "JSON",
            SaveFormat::Xml => "XML",
        }
    }

    /// Exactly `"XML"` selects XML; anything else selects JSON.
    pub fn from_name(s: &str) -> SaveFormat {
        if s == "XML" {
            SaveFormat::Xml
        } else {
            SaveFormat::Json
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encodes the board in the requested format.
pub fn encode(board: &Board, format: SaveFormat) -> Result<String, CodecError> {
    match format {
        SaveFormat::Json => encode_json(board),
        SaveFormat::Xml => Ok(encode_xml(board)),
    }
}

/// Writes the board to `path`, creating or replacing the file.
///
/// The text goes to `<path>.tmp` first and is renamed over `path`, so a
/// failed write never clobbers the previous file. Records `path` as the
/// board's last path on success.
pub fn save_file(
    board: &mut Board,
    path: &Path,
    format: SaveFormat,
) -> Result<(), CodecError> {
    let text = encode(board, format)?;
    let tmp = staging_path(path);

    if let Err(source) = fs::write(&tmp, text) {
        let _ = fs::remove_file(&tmp);
        return Err(CodecError::io(&tmp, source));
    }
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(CodecError::io(path, source));
    }

    board.set_last_path(path);
    Ok(())
}

/// Sibling of `path` with `.tmp` appended to the file name.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Re-saves the board to the path it was last saved to or opened from.
pub fn save_to_last_path(board: &mut Board, format: SaveFormat) -> Result<(), CodecError> {
    let path = board.last_path().ok_or(CodecError::NoPath)?.to_path_buf();
    save_file(board, &path, format)
}

/// Reads `path` as UTF-8 JSON and refills the board's terrain from it.
///
/// Only opening and reading the file count as I/O failures; bad encoding
/// is a decode error. Records `path` as the board's last path on success.
pub fn open_file(
    board: &mut Board,
    path: &Path,
    options: DecodeOptions,
) -> Result<(), CodecError> {
    let bytes = fs::read(path).map_err(|source| CodecError::io(path, source))?;
    decode_json_bytes(board, &bytes, options)?;
    board.set_last_path(path);
    Ok(())
}
