//! JSON board encoding and decoding.
//!
//! Schema:
//!
//! ```text
//! { "rows": int, "cols": int, "row": [ { "cell": [ { "Terrain": string }, ... ] }, ... ] }
//! ```
//!
//! `rows` and `cols` are advisory. Decoding trusts the array shape and only
//! refills terrain into the board's existing dimensions; extra rows or cells
//! in the document are ignored.

use serde::{Deserialize, Serialize};

use super::CodecError;
use crate::board::state::Board;
use crate::board::terrain::Terrain;

#[derive(Debug, Serialize, Deserialize)]
struct JsonBoard {
    rows: i64,
    cols: i64,
    row: Vec<JsonRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonRow {
    cell: Vec<JsonCell>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonCell {
    #[serde(rename = "Terrain")]
    terrain: String,
}

/// Knobs for JSON decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Reject documents whose `rows`/`cols` fields disagree with their arrays.
    pub strict_dimensions: bool,
}

/// Encodes the board as pretty-printed JSON.
///
/// `rows` and `cols` always match the board's real dimensions.
pub fn encode_json(board: &Board) -> Result<String, CodecError> {
    let doc = JsonBoard {
        rows: board.row_count() as i64,
        cols: board.col_count() as i64,
        row: board
            .rows()
            .iter()
            .map(|row| JsonRow {
                cell: row
                    .cells()
                    .iter()
                    .map(|c| JsonCell {
                        terrain: c.terrain.name().to_string(),
                    })
                    .collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Decodes `text` into the board's terrain using default options.
pub fn decode_json(board: &mut Board, text: &str) -> Result<(), CodecError> {
    decode_json_with(board, text, DecodeOptions::default())
}

/// Decodes `text` into the board's terrain.
///
/// Selection flags are untouched. On any error the board is left unchanged.
pub fn decode_json_with(
    board: &mut Board,
    text: &str,
    options: DecodeOptions,
) -> Result<(), CodecError> {
    decode_json_bytes(board, text.as_bytes(), options)
}

/// Decodes raw file bytes into the board's terrain.
///
/// Bytes that are not valid UTF-8 are rejected as malformed JSON.
pub fn decode_json_bytes(
    board: &mut Board,
    bytes: &[u8],
    options: DecodeOptions,
) -> Result<(), CodecError> {
    let doc: JsonBoard = serde_json::from_slice(bytes)?;

    if options.strict_dimensions {
        check_declared_dimensions(&doc)?;
    }

    let rows = board.row_count();
    let cols = board.col_count();
    if doc.row.len() < rows {
        return Err(CodecError::MissingRows {
            expected: rows,
            found: doc.row.len(),
        });
    }

    let mut staged = Vec::with_capacity(rows);
    for (y, json_row) in doc.row.iter().take(rows).enumerate() {
        if json_row.cell.len() < cols {
            return Err(CodecError::MissingCells {
                row: y,
                expected: cols,
                found: json_row.cell.len(),
            });
        }
        let terrains: Vec<Terrain> = json_row
            .cell
            .iter()
            .take(cols)
            .map(|c| Terrain::from_name(&c.terrain))
            .collect();
        staged.push(terrains);
    }

    board.fill_terrains(&staged);
    Ok(())
}

fn check_declared_dimensions(doc: &JsonBoard) -> Result<(), CodecError> {
    let actual_rows = doc.row.len();
    let mismatch = |actual_cols: usize| CodecError::DimensionMismatch {
        declared_rows: doc.rows,
        declared_cols: doc.cols,
        actual_rows,
        actual_cols,
    };

    if doc.rows != actual_rows as i64 {
        let first_cols = doc.row.first().map_or(0, |r| r.cell.len());
        return Err(mismatch(first_cols));
    }
    for json_row in &doc.row {
        if doc.cols != json_row.cell.len() as i64 {
            return Err(mismatch(json_row.cell.len()));
        }
    }
    Ok(())
}
