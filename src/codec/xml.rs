//! XML board encoding.
//!
//! A fixed, hand-emitted layout: one tag per line, two-space indentation per
//! level, LF line endings, no attributes. Write-only; there is no reader.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Board>
//!   <Row>
//!     <Cell>
//!       <Terrain>Grass</Terrain>
//!     </Cell>
//!   </Row>
//! </Board>
//! ```

use crate::board::cell::Row;
use crate::board::state::Board;

/// XML declaration emitted as the first line.
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const INDENT: &str = "  ";

/// Encodes the board, rows top-to-bottom and cells left-to-right.
pub fn encode_xml(board: &Board) -> String {
    // 3 lines per cell plus row tags, ~24 bytes per line
    let lines = 3 + board.row_count() * (2 + 3 * board.col_count());
    let mut out = String::with_capacity(lines * 24);

    push_line(&mut out, 0, XML_HEADER);
    push_line(&mut out, 0, "<Board>");
    for row in board.rows() {
        encode_row(&mut out, row);
    }
    push_line(&mut out, 0, "</Board>");
    out
}

fn encode_row(out: &mut String, row: &Row) {
    push_line(out, 1, "<Row>");
    for cell in row.cells() {
        push_line(out, 2, "<Cell>");
        push_line(
            out,
            3,
            &format!("<Terrain>{}</Terrain>", cell.terrain.name()),
        );
        push_line(out, 2, "</Cell>");
    }
    push_line(out, 1, "</Row>");
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}
