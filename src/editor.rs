//! Editor state management.
//!
//! Holds the current board and editor options, and executes parsed
//! commands against them. Responses go to the supplied writer; the caller
//! decides how to report errors.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::board::state::{Board, BoardError};
use crate::codec::{
    open_file, save_file, save_to_last_path, CodecError, DecodeOptions, SaveFormat,
};
use crate::command::{Command, EditorOption};
use crate::geometry::Point;

/// Default cell height for new boards.
pub const DEFAULT_CELL_HEIGHT: f64 = 60.0;

/// Errors surfaced by editor commands.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no board: use 'new' or 'load' first")]
    NoBoard,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// Runtime configuration, set through `setoption`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub cell_height: f64,
    /// Format used by `save` when the command names none.
    pub format: SaveFormat,
    pub strict_dimensions: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        EditorOptions {
            cell_height: DEFAULT_CELL_HEIGHT,
            format: SaveFormat::Json,
            strict_dimensions: false,
        }
    }
}

impl EditorOptions {
    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict_dimensions: self.strict_dimensions,
        }
    }
}

/// Holds the mutable state of the editor between commands.
#[derive(Debug, Default)]
pub struct Editor {
    pub board: Option<Board>,
    pub options: EditorOptions,
}

impl Editor {
    /// Creates an editor with no board and default options.
    pub fn new() -> Self {
        Self::default()
    }

    fn board(&self) -> Result<&Board, EditorError> {
        self.board.as_ref().ok_or(EditorError::NoBoard)
    }

    fn board_mut(&mut self) -> Result<&mut Board, EditorError> {
        self.board.as_mut().ok_or(EditorError::NoBoard)
    }

    /// Executes one command. `Quit` is the caller's concern and is a no-op here.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), EditorError> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::SetOption(option) => {
                self.set_option(option);
                writeln!(out, "ok")?;
            }
            Command::New { rows, cols } => {
                self.board = Some(Board::new(rows, cols, self.options.cell_height)?);
                writeln!(out, "ok")?;
            }
            Command::Load { grid } => {
                self.board = Some(Board::from_terrains(&grid, self.options.cell_height)?);
                writeln!(out, "ok")?;
            }
            Command::SetTerrain { row, col, terrain } => {
                self.board_mut()?.set_terrain(row, col, terrain)?;
                writeln!(out, "ok")?;
            }
            Command::Select { row, col } => {
                self.board_mut()?.select(row, col)?;
                writeln!(out, "ok")?;
            }
            Command::Deselect { row, col } => {
                self.board_mut()?.deselect(row, col)?;
                writeln!(out, "ok")?;
            }
            Command::Clear => {
                self.board_mut()?.clear_selection();
                writeln!(out, "ok")?;
            }
            Command::Show => self.handle_show(out)?,
            Command::Selected => self.handle_selected(out)?,
            Command::Hit { x, y } => {
                let inside = self.board()?.cell_contains(Point::new(x, y));
                writeln!(out, "{}", if inside { "inside" } else { "outside" })?;
            }
            Command::Save { path, format } => {
                self.save(path.as_deref(), format)?;
                writeln!(out, "ok")?;
            }
            Command::Open { path } => {
                self.open(Path::new(&path))?;
                writeln!(out, "ok")?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    /// Applies a parsed option.
    pub fn set_option(&mut self, option: EditorOption) {
        match option {
            EditorOption::CellHeight(height) => self.options.cell_height = height,
            EditorOption::Format(format) => self.options.format = format,
            EditorOption::StrictDimensions(strict) => self.options.strict_dimensions = strict,
        }
    }

    /// Saves to `path`, or to the board's last path when `path` is None.
    pub fn save(
        &mut self,
        path: Option<&str>,
        format: Option<SaveFormat>,
    ) -> Result<(), EditorError> {
        let format = format.unwrap_or(self.options.format);
        let board = self.board_mut()?;
        match path {
            Some(p) => save_file(board, Path::new(p), format)?,
            None => save_to_last_path(board, format)?,
        }
        Ok(())
    }

    /// Refills the current board's terrain from a JSON file.
    pub fn open(&mut self, path: &Path) -> Result<(), EditorError> {
        let options = self.options.decode_options();
        open_file(self.board_mut()?, path, options)?;
        Ok(())
    }

    /// Writes `board <rows>x<cols>` and one line per row in compact notation.
    /// Selected cells are lowercase.
    pub fn handle_show<W: Write>(&self, out: &mut W) -> Result<(), EditorError> {
        let board = self.board()?;
        writeln!(out, "board {}x{}", board.row_count(), board.col_count())?;
        for row in board.rows() {
            let line: String = row
                .cells()
                .iter()
                .map(|c| {
                    if c.selected {
                        c.terrain.abbr().to_ascii_lowercase()
                    } else {
                        c.terrain.abbr()
                    }
                })
                .collect();
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Writes `selected` followed by `row,col` pairs.
    pub fn handle_selected<W: Write>(&self, out: &mut W) -> Result<(), EditorError> {
        let board = self.board()?;
        let mut line = String::from("selected");
        for (row, col) in board.selected_cells() {
            line.push_str(&format!(" {},{}", row, col));
        }
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::terrain::Terrain;
    use crate::command::parse_command;

    fn run(editor: &mut Editor, line: &str) -> Result<String, EditorError> {
        let cmd = parse_command(line).expect("command should parse");
        let mut out = Vec::new();
        editor.execute(cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn commands_need_a_board() {
        let mut editor = Editor::new();
        assert!(matches!(run(&mut editor, "show"), Err(EditorError::NoBoard)));
        assert!(matches!(run(&mut editor, "select 0 0"), Err(EditorError::NoBoard)));
        assert_eq!(run(&mut editor, "isready").unwrap(), "readyok\n");
    }

    #[test]
    fn new_and_show() {
        let mut editor = Editor::new();
        assert_eq!(run(&mut editor, "new 2 3").unwrap(), "ok\n");
        assert_eq!(run(&mut editor, "show").unwrap(), "board 2x3\nGGG\nGGG\n");
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        let mut editor = Editor::new();
        let err = run(&mut editor, "new 0 3").unwrap_err();
        assert!(matches!(
            err,
            EditorError::Board(BoardError::InvalidDimension { rows: 0, cols: 3 })
        ));
        assert!(editor.board.is_none());
    }

    #[test]
    fn load_terrain_and_select() {
        let mut editor = Editor::new();
        run(&mut editor, "load GW/MD").unwrap();
        run(&mut editor, "terrain 0 0 Tundra").unwrap();
        run(&mut editor, "select 1 1").unwrap();
        assert_eq!(run(&mut editor, "show").unwrap(), "board 2x2\nTW\nMd\n");
        assert_eq!(run(&mut editor, "selected").unwrap(), "selected 1,1\n");
        let board = editor.board.as_ref().unwrap();
        assert_eq!(board.cell_at(0, 0).unwrap().terrain, Terrain::Tundra);

        run(&mut editor, "clear").unwrap();
        assert_eq!(run(&mut editor, "selected").unwrap(), "selected\n");
    }

    #[test]
    fn load_rejects_ragged_grid() {
        let mut editor = Editor::new();
        let err = run(&mut editor, "load GGG/GG/GGG").unwrap_err();
        assert!(matches!(
            err,
            EditorError::Board(BoardError::RaggedGrid { row: 1, .. })
        ));
    }

    #[test]
    fn out_of_bounds_reported() {
        let mut editor = Editor::new();
        run(&mut editor, "new 1 1").unwrap();
        assert!(matches!(
            run(&mut editor, "terrain 3 0 Water"),
            Err(EditorError::Board(BoardError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn options() {
        let mut editor = Editor::new();
        run(&mut editor, "setoption name CellHeight value 40").unwrap();
        run(&mut editor, "setoption name Format value XML").unwrap();
        run(&mut editor, "setoption name StrictDimensions").unwrap();
        assert_eq!(editor.options.cell_height, 40.0);
        assert_eq!(editor.options.format, SaveFormat::Xml);
        assert!(editor.options.strict_dimensions);

        run(&mut editor, "new 1 1").unwrap();
        let board = editor.board.as_ref().unwrap();
        assert!((board.cell_width() - 40.0 * 0.866).abs() < 1e-12);

        run(&mut editor, "setoption name StrictDimensions value false").unwrap();
        assert!(!editor.options.strict_dimensions);
    }

    #[test]
    fn hit_test() {
        let mut editor = Editor::new();
        run(&mut editor, "new 1 1").unwrap();
        assert_eq!(run(&mut editor, "hit 25.98 30").unwrap(), "inside\n");
        assert_eq!(run(&mut editor, "hit -100 -100").unwrap(), "outside\n");
    }

    #[test]
    fn save_without_path_needs_last_path() {
        let mut editor = Editor::new();
        run(&mut editor, "new 1 1").unwrap();
        assert!(matches!(
            run(&mut editor, "save"),
            Err(EditorError::Codec(CodecError::NoPath))
        ));
    }
}
