//! Editor command parser.
//!
//! Parses the line-oriented editor command language into structured
//! `Command` variants that the main loop dispatches on. One command per
//! line, tokens separated by whitespace.

use crate::board::terrain::Terrain;
use crate::codec::SaveFormat;

/// A typed editor option carried by `setoption`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorOption {
    /// Positive, finite height for boards created afterwards.
    CellHeight(f64),
    /// Format used by `save` when the command names none.
    Format(SaveFormat),
    /// Check declared `rows`/`cols` when opening JSON. A bare name means true.
    StrictDimensions(bool),
}

/// A parsed editor command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Synchronization ping; the editor replies `readyok`.
    IsReady,

    /// Set an editor option: `setoption name <id> [value <x>]`.
    SetOption(EditorOption),

    /// Replace the board with a uniform grass board.
    New { rows: usize, cols: usize },

    /// Replace the board with an explicit grid in compact notation,
    /// rows separated by `/`, one terrain character per cell.
    Load { grid: Vec<Vec<Terrain>> },

    /// Overwrite one cell's terrain.
    SetTerrain {
        row: usize,
        col: usize,
        terrain: Terrain,
    },

    Select { row: usize, col: usize },

    Deselect { row: usize, col: usize },

    /// Deselect every cell.
    Clear,

    /// Print the board in compact notation.
    Show,

    /// List selected cell coordinates.
    Selected,

    /// Hit-test a cell-local point against the cell hexagon.
    Hit { x: f64, y: f64 },

    /// Save to a path, or to the last-used path when none is given.
    Save {
        path: Option<String>,
        format: Option<SaveFormat>,
    },

    /// Open a JSON board file into the current board.
    Open { path: String },

    /// Terminate the editor.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "clear" => Some(Command::Clear),
        "show" => Some(Command::Show),
        "selected" => Some(Command::Selected),

        "setoption" => parse_setoption(&tokens),
        "new" => parse_new(&tokens),
        "load" => parse_load(&tokens),
        "terrain" => parse_terrain(&tokens),
        "select" => parse_coord(&tokens).map(|(row, col)| Command::Select { row, col }),
        "deselect" => parse_coord(&tokens).map(|(row, col)| Command::Deselect { row, col }),
        "hit" => parse_hit(&tokens),
        "save" => parse_save(&tokens),
        "open" => parse_open(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]` into one of the known options.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    let (name, value) = match tokens {
        [_, "name", name] => (*name, None),
        [_, "name", name, "value", value] => (*name, Some(*value)),
        _ => {
            eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
            return None;
        }
    };

    let option = match (name, value) {
        ("CellHeight", Some(v)) => v
            .parse::<f64>()
            .ok()
            .filter(|h| h.is_finite() && *h > 0.0)
            .map(EditorOption::CellHeight),
        ("Format", Some(v)) => format_keyword(v).map(EditorOption::Format),
        ("StrictDimensions", None | Some("true")) => Some(EditorOption::StrictDimensions(true)),
        ("StrictDimensions", Some("false")) => Some(EditorOption::StrictDimensions(false)),
        ("CellHeight" | "Format" | "StrictDimensions", _) => None,
        (other, _) => {
            eprintln!("unknown option: '{}'", other);
            return None;
        }
    };

    if option.is_none() {
        eprintln!("invalid value {:?} for option '{}'", value, name);
    }
    option.map(Command::SetOption)
}

fn parse_index(token: &str, what: &str) -> Option<usize> {
    match token.parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("invalid {} value: '{}'", what, token);
            None
        }
    }
}

/// Parses `new <rows> <cols>`.
fn parse_new(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed new: expected 'new <rows> <cols>'");
        return None;
    }
    let rows = parse_index(tokens[1], "rows")?;
    let cols = parse_index(tokens[2], "cols")?;
    Some(Command::New { rows, cols })
}

/// Parses `load <grid>`, e.g. `load GGW/FDM`.
fn parse_load(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed load: expected 'load <grid>'");
        return None;
    }

    let mut grid = Vec::new();
    for row in tokens[1].split('/') {
        let mut terrains = Vec::with_capacity(row.len());
        for c in row.chars() {
            match Terrain::from_abbr(c) {
                Some(t) => terrains.push(t),
                None => {
                    eprintln!("unknown terrain character: '{}'", c);
                    return None;
                }
            }
        }
        grid.push(terrains);
    }
    Some(Command::Load { grid })
}

/// Parses `<cmd> <row> <col>`.
fn parse_coord(tokens: &[&str]) -> Option<(usize, usize)> {
    if tokens.len() < 3 {
        eprintln!("malformed {}: expected '{} <row> <col>'", tokens[0], tokens[0]);
        return None;
    }
    let row = parse_index(tokens[1], "row")?;
    let col = parse_index(tokens[2], "col")?;
    Some((row, col))
}

/// Parses `terrain <row> <col> <Name>`.
fn parse_terrain(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 4 {
        eprintln!("malformed terrain: expected 'terrain <row> <col> <name>'");
        return None;
    }
    let (row, col) = parse_coord(tokens)?;
    match Terrain::parse_exact(tokens[3]) {
        Some(terrain) => Some(Command::SetTerrain { row, col, terrain }),
        None => {
            eprintln!("unknown terrain: '{}'", tokens[3]);
            None
        }
    }
}

/// Parses `hit <x> <y>`.
fn parse_hit(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed hit: expected 'hit <x> <y>'");
        return None;
    }
    match (tokens[1].parse::<f64>(), tokens[2].parse::<f64>()) {
        (Ok(x), Ok(y)) => Some(Command::Hit { x, y }),
        _ => {
            eprintln!("invalid hit coordinates: '{} {}'", tokens[1], tokens[2]);
            None
        }
    }
}

fn format_keyword(token: &str) -> Option<SaveFormat> {
    match token {
        "XML" | "JSON" => Some(SaveFormat::from_name(token)),
        _ => None,
    }
}

/// Parses `save [<path>] [JSON|XML]`.
///
/// A lone format keyword is taken as the format, not a path.
fn parse_save(tokens: &[&str]) -> Option<Command> {
    match tokens.len() {
        1 => Some(Command::Save {
            path: None,
            format: None,
        }),
        2 => match format_keyword(tokens[1]) {
            Some(format) => Some(Command::Save {
                path: None,
                format: Some(format),
            }),
            None => Some(Command::Save {
                path: Some(tokens[1].to_string()),
                format: None,
            }),
        },
        _ => Some(Command::Save {
            path: Some(tokens[1].to_string()),
            format: Some(SaveFormat::from_name(tokens[2])),
        }),
    }
}

/// Parses `open <path>`.
fn parse_open(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed open: expected 'open <path>'");
        return None;
    }
    Some(Command::Open {
        path: tokens[1].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("clear"), Some(Command::Clear));
        assert_eq!(parse_command("  show  "), Some(Command::Show));
        assert_eq!(parse_command("selected"), Some(Command::Selected));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_setoption_typed_values() {
        assert_eq!(
            parse_command("setoption name CellHeight value 48"),
            Some(Command::SetOption(EditorOption::CellHeight(48.0)))
        );
        assert_eq!(
            parse_command("setoption name Format value XML"),
            Some(Command::SetOption(EditorOption::Format(SaveFormat::Xml)))
        );
        assert_eq!(
            parse_command("setoption name StrictDimensions value false"),
            Some(Command::SetOption(EditorOption::StrictDimensions(false)))
        );
    }

    #[test]
    fn parse_setoption_bare_flag() {
        assert_eq!(
            parse_command("setoption name StrictDimensions"),
            Some(Command::SetOption(EditorOption::StrictDimensions(true)))
        );
        assert_eq!(parse_command("setoption name CellHeight"), None);
    }

    #[test]
    fn parse_setoption_rejects_bad_input() {
        assert_eq!(parse_command("setoption Format XML"), None);
        assert_eq!(parse_command("setoption name value 1"), None);
        assert_eq!(parse_command("setoption name Threads value 2"), None);
        assert_eq!(parse_command("setoption name CellHeight value -2"), None);
        assert_eq!(parse_command("setoption name CellHeight value inf"), None);
        assert_eq!(parse_command("setoption name Format value yaml"), None);
        assert_eq!(parse_command("setoption name StrictDimensions value yes"), None);
    }

    #[test]
    fn parse_new() {
        assert_eq!(
            parse_command("new 4 6"),
            Some(Command::New { rows: 4, cols: 6 })
        );
        assert_eq!(parse_command("new 4"), None);
        assert_eq!(parse_command("new -1 3"), None);
    }

    #[test]
    fn parse_load_grid() {
        assert_eq!(
            parse_command("load GFw/dMO"),
            Some(Command::Load {
                grid: vec![
                    vec![Terrain::Grass, Terrain::Woods, Terrain::Water],
                    vec![Terrain::Desert, Terrain::Mountain, Terrain::Other],
                ]
            })
        );
        assert_eq!(parse_command("load GX"), None);
        assert_eq!(parse_command("load"), None);
    }

    #[test]
    fn parse_load_keeps_ragged_rows() {
        let Some(Command::Load { grid }) = parse_command("load GGG/GG") else {
            panic!("expected load");
        };
        assert_eq!(grid[0].len(), 3);
        assert_eq!(grid[1].len(), 2);
    }

    #[test]
    fn parse_terrain() {
        assert_eq!(
            parse_command("terrain 1 2 Tundra"),
            Some(Command::SetTerrain {
                row: 1,
                col: 2,
                terrain: Terrain::Tundra
            })
        );
        assert_eq!(parse_command("terrain 1 2 tundra"), None);
        assert_eq!(parse_command("terrain 1 2"), None);
    }

    #[test]
    fn parse_select_deselect() {
        assert_eq!(
            parse_command("select 0 3"),
            Some(Command::Select { row: 0, col: 3 })
        );
        assert_eq!(
            parse_command("deselect 2 1"),
            Some(Command::Deselect { row: 2, col: 1 })
        );
        assert_eq!(parse_command("select x 1"), None);
    }

    #[test]
    fn parse_hit() {
        assert_eq!(
            parse_command("hit 25.98 30"),
            Some(Command::Hit { x: 25.98, y: 30.0 })
        );
        assert_eq!(parse_command("hit a b"), None);
    }

    #[test]
    fn parse_save_forms() {
        assert_eq!(
            parse_command("save"),
            Some(Command::Save {
                path: None,
                format: None
            })
        );
        assert_eq!(
            parse_command("save XML"),
            Some(Command::Save {
                path: None,
                format: Some(SaveFormat::Xml)
            })
        );
        assert_eq!(
            parse_command("save /tmp/b.json"),
            Some(Command::Save {
                path: Some("/tmp/b.json".to_string()),
                format: None
            })
        );
        assert_eq!(
            parse_command("save /tmp/b.xml XML"),
            Some(Command::Save {
                path: Some("/tmp/b.xml".to_string()),
                format: Some(SaveFormat::Xml)
            })
        );
        // anything but XML means JSON
        assert_eq!(
            parse_command("save /tmp/b.txt yaml"),
            Some(Command::Save {
                path: Some("/tmp/b.txt".to_string()),
                format: Some(SaveFormat::Json)
            })
        );
    }

    #[test]
    fn parse_open() {
        assert_eq!(
            parse_command("open board.json"),
            Some(Command::Open {
                path: "board.json".to_string()
            })
        );
        assert_eq!(parse_command("open"), None);
    }
}
