//! Hexboard -- a line-oriented hex board editor.
//!
//! This binary reads editor commands from stdin and writes responses to
//! stdout. Command errors are reported on stderr and never end the session.

use std::io::{self, BufRead, Write};

use hexboard::command::{parse_command, Command};
use hexboard::editor::Editor;

/// Drives one editing session until `quit` or end of input.
///
/// Unparseable lines are skipped. Responses are flushed after every command
/// so a front end can wait on each reply.
fn run_session<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut editor = Editor::new();
    let commands = input
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| parse_command(&line))
        .take_while(|cmd| *cmd != Command::Quit);

    for cmd in commands {
        if let Err(e) = editor.execute(cmd, out) {
            eprintln!("{}", e);
        }
        out.flush()?;
    }
    Ok(())
}

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = run_session(stdin.lock(), &mut out) {
        eprintln!("output closed: {}", e);
    }
}
