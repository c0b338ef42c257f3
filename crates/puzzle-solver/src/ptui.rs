//! Plain-text console for playing Hoppers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::hoppers::{Board, HoppersModel};

const HELP: &str = "\
h(int)              -- hint next move
l(oad) filename     -- load new puzzle file
s(elect) r c        -- select cell at r, c
q(uit)              -- quit the game
r(eset)             -- reset the current game";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hint,
    Load(PathBuf),
    Select(i32, i32),
    Reset,
    Quit,
}

/// Parse one input line. Commands may be abbreviated to any prefix starting
/// with their first letter. `Ok(None)` is a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some(verb) = words.first() else {
        return Ok(None);
    };

    let command = match (verb.chars().next(), &words[1..]) {
        (Some('q'), _) => Command::Quit,
        (Some('h'), _) => Command::Hint,
        (Some('r'), _) => Command::Reset,
        (Some('l'), [file]) => Command::Load(PathBuf::from(*file)),
        (Some('s'), [row, col]) => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Command::Select(row, col),
            _ => return Err(format!("invalid cell `{} {}`", row, col)),
        },
        (Some('l'), _) => return Err("usage: l(oad) filename".to_string()),
        (Some('s'), _) => return Err("usage: s(elect) r c".to_string()),
        _ => return Err(format!("unknown command `{}`", verb)),
    };
    Ok(Some(command))
}

/// The board with row and column numbers
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  ");
    for col in 0..board.cols() {
        out.push_str(&format!(" {}", col));
    }
    out.push('\n');
    out.push_str("  ");
    out.push_str(&"-".repeat(board.cols() * 2));
    for row in 0..board.rows() {
        out.push_str(&format!("\n{}| ", row));
        for cell in board.row(row) {
            out.push(cell.symbol());
            out.push(' ');
        }
    }
    out.push('\n');
    out
}

/// Read commands from `input` until `quit` or end of input, printing each
/// outcome and the board after it
pub fn run<R: BufRead, W: Write>(
    model: &mut HoppersModel,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Loaded: {}", model.source().display())?;
    writeln!(output, "{}", render_board(model.board()))?;
    writeln!(output, "{}", HELP)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        let event = match parse_command(&line?) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Hint)) => model.hint(),
            Ok(Some(Command::Reset)) => model.reset(),
            Ok(Some(Command::Load(path))) => model.load(path),
            Ok(Some(Command::Select(row, col))) => model.select(row, col),
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        writeln!(output, "{}", event)?;
        writeln!(output, "{}", render_board(model.board()))?;
    }
    Ok(())
}
