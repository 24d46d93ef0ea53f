//! Console command parsing.

use crate::error::ConsoleError;

/// Deepest perft the console will run.
pub const MAX_PERFT_DEPTH: usize = 6;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a keyword is tried as a coordinate move.
    Move(String),
    /// `moves` -- list the legal moves.
    Moves,
    /// `info` -- print position details.
    Info,
    /// `fen` -- print the FEN, or load one when followed by FEN text.
    Fen(Option<String>),
    /// `new` -- reset to the starting position.
    New,
    /// `perft <depth>` -- per-move node counts.
    Perft(usize),
    /// `resign` -- the side to move resigns.
    Resign,
    /// `draw` -- both sides agree to a draw.
    Draw,
    /// `help` -- list commands.
    Help,
    /// `exit` / `quit` -- leave the console.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" => Ok(Command::Empty),
        "moves" => Ok(Command::Moves),
        "info" => Ok(Command::Info),
        "fen" if rest.is_empty() => Ok(Command::Fen(None)),
        "fen" => Ok(Command::Fen(Some(rest.to_string()))),
        "new" => Ok(Command::New),
        "perft" => parse_depth(rest).map(Command::Perft),
        "resign" => Ok(Command::Resign),
        "draw" => Ok(Command::Draw),
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Quit),
        _ => Ok(Command::Move(line.to_string())),
    }
}

fn parse_depth(value: &str) -> Result<usize, ConsoleError> {
    match value.parse::<usize>() {
        Ok(depth @ 1..=MAX_PERFT_DEPTH) => Ok(depth),
        _ => Err(ConsoleError::InvalidDepth {
            value: value.to_string(),
        }),
    }
}
