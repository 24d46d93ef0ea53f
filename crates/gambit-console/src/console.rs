//! Interactive read-eval-print loop over a [`Position`].

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{GameState, Position, STARTING_FEN, divide};

use crate::command::{Command, parse_command};
use crate::error::ConsoleError;

const HELP: &str = "\
Commands:
  <move>        play a coordinate move, e.g. e2e4 or e7e8q
  moves         list legal moves
  info          show side to move, rights, counters and state
  fen [<fen>]   print the current FEN, or load a position
  new           start a new game
  perft <n>     count leaf nodes to depth n, per move
  resign        resign for the side to move
  draw          agree to a draw
  help          show this list
  exit, quit    leave";

/// Console settings, built from command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Position the console starts from.
    pub start_fen: String,
    /// Print the legal moves above the board on every redraw.
    pub show_moves: bool,
    /// Clear the terminal before every redraw.
    pub clear_screen: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            start_fen: STARTING_FEN.to_string(),
            show_moves: true,
            clear_screen: false,
        }
    }
}

impl ConsoleConfig {
    /// Parse `--fen <fen>`, `--no-moves` and `--clear`. The program name must
    /// already be stripped.
    pub fn from_args<I>(args: I) -> Result<ConsoleConfig, ConsoleError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = ConsoleConfig::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fen" => {
                    config.start_fen = args.next().ok_or(ConsoleError::MissingValue { flag: "--fen" })?;
                }
                "--no-moves" => config.show_moves = false,
                "--clear" => config.clear_screen = true,
                _ => return Err(ConsoleError::UnknownArgument { arg }),
            }
        }
        Ok(config)
    }
}

/// Whether the loop keeps going after a command.
enum Flow {
    Continue,
    Exit,
}

/// The text console, holding the game being played.
pub struct Console {
    position: Position,
    config: ConsoleConfig,
}

impl Console {
    /// Create a console at the configured start position.
    pub fn new(config: ConsoleConfig) -> Result<Console, ConsoleError> {
        let position =
            Position::from_fen(&config.start_fen).map_err(|source| ConsoleError::InvalidStartFen {
                fen: config.start_fen.clone(),
                source,
            })?;
        Ok(Console { position, config })
    }

    /// The game being played.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Run until `exit`/`quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<(), ConsoleError> {
        info!(fen = %self.position.to_fen(), "console started");
        let mut line = String::new();

        loop {
            self.redraw(&mut output)?;
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            debug!(cmd = %line.trim(), "received command");

            match parse_command(&line) {
                Ok(cmd) => {
                    if let Flow::Exit = self.execute(cmd, &mut output)? {
                        break;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "bad command");
                    writeln!(output, "{err}")?;
                }
            }
        }

        info!("console exiting");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, ConsoleError> {
        match cmd {
            Command::Empty => {}
            Command::Move(text) => {
                if self.position.play(&text).is_err() {
                    writeln!(out, "Invalid Move")?;
                }
            }
            Command::Moves => self.write_moves(out)?,
            Command::Info => self.write_info(out)?,
            Command::Fen(None) => writeln!(out, "{}", self.position.to_fen())?,
            Command::Fen(Some(fen)) => match Position::from_fen(&fen) {
                Ok(position) => self.position = position,
                Err(_) => writeln!(out, "Invalid FEN")?,
            },
            Command::New => self.position = Position::new(),
            Command::Perft(depth) => {
                let results = divide(self.position.board(), depth);
                for (mv, nodes) in &results {
                    writeln!(out, "{mv}: {nodes}")?;
                }
                let total: u64 = results.iter().map(|(_, nodes)| nodes).sum();
                writeln!(out, "Nodes searched: {total}")?;
            }
            Command::Resign => {
                let side = self.position.side_to_move();
                match self.position.declare(GameState::Resignation) {
                    Ok(()) => writeln!(out, "{} resigns", side.name())?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Command::Draw => {
                if let Err(err) = self.position.declare(GameState::DrawByAgreement) {
                    writeln!(out, "{err}")?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn redraw<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        if self.config.clear_screen {
            write!(out, "\x1b[2J\x1b[H")?;
        }
        if self.config.show_moves {
            self.write_moves(out)?;
        }
        writeln!(out, "{}", self.position.board().pretty())?;

        let side = self.position.side_to_move().name();
        if self.position.in_check() {
            writeln!(out, "{side} to move (check)")?;
        } else {
            writeln!(out, "{side} to move")?;
        }

        match self.position.state() {
            GameState::Ongoing => {}
            GameState::DrawBy50Move => writeln!(out, "A draw may be claimed (50-move rule)")?,
            state => writeln!(out, "Game over: {state}")?,
        }
        Ok(())
    }

    fn write_moves<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        let moves: Vec<String> = self.position.legal_moves().iter().map(|m| m.to_string()).collect();
        writeln!(out, "Moves ({}): {}", moves.len(), moves.join(" "))?;
        Ok(())
    }

    fn write_info<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        let board = self.position.board();
        writeln!(out, "Side to move: {}", board.side_to_move().name())?;
        writeln!(out, "Castling rights: {}", board.castling())?;
        match board.en_passant() {
            Some(sq) => writeln!(out, "En passant: {sq}")?,
            None => writeln!(out, "En passant: -")?,
        }
        writeln!(out, "Halfmove clock: {}", board.halfmove_clock())?;
        writeln!(out, "Fullmove number: {}", board.fullmove_number())?;
        writeln!(out, "In check: {}", if self.position.in_check() { "yes" } else { "no" })?;
        writeln!(out, "State: {}", self.position.state())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_config() {
        let config = ConsoleConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.start_fen, STARTING_FEN);
        assert!(config.show_moves);
        assert!(!config.clear_screen);
    }

    #[test]
    fn config_flags() {
        let config = ConsoleConfig::from_args(args(&[
            "--no-moves",
            "--fen",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
            "--clear",
        ]))
        .unwrap();
        assert_eq!(config.start_fen, "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(!config.show_moves);
        assert!(config.clear_screen);
    }

    #[test]
    fn config_errors() {
        assert!(matches!(
            ConsoleConfig::from_args(args(&["--verbose"])),
            Err(ConsoleError::UnknownArgument { .. })
        ));
        assert!(matches!(
            ConsoleConfig::from_args(args(&["--fen"])),
            Err(ConsoleError::MissingValue { flag: "--fen" })
        ));
    }

    #[test]
    fn bad_start_fen_rejected() {
        let config = ConsoleConfig {
            start_fen: "garbage".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(matches!(Console::new(config), Err(ConsoleError::InvalidStartFen { .. })));
    }
}
