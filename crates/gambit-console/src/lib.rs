//! Text console for playing and inspecting games.

pub mod command;
pub mod console;
pub mod error;

pub use command::{Command, parse_command};
pub use console::{Console, ConsoleConfig};
pub use error::ConsoleError;
