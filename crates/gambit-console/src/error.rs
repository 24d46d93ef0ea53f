//! Console errors.

use gambit_core::FenError;

/// Errors that can occur while configuring or running the console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command-line argument was not recognized.
    #[error("unknown argument: {arg}")]
    UnknownArgument {
        /// The argument as given.
        arg: String,
    },

    /// A flag that takes a value was given none.
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag missing its value.
        flag: &'static str,
    },

    /// The configured start position could not be parsed.
    #[error("invalid start position {fen:?}: {source}")]
    InvalidStartFen {
        /// The rejected FEN text.
        fen: String,
        /// Why it was rejected.
        #[source]
        source: FenError,
    },

    /// The depth given to `perft` could not be parsed or is out of range.
    #[error("invalid perft depth: {value}")]
    InvalidDepth {
        /// The depth text as given.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
