//! Error types shared by the puzzle solutions and the runner.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AocError>;

#[derive(Debug, Error)]
pub enum AocError {
    /// The input file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token did not parse as the expected kind of value.
    #[error("cannot parse {text:?} as {what}")]
    Parse { text: String, what: &'static str },

    /// The input is structurally wrong for the puzzle.
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("no solver registered for day {0}")]
    UnknownDay(u8),
}

impl AocError {
    pub fn malformed(line: &str) -> Self {
        AocError::Malformed(format!("unexpected line {:?}", line))
    }
}
