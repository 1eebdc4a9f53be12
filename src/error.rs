// std imports
use std::fmt;
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// ---

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{subject} is {len} bytes long, which exceeds the limit of {limit} bytes")]
    InvalidPatternSize { subject: Subject, len: usize, limit: usize },
    #[error("match context used after dispose")]
    UseAfterDispose,
    #[error("failed to grow match arena to {requested} bytes")]
    ArenaGrowth { requested: usize },
    #[error("match engine fault: {0}")]
    Engine(#[from] match_engine::Fault),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid candidate {0:?}: empty directory and no name")]
    InvalidCandidate(String),
}

impl Error {
    /// Writes the error as a styled `error:` line.
    pub fn log_to<W: Write>(&self, target: &mut W, color: bool) -> io::Result<()> {
        if color {
            writeln!(target, "{} {}", "error:".bright_red().bold(), self)
        } else {
            writeln!(target, "error: {}", self)
        }
    }

    pub fn log(&self, color: bool) {
        self.log_to(&mut io::stderr(), color).ok();
    }
}

/// What exceeded the encoded size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Pattern(usize),
    Input,
    PatternTable,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(index) => write!(f, "pattern #{}", index),
            Self::Input => f.write_str("input"),
            Self::PatternTable => f.write_str("pattern table"),
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
