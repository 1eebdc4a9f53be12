//! Accelerated wildcard rule matcher.
//!
//! The engine never sees Rust strings or rule objects. The caller owns a flat byte memory, writes a
//! pattern table and query strings into it, and passes offsets across. This mirrors a module loaded
//! behind a binary boundary: a [`Module`] is compiled once and shared read-only, and every caller gets
//! its own [`Instance`] holding matcher state.
//!
//! Memory layout contract for [`Instance::init_matcher`]:
//! - `count` patterns stored back to back at `patterns`, each followed by a NUL terminator;
//! - `count` little-endian `u32` lengths (excluding the terminator) stored at `lengths`.
//!
//! Pattern bytes are UTF-8. A leading `!` negates a pattern and `*` matches any run of bytes.

mod host;
mod instance;
mod matcher;
mod module;

pub use host::{Host, Level, NoHost};
pub use instance::{Instance, MatcherId};
pub use module::{Limits, Module};

// third-party imports
use thiserror::Error;

/// Fault is raised when the engine is called with arguments violating the memory contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("memory access out of bounds: offset {offset} length {len} exceeds memory size {size}")]
    OutOfBounds { offset: u32, len: u32, size: usize },
    #[error("unknown matcher {0}")]
    UnknownMatcher(MatcherId),
    #[error("pattern table with {count} entries exceeds engine limit {limit}")]
    TableTooLarge { count: u32, limit: u32 },
    #[error("pattern {index} is not terminated")]
    Unterminated { index: u32 },
}

/// Result is an alias for standard result with bound Fault type.
pub type Result<T> = std::result::Result<T, Fault>;
