//! Workspace package selection by ordered wildcard filters.
//!
//! Filters are lists of patterns such as `["eslint-*", "!eslint-plugin-*"]`. They can be evaluated in
//! two equivalent ways:
//! - interpreted, with [`compile`] and [`evaluate`] from the `wildcard` crate;
//! - accelerated, with a [`MatchContext`] that marshals the rule set once into a byte arena and runs
//!   every query in the match engine.
//!
//! [`Selector`] applies a filter to a list of workspace packages and reports filter patterns
//! that matched nothing.

// public modules
pub mod arena;
pub mod cli;
pub mod config;
pub mod context;
pub mod debug;
pub mod error;
pub mod selection;
pub mod settings;

// public uses
pub use context::{ContextOptions, MatchContext};
pub use debug::{DebugSink, LogSink, StyledSink};
pub use selection::{Backend, Candidate, NameMatcher, Selection, Selector};
pub use settings::Settings;
pub use wildcard::{Pattern, RuleSet, Sign, compile, evaluate};
