// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, ValueEnum};

// local imports
use crate::selection::Backend;

// ---

/// Select workspace packages by ordered wildcard filters.
///
/// Each filter pattern may contain `*` to match any run of characters and may start with `!` to
/// exclude the packages it matches. Patterns are applied in order and the last matching one wins.
///
/// Candidates are given as `<dir>` or `<dir><TAB><name>`. Packages without a declared name are
/// matched by their directory name.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Filter pattern, may be repeated.
    #[arg(short, long = "filter", value_name = "PATTERN", required = true, allow_hyphen_values = true)]
    pub filters: Vec<String>,

    /// Candidate packages, read from stdin line by line if none are given.
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<String>,

    /// Matching backend, overrides the configured one.
    #[arg(long, env = "WSMATCH_BACKEND", value_enum)]
    pub backend: Option<Backend>,

    /// Print match engine diagnostics to stderr.
    #[arg(long, env = "WSMATCH_DEBUG")]
    pub debug: bool,

    /// Color output options.
    #[arg(long, default_value = "auto", env = "WSMATCH_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// Do not warn about filter patterns that matched no package.
    #[arg(long)]
    pub no_report_unmatched: bool,

    /// Configuration file path.
    #[arg(long, env = crate::config::CONFIG_ENV, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}
