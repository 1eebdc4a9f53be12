// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, Environment, File, FileFormat, Source};
use serde::Deserialize;

// local imports
use crate::error::Error;
use crate::selection::Backend;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

pub const ENV_PREFIX: &str = "WSMATCH";

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub backend: Backend,
    pub debug: bool,
    pub report_unmatched: bool,
    pub limits: Limits,
}

impl Settings {
    /// Loads embedded defaults overlaid with the file at `path` and then with `WSMATCH_*` variables.
    ///
    /// Nested keys are separated by `__`, so `WSMATCH_LIMITS__PAGE_SIZE` sets `limits.page-size`.
    pub fn load(path: Option<&Path>, required: bool) -> Result<Self, Error> {
        Self::load_with(path, required, environment())
    }

    fn load_with(path: Option<&Path>, required: bool, env: Environment) -> Result<Self, Error> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(required));
        }

        for (key, value) in env.collect()? {
            builder = builder.set_override(key.replace('_', "-"), value)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// ---

/// Match engine memory limits, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Limits {
    pub page_size: usize,
    pub guard_size: usize,
    pub max_encoded_size: usize,
}

impl From<Limits> for match_engine::Limits {
    fn from(limits: Limits) -> Self {
        Self {
            page_size: limits.page_size,
            guard_size: limits.guard_size,
            max_encoded_size: limits.max_encoded_size,
            ..Self::default()
        }
    }
}
