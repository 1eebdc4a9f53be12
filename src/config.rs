// std imports
use std::path::PathBuf;

// local imports
use crate::error::Result;
use crate::settings::Settings;

// ---

pub const APP_NAME: &str = "wsmatch";
pub const CONFIG_ENV: &str = "WSMATCH_CONFIG";

/// Returns the path of the user configuration file, if the platform has a config directory.
pub fn user_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

/// Loads settings from `explicit` if given, otherwise from the user configuration file if present.
pub fn load(explicit: Option<PathBuf>) -> Result<Settings> {
    match explicit {
        Some(path) => {
            log::debug!("loading configuration from {}", path.display());
            Settings::load(Some(&path), true)
        }
        None => Settings::load(user_path().as_deref(), false),
    }
}
