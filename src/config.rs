//! Runtime configuration
//!
//! Where world data is read from and where the player is saved. Both can be
//! overridden through environment variables.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "LITTLE_ADVENTURE_DATA";
/// Environment variable overriding the save file
pub const SAVE_PATH_ENV: &str = "LITTLE_ADVENTURE_SAVE";

const DEFAULT_DATA_DIR: &str = "assets/data";
const SAVE_FILE_NAME: &str = "player.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the RON catalogs
    pub data_dir: PathBuf,
    /// Player save file
    pub save_path: PathBuf,
}

impl Config {
    /// Defaults, with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(path) = env::var_os(SAVE_PATH_ENV) {
            config.save_path = PathBuf::from(path);
        }
        config
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            save_path: default_save_path(),
        }
    }
}

/// Save file inside the platform data directory
pub fn default_save_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "littleadventure", "LittleAdventure") {
        proj_dirs.data_local_dir().join(SAVE_FILE_NAME)
    } else {
        PathBuf::from(SAVE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("assets/data"));
        assert!(config.save_path.ends_with("player.json"));
    }

    #[test]
    fn test_save_path_override() {
        let config = Config::default().with_save_path("/tmp/elsewhere.json");
        assert_eq!(config.save_path, PathBuf::from("/tmp/elsewhere.json"));
    }
}
