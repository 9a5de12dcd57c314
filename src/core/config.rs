use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::fs::EXCLUDED_DIRS;

pub const CONFIG_FILE: &str = ".rowguard.yml";

/// Number of non-blank lines the skip oracle inspects after a match.
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 4;

/// Number of lines scanned for the import block.
pub const DEFAULT_IMPORT_WINDOW: usize = 40;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub lookahead_window: Option<usize>,
    pub import_window: Option<usize>,
    pub exclude_dirs: Option<Vec<String>>,
}

impl Config {
    pub fn load(project_path: &Path) -> Self {
        let config_path = project_path.join(CONFIG_FILE);
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = serde_yaml::from_str::<Config>(&content) {
                    return config;
                }
            }
        }
        Config::default()
    }

    /// At least 1, so a guard on the line after the fetch is always seen.
    pub fn lookahead_window(&self) -> usize {
        self.lookahead_window
            .unwrap_or(DEFAULT_LOOKAHEAD_WINDOW)
            .max(1)
    }

    pub fn import_window(&self) -> usize {
        self.import_window.unwrap_or(DEFAULT_IMPORT_WINDOW)
    }

    /// Built-in exclusions followed by any configured extras.
    pub fn excluded_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect();
        if let Some(extra) = &self.exclude_dirs {
            for dir in extra {
                if !dirs.contains(dir) {
                    dirs.push(dir.clone());
                }
            }
        }
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config, Config::default());
        assert_eq!(config.lookahead_window(), 4);
        assert_eq!(config.import_window(), 40);
        assert_eq!(config.excluded_dirs(), vec!["venv", ".venv", "__pycache__"]);
    }

    #[test]
    fn test_load_config_from_file() {
        let tmp = TempDir::new().unwrap();
        let yaml = "lookahead_window: 6\nexclude_dirs:\n  - migrations\n  - venv\n";
        fs::write(tmp.path().join(CONFIG_FILE), yaml).unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config.lookahead_window(), 6);
        assert_eq!(config.import_window(), 40);
        assert_eq!(
            config.excluded_dirs(),
            vec!["venv", ".venv", "__pycache__", "migrations"]
        );
    }

    #[test]
    fn test_zero_lookahead_window_clamped_to_one() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "lookahead_window: 0\n").unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config.lookahead_window, Some(0));
        assert_eq!(config.lookahead_window(), 1);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "lookahead_window: [not a number\n").unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config, Config::default());
    }
}
