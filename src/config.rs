use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Words that must never be fragmented by a split.
    #[serde(default)]
    pub no_split: Vec<String>,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String {
    " ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_split: Vec::new(),
            delimiter: default_delimiter(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_no_split: Vec<String>, cli_delimiter: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".camelsplit.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides; no-split words accumulate on top of the files
        if !cli_no_split.is_empty() {
            config.no_split.extend(cli_no_split);
        }
        if let Some(delimiter) = cli_delimiter {
            config.delimiter = delimiter;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if !other.no_split.is_empty() {
            self.no_split = other.no_split;
        }
        if other.delimiter != default_delimiter() {
            self.delimiter = other.delimiter;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "camelsplit").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Borrowed view of the no-split list, in the shape the splitter takes.
    pub fn no_split_words(&self) -> Vec<&str> {
        self.no_split.iter().map(String::as_str).collect()
    }
}
