//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides `make.program`
pub const MAKE_ENV: &str = "JMAKE_MAKE";

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub make: MakeConfig,
}

/// Build tool options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MakeConfig {
    /// Executable invoked to run the generated Makefile
    #[serde(default = "default_program")]
    pub program: String,
    /// Value of the generated `SHELL :=` line
    #[serde(default = "default_shell")]
    pub shell: String,
    /// Flags passed before `-f <file>`
    #[serde(default = "default_extra_args")]
    pub extra_args: Vec<String>,
}

fn default_program() -> String {
    "make".to_string()
}

fn default_shell() -> String {
    "/bin/bash".to_string()
}

fn default_extra_args() -> Vec<String> {
    vec!["--no-print-directory".to_string()]
}

impl Default for MakeConfig {
    fn default() -> Self {
        MakeConfig {
            program: default_program(),
            shell: default_shell(),
            extra_args: default_extra_args(),
        }
    }
}

impl Config {
    /// Get the jmake configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("jmake")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml(&content)?
        } else {
            Config::default()
        };

        if let Ok(program) = std::env::var(MAKE_ENV) {
            if !program.trim().is_empty() {
                config.make.program = program;
            }
        }

        Ok(config)
    }
}
