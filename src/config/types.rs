//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the declarative document lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_document_file")]
    pub file: PathBuf,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            file: default_document_file(),
        }
    }
}

fn default_document_file() -> PathBuf {
    PathBuf::from("data.json")
}

/// Container runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Executable providing the `compose` subcommand
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Rendered manifest, relative to the working directory
    #[serde(default = "default_compose_file")]
    pub compose_file: PathBuf,

    /// Destination of `backup` archives
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            compose_file: default_compose_file(),
            backup_dir: default_backup_dir(),
        }
    }
}

fn default_binary() -> String {
    "docker".to_string()
}

fn default_compose_file() -> PathBuf {
    PathBuf::from("docker-compose.yml")
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from(".backup")
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub document: DocumentConfig,

    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
