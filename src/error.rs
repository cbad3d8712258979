//! Error types for Dockcraft
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Dockcraft operations
pub type DockcraftResult<T> = Result<T, DockcraftError>;

/// Main error type for Dockcraft operations
#[derive(Error, Debug)]
pub enum DockcraftError {
    /// No persisted document in the working directory
    #[error("missing document {}. Use 'create' first.", path.display())]
    MissingDocument { path: PathBuf },

    /// Document file exists but holds no usable structure
    #[error("document {} is empty. Use 'create' first.", path.display())]
    EmptyDocument { path: PathBuf },

    /// Document does not match the expected schema
    #[error("malformed document {}: {message}", path.display())]
    MalformedDocument { path: PathBuf, message: String },

    /// `create` over an existing document
    #[error("{} already exists, delete it or use another command.", path.display())]
    DocumentAlreadyExists { path: PathBuf },

    /// Document parsed but contains no services
    #[error("no services found. Use 'create' first.")]
    NoEntitiesFound,

    /// More than one of add/remove/change requested
    #[error("you can only use one of --add, --remove or --change")]
    ConflictingModeFlags,

    /// Named service does not exist
    #[error("service '{name}' not found")]
    EntityNotFound { name: String },

    /// Join keys across services/envs/service_files disagree
    #[error("inconsistent document: {reason} for '{name}'")]
    InconsistentDocument { name: String, reason: String },

    /// Name that cannot key a service or its `servers/<name>/` directory
    #[error("invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    /// Unknown `--service` value when known names are available
    #[error("invalid service '{name}'. Available: {}", available.join(", "))]
    UnknownService { name: String, available: Vec<String> },

    /// External container runtime command failed
    #[error("'{command}' failed ({}): {stderr}", exit_code_label(*code))]
    RuntimeInvocationFailure {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Interactive prompt failed (closed stdin, no terminal, ...)
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Configuration file could not be parsed
    #[error("invalid config {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

fn exit_code_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}
