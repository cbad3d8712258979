//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DockcraftError, DockcraftResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "dockcraft.toml";

/// Overrides the user config directory (tests, sandboxes)
pub const CONFIG_HOME_VAR: &str = "DOCKCRAFT_CONFIG_HOME";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the config was read from, `None` for defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DockcraftResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DockcraftError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config, else user config, else defaults; then `DOCKCRAFT_*`
/// environment overrides.
pub fn load_for_workspace(root: &Path) -> DockcraftResult<LoadedConfig> {
    let candidates = [Some(root.join(PROJECT_CONFIG_FILE)), user_config_path()];

    let mut loaded = LoadedConfig::default();
    if let Some(path) = candidates.into_iter().flatten().find(|p| p.is_file()) {
        let (config, warnings) = load_with_warnings(&path)?;
        tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded config");
        loaded = LoadedConfig {
            config,
            warnings,
            source: Some(path),
        };
    }

    loaded.config = apply_env_overrides(loaded.config, |key| std::env::var(key).ok());
    Ok(loaded)
}

/// `<config dir>/dockcraft/config.toml`, honouring `DOCKCRAFT_CONFIG_HOME`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_HOME_VAR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("dockcraft")))
        .map(|dir| dir.join("config.toml"))
}

/// Apply `DOCKCRAFT_*` overrides read through `lookup`
pub fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // DOCKCRAFT_DOCUMENT
    if let Some(file) = lookup("DOCKCRAFT_DOCUMENT").filter(|v| !v.is_empty()) {
        config.document.file = PathBuf::from(file);
    }

    // DOCKCRAFT_RUNTIME
    if let Some(binary) = lookup("DOCKCRAFT_RUNTIME").filter(|v| !v.is_empty()) {
        config.runtime.binary = binary;
    }

    // DOCKCRAFT_BACKUP_DIR
    if let Some(dir) = lookup("DOCKCRAFT_BACKUP_DIR").filter(|v| !v.is_empty()) {
        config.runtime.backup_dir = PathBuf::from(dir);
    }

    // DOCKCRAFT_COLOR
    if let Some(mode) = lookup("DOCKCRAFT_COLOR").as_deref().and_then(ColorMode::parse) {
        config.output.color = mode;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "document",
        "file",
        "runtime",
        "binary",
        "compose_file",
        "backup_dir",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
