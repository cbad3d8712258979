//! Workspace - the working directory and the paths resolved against it

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Paths of one invocation, all anchored at `root`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    document: PathBuf,
    compose_file: PathBuf,
    backup_dir: PathBuf,
}

impl Workspace {
    /// Workspace at `root` with default file names
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(root, &Config::default())
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        Self {
            document: root.join(&config.document.file),
            compose_file: root.join(&config.runtime.compose_file),
            backup_dir: root.join(&config.runtime.backup_dir),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The persisted document (`data.json`)
    pub fn document_path(&self) -> &Path {
        &self.document
    }

    /// The rendered compose manifest
    pub fn compose_path(&self) -> &Path {
        &self.compose_file
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }
}
