//! OutputFile entity - a rendered artifact
//!
//! OutputFiles are the result of rendering a document. They represent what
//! will be written to the file system, relative to the working directory.

use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the working directory
    path: PathBuf,
    content: String,
    /// Whether the file must be executable (`run.sh`)
    executable: bool,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: false,
        }
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_executable(&self) -> bool {
        self.executable
    }

    /// SHA256 of the content, `sha256:` prefixed
    pub fn hash(&self) -> String {
        hash_content(self.content.as_bytes())
    }
}

/// SHA256 of raw bytes, `sha256:` prefixed
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_file_hash_is_stable() {
        let a = OutputFile::new("servers/a/.env", "X=1\n");
        let b = OutputFile::new("servers/b/.env", "X=1\n");
        assert_eq!(a.hash(), b.hash());
        assert!(a.hash().starts_with("sha256:"));
        assert_eq!(a.hash().len(), 7 + 64);
    }

    #[test]
    fn executable_flag_defaults_off() {
        let file = OutputFile::new("run.sh", "#!/bin/sh\n");
        assert!(!file.is_executable());
        assert!(file.executable().is_executable());
    }
}
