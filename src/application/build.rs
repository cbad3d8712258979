//! Build Use Case
//!
//! Renders a document and writes the artifact tree. Files whose content
//! already matches are left alone.

use std::path::{Path, PathBuf};

use crate::domain::entities::{hash_content, ComposeDocument};
use crate::domain::ports::FileSystem;
use crate::domain::services::{render_document, COMPOSE_FILE};
use crate::error::DockcraftResult;

use super::Workspace;

/// Outcome of writing the artifact tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Files created or rewritten
    pub written: Vec<PathBuf>,
    /// Files already byte-identical to the render
    pub unchanged: Vec<PathBuf>,
}

impl BuildReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// Render-and-write over a file system
pub struct BuildUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> BuildUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Render `doc` into `workspace`.
    ///
    /// The whole tree is rendered before the first write, so an inconsistent
    /// document leaves the disk untouched. Write errors stop at the first
    /// failing file.
    pub fn execute(
        &self,
        doc: &ComposeDocument,
        workspace: &Workspace,
    ) -> DockcraftResult<BuildReport> {
        let outputs = render_document(doc)?;
        let mut report = BuildReport::default();

        for output in &outputs {
            let target = self.target_path(output.path(), workspace);
            if self.is_current(&target, output.hash()) {
                tracing::trace!(path = %target.display(), "unchanged");
                report.unchanged.push(target.clone());
            } else {
                self.fs.write(&target, output.content())?;
                tracing::debug!(path = %target.display(), "written");
                report.written.push(target.clone());
            }
            if output.is_executable() {
                self.fs.set_executable(&target)?;
            }
        }

        tracing::info!(
            written = report.written.len(),
            unchanged = report.unchanged.len(),
            "artifacts rendered"
        );
        Ok(report)
    }

    fn target_path(&self, relative: &Path, workspace: &Workspace) -> PathBuf {
        if relative == Path::new(COMPOSE_FILE) {
            workspace.compose_path().to_path_buf()
        } else {
            workspace.root().join(relative)
        }
    }

    fn is_current(&self, target: &Path, hash: String) -> bool {
        self.fs.exists(target)
            && self
                .fs
                .read(target)
                .map(|existing| hash_content(existing.as_bytes()) == hash)
                .unwrap_or(false)
    }
}
