//! Create Use Case
//!
//! Collects a fresh document, persists it and renders its artifacts.

use crate::domain::entities::ComposeDocument;
use crate::domain::ports::{Confirmer, DocumentRepository, EntityPrompter, FileSystem};
use crate::domain::services::EntityReconciler;
use crate::error::{DockcraftError, DockcraftResult};

use super::build::{BuildReport, BuildUseCase};
use super::Workspace;

/// Result of a create
#[derive(Debug, Clone)]
pub struct CreateResult {
    pub doc: ComposeDocument,
    pub build: BuildReport,
}

pub struct CreateUseCase<R, FS>
where
    R: DocumentRepository,
    FS: FileSystem,
{
    repo: R,
    build: BuildUseCase<FS>,
}

impl<R, FS> CreateUseCase<R, FS>
where
    R: DocumentRepository,
    FS: FileSystem,
{
    pub fn new(repo: R, fs: FS) -> Self {
        Self {
            repo,
            build: BuildUseCase::new(fs),
        }
    }

    /// Single-service document without `network`, networked document with it.
    ///
    /// Refuses to run over an existing document. The document is saved
    /// before rendering so collected input survives a failed write.
    pub fn execute(
        &self,
        network: Option<&str>,
        workspace: &Workspace,
        prompter: &dyn EntityPrompter,
        confirmer: &dyn Confirmer,
    ) -> DockcraftResult<CreateResult> {
        if self.repo.exists() {
            return Err(DockcraftError::DocumentAlreadyExists {
                path: workspace.document_path().to_path_buf(),
            });
        }

        let doc = EntityReconciler::new(prompter, confirmer).create(network)?;
        doc.validate()?;
        self.repo.save(&doc)?;
        let build = self.build.execute(&doc, workspace)?;

        Ok(CreateResult { doc, build })
    }
}
