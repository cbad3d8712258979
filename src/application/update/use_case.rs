//! Update Use Case
//!
//! Load, apply one reconciliation operation, persist, render.

use crate::domain::ports::{Confirmer, DocumentRepository, EntityPrompter, FileSystem};
use crate::domain::services::{Change, EntityReconciler, Operation, ReconcileOutcome};
use crate::error::{DockcraftError, DockcraftResult};

use super::options::{UpdateMode, UpdateOptions};
use crate::application::build::{BuildReport, BuildUseCase};
use crate::application::Workspace;

/// Result of an update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateResult {
    /// No mode requested; current service names
    Listed { services: Vec<String> },
    /// Document edited, saved and re-rendered
    Applied { change: Change, build: BuildReport },
    /// Operator declined; nothing was written
    Declined { operation: Operation, name: String },
}

pub struct UpdateUseCase<R, FS>
where
    R: DocumentRepository,
    FS: FileSystem,
{
    repo: R,
    build: BuildUseCase<FS>,
}

impl<R, FS> UpdateUseCase<R, FS>
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

    pub fn execute(
        &self,
        options: &UpdateOptions,
        workspace: &Workspace,
        prompter: &dyn EntityPrompter,
        confirmer: &dyn Confirmer,
    ) -> DockcraftResult<UpdateResult> {
        let doc = self.repo.load()?;
        if doc.services().is_empty() {
            return Err(DockcraftError::NoEntitiesFound);
        }

        let reconciler = EntityReconciler::new(prompter, confirmer);
        let name = options.service.as_deref();
        let outcome = match options.mode {
            UpdateMode::List => {
                return Ok(UpdateResult::Listed {
                    services: doc.service_names(),
                })
            }
            UpdateMode::Add => reconciler.add(doc, name)?,
            UpdateMode::Remove => reconciler.remove(doc, name)?,
            UpdateMode::Change => reconciler.change(doc, name)?,
        };

        match outcome {
            ReconcileOutcome::Declined { operation, name } => {
                tracing::info!(%operation, service = %name, "declined, document unchanged");
                Ok(UpdateResult::Declined { operation, name })
            }
            ReconcileOutcome::Applied { doc, change } => {
                doc.validate()?;
                self.repo.save(&doc)?;
                let build = self.build.execute(&doc, workspace)?;
                Ok(UpdateResult::Applied { change, build })
            }
        }
    }
}
