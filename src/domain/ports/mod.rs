//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod document_repository;
pub mod file_system;
pub mod prompter;
pub mod runtime_gateway;

pub use document_repository::DocumentRepository;
#[cfg(test)]
pub use file_system::MemoryFs;
#[cfg(test)]
pub use prompter::{ScriptedConfirmer, ScriptedPrompter};
pub use file_system::{FileSystem, FsError, FsResult};
pub use prompter::{AssumeNo, AssumeYes, Confirmer, EntityPrompter, EntityRequest};
pub use runtime_gateway::{CommandOutput, RuntimeGateway};
