//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CreateUseCase` - collect a new document, save it, render it
//! - `UpdateUseCase` - load, add/remove/change one service, save, render
//! - `BuildUseCase` - render the saved document into the artifact tree
//! - `runtime` - compose lifecycle actions, backups and shells

pub mod build;
pub mod create;
pub mod runtime;
pub mod services;
pub mod update;
mod workspace;

#[cfg(test)]
pub(crate) mod testing;

pub use build::{BuildReport, BuildUseCase};
pub use create::{CreateResult, CreateUseCase};
pub use runtime::{
    backup_archive_name, backup_services, open_shell, run_action, BackupReport, RuntimeAction,
};
pub use services::{known_services, validate_service};
pub use update::{UpdateMode, UpdateOptions, UpdateResult, UpdateUseCase};
pub use workspace::Workspace;
