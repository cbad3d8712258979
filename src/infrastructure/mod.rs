//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `repositories/` - JSON document repository
//! - `runtime/` - `docker compose` gateway

pub mod fs;
pub mod repositories;
pub mod runtime;

// Re-export for convenience
pub use fs::LocalFs;
pub use repositories::{JsonDocumentRepository, DOCUMENT_FILE};
pub use runtime::DockerComposeGateway;
