//! Dockcraft - declarative scaffolding for multi-server game deployments
//!
//! Dockcraft keeps one JSON document describing a set of game-server
//! containers (and an optional proxy network) and renders it into a
//! compose manifest plus a build context per server.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{ComposeDocument, Entity, OutputFile};
pub use domain::services::{render_document, EntityReconciler};
pub use domain::value_objects::ServerFlavor;
pub use error::{DockcraftError, DockcraftResult};
