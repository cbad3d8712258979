//! Domain Layer
//!
//! The document model and the logic that edits and renders it, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - ComposeDocument and its rows (Service, EnvironmentRecord, ServiceFileBundle)
//! - `value_objects/` - Immutable value types (ServerFlavor)
//! - `services/` - EntityReconciler and the artifact renderer
//! - `ports/` - Interfaces for the file system, persistence, prompts and the container runtime

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
