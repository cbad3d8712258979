//! Domain Entities
//!
//! - `ComposeDocument` - the persisted deployment description
//! - `Service`, `EnvironmentRecord`, `ServiceFileBundle` - its three collections
//! - `Entity` - one row across the three collections
//! - `OutputFile` - a rendered artifact

mod document;
mod entity;
mod environment;
mod output_file;
mod service;
mod service_files;

pub use document::{ComposeDocument, EntityRef};
pub use entity::Entity;
pub use environment::EnvironmentRecord;
pub use output_file::{hash_content, OutputFile};
pub use service::{service_dir, BuildSource, ResourceBound, Resources, Service};
pub use service_files::{ServerDescriptor, ServiceFileBundle, DEFAULT_IMAGE};
