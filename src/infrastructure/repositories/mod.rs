//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod document;

pub use document::{parse_document, serialize_document, JsonDocumentRepository, DOCUMENT_FILE};
