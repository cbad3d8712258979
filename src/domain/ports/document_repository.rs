//! DocumentRepository port - persistence of the ComposeDocument
//!
//! The reconciler and renderer never see the on-disk format; they receive a
//! typed document from `load` and hand one back to `save`.

use crate::domain::entities::ComposeDocument;
use crate::error::DockcraftResult;

/// Abstract store for the declarative document
pub trait DocumentRepository {
    /// Whether a persisted document exists
    fn exists(&self) -> bool;

    /// Load and validate the document's structural shape.
    ///
    /// Errors: `MissingDocument`, `EmptyDocument`, `MalformedDocument`.
    fn load(&self) -> DockcraftResult<ComposeDocument>;

    /// Replace the persisted document as a whole
    fn save(&self, doc: &ComposeDocument) -> DockcraftResult<()>;
}
