//! JSON Document Repository
//!
//! Implements the DocumentRepository port over `data.json`:
//!
//! ```json
//! {
//!   "compose": { "services": [...], "networks": [...] },
//!   "envs": [...],
//!   "service_files": [...]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ComposeDocument, EnvironmentRecord, Service, ServiceFileBundle};
use crate::domain::ports::{DocumentRepository, FileSystem};
use crate::error::{DockcraftError, DockcraftResult};
use crate::infrastructure::fs::LocalFs;

/// Default document file name
pub const DOCUMENT_FILE: &str = "data.json";

/// On-disk shape of the document
#[derive(Debug, Default, Serialize, Deserialize)]
struct DocumentFile {
    #[serde(default)]
    compose: ComposeSection,
    #[serde(default)]
    envs: Vec<EnvironmentRecord>,
    #[serde(default)]
    service_files: Vec<ServiceFileBundle>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ComposeSection {
    #[serde(default)]
    services: Vec<Service>,
    #[serde(default)]
    networks: Vec<String>,
}

const TOP_LEVEL_KEYS: [&str; 3] = ["compose", "envs", "service_files"];

/// JSON-file backed document store
pub struct JsonDocumentRepository<F: FileSystem = LocalFs> {
    fs: F,
    path: PathBuf,
}

impl JsonDocumentRepository<LocalFs> {
    /// Repository over `path` on the local disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(LocalFs::new(), path)
    }
}

impl<F: FileSystem> JsonDocumentRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<F: FileSystem> DocumentRepository for JsonDocumentRepository<F> {
    fn exists(&self) -> bool {
        self.fs.exists(&self.path)
    }

    fn load(&self) -> DockcraftResult<ComposeDocument> {
        if !self.fs.exists(&self.path) {
            return Err(DockcraftError::MissingDocument {
                path: self.path.clone(),
            });
        }
        let content = self.fs.read(&self.path)?;
        let doc = parse_document(&content, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            services = doc.len(),
            networks = doc.networks().len(),
            "loaded document"
        );
        Ok(doc)
    }

    fn save(&self, doc: &ComposeDocument) -> DockcraftResult<()> {
        let content = serialize_document(doc)?;
        self.fs.write(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), services = doc.len(), "saved document");
        Ok(())
    }
}

/// Parse document text. `path` is only used in error messages.
///
/// Blank input, `null`, `{}` and objects carrying none of the document's
/// sections are `EmptyDocument`; anything else that does not fit the schema
/// is `MalformedDocument`.
pub fn parse_document(content: &str, path: &Path) -> DockcraftResult<ComposeDocument> {
    let empty = || DockcraftError::EmptyDocument {
        path: path.to_path_buf(),
    };
    let malformed = |message: String| DockcraftError::MalformedDocument {
        path: path.to_path_buf(),
        message,
    };

    if content.trim().is_empty() {
        return Err(empty());
    }

    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;
    match &value {
        serde_json::Value::Null => return Err(empty()),
        serde_json::Value::Object(map) if !TOP_LEVEL_KEYS.iter().any(|k| map.contains_key(*k)) => {
            return Err(empty())
        }
        serde_json::Value::Object(_) => {}
        _ => return Err(malformed("expected a JSON object".to_string())),
    }

    let file: DocumentFile = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
    let doc = ComposeDocument::from_parts(
        file.compose.services,
        file.compose.networks,
        file.envs,
        file.service_files,
    );
    doc.check_names().map_err(|e| malformed(e.to_string()))?;
    Ok(doc)
}

/// Pretty-printed JSON with a trailing newline
pub fn serialize_document(doc: &ComposeDocument) -> DockcraftResult<String> {
    let file = DocumentFile {
        compose: ComposeSection {
            services: doc.services().to_vec(),
            networks: doc.networks().to_vec(),
        },
        envs: doc.envs().to_vec(),
        service_files: doc.service_files().to_vec(),
    };
    let mut content = serde_json::to_string_pretty(&file)?;
    content.push('\n');
    Ok(content)
}
