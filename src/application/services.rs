//! Known service names
//!
//! Names offered for `--service` and used by `backup`: whatever the runtime
//! reports for the current manifest, else what the document declares.

use crate::domain::ports::{DocumentRepository, RuntimeGateway};
use crate::error::{DockcraftError, DockcraftResult};

/// Service names from the runtime, falling back to the document, then to none.
///
/// Neither source failing is an error here.
pub fn known_services(runtime: &dyn RuntimeGateway, repo: &dyn DocumentRepository) -> Vec<String> {
    match runtime.list_active_service_names() {
        Ok(names) if !names.is_empty() => return names,
        Ok(_) => tracing::debug!("runtime reported no services"),
        Err(err) => tracing::debug!(error = %err, "runtime service listing failed"),
    }

    match repo.load() {
        Ok(doc) => doc.service_names(),
        Err(err) => {
            tracing::debug!(error = %err, "no document to read service names from");
            Vec::new()
        }
    }
}

/// Reject `name` when `known` is non-empty and does not contain it
pub fn validate_service(name: &str, known: &[String]) -> DockcraftResult<()> {
    if known.is_empty() || known.iter().any(|k| k == name) {
        return Ok(());
    }
    Err(DockcraftError::UnknownService {
        name: name.to_string(),
        available: known.to_vec(),
    })
}
