//! Entity reconciler
//!
//! Implements create / add / remove / change against a `ComposeDocument`.
//! Payloads come from an [`EntityPrompter`], every mutation is gated by a
//! [`Confirmer`], and a declined confirmation aborts only the current
//! operation (returned as [`ReconcileOutcome::Declined`], never an error).
//!
//! The reconciler does no I/O of its own: loading, saving and rendering are
//! the caller's job.

use crate::domain::entities::{ComposeDocument, Entity};
use crate::domain::ports::{Confirmer, EntityPrompter, EntityRequest};
use crate::domain::value_objects::normalize_service_name;
use crate::error::{DockcraftError, DockcraftResult};

/// Name given to the first service of a networked create
pub const PROXY_SERVICE_NAME: &str = "proxy";

/// Mutating operations of `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    Change,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Change => "change",
        })
    }
}

/// What an applied operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(String),
    /// `add` over an existing name, after overwrite confirmation
    Replaced(String),
    Removed(String),
    Changed(String),
}

impl Change {
    pub fn name(&self) -> &str {
        match self {
            Change::Added(n) | Change::Replaced(n) | Change::Removed(n) | Change::Changed(n) => n,
        }
    }
}

/// Result of an update operation
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileOutcome {
    /// The document was edited
    Applied {
        doc: ComposeDocument,
        change: Change,
    },
    /// The operator declined; the document is unchanged
    Declined { operation: Operation, name: String },
}

/// Create/add/remove/change over one document
pub struct EntityReconciler<'a> {
    prompter: &'a dyn EntityPrompter,
    confirmer: &'a dyn Confirmer,
}

impl<'a> EntityReconciler<'a> {
    pub fn new(prompter: &'a dyn EntityPrompter, confirmer: &'a dyn Confirmer) -> Self {
        Self {
            prompter,
            confirmer,
        }
    }

    /// Build a fresh document.
    ///
    /// Without a network: one service, no network entry. With a network: the
    /// network plus the proxy service followed by services collected until
    /// the operator stops.
    pub fn create(&self, network: Option<&str>) -> DockcraftResult<ComposeDocument> {
        let mut doc = ComposeDocument::new();

        let Some(network) = network else {
            let name = self.unique_name(&[])?;
            let entity = self.collect(&name, None, None, false)?;
            doc.upsert(entity);
            tracing::info!(service = %name, "created single-service document");
            return Ok(doc);
        };

        doc.add_network(network);
        let mut index = 0usize;
        loop {
            let name = if index == 0 {
                PROXY_SERVICE_NAME.to_string()
            } else {
                self.unique_name(&doc.service_names())?
            };
            let entity = self.collect(&name, Some(network), None, index == 0)?;
            doc.upsert(entity);
            tracing::debug!(service = %name, count = doc.len(), "collected service");

            if index >= 1 && !self.prompter.continue_adding(doc.len())? {
                break;
            }
            index += 1;
        }

        tracing::info!(network, services = doc.len(), "created networked document");
        Ok(doc)
    }

    /// Insert a new row keyed by `name` (asked for when `None`).
    ///
    /// The name is trimmed and must be a single plain path segment.
    pub fn add(
        &self,
        mut doc: ComposeDocument,
        name: Option<&str>,
    ) -> DockcraftResult<ReconcileOutcome> {
        let raw = match name {
            Some(name) => name.to_string(),
            None => self.prompter.service_name(&doc.service_names())?,
        };
        let name = normalize_service_name(&raw)
            .map_err(|e| e.for_name(&raw))?
            .to_string();

        let exists = doc.contains(&name);
        if exists
            && !self.confirmer.confirm(
                &format!("Service '{}' already exists. Overwrite?", name),
                false,
            )?
        {
            tracing::info!(service = %name, "overwrite declined");
            return Ok(declined(Operation::Add, name));
        }

        let network = self.pick_network(&doc)?;
        let entity = self.collect(&name, network.as_deref(), None, false)?;

        if !self
            .confirmer
            .confirm(&format!("Add service '{}'?", name), true)?
        {
            return Ok(declined(Operation::Add, name));
        }

        let replaced = doc.upsert(entity).is_some() || exists;
        let change = if replaced {
            Change::Replaced(name)
        } else {
            Change::Added(name)
        };
        tracing::info!(change = ?change, "service added");
        Ok(ReconcileOutcome::Applied { doc, change })
    }

    /// Delete the row keyed by `name` (selected when `None`).
    pub fn remove(
        &self,
        mut doc: ComposeDocument,
        name: Option<&str>,
    ) -> DockcraftResult<ReconcileOutcome> {
        let name = self.target(&doc, name)?;
        if !doc.contains(&name) {
            return Err(DockcraftError::EntityNotFound { name });
        }

        if !self
            .confirmer
            .confirm(&format!("Remove service '{}'?", name), false)?
        {
            return Ok(declined(Operation::Remove, name));
        }

        doc.remove(&name);
        tracing::info!(service = %name, remaining = doc.len(), "service removed");
        Ok(ReconcileOutcome::Applied {
            doc,
            change: Change::Removed(name),
        })
    }

    /// Replace the row keyed by `name`, keeping its key and position.
    ///
    /// The current values are offered as defaults to the prompter.
    pub fn change(
        &self,
        mut doc: ComposeDocument,
        name: Option<&str>,
    ) -> DockcraftResult<ReconcileOutcome> {
        let name = self.target(&doc, name)?;
        let current = doc.entity(&name)?;

        let network = self.pick_network(&doc)?;
        let entity = self.collect(&name, network.as_deref(), Some(&current), false)?;

        if !self
            .confirmer
            .confirm(&format!("Update service '{}'?", name), true)?
        {
            return Ok(declined(Operation::Change, name));
        }

        doc.upsert(entity);
        tracing::info!(service = %name, "service changed");
        Ok(ReconcileOutcome::Applied {
            doc,
            change: Change::Changed(name),
        })
    }

    /// Ask the prompter for a payload and force its keys to `name`
    fn collect(
        &self,
        name: &str,
        network: Option<&str>,
        defaults: Option<&Entity>,
        is_proxy: bool,
    ) -> DockcraftResult<Entity> {
        let request = EntityRequest {
            name,
            network,
            defaults,
            is_proxy,
        };
        let entity = self.prompter.entity(&request)?;
        if entity.name() != name {
            tracing::debug!(payload = entity.name(), key = name, "forcing entity key");
        }
        Ok(entity.with_key(name))
    }

    /// Ask for a name until it is valid and not in `taken`
    fn unique_name(&self, taken: &[String]) -> DockcraftResult<String> {
        loop {
            let raw = self.prompter.service_name(taken)?;
            let name = match normalize_service_name(&raw) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!(service = %raw, "{}", e);
                    continue;
                }
            };
            if taken.iter().any(|t| t == name) {
                tracing::warn!(service = name, "service name already used in this session");
                continue;
            }
            return Ok(name.to_string());
        }
    }

    fn target(&self, doc: &ComposeDocument, name: Option<&str>) -> DockcraftResult<String> {
        if let Some(name) = name {
            return Ok(name.to_string());
        }
        let names = doc.service_names();
        if names.is_empty() {
            return Err(DockcraftError::NoEntitiesFound);
        }
        self.prompter.select_service(&names)
    }

    fn pick_network(&self, doc: &ComposeDocument) -> DockcraftResult<Option<String>> {
        if doc.networks().is_empty() {
            return Ok(None);
        }
        self.prompter.select_network(doc.networks()).map(Some)
    }
}

fn declined(operation: Operation, name: String) -> ReconcileOutcome {
    ReconcileOutcome::Declined { operation, name }
}
