//! ComposeDocument entity - the declarative root record
//!
//! Three collections (`services`, `envs`, `service_files`) form one logical
//! table joined on the service name. All edits go through the methods here so
//! the collections never drift apart. This is a pure data structure; loading
//! and saving live in `DocumentRepository`.

use std::collections::HashSet;

use super::{Entity, EnvironmentRecord, Service, ServiceFileBundle};
use crate::domain::value_objects::check_service_name;
use crate::error::{DockcraftError, DockcraftResult};

/// Borrowed view of one resolved row
#[derive(Debug, Clone, Copy)]
pub struct EntityRef<'a> {
    pub service: &'a Service,
    pub env: &'a EnvironmentRecord,
    pub files: &'a ServiceFileBundle,
}

/// The persisted deployment description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeDocument {
    services: Vec<Service>,
    networks: Vec<String>,
    envs: Vec<EnvironmentRecord>,
    service_files: Vec<ServiceFileBundle>,
}

impl ComposeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble from already-parsed collections (no validation)
    pub fn from_parts(
        services: Vec<Service>,
        networks: Vec<String>,
        envs: Vec<EnvironmentRecord>,
        service_files: Vec<ServiceFileBundle>,
    ) -> Self {
        let mut doc = Self {
            services,
            networks: Vec::new(),
            envs,
            service_files,
        };
        for network in networks {
            doc.add_network(network);
        }
        doc
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn networks(&self) -> &[String] {
        &self.networks
    }

    pub fn envs(&self) -> &[EnvironmentRecord] {
        &self.envs
    }

    pub fn service_files(&self) -> &[ServiceFileBundle] {
        &self.service_files
    }

    /// True when no collection has any element
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
            && self.networks.is_empty()
            && self.envs.is_empty()
            && self.service_files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn service_names(&self) -> Vec<String> {
        self.services.iter().map(|s| s.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.iter().any(|s| s.name == name)
    }

    /// Record a network; duplicates are ignored
    pub fn add_network(&mut self, network: impl Into<String>) {
        let network = network.into();
        if !self.networks.contains(&network) {
            self.networks.push(network);
        }
    }

    /// Owned copy of the row keyed by `name`.
    ///
    /// Fails with `EntityNotFound` when no service has that name and with
    /// `InconsistentDocument` when the service exists without its partners.
    pub fn entity(&self, name: &str) -> DockcraftResult<Entity> {
        let service = self
            .services
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| DockcraftError::EntityNotFound {
                name: name.to_string(),
            })?;
        let resolved = self.resolve(service)?;
        Ok(Entity {
            service: resolved.service.clone(),
            env: resolved.env.clone(),
            files: resolved.files.clone(),
        })
    }

    /// Insert or replace the row keyed by `entity.name()`.
    ///
    /// Existing rows are replaced at their current position in every
    /// collection; new rows are appended. Returns the replaced row, if the
    /// service existed.
    pub fn upsert(&mut self, entity: Entity) -> Option<Entity> {
        debug_assert!(entity.is_consistent());
        let name = entity.name().to_string();
        let previous = self.entity(&name).ok();

        replace_or_push(&mut self.services, entity.service, |s| s.name == name);
        replace_or_push(&mut self.envs, entity.env, |e| e.container_name == name);
        replace_or_push(&mut self.service_files, entity.files, |f| f.name == name);

        previous
    }

    /// Delete the row keyed by `name` from all three collections.
    ///
    /// Returns the removed service, or `None` (document untouched) when no
    /// service carries that name.
    pub fn remove(&mut self, name: &str) -> Option<Service> {
        let index = self.services.iter().position(|s| s.name == name)?;
        let service = self.services.remove(index);
        self.envs.retain(|e| e.container_name != name);
        self.service_files.retain(|f| f.name != name);
        Some(service)
    }

    /// Resolve every service to its partners, in document order.
    ///
    /// Enforces the join invariants: unique names in each collection, a
    /// partner for every service, no orphaned env record or bundle.
    pub fn resolved(&self) -> DockcraftResult<Vec<EntityRef<'_>>> {
        self.check_names()?;
        check_unique(self.services.iter().map(|s| s.name.as_str()), "duplicate service")?;
        check_unique(
            self.envs.iter().map(|e| e.container_name.as_str()),
            "duplicate environment record",
        )?;
        check_unique(
            self.service_files.iter().map(|f| f.name.as_str()),
            "duplicate service file bundle",
        )?;

        let rows = self
            .services
            .iter()
            .map(|service| self.resolve(service))
            .collect::<DockcraftResult<Vec<_>>>()?;

        if let Some(env) = self.envs.iter().find(|e| !self.contains(&e.container_name)) {
            return Err(inconsistent(&env.container_name, "environment record without service"));
        }
        if let Some(files) = self.service_files.iter().find(|f| !self.contains(&f.name)) {
            return Err(inconsistent(&files.name, "service file bundle without service"));
        }

        Ok(rows)
    }

    /// Every service name must be usable as a single directory name
    pub fn check_names(&self) -> DockcraftResult<()> {
        for service in &self.services {
            check_service_name(&service.name).map_err(|e| e.for_name(&service.name))?;
        }
        Ok(())
    }

    /// Check the join invariants without keeping the resolved rows
    pub fn validate(&self) -> DockcraftResult<()> {
        self.resolved().map(|_| ())
    }

    fn resolve<'a>(&'a self, service: &'a Service) -> DockcraftResult<EntityRef<'a>> {
        let name = service.name.as_str();
        let env = self
            .envs
            .iter()
            .find(|e| e.container_name == name)
            .ok_or_else(|| inconsistent(name, "no environment record"))?;
        let files = self
            .service_files
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| inconsistent(name, "no service file bundle"))?;
        Ok(EntityRef {
            service,
            env,
            files,
        })
    }
}

fn inconsistent(name: &str, reason: &str) -> DockcraftError {
    DockcraftError::InconsistentDocument {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn check_unique<'a>(names: impl Iterator<Item = &'a str>, reason: &str) -> DockcraftResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(inconsistent(name, reason));
        }
    }
    Ok(())
}

fn replace_or_push<T>(items: &mut Vec<T>, item: T, matches: impl Fn(&T) -> bool) {
    match items.iter().position(matches) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}
