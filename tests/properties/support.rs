//! Generators and a non-interactive prompter shared by the properties

use std::collections::BTreeSet;

use dockcraft::domain::ports::{EntityPrompter, EntityRequest};
use dockcraft::{ComposeDocument, DockcraftError, DockcraftResult, Entity, ServerFlavor};
use proptest::prelude::*;

/// Answers every payload request with a scaffold named `payload_name`
/// (or the requested name when `None`).
pub struct FixedPrompter {
    pub payload_name: Option<String>,
}

impl FixedPrompter {
    pub fn new() -> Self {
        Self { payload_name: None }
    }

    pub fn naming(name: &str) -> Self {
        Self {
            payload_name: Some(name.to_string()),
        }
    }
}

impl EntityPrompter for FixedPrompter {
    fn service_name(&self, _taken: &[String]) -> DockcraftResult<String> {
        Err(DockcraftError::Prompt("names are passed explicitly".into()))
    }

    fn entity(&self, request: &EntityRequest<'_>) -> DockcraftResult<Entity> {
        let name = self.payload_name.as_deref().unwrap_or(request.name);
        let mut entity = Entity::scaffold(name, ServerFlavor::Fabric, request.network);
        entity.files.server.version = "1.21".to_string();
        Ok(entity)
    }

    fn continue_adding(&self, _count: usize) -> DockcraftResult<bool> {
        Ok(false)
    }

    fn select_service(&self, names: &[String]) -> DockcraftResult<String> {
        Ok(names[0].clone())
    }

    fn select_network(&self, networks: &[String]) -> DockcraftResult<String> {
        Ok(networks[0].clone())
    }
}

pub fn service_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,10}"
}

fn flavor() -> impl Strategy<Value = ServerFlavor> {
    prop::sample::select(ServerFlavor::ALL.to_vec())
}

/// One entity with random flavor, version, limits and env values
fn entity(name: String, network: Option<String>) -> impl Strategy<Value = Entity> {
    (
        flavor(),
        "[0-9]\\.[0-9]{1,2}(\\.[0-9])?",
        prop::sample::select(vec![0.5, 1.0, 2.0, 4.0]),
        prop::sample::select(vec!["512m", "1g", "4g"]),
        "[ -~]{0,24}",
        prop::collection::btree_map("[A-Z][A-Z_]{0,8}", "[ -~]{0,16}", 0..4),
    )
        .prop_map(move |(flavor, version, cpus, memory, motd, extra)| {
            let mut entity = Entity::scaffold(&name, flavor, network.as_deref());
            entity.files.server.version = version;
            entity.service.resources.limits.cpus = cpus;
            entity.service.resources.limits.memory = memory.to_string();
            entity.env.variables.insert("MOTD".into(), motd.into());
            // HOST_PORT already comes from the HOST_PORTS group
            for (key, value) in extra.into_iter().filter(|(k, _)| k != "HOST_PORT") {
                entity.env.variables.insert(key, value.into());
            }
            entity
        })
}

/// A consistent document with 1..max distinct services
pub fn document(max: usize) -> impl Strategy<Value = ComposeDocument> {
    (
        prop::collection::btree_set(service_name(), 1..max),
        prop::option::of("[a-z]{2,6}"),
    )
        .prop_flat_map(|(names, network): (BTreeSet<String>, Option<String>)| {
            let entities: Vec<_> = names
                .into_iter()
                .map(|name| entity(name, network.clone()))
                .collect();
            (entities, Just(network))
        })
        .prop_map(|(entities, network)| {
            let mut doc = ComposeDocument::new();
            if let Some(network) = network {
                doc.add_network(network);
            }
            for entity in entities {
                doc.upsert(entity);
            }
            doc
        })
}
