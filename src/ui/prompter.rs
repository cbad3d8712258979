//! Terminal prompts backing the operator ports
//!
//! Collects service payloads with `dialoguer` and answers confirmations.
//! With `--yes`, confirmations are skipped but payloads are still asked for.

use dialoguer::theme::Theme;
use dialoguer::{Confirm, FuzzySelect, Input, Select};

use dockcraft::domain::entities::{Entity, ResourceBound};
use dockcraft::domain::ports::{Confirmer, EntityPrompter, EntityRequest};
use dockcraft::domain::value_objects::{normalize_service_name, ServerFlavor};
use dockcraft::{DockcraftError, DockcraftResult};

use crate::ui::theme::prompt_theme;

/// Lists longer than this get a fuzzy finder instead of a plain select
const FUZZY_THRESHOLD: usize = 8;

pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
    assume_yes: bool,
}

impl DialoguerPrompter {
    pub fn new(color: bool, assume_yes: bool) -> Self {
        Self {
            theme: prompt_theme(color),
            assume_yes,
        }
    }

    fn input<T>(&self, prompt: &str, default: T) -> DockcraftResult<T>
    where
        T: Clone + ToString + std::str::FromStr,
        <T as std::str::FromStr>::Err: ToString,
    {
        Input::<T>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(default)
            .interact_text()
            .map_err(prompt_error)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> DockcraftResult<usize> {
        if items.len() > FUZZY_THRESHOLD {
            FuzzySelect::with_theme(self.theme.as_ref())
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact()
                .map_err(prompt_error)
        } else {
            Select::with_theme(self.theme.as_ref())
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact()
                .map_err(prompt_error)
        }
    }

    fn flavor(&self, request: &EntityRequest<'_>) -> DockcraftResult<ServerFlavor> {
        let choices: Vec<ServerFlavor> = ServerFlavor::ALL
            .iter()
            .copied()
            .filter(|f| !request.is_proxy || f.is_proxy())
            .collect();
        let current = request
            .defaults
            .map(|d| d.files.server.flavor)
            .unwrap_or(if request.is_proxy {
                ServerFlavor::Velocity
            } else {
                ServerFlavor::Paper
            });
        let labels: Vec<String> = choices.iter().map(|f| f.to_string()).collect();
        let default = choices.iter().position(|f| *f == current).unwrap_or(0);

        let index = self.select("Server type", &labels, default)?;
        Ok(choices[index])
    }

    fn resources(&self, label: &str, current: &ResourceBound) -> DockcraftResult<ResourceBound> {
        Ok(ResourceBound {
            cpus: self.input(&format!("{} CPUs", label), current.cpus)?,
            memory: self.input(&format!("{} memory", label), current.memory.clone())?,
        })
    }
}

impl EntityPrompter for DialoguerPrompter {
    fn service_name(&self, taken: &[String]) -> DockcraftResult<String> {
        loop {
            let name: String = Input::with_theme(self.theme.as_ref())
                .with_prompt("Service name")
                .validate_with(|input: &String| -> Result<(), String> {
                    let name = normalize_service_name(input).map_err(|e| e.to_string())?;
                    if taken.iter().any(|t| t == name) {
                        Err(format!("'{}' is already used", name))
                    } else {
                        Ok(())
                    }
                })
                .interact_text()
                .map_err(prompt_error)?;

            let name = name.trim().to_string();
            if self.confirm(&format!("Name this service '{}'?", name), true)? {
                return Ok(name);
            }
        }
    }

    fn entity(&self, request: &EntityRequest<'_>) -> DockcraftResult<Entity> {
        if request.is_proxy {
            eprintln!("Creating proxy service...");
        }

        let flavor = self.flavor(request)?;
        let scaffold = Entity::scaffold(request.name, flavor, request.network);
        let mut entity = request.defaults.cloned().unwrap_or_else(|| scaffold.clone());

        let version = self.input("Server version", entity.files.server.version.clone())?;
        let host_port: u16 = self.input("Host port", host_port_of(&entity, flavor))?;
        let max_heap = self.input(
            "Max heap size",
            entity
                .env
                .get_str("MAX_HEAP_SIZE")
                .unwrap_or_else(|| "1024M".to_string()),
        )?;
        let limits = self.resources("Limit", &entity.service.resources.limits)?;
        let reservations = self.resources("Reserved", &entity.service.resources.reservations)?;

        entity.service.ports =
            with_host_port(&entity.service.ports, host_port, entity.files.server.flavor, flavor);
        entity.files.server.flavor = flavor;
        entity.files.server.version = version;
        entity.service.resources.limits = limits;
        entity.service.resources.reservations = reservations;
        if request.network.is_some() {
            entity.service.networks = scaffold.service.networks;
        }

        // Keep operator-added variables, fill in anything the scaffold knows
        for (key, value) in scaffold.env.variables {
            entity.env.variables.entry(key).or_insert(value);
        }
        entity
            .env
            .variables
            .insert("MAX_HEAP_SIZE".to_string(), max_heap.into());
        entity.env.variables.insert(
            "HOST_PORTS".to_string(),
            serde_json::json!({ "HOST_PORT": host_port }),
        );

        Ok(entity)
    }

    fn continue_adding(&self, count: usize) -> DockcraftResult<bool> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(format!("Want to continue adding services? (Count: {})", count))
            .default(true)
            .interact()
            .map_err(prompt_error)
    }

    fn select_service(&self, names: &[String]) -> DockcraftResult<String> {
        let index = self.select("Select the service", names, 0)?;
        Ok(names[index].clone())
    }

    fn select_network(&self, networks: &[String]) -> DockcraftResult<String> {
        if let [only] = networks {
            return Ok(only.clone());
        }
        let index = self.select("Select a network", networks, 0)?;
        Ok(networks[index].clone())
    }
}

impl Confirmer for DialoguerPrompter {
    fn confirm(&self, message: &str, default: bool) -> DockcraftResult<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

/// Host side of the first port mapping, else the flavor's default port
fn host_port_of(entity: &Entity, flavor: ServerFlavor) -> u16 {
    entity
        .service
        .ports
        .first()
        .and_then(|mapping| mapping.rsplit_once(':'))
        .and_then(|(host, _)| host.rsplit(':').next())
        .and_then(|host| host.parse().ok())
        .unwrap_or_else(|| flavor.default_port())
}

/// Point the first mapping at `host_port`, keeping its bind address and
/// container side plus every other mapping.
///
/// The container side follows a flavor change only while it still holds the
/// previous flavor's default port.
fn with_host_port(
    ports: &[String],
    host_port: u16,
    previous: ServerFlavor,
    flavor: ServerFlavor,
) -> Vec<String> {
    let mut ports = ports.to_vec();
    let Some(first) = ports.first_mut() else {
        return vec![format!("{}:{}", host_port, flavor.default_port())];
    };

    let (host, container) = match first.rsplit_once(':') {
        Some((host, container)) => (Some(host), container),
        None => (None, first.as_str()),
    };
    let (port, protocol) = match container.split_once('/') {
        Some((port, protocol)) => (port, Some(protocol)),
        None => (container, None),
    };
    let port = if previous != flavor && port == previous.default_port().to_string() {
        flavor.default_port().to_string()
    } else {
        port.to_string()
    };
    let container = match protocol {
        Some(protocol) => format!("{}/{}", port, protocol),
        None => port,
    };
    let bind = host.and_then(|h| h.rsplit_once(':')).map(|(ip, _)| ip);

    *first = match bind {
        Some(ip) => format!("{}:{}:{}", ip, host_port, container),
        None => format!("{}:{}", host_port, container),
    };
    ports
}

fn prompt_error(err: dialoguer::Error) -> DockcraftError {
    DockcraftError::Prompt(err.to_string())
}
