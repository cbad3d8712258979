//! Entity - the service/env/bundle triple sharing one key

use super::{EnvironmentRecord, ServerDescriptor, Service, ServiceFileBundle};
use crate::domain::value_objects::ServerFlavor;

/// One logical row of the document: a service with its environment record
/// and file bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub service: Service,
    pub env: EnvironmentRecord,
    pub files: ServiceFileBundle,
}

impl Entity {
    /// Consistent triple with conventional defaults
    pub fn scaffold(name: &str, flavor: ServerFlavor, network: Option<&str>) -> Self {
        let port = flavor.default_port();
        let server = ServerDescriptor::new(flavor, "latest");
        let mut service = Service::scaffold(name, port);
        if let Some(network) = network {
            service.networks.push(network.to_string());
        }

        Self {
            env: EnvironmentRecord::scaffold(name, &server.jar_file, port),
            files: ServiceFileBundle::new(name, server),
            service,
        }
    }

    pub fn name(&self) -> &str {
        &self.service.name
    }

    /// Force every join key to `name`, whatever the payload carried
    pub fn with_key(mut self, name: &str) -> Self {
        self.service.name = name.to_string();
        self.env.container_name = name.to_string();
        self.files.name = name.to_string();
        self
    }

    /// True when the three join keys agree
    pub fn is_consistent(&self) -> bool {
        self.service.name == self.env.container_name && self.service.name == self.files.name
    }
}
