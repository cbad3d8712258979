//! ServiceFileBundle entity - what gets materialized under `servers/<name>/`

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ServerFlavor;

/// Base image used when a bundle does not pin one
pub const DEFAULT_IMAGE: &str = "eclipse-temurin:21-jre";

/// Payload descriptor for a service, joined by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFileBundle {
    pub name: String,
    pub server: ServerDescriptor,
}

impl ServiceFileBundle {
    pub fn new(name: impl Into<String>, server: ServerDescriptor) -> Self {
        Self {
            name: name.into(),
            server,
        }
    }
}

/// Server binary, flavor and version for one container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    pub jar_file: String,
    #[serde(rename = "type", default)]
    pub flavor: ServerFlavor,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ServerDescriptor {
    pub fn new(flavor: ServerFlavor, version: impl Into<String>) -> Self {
        Self {
            jar_file: "server.jar".to_string(),
            flavor,
            version: version.into(),
            image: None,
        }
    }

    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_tag() {
        let bundle: ServiceFileBundle = serde_json::from_str(
            r#"{"name":"server1","server":{"jar_file":"server.jar","type":"paper","version":"1.20.1"}}"#,
        )
        .unwrap();

        assert_eq!(bundle.server.flavor, ServerFlavor::Paper);
        assert_eq!(bundle.server.version, "1.20.1");
        assert_eq!(bundle.server.image(), DEFAULT_IMAGE);
    }

    #[test]
    fn pinned_image_overrides_default() {
        let mut server = ServerDescriptor::new(ServerFlavor::Velocity, "3.3.0");
        server.image = Some("eclipse-temurin:17-jre".to_string());
        assert_eq!(server.image(), "eclipse-temurin:17-jre");
    }
}
