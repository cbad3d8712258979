//! Service entity - one container in the compose manifest

use serde::{Deserialize, Serialize};

/// Directory (relative to the working directory) holding a service's files
pub fn service_dir(name: &str) -> String {
    format!("./servers/{}/", name)
}

/// A container declared in the compose manifest.
///
/// `name` is the join key shared with [`super::EnvironmentRecord`] and
/// [`super::ServiceFileBundle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub build: BuildSource,
    #[serde(default)]
    pub env_file: String,
    /// Published `host:container` mappings
    #[serde(default)]
    pub ports: Vec<String>,
    #[serde(default)]
    pub expose: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,
    #[serde(default)]
    pub resources: Resources,
}

impl Service {
    /// Service with the conventional layout under `servers/<name>/`
    pub fn scaffold(name: impl Into<String>, port: u16) -> Self {
        let name = name.into();
        let dir = service_dir(&name);
        Self {
            build: BuildSource {
                context: dir.clone(),
            },
            env_file: format!("{}.env", dir),
            ports: vec![format!("{}:{}", port, port)],
            expose: Vec::new(),
            networks: Vec::new(),
            resources: Resources::default(),
            name,
        }
    }
}

/// Build context of a service image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSource {
    #[serde(default)]
    pub context: String,
}

/// Soft (reservations) and hard (limits) resource bounds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub limits: ResourceBound,
    #[serde(default)]
    pub reservations: ResourceBound,
}

/// CPU count and memory quantity (`512m`, `2g`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceBound {
    pub cpus: f64,
    pub memory: String,
}

impl Default for ResourceBound {
    fn default() -> Self {
        Self {
            cpus: 1.0,
            memory: "1g".to_string(),
        }
    }
}
