//! EnvironmentRecord entity - variables written to a service's `.env`

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DockcraftError, DockcraftResult};

/// Per-service environment, joined to its service by `container_name`.
///
/// Every other key is kept verbatim and rendered as `KEY=VALUE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    #[serde(rename = "CONTAINER_NAME", alias = "container_name")]
    pub container_name: String,
    #[serde(flatten)]
    pub variables: BTreeMap<String, Value>,
}

impl EnvironmentRecord {
    pub fn new(container_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Heap sizing and jar defaults for a JVM server
    pub fn scaffold(container_name: impl Into<String>, jar_file: &str, host_port: u16) -> Self {
        let mut host_ports = serde_json::Map::new();
        host_ports.insert("HOST_PORT".to_string(), Value::from(host_port));

        Self::new(container_name)
            .with_var("SERVER_JAR", jar_file)
            .with_var("JAVA_ARGS", "")
            .with_var("MIN_HEAP_SIZE", "256M")
            .with_var("MAX_HEAP_SIZE", "1024M")
            .with_var("HOST_PORTS", Value::Object(host_ports))
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Variable as a string, if it is a scalar
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.variables.get(key)? {
            Value::Object(_) | Value::Array(_) => None,
            other => Some(scalar_to_string(other)),
        }
    }

    /// `KEY=VALUE` pairs in render order: `CONTAINER_NAME` first, then
    /// variables sorted by key. Object values expand to one pair per member.
    ///
    /// Values stay verbatim, so a line break in a value, a malformed key or a
    /// key produced twice (a member repeating a top-level key) is an
    /// `InconsistentDocument` error rather than a silently altered `.env`.
    pub fn env_lines(&self) -> DockcraftResult<Vec<(String, String)>> {
        let mut lines = vec![("CONTAINER_NAME".to_string(), self.container_name.clone())];
        for (key, value) in &self.variables {
            match value {
                Value::Object(members) => {
                    for (member, inner) in members {
                        lines.push((member.clone(), scalar_to_string(inner)));
                    }
                }
                other => lines.push((key.clone(), scalar_to_string(other))),
            }
        }

        let mut seen = HashSet::new();
        for (key, value) in &lines {
            let bad_key =
                key.is_empty() || key.contains('=') || key.chars().any(is_break_or_space);
            let reason = if bad_key {
                format!("invalid variable name {:?}", key)
            } else if value.contains(['\n', '\r']) {
                format!("line break in variable '{}'", key)
            } else if !seen.insert(key.as_str()) {
                format!("variable '{}' defined twice", key)
            } else {
                continue;
            };
            return Err(DockcraftError::InconsistentDocument {
                name: self.container_name.clone(),
                reason,
            });
        }
        Ok(lines)
    }
}

fn is_break_or_space(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(","),
        // Nested objects below the first level are kept as JSON text
        other => other.to_string(),
    }
}
