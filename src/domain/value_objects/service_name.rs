//! Service name rules
//!
//! A service name keys the document rows and becomes the directory
//! `servers/<name>/`, the container working directory `/<name>` and the
//! backup archive prefix. It must therefore be exactly one plain path
//! segment.

use std::fmt;
use std::path::{Component, Path};

use crate::error::DockcraftError;

/// Why a service name was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceNameError {
    Empty,
    /// Contains `/` or `\`
    Separator,
    /// `.` or `..`
    Traversal,
    /// Leading or trailing whitespace in a stored name
    Untrimmed,
    /// Control characters such as newlines
    Control,
}

impl fmt::Display for ServiceNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ServiceNameError::Empty => "name is empty",
            ServiceNameError::Separator => "name contains a path separator",
            ServiceNameError::Traversal => "name refers to a parent or current directory",
            ServiceNameError::Untrimmed => "name has surrounding whitespace",
            ServiceNameError::Control => "name contains control characters",
        })
    }
}

impl std::error::Error for ServiceNameError {}

impl ServiceNameError {
    pub fn for_name(self, name: &str) -> DockcraftError {
        DockcraftError::InvalidServiceName {
            name: name.to_string(),
            reason: self.to_string(),
        }
    }
}

/// Check a stored name as-is
pub fn check_service_name(name: &str) -> Result<(), ServiceNameError> {
    if name.is_empty() {
        return Err(ServiceNameError::Empty);
    }
    if name.trim() != name {
        return Err(ServiceNameError::Untrimmed);
    }
    if name.contains(['/', '\\']) {
        return Err(ServiceNameError::Separator);
    }
    if name.chars().any(char::is_control) {
        return Err(ServiceNameError::Control);
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ServiceNameError::Traversal),
    }
}

/// Trim operator input, then check it
pub fn normalize_service_name(raw: &str) -> Result<&str, ServiceNameError> {
    let name = raw.trim();
    check_service_name(name)?;
    Ok(name)
}
