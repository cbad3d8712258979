//! Update options

use crate::domain::services::Operation;
use crate::error::{DockcraftError, DockcraftResult};

/// What `update` does to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// No mode flag: print the service names
    #[default]
    List,
    Add,
    Remove,
    Change,
}

impl UpdateMode {
    /// At most one of the three flags may be set
    pub fn from_flags(add: bool, remove: bool, change: bool) -> DockcraftResult<Self> {
        match (add, remove, change) {
            (false, false, false) => Ok(UpdateMode::List),
            (true, false, false) => Ok(UpdateMode::Add),
            (false, true, false) => Ok(UpdateMode::Remove),
            (false, false, true) => Ok(UpdateMode::Change),
            _ => Err(DockcraftError::ConflictingModeFlags),
        }
    }

    pub fn operation(self) -> Option<Operation> {
        match self {
            UpdateMode::List => None,
            UpdateMode::Add => Some(Operation::Add),
            UpdateMode::Remove => Some(Operation::Remove),
            UpdateMode::Change => Some(Operation::Change),
        }
    }
}

/// Options for the update command
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Target service; prompted for when absent
    pub service: Option<String>,
    pub mode: UpdateMode,
}

impl UpdateOptions {
    pub fn new(mode: UpdateMode) -> Self {
        Self {
            service: None,
            mode,
        }
    }

    pub fn with_service(mut self, service: Option<String>) -> Self {
        self.service = service;
        self
    }
}
