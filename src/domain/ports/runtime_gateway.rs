//! RuntimeGateway port - the live container runtime
//!
//! The reconciliation core only needs `list_active_service_names`; the rest
//! backs the runtime commands (`up`, `down`, `backup`, ...).

use std::path::Path;

use crate::error::DockcraftResult;

/// Captured result of a finished runtime command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Queries and controls the container runtime
pub trait RuntimeGateway {
    /// Services the runtime knows for the current manifest
    fn list_active_service_names(&self) -> DockcraftResult<Vec<String>>;

    /// Run a compose subcommand (`up -d`, `stop`, ...).
    ///
    /// A non-zero exit is returned as `RuntimeInvocationFailure`.
    fn compose(&self, args: &[&str]) -> DockcraftResult<CommandOutput>;

    /// Like `compose`, but with the terminal attached (`up` without `-d`)
    fn compose_attached(&self, args: &[&str]) -> DockcraftResult<()>;

    /// Running container backing `service`, if any
    fn container_for(&self, service: &str) -> DockcraftResult<Option<String>>;

    /// Archive `/<service>` from its container into `archive` (tar.gz)
    fn export_data(&self, container: &str, service: &str, archive: &Path) -> DockcraftResult<()>;

    /// Attach an interactive shell to `container`
    fn open_shell(&self, container: &str) -> DockcraftResult<()>;
}
