//! In-memory runtime gateway for use case tests

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::{CommandOutput, RuntimeGateway};
use crate::error::{DockcraftError, DockcraftResult};

#[derive(Default)]
pub struct FakeRuntime {
    pub services: Vec<String>,
    pub fail: bool,
    /// service -> running container
    pub containers: BTreeMap<String, String>,
    /// Every compose invocation, args joined by spaces
    pub calls: RefCell<Vec<String>>,
    /// (container, service, archive) per export
    pub exports: RefCell<Vec<(String, String, PathBuf)>>,
    pub shells: RefCell<Vec<String>>,
}

impl FakeRuntime {
    pub fn with_services(names: &[&str]) -> Self {
        Self {
            services: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_container(mut self, service: &str, container: &str) -> Self {
        self.containers
            .insert(service.to_string(), container.to_string());
        self
    }

    fn check(&self, command: &str) -> DockcraftResult<()> {
        if self.fail {
            return Err(DockcraftError::RuntimeInvocationFailure {
                command: command.to_string(),
                code: Some(1),
                stderr: "Cannot connect to the Docker daemon".to_string(),
            });
        }
        Ok(())
    }
}

impl RuntimeGateway for FakeRuntime {
    fn list_active_service_names(&self) -> DockcraftResult<Vec<String>> {
        self.check("docker compose config --services")?;
        Ok(self.services.clone())
    }

    fn compose(&self, args: &[&str]) -> DockcraftResult<CommandOutput> {
        let joined = args.join(" ");
        self.calls.borrow_mut().push(joined.clone());
        self.check(&format!("docker compose {}", joined))?;
        Ok(CommandOutput {
            code: Some(0),
            ..CommandOutput::default()
        })
    }

    fn compose_attached(&self, args: &[&str]) -> DockcraftResult<()> {
        self.compose(args).map(|_| ())
    }

    fn container_for(&self, service: &str) -> DockcraftResult<Option<String>> {
        self.check("docker compose ps")?;
        Ok(self.containers.get(service).cloned())
    }

    fn export_data(&self, container: &str, service: &str, archive: &Path) -> DockcraftResult<()> {
        self.check("docker exec")?;
        self.exports.borrow_mut().push((
            container.to_string(),
            service.to_string(),
            archive.to_path_buf(),
        ));
        Ok(())
    }

    fn open_shell(&self, container: &str) -> DockcraftResult<()> {
        self.check("docker exec -it")?;
        self.shells.borrow_mut().push(container.to_string());
        Ok(())
    }
}
