//! Runtime Use Cases
//!
//! Thin orchestration over the RuntimeGateway: lifecycle actions, data
//! backup and shell access.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::domain::ports::RuntimeGateway;
use crate::domain::value_objects::check_service_name;
use crate::error::{DockcraftError, DockcraftResult};

/// Lifecycle commands passed through to compose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeAction {
    /// `up`, detached unless `attached`
    Up { attached: bool },
    /// `down`, optionally removing volumes
    Down { volumes: bool },
    Start,
    Stop,
}

impl RuntimeAction {
    pub fn args(&self) -> Vec<&'static str> {
        match self {
            RuntimeAction::Up { attached: true } => vec!["up"],
            RuntimeAction::Up { attached: false } => vec!["up", "-d"],
            RuntimeAction::Down { volumes: true } => vec!["down", "-v"],
            RuntimeAction::Down { volumes: false } => vec!["down"],
            RuntimeAction::Start => vec!["start"],
            RuntimeAction::Stop => vec!["stop"],
        }
    }

    /// Progress label shown while the command runs
    pub fn description(&self) -> &'static str {
        match self {
            RuntimeAction::Up { .. } => "Putting up containers",
            RuntimeAction::Down { .. } => "Removing containers",
            RuntimeAction::Start => "Starting services",
            RuntimeAction::Stop => "Stopping services",
        }
    }

    /// Whether the command needs the terminal
    pub fn is_attached(&self) -> bool {
        matches!(self, RuntimeAction::Up { attached: true })
    }
}

/// Run one lifecycle action. Returns captured stdout (empty when attached).
pub fn run_action(
    runtime: &dyn RuntimeGateway,
    action: RuntimeAction,
) -> DockcraftResult<String> {
    let args = action.args();
    tracing::info!(?action, "runtime action");
    if action.is_attached() {
        runtime.compose_attached(&args)?;
        return Ok(String::new());
    }
    Ok(runtime.compose(&args)?.stdout)
}

/// `<service>_<DD-MM-YYYY_HH-MM-SS>.tar.gz`
///
/// Fails with `InvalidServiceName` when `service` is not a plain file name.
pub fn backup_archive_name(service: &str, at: &DateTime<Local>) -> DockcraftResult<String> {
    check_service_name(service).map_err(|e| e.for_name(service))?;
    Ok(format!("{}_{}.tar.gz", service, at.format("%d-%m-%Y_%H-%M-%S")))
}

/// What a backup run did per service
#[derive(Debug, Default)]
pub struct BackupReport {
    /// (service, archive)
    pub archived: Vec<(String, PathBuf)>,
    /// Services without a running container
    pub skipped: Vec<String>,
    /// (service, error) for exports that failed
    pub failed: Vec<(String, DockcraftError)>,
}

/// Archive the data directory of every running service in `services`.
///
/// A failing service does not stop the others; see `BackupReport::failed`.
pub fn backup_services(
    runtime: &dyn RuntimeGateway,
    services: &[String],
    backup_dir: &Path,
    at: DateTime<Local>,
) -> DockcraftResult<BackupReport> {
    std::fs::create_dir_all(backup_dir)?;
    let mut report = BackupReport::default();

    for service in services {
        let archive = match backup_archive_name(service, &at) {
            Ok(name) => backup_dir.join(name),
            Err(err) => {
                tracing::warn!(service = %service, error = %err, "backup refused");
                report.failed.push((service.clone(), err));
                continue;
            }
        };
        let container = match runtime.container_for(service) {
            Ok(Some(container)) => container,
            Ok(None) => {
                tracing::warn!(service = %service, "no running container, skipped");
                report.skipped.push(service.clone());
                continue;
            }
            Err(err) => {
                report.failed.push((service.clone(), err));
                continue;
            }
        };

        match runtime.export_data(&container, service, &archive) {
            Ok(()) => {
                tracing::info!(service = %service, archive = %archive.display(), "backed up");
                report.archived.push((service.clone(), archive));
            }
            Err(err) => {
                tracing::warn!(service = %service, error = %err, "backup failed");
                report.failed.push((service.clone(), err));
            }
        }
    }

    Ok(report)
}

/// Open a shell in the container backing `service`
pub fn open_shell(runtime: &dyn RuntimeGateway, service: &str) -> DockcraftResult<()> {
    let container = runtime
        .container_for(service)?
        .ok_or_else(|| DockcraftError::EntityNotFound {
            name: service.to_string(),
        })?;
    runtime.open_shell(&container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeRuntime;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 12, 5, 7).unwrap()
    }

    #[test]
    fn action_args() {
        assert_eq!(RuntimeAction::Up { attached: false }.args(), vec!["up", "-d"]);
        assert_eq!(RuntimeAction::Up { attached: true }.args(), vec!["up"]);
        assert_eq!(RuntimeAction::Down { volumes: true }.args(), vec!["down", "-v"]);
        assert_eq!(RuntimeAction::Stop.args(), vec!["stop"]);
    }

    #[test]
    fn run_action_passes_args_through() {
        let runtime = FakeRuntime::default();
        run_action(&runtime, RuntimeAction::Down { volumes: false }).unwrap();
        run_action(&runtime, RuntimeAction::Up { attached: true }).unwrap();
        assert_eq!(*runtime.calls.borrow(), vec!["down", "up"]);
    }

    #[test]
    fn run_action_surfaces_failure() {
        let err = run_action(&FakeRuntime::failing(), RuntimeAction::Start).unwrap_err();
        assert!(matches!(
            err,
            DockcraftError::RuntimeInvocationFailure { code: Some(1), .. }
        ));
    }

    #[test]
    fn archive_name_uses_day_first_timestamp() {
        assert_eq!(
            backup_archive_name("lobby", &noon()).unwrap(),
            "lobby_09-03-2024_12-05-07.tar.gz"
        );
    }

    #[test]
    fn archive_name_rejects_path_like_services() {
        for service in ["../x", "a/b", ""] {
            assert!(matches!(
                backup_archive_name(service, &noon()),
                Err(DockcraftError::InvalidServiceName { .. })
            ));
        }
    }

    #[test]
    fn backup_never_writes_outside_backup_dir() {
        let dir = tempdir().unwrap();
        let runtime = FakeRuntime::default()
            .with_container("../escaped", "mc-escaped-1")
            .with_container("proxy", "mc-proxy-1");
        let services = vec!["../escaped".to_string(), "proxy".to_string()];
        let backup_dir = dir.path().join(".backup");

        let report = backup_services(&runtime, &services, &backup_dir, noon()).unwrap();

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "../escaped");
        assert_eq!(report.archived.len(), 1);
        let exports = runtime.exports.borrow();
        assert_eq!(exports.len(), 1);
        assert!(exports[0].2.starts_with(&backup_dir));
    }

    #[test]
    fn backup_skips_stopped_services() {
        let dir = tempdir().unwrap();
        let runtime = FakeRuntime::default().with_container("proxy", "mc-proxy-1");
        let services = vec!["proxy".to_string(), "lobby".to_string()];

        let backup_dir = dir.path().join(".backup");
        let report = backup_services(&runtime, &services, &backup_dir, noon()).unwrap();

        assert_eq!(report.archived.len(), 1);
        assert_eq!(report.skipped, vec!["lobby"]);
        let exports = runtime.exports.borrow();
        assert_eq!(exports[0].0, "mc-proxy-1");
        assert_eq!(exports[0].1, "proxy");
        assert_eq!(
            exports[0].2,
            dir.path().join(".backup/proxy_09-03-2024_12-05-07.tar.gz")
        );
        assert!(dir.path().join(".backup").is_dir());
    }

    #[test]
    fn backup_collects_failures() {
        let dir = tempdir().unwrap();
        let services = vec!["proxy".to_string()];

        let runtime = FakeRuntime::failing();
        let report = backup_services(&runtime, &services, dir.path(), noon()).unwrap();

        assert!(report.archived.is_empty());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "proxy");
    }

    #[test]
    fn shell_needs_running_container() {
        let runtime = FakeRuntime::default().with_container("lobby", "mc-lobby-1");

        open_shell(&runtime, "lobby").unwrap();
        assert_eq!(*runtime.shells.borrow(), vec!["mc-lobby-1"]);

        assert!(matches!(
            open_shell(&runtime, "survival"),
            Err(DockcraftError::EntityNotFound { .. })
        ));
    }
}
