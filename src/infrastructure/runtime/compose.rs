//! Docker Compose Gateway
//!
//! Implements the RuntimeGateway port by shelling out to
//! `<binary> compose -f <manifest> ...` in the working directory.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::domain::ports::{CommandOutput, RuntimeGateway};
use crate::error::{DockcraftError, DockcraftResult};

/// Shells tried, in order, by `open_shell`
const SHELLS: [&str; 2] = ["/bin/bash", "/bin/sh"];

/// `docker exec` exit codes meaning the command could not be started
const EXEC_NOT_RUNNABLE: [i32; 2] = [126, 127];

/// Container runtime driven through the compose CLI
#[derive(Debug, Clone)]
pub struct DockerComposeGateway {
    binary: String,
    workdir: PathBuf,
    manifest: PathBuf,
}

impl DockerComposeGateway {
    /// `binary` is the runtime executable (`docker`, `podman`, ...).
    /// `manifest` is resolved against `workdir` when relative.
    pub fn new(
        binary: impl Into<String>,
        workdir: impl Into<PathBuf>,
        manifest: impl AsRef<Path>,
    ) -> Self {
        let workdir = workdir.into();
        let manifest = workdir.join(manifest);
        Self {
            binary: binary.into(),
            workdir,
            manifest,
        }
    }

    fn compose_command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.current_dir(&self.workdir)
            .arg("compose")
            .arg("-f")
            .arg(&self.manifest)
            .args(args);
        cmd
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.binary.as_str(), "compose"];
        parts.extend_from_slice(args);
        parts.join(" ")
    }

    fn capture(&self, mut cmd: Command, command: &str) -> DockcraftResult<CommandOutput> {
        tracing::debug!(command, "running");
        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_failure(command, e))?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(command, code = ?result.code, "finished");
        Ok(result)
    }
}

impl RuntimeGateway for DockerComposeGateway {
    fn list_active_service_names(&self) -> DockcraftResult<Vec<String>> {
        let args = ["config", "--services"];
        let command = self.describe(&args);
        let output = self.capture(self.compose_command(&args), &command)?;
        if !output.success() {
            return Err(failure(command, &output));
        }
        Ok(parse_service_list(&output.stdout))
    }

    fn compose(&self, args: &[&str]) -> DockcraftResult<CommandOutput> {
        let command = self.describe(args);
        let output = self.capture(self.compose_command(args), &command)?;
        if !output.success() {
            return Err(failure(command, &output));
        }
        Ok(output)
    }

    fn compose_attached(&self, args: &[&str]) -> DockcraftResult<()> {
        let command = self.describe(args);
        tracing::debug!(command = %command, "running attached");
        let status = self
            .compose_command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_failure(&command, e))?;

        if !status.success() {
            return Err(DockcraftError::RuntimeInvocationFailure {
                command,
                code: status.code(),
                stderr: String::new(),
            });
        }
        Ok(())
    }

    fn container_for(&self, service: &str) -> DockcraftResult<Option<String>> {
        let output = self.compose(&["ps"])?;
        Ok(parse_container_name(&output.stdout, service))
    }

    fn export_data(&self, container: &str, service: &str, archive: &Path) -> DockcraftResult<()> {
        let inside = format!("/{}", service);
        let command = format!("{} exec {} tar -C {} -c .", self.binary, container, inside);
        tracing::debug!(command = %command, archive = %archive.display(), "exporting data");

        if let Some(parent) = archive.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut child = Command::new(&self.binary)
            .current_dir(&self.workdir)
            .args(["exec", container, "tar", "-C", &inside, "-c", "."])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_failure(&command, e))?;

        let written = match child.stdout.take() {
            Some(mut stdout) => compress_into(&mut stdout, archive),
            None => Err(io::Error::other("child stdout was not captured")),
        };
        let output = child.wait_with_output()?;

        let result = match written {
            Err(err) => Err(DockcraftError::Io(err)),
            Ok(_) if !output.status.success() => Err(DockcraftError::RuntimeInvocationFailure {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
            Ok(bytes) => {
                tracing::debug!(bytes, archive = %archive.display(), "archive written");
                Ok(())
            }
        };

        if result.is_err() && archive.exists() {
            let _ = std::fs::remove_file(archive);
        }
        result
    }

    fn open_shell(&self, container: &str) -> DockcraftResult<()> {
        for shell in SHELLS {
            let command = format!("{} exec -it {} {}", self.binary, container, shell);
            tracing::debug!(command = %command, "opening shell");
            let status = Command::new(&self.binary)
                .current_dir(&self.workdir)
                .args(["exec", "-it", container, shell])
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| spawn_failure(&command, e))?;

            match status.code() {
                Some(code) if EXEC_NOT_RUNNABLE.contains(&code) => {
                    tracing::debug!(shell, code, "shell unavailable, trying next");
                }
                _ => return Ok(()),
            }
        }

        Err(DockcraftError::RuntimeInvocationFailure {
            command: format!("{} exec -it {}", self.binary, container),
            code: None,
            stderr: format!("couldn't open a shell in the container (tried {})", SHELLS.join(", ")),
        })
    }
}

/// Gzip everything from `reader` into a new file at `archive`
fn compress_into(reader: &mut impl io::Read, archive: &Path) -> io::Result<u64> {
    let file = File::create(archive)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    let bytes = io::copy(reader, &mut encoder)?;
    encoder.finish()?.sync_all()?;
    Ok(bytes)
}

/// Non-empty trimmed lines of `config --services`
pub fn parse_service_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Container name for `service` from `compose ps` output.
///
/// Skips the header row, then takes the first column of the first row that
/// mentions `service` as a whole word.
pub fn parse_container_name(stdout: &str, service: &str) -> Option<String> {
    stdout
        .lines()
        .skip(1)
        .find(|line| line.split_whitespace().any(|column| column == service))
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
}

fn failure(command: String, output: &CommandOutput) -> DockcraftError {
    DockcraftError::RuntimeInvocationFailure {
        command,
        code: output.code,
        stderr: output.stderr.trim().to_string(),
    }
}

fn spawn_failure(command: &str, err: io::Error) -> DockcraftError {
    DockcraftError::RuntimeInvocationFailure {
        command: command.to_string(),
        code: None,
        stderr: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PS_OUTPUT: &str = "\
NAME       IMAGE            COMMAND                  SERVICE    CREATED         STATUS         PORTS
proxy      dockcraft-proxy  \"/usr/local/bin/run…\"   proxy      2 minutes ago   Up 2 minutes   0.0.0.0:25577->25577/tcp
server10   dockcraft-s10    \"/usr/local/bin/run…\"   server10   2 minutes ago   Up 2 minutes   0.0.0.0:25575->25565/tcp
server1    dockcraft-s1     \"/usr/local/bin/run…\"   server1    2 minutes ago   Up 2 minutes   0.0.0.0:25565->25565/tcp
";

    #[test]
    fn parse_service_list_skips_blank_lines() {
        assert_eq!(
            parse_service_list("proxy\n\n  lobby \nsurvival\n"),
            vec!["proxy", "lobby", "survival"]
        );
        assert!(parse_service_list("").is_empty());
    }

    #[test]
    fn parse_container_name_matches_whole_word() {
        assert_eq!(parse_container_name(PS_OUTPUT, "server1").as_deref(), Some("server1"));
        assert_eq!(parse_container_name(PS_OUTPUT, "proxy").as_deref(), Some("proxy"));
    }

    #[test]
    fn parse_container_name_ignores_header() {
        assert_eq!(parse_container_name(PS_OUTPUT, "SERVICE"), None);
        assert_eq!(parse_container_name(PS_OUTPUT, "lobby"), None);
        assert_eq!(parse_container_name("", "proxy"), None);
    }

    #[test]
    fn missing_binary_is_invocation_failure() {
        let dir = tempdir().unwrap();
        let gateway = DockerComposeGateway::new(
            "dockcraft-test-no-such-binary",
            dir.path(),
            "docker-compose.yml",
        );

        let err = gateway.compose(&["stop"]).unwrap_err();
        match err {
            DockcraftError::RuntimeInvocationFailure { command, code, .. } => {
                assert_eq!(command, "dockcraft-test-no-such-binary compose stop");
                assert_eq!(code, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(gateway.list_active_service_names().is_err());
    }

    #[test]
    fn compress_into_writes_gzip() {
        use std::io::Read;

        let dir = tempdir().unwrap();
        let archive = dir.path().join("lobby.tar.gz");
        let mut payload: &[u8] = b"server.properties";

        let bytes = compress_into(&mut payload, &archive).unwrap();
        assert_eq!(bytes, 17);

        let mut decoded = String::new();
        flate2::read::GzDecoder::new(File::open(&archive).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, "server.properties");
    }
}
