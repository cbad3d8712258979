//! Artifact renderer
//!
//! Turns a `ComposeDocument` into the deployment file tree:
//!
//! ```text
//! docker-compose.yml
//! servers/<name>/.env
//! servers/<name>/Dockerfile
//! servers/<name>/run.sh
//! servers/<name>/data/eula.txt
//! ```
//!
//! Output depends on the document alone. No timestamps, no random ids, so
//! rendering an unchanged document twice yields byte-identical files. The
//! whole tree is rendered in memory; nothing here touches the disk.

use std::path::PathBuf;

use serde::Serialize;
use serde_yaml_ng::{Mapping, Value};

use crate::domain::entities::{
    BuildSource, ComposeDocument, EntityRef, EnvironmentRecord, OutputFile, Resources,
};
use crate::error::DockcraftResult;

/// Manifest file name, relative to the working directory
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Root of the per-service subtrees
pub const SERVERS_DIR: &str = "servers";

/// Render every artifact for `doc`, manifest first, then each service in
/// document order.
///
/// Fails with `InconsistentDocument` before producing anything if a service
/// lacks its env record or file bundle (or the reverse).
pub fn render_document(doc: &ComposeDocument) -> DockcraftResult<Vec<OutputFile>> {
    let rows = doc.resolved()?;

    let mut outputs = Vec::with_capacity(1 + rows.len() * 4);
    outputs.push(OutputFile::new(COMPOSE_FILE, render_compose(doc, &rows)?));

    for row in &rows {
        let dir = service_output_dir(&row.service.name);
        outputs.push(OutputFile::new(dir.join(".env"), render_env_file(row.env)?));
        outputs.push(OutputFile::new(dir.join("Dockerfile"), render_dockerfile(row)));
        outputs.push(OutputFile::new(dir.join("run.sh"), render_run_script(row)).executable());
        outputs.push(OutputFile::new(dir.join("data").join("eula.txt"), render_eula()));
    }

    tracing::debug!(files = outputs.len(), services = rows.len(), "rendered document");
    Ok(outputs)
}

/// `servers/<name>` relative to the working directory
pub fn service_output_dir(name: &str) -> PathBuf {
    PathBuf::from(SERVERS_DIR).join(name)
}

#[derive(Serialize)]
struct ComposeService<'a> {
    container_name: &'a str,
    build: &'a BuildSource,
    env_file: &'a str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    ports: &'a [String],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    expose: &'a [String],
    volumes: Vec<String>,
    stdin_open: bool,
    tty: bool,
    restart: &'static str,
    deploy: Deploy<'a>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    networks: &'a [String],
}

#[derive(Serialize)]
struct Deploy<'a> {
    resources: &'a Resources,
}

#[derive(Serialize)]
struct ComposeNetwork {
    driver: &'static str,
}

/// The unified manifest for all services and networks
fn render_compose(doc: &ComposeDocument, rows: &[EntityRef<'_>]) -> DockcraftResult<String> {
    let mut services = Mapping::new();
    for row in rows {
        let service = row.service;
        // Services without their own list join the session network(s)
        let networks = if service.networks.is_empty() {
            doc.networks()
        } else {
            &service.networks
        };
        let entry = ComposeService {
            container_name: &service.name,
            build: &service.build,
            env_file: &service.env_file,
            ports: &service.ports,
            expose: &service.expose,
            volumes: vec![format!("{}:/{}", data_source(&service.build), service.name)],
            stdin_open: true,
            tty: true,
            restart: "unless-stopped",
            deploy: Deploy {
                resources: &service.resources,
            },
            networks,
        };
        services.insert(
            Value::String(service.name.clone()),
            serde_yaml_ng::to_value(&entry)?,
        );
    }

    let mut root = Mapping::new();
    root.insert(Value::String("services".into()), Value::Mapping(services));

    if !doc.networks().is_empty() {
        let mut networks = Mapping::new();
        for network in doc.networks() {
            networks.insert(
                Value::String(network.clone()),
                serde_yaml_ng::to_value(ComposeNetwork { driver: "bridge" })?,
            );
        }
        root.insert(Value::String("networks".into()), Value::Mapping(networks));
    }

    Ok(serde_yaml_ng::to_string(&Value::Mapping(root))?)
}

/// Host directory mounted as the server's working directory
fn data_source(build: &BuildSource) -> String {
    format!("{}/data", build.context.trim_end_matches('/'))
}

/// `KEY=VALUE` per line, values verbatim
pub fn render_env_file(env: &EnvironmentRecord) -> DockcraftResult<String> {
    let mut out = String::new();
    for (key, value) in env.env_lines()? {
        out.push_str(&key);
        out.push('=');
        out.push_str(&value);
        out.push('\n');
    }
    Ok(out)
}

/// Container build descriptor for one service
pub fn render_dockerfile(row: &EntityRef<'_>) -> String {
    let name = &row.service.name;
    let server = &row.files.server;

    let mut out = String::new();
    out.push_str(&format!("FROM {}\n\n", server.image()));
    out.push_str(&format!(
        "LABEL dockcraft.service=\"{}\" dockcraft.server.type=\"{}\" dockcraft.server.version=\"{}\"\n\n",
        name, server.flavor, server.version
    ));
    out.push_str(&format!("WORKDIR /{}\n\n", name));
    out.push_str("COPY run.sh /usr/local/bin/run.sh\n");
    out.push_str("RUN chmod +x /usr/local/bin/run.sh\n\n");

    let ports = container_ports(&row.service.ports);
    if !ports.is_empty() {
        out.push_str(&format!("EXPOSE {}\n\n", ports.join(" ")));
    }

    out.push_str("CMD [\"/usr/local/bin/run.sh\"]\n");
    out
}

/// Startup script run as the container command
pub fn render_run_script(row: &EntityRef<'_>) -> String {
    let name = &row.service.name;
    let server = &row.files.server;
    let jar = &server.jar_file;
    let gui_flag = if server.flavor.is_proxy() { "" } else { " nogui" };

    let mut out = String::new();
    out.push_str("#!/bin/sh\n");
    out.push_str("set -e\n\n");
    out.push_str(&format!("cd /{}\n\n", name));
    out.push_str(&format!("if [ ! -f \"{}\" ]; then\n", jar));
    out.push_str(&format!(
        "    echo \"{} not found: place the {} {} server jar in servers/{}/data/\" >&2\n",
        jar, server.flavor, server.version, name
    ));
    out.push_str("    exit 1\nfi\n\n");
    out.push_str(&format!(
        "exec java -Xms\"${{MIN_HEAP_SIZE:-256M}}\" -Xmx\"${{MAX_HEAP_SIZE:-1024M}}\" ${{JAVA_ARGS}} -jar \"{}\"{}\n",
        jar, gui_flag
    ));
    out
}

/// License acceptance marker required before first start
pub fn render_eula() -> String {
    "eula=true\n".to_string()
}

/// Container side of `host:container[/proto]` mappings
fn container_ports(mappings: &[String]) -> Vec<String> {
    mappings
        .iter()
        .filter_map(|m| m.rsplit(':').next())
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
