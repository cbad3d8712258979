//! Documents shared across CLI tests

/// Two paper servers, no network
pub const TWO_SERVICE_DOCUMENT: &str = r#"{
  "compose": {
    "services": [
      {
        "name": "server1",
        "build": { "context": "./servers/server1/" },
        "env_file": "./servers/server1/.env",
        "ports": ["25565:25565"],
        "expose": [],
        "resources": {
          "limits": { "cpus": 1, "memory": "1g" },
          "reservations": { "cpus": 0.5, "memory": "512m" }
        }
      },
      {
        "name": "server2",
        "build": { "context": "./servers/server2/" },
        "env_file": "./servers/server2/.env",
        "ports": ["25566:25565"],
        "expose": [],
        "resources": {
          "limits": { "cpus": 1, "memory": "1g" },
          "reservations": { "cpus": 0.5, "memory": "512m" }
        }
      }
    ]
  },
  "envs": [
    { "CONTAINER_NAME": "server1", "SERVER_JAR": "server.jar", "MAX_HEAP_SIZE": "1024M" },
    { "CONTAINER_NAME": "server2", "SERVER_JAR": "server.jar", "MAX_HEAP_SIZE": "2G" }
  ],
  "service_files": [
    { "name": "server1", "server": { "jar_file": "server.jar", "type": "paper", "version": "1.20.1" } },
    { "name": "server2", "server": { "jar_file": "server.jar", "type": "purpur", "version": "1.20.4" } }
  ]
}
"#;

/// `server2` has no environment record
pub const INCONSISTENT_DOCUMENT: &str = r#"{
  "compose": {
    "services": [
      { "name": "server1", "build": { "context": "./servers/server1/" }, "env_file": "./servers/server1/.env" },
      { "name": "server2", "build": { "context": "./servers/server2/" }, "env_file": "./servers/server2/.env" }
    ]
  },
  "envs": [{ "CONTAINER_NAME": "server1" }],
  "service_files": [
    { "name": "server1", "server": { "jar_file": "server.jar", "type": "paper", "version": "1.20.1" } },
    { "name": "server2", "server": { "jar_file": "server.jar", "type": "paper", "version": "1.20.1" } }
  ]
}
"#;

/// Parses, but lists no services
pub const NO_SERVICES_DOCUMENT: &str =
    r#"{ "compose": { "services": [] }, "envs": [], "service_files": [] }"#;

/// Per-service files every build renders
pub const SERVICE_FILES: [&str; 4] = [".env", "Dockerfile", "run.sh", "data/eula.txt"];
