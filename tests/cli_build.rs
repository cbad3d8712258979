mod common;

use common::*;

#[test]
fn build_renders_one_subtree_per_service() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    let result = env.run(&["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(env.exists("docker-compose.yml"));
    for service in ["server1", "server2"] {
        for file in SERVICE_FILES {
            let path = format!("servers/{}/{}", service, file);
            assert!(env.exists(&path), "missing {}", path);
        }
    }
    let servers: Vec<_> = std::fs::read_dir(env.project_path("servers"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(servers.len(), 2);
}

#[test]
fn build_writes_env_values_verbatim() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    assert!(env.run(&["build"]).is_success());

    let dotenv = env.read_project_file("servers/server2/.env");
    assert!(dotenv.contains("CONTAINER_NAME=server2\n"));
    assert!(dotenv.contains("MAX_HEAP_SIZE=2G\n"));
    let manifest = env.read_project_file("docker-compose.yml");
    assert!(manifest.find("server1:").unwrap() < manifest.find("server2:").unwrap());
}

#[test]
fn build_twice_is_byte_identical() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    assert!(env.run(&["build"]).is_success());
    let first = env.read_project_file("docker-compose.yml");
    let first_script = env.read_project_file("servers/server1/run.sh");

    let again = env.run(&["build"]);
    assert!(again.is_success());
    assert!(again.stdout.contains("0 written"), "{}", again.stdout);
    assert_eq!(env.read_project_file("docker-compose.yml"), first);
    assert_eq!(env.read_project_file("servers/server1/run.sh"), first_script);
}

#[cfg(unix)]
#[test]
fn build_marks_run_script_executable() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);
    assert!(env.run(&["build"]).is_success());

    let mode = std::fs::metadata(env.project_path("servers/server1/run.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn build_without_document_fails() {
    let env = TestEnv::new();

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("missing document"), "{}", result.stderr);
    assert!(!env.exists("docker-compose.yml"));
}

#[test]
fn build_with_empty_document_fails() {
    for content in ["", "  \n", "{}", "null"] {
        let env = TestEnv::with_document(content);

        let result = env.run(&["build"]);

        assert_eq!(result.exit_code, 1, "content {:?}", content);
        assert!(result.stderr.contains("is empty"), "{}", result.stderr);
    }
}

#[test]
fn build_with_malformed_document_fails() {
    let env = TestEnv::with_document(r#"{"compose": {"services": "nope"}}"#);

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("malformed document"), "{}", result.stderr);
}

#[test]
fn inconsistent_document_writes_nothing() {
    let env = TestEnv::with_document(INCONSISTENT_DOCUMENT);

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("server2"), "{}", result.stderr);
    assert!(!env.exists("docker-compose.yml"));
    assert!(!env.exists("servers"));
}

#[test]
fn cwd_flag_selects_working_directory() {
    let env = TestEnv::new();
    env.write_project_file("deploy/data.json", TWO_SERVICE_DOCUMENT);

    let result = env.run(&["build", "--cwd", "deploy"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(env.exists("deploy/docker-compose.yml"));
    assert!(env.exists("deploy/servers/server1/Dockerfile"));
    assert!(!env.exists("docker-compose.yml"));
}

#[test]
fn build_refuses_service_names_that_leave_the_tree() {
    let document =
        TWO_SERVICE_DOCUMENT.replace(r#""name": "server2""#, r#""name": "../escaped""#);
    assert_ne!(document, TWO_SERVICE_DOCUMENT);
    let env = TestEnv::with_document(&document);

    let result = env.run(&["build"]);

    assert!(!result.is_success());
    assert!(
        result.stderr.contains("invalid service name '../escaped'"),
        "{}",
        result.stderr
    );
    assert!(!env.exists("docker-compose.yml"));
    assert!(!env.exists("escaped"));
    assert!(!env.project_path("..").join("escaped").exists());
}
