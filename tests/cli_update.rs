mod common;

use common::*;

#[test]
fn conflicting_mode_flags_fail_before_reading() {
    // No document at all: the flag check must come first
    let env = TestEnv::new();

    let result = env.run(&["update", "--add", "--remove"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("only use one of --add, --remove or --change"),
        "{}",
        result.stderr
    );
}

#[test]
fn conflicting_flags_leave_document_untouched() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    let result = env.run(&["--yes", "update", "--remove", "--change", "-s", "server1"]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(env.read_project_file("data.json"), TWO_SERVICE_DOCUMENT);
}

#[test]
fn update_without_mode_lists_services() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    let result = env.run(&["update"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("Use --add, --remove or --change flag."));
    assert!(result.stdout.contains("server1"));
    assert!(result.stdout.contains("server2"));
    assert!(!env.exists("docker-compose.yml"));
}

#[test]
fn update_without_document_fails() {
    let env = TestEnv::new();

    let result = env.run(&["update"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Use 'create' first"), "{}", result.stderr);
}

#[test]
fn update_on_document_without_services_fails() {
    let env = TestEnv::with_document(NO_SERVICES_DOCUMENT);

    let result = env.run(&["update", "--change"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("no services found"), "{}", result.stderr);
}

#[test]
fn remove_with_yes_drops_the_whole_entity() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    let result = env.run(&["--yes", "update", "--remove", "--service", "server2"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let doc: serde_json::Value = serde_json::from_str(&env.read_project_file("data.json")).unwrap();
    assert_eq!(doc["compose"]["services"].as_array().unwrap().len(), 1);
    assert_eq!(doc["envs"].as_array().unwrap().len(), 1);
    assert_eq!(doc["service_files"].as_array().unwrap().len(), 1);
    assert_eq!(doc["envs"][0]["CONTAINER_NAME"], "server1");

    let manifest = env.read_project_file("docker-compose.yml");
    assert!(manifest.contains("server1"));
    assert!(!manifest.contains("server2"));
}

#[test]
fn remove_unknown_service_lists_available() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    let result = env.run(&["--yes", "update", "--remove", "-s", "ghost"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("Available: server1, server2"),
        "{}",
        result.stderr
    );
    assert_eq!(env.read_project_file("data.json"), TWO_SERVICE_DOCUMENT);
}

#[test]
fn remove_without_terminal_or_yes_changes_nothing() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    let result = env.run(&["update", "--remove", "-s", "server1"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("prompt failed"), "{}", result.stderr);
    assert_eq!(env.read_project_file("data.json"), TWO_SERVICE_DOCUMENT);
}

#[test]
fn add_with_path_like_name_is_refused() {
    let env = TestEnv::with_document(TWO_SERVICE_DOCUMENT);

    for name in ["../escaped", "a/b", "   "] {
        let result = env.run(&["--yes", "update", "--add", "-s", name]);

        assert_eq!(result.exit_code, 1, "{name:?}");
        assert!(result.stderr.contains("invalid service name"), "{}", result.stderr);
    }
    assert_eq!(env.read_project_file("data.json"), TWO_SERVICE_DOCUMENT);
    assert!(!env.exists("servers"));
}
