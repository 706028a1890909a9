//! Failure paths, configuration and init through the `hd` binary.

mod common;

use std::fs;

use common::cli::{HdWorkspace, create_ticket, run_hd};
use predicates::prelude::*;

#[test]
fn test_create_reports_every_empty_field() {
    let workspace = HdWorkspace::new();

    workspace
        .hd()
        .args(["create", "--first-name", "", "--issue", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("first_name"))
        .stderr(predicate::str::contains("last_name"))
        .stderr(predicate::str::contains("priority"));

    assert!(!workspace.tickets_path().exists());
}

#[test]
fn test_delete_missing_id_leaves_file_untouched() {
    let workspace = HdWorkspace::new();
    create_ticket(&workspace, "Alice", "Smith", "Printer jammed");
    let before = fs::read(workspace.tickets_path()).unwrap();

    workspace
        .hd()
        .args(["delete", "99", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Ticket not found: 99"));

    workspace
        .hd()
        .args(["delete", "99"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[y/N]").not());

    assert_eq!(fs::read(workspace.tickets_path()).unwrap(), before);
}

#[test]
fn test_missing_ticket_errors() {
    let workspace = HdWorkspace::new();
    for args in [["show", "7"], ["close", "7"], ["reopen", "7"], ["edit", "7"]] {
        workspace
            .hd()
            .args(args)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Ticket not found: 7"));
    }
}

#[test]
fn test_corrupt_file_is_fatal_and_untouched() {
    let workspace = HdWorkspace::new();
    let garbage = "{\"1\": {\"id\": \"1\", ";
    workspace.write("tickets.json", garbage);

    for args in [
        vec!["list"],
        vec![
            "create",
            "--first-name",
            "A",
            "--last-name",
            "B",
            "--issue",
            "C",
            "-p",
            "low",
        ],
    ] {
        workspace
            .hd()
            .args(&args)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("is corrupt"));
    }

    assert_eq!(workspace.read_tickets(), garbage);
}

#[test]
fn test_blank_file_is_empty_store() {
    let workspace = HdWorkspace::new();
    workspace.write("tickets.json", "  \n");

    workspace
        .hd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tickets found."));
}

#[test]
fn test_init_writes_config_and_empty_store() {
    let workspace = HdWorkspace::new();

    workspace.hd().arg("init").assert().success();
    assert!(workspace.root().join("helpdesk.yaml").is_file());
    assert_eq!(workspace.read_tickets(), "{}");

    workspace
        .hd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    create_ticket(&workspace, "Alice", "Smith", "Printer jammed");
    workspace.hd().args(["init", "--force"]).assert().success();
    assert!(workspace.read_tickets().contains("Printer jammed"));
}

#[test]
fn test_config_default_priority_and_file() {
    let workspace = HdWorkspace::new();
    workspace.write(
        "helpdesk.yaml",
        "tickets_file: data/desk.json\ndefault_priority: Urgent\n",
    );

    let result = run_hd(
        &workspace,
        [
            "create",
            "--json",
            "--first-name",
            "Alice",
            "--last-name",
            "Smith",
            "--issue",
            "Printer jammed",
        ],
        "create",
    );
    assert!(result.status.success(), "create failed: {}", result.stderr);
    let json: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(json["ticket"]["priority"], "Urgent");

    let stored = fs::read_to_string(workspace.root().join("data").join("desk.json")).unwrap();
    assert!(stored.contains("\"priority\": \"Urgent\""));
    assert!(!workspace.tickets_path().exists());
}

#[test]
fn test_config_can_disable_delete_prompt() {
    let workspace = HdWorkspace::new();
    workspace.write("helpdesk.yaml", "confirm_delete: false\n");
    let id = create_ticket(&workspace, "Alice", "Smith", "Printer jammed");

    workspace
        .hd()
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted successfully"));
}

#[test]
fn test_file_flag_and_env() {
    let workspace = HdWorkspace::new();

    workspace
        .hd()
        .env("HELPDESK_TICKETS_FILE", "from-env.json")
        .args([
            "create",
            "--first-name",
            "A",
            "--last-name",
            "B",
            "--issue",
            "C",
            "-p",
            "low",
        ])
        .assert()
        .success();
    assert!(workspace.root().join("from-env.json").is_file());

    workspace
        .hd()
        .env("HELPDESK_TICKETS_FILE", "from-env.json")
        .args(["list", "--file", "other.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tickets found."));
}

#[test]
fn test_invalid_config_is_reported() {
    let workspace = HdWorkspace::new();
    workspace.write("helpdesk.yaml", "tickets: nope\n");

    workspace
        .hd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_version_and_completions() {
    let workspace = HdWorkspace::new();

    workspace
        .hd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hd "));

    workspace
        .hd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_hd"));
}
