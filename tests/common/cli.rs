use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch working directory for running `hd`.
pub struct HdWorkspace {
    pub temp_dir: TempDir,
}

impl HdWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn tickets_path(&self) -> PathBuf {
        self.root().join("tickets.json")
    }

    pub fn read_tickets(&self) -> String {
        fs::read_to_string(self.tickets_path()).expect("read tickets file")
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.root().join(name), contents).expect("write file");
    }

    /// `hd` in this workspace with the ambient helpdesk environment cleared.
    pub fn hd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hd"));
        cmd.current_dir(self.root())
            .env_remove("HELPDESK_TICKETS_FILE")
            .env_remove("HELPDESK_CONFIG")
            .env_remove("HELPDESK_LOG_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub struct RunResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_hd<I, S>(workspace: &HdWorkspace, args: I, label: &str) -> RunResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = workspace
        .hd()
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run hd: {e}"));
    RunResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Create a ticket with `--json` and return its ID.
pub fn create_ticket(workspace: &HdWorkspace, first: &str, last: &str, issue: &str) -> String {
    let result = run_hd(
        workspace,
        [
            "create",
            "--json",
            "--first-name",
            first,
            "--last-name",
            last,
            "--issue",
            issue,
            "--priority",
            "Medium",
        ],
        "create",
    );
    assert!(result.status.success(), "create failed: {}", result.stderr);
    let json: serde_json::Value = serde_json::from_str(&result.stdout).expect("create json");
    json["id"].as_str().expect("id").to_string()
}
