//! Shared helpers for CLI integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Shell script standing in for the queue tool.
///
/// Every call appends its arguments to `calls.log` next to the script.
/// `add` fails for any file name containing "reject" and hangs for "hang".
/// `process` takes two seconds when `FAKE_QUEUE_SLOW` is set.
pub const FAKE_QUEUE: &str = r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/calls.log"
case "$1" in
  add)
    case "$(basename "$2")" in
      *reject*) echo "rejected $2" >&2; exit 1 ;;
      *hang*) exec sleep 30 ;;
    esac
    echo "queued $2"
    ;;
  status) echo "pending: 2" ;;
  process)
    [ -n "$FAKE_QUEUE_SLOW" ] && sleep 2
    echo "processed 2 files"
    ;;
  *) echo "unknown command $1" >&2; exit 64 ;;
esac
"#;

pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("exports")).unwrap();
        fs::create_dir_all(dir.path().join("queue")).unwrap();
        fs::create_dir_all(dir.path().join("home/.config")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn exports(&self) -> PathBuf {
        self.path().join("exports")
    }

    pub fn queue_dir(&self) -> PathBuf {
        self.path().join("queue")
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.exports().join(name);
        fs::write(&path, "name,date_of_death\n").unwrap();
        path
    }

    /// Install the fake queue and a config file pointing at it
    #[cfg(unix)]
    pub fn with_fake_queue(self) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = self.queue_dir().join("fake-queue");
        fs::write(&script, FAKE_QUEUE).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        fs::write(
            self.path().join("mortality-relay.toml"),
            format!(
                r#"[source]
roots = ["{exports}"]

[queue]
working_dir = "{queue}"
program = "{script}"
enqueue_args = ["add"]
status_args = ["status"]
process_args = ["process"]
timeout_secs = 20
"#,
                exports = self.exports().display(),
                queue = self.queue_dir().display(),
                script = script.display(),
            ),
        )
        .unwrap();
        self
    }

    /// Lines written by the fake queue, in call order
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.queue_dir().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// The binary, run from the workspace with an isolated environment
    pub fn relay(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mortality-relay"));
        cmd.current_dir(self.path())
            .env("HOME", self.path().join("home"))
            .env("XDG_CONFIG_HOME", self.path().join("home/.config"))
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .env_remove("RUST_LOG")
            .env_remove("RELAY_ROOTS")
            .env_remove("RELAY_PATTERNS")
            .env_remove("RELAY_QUEUE_DIR")
            .env_remove("RELAY_TIMEOUT_SECS")
            .env_remove("RELAY_PROCESS_TIMEOUT_SECS")
            .env_remove("FAKE_QUEUE_SLOW");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.relay().args(args).output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
