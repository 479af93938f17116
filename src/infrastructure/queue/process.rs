//! Child process execution with a deadline

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::domain::ports::{CommandOutput, QueueError, QueueResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Run `command` to completion, capturing both output streams.
///
/// The pipes are drained on helper threads while this thread polls for exit.
/// The deadline covers both the child's exit and the end of its output, since
/// a background grandchild can hold the pipes open after the child is gone.
/// On unix the child leads its own process group and the whole group is
/// killed when the deadline passes.
pub(crate) fn run_with_timeout(
    mut command: Command,
    program: &str,
    timeout: Duration,
) -> QueueResult<CommandOutput> {
    let started = Instant::now();
    let deadline = started + timeout;

    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let mut child = command.spawn().map_err(|e| QueueError::Spawn {
        program: program.to_string(),
        message: e.to_string(),
    })?;

    let (tx, rx) = mpsc::channel();
    drain(child.stdout.take(), Stream::Stdout, tx.clone());
    drain(child.stderr.take(), Stream::Stderr, tx);

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                let now = Instant::now();
                if now >= deadline {
                    terminate(&mut child);
                    return Err(QueueError::TimedOut { after: timeout });
                }
                thread::sleep(POLL_INTERVAL.min(deadline - now));
            }
            Err(e) => {
                terminate(&mut child);
                return Err(QueueError::Io(e.to_string()));
            }
        }
    };

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    loop {
        match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok((Stream::Stdout, bytes)) => stdout = bytes,
            Ok((Stream::Stderr, bytes)) => stderr = bytes,
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                warn!(program, "child exited but its output is still held open");
                kill_group(&child);
                return Err(QueueError::TimedOut { after: timeout });
            }
        }
    }

    Ok(CommandOutput {
        exit_code: status.code(),
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
        elapsed: started.elapsed(),
    })
}

/// Read `pipe` to the end on its own thread and send the bytes once
fn drain<R>(pipe: Option<R>, stream: Stream, tx: Sender<(Stream, Vec<u8>)>)
where
    R: Read + Send + 'static,
{
    let Some(mut pipe) = pipe else {
        return;
    };
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send((stream, buf));
    });
}

fn terminate(child: &mut Child) {
    kill_group(child);
    let _ = child.kill();
    let _ = child.wait();
}

/// SIGKILL every process in the child's group. The group outlives a reaped
/// leader while any member is alive, so this is valid after `wait`.
#[cfg(unix)]
fn kill_group(child: &Child) {
    let Ok(pgid) = libc::pid_t::try_from(child.id()) else {
        return;
    };
    // SAFETY: killpg only sends a signal; the group was created for this child.
    unsafe {
        libc::killpg(pgid, libc::SIGKILL);
    }
}

#[cfg(not(unix))]
fn kill_group(_child: &Child) {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    #[test]
    fn captures_streams_and_exit_code() {
        let output = run_with_timeout(
            sh("echo queued; echo 'bad row' >&2; exit 3"),
            "sh",
            Duration::from_secs(10),
        )
        .unwrap();

        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stdout.trim(), "queued");
        assert_eq!(output.stderr.trim(), "bad row");
    }

    #[test]
    fn large_output_does_not_block() {
        let output = run_with_timeout(
            sh("i=0; while [ $i -lt 20000 ]; do echo line-$i; i=$((i+1)); done"),
            "sh",
            Duration::from_secs(30),
        )
        .unwrap();

        assert!(output.is_success());
        assert_eq!(output.stdout.lines().count(), 20000);
    }

    #[test]
    fn hung_process_is_killed() {
        let started = Instant::now();
        let err = run_with_timeout(
            sh("exec sleep 30"),
            "sh",
            Duration::from_millis(200),
        )
        .unwrap_err();

        assert_eq!(
            err,
            QueueError::TimedOut {
                after: Duration::from_millis(200)
            }
        );
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn background_grandchild_holding_pipes_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("still-running");
        let script = format!(
            "(sleep 3; touch '{}') & echo queued; exit 0",
            marker.display()
        );

        let started = Instant::now();
        let err = run_with_timeout(sh(&script), "sh", Duration::from_secs(1)).unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(3));
        assert_eq!(
            err,
            QueueError::TimedOut {
                after: Duration::from_secs(1)
            }
        );

        // the grandchild was killed with the group
        thread::sleep(Duration::from_secs(3));
        assert!(!marker.exists());
    }

    #[test]
    fn hung_process_group_is_killed() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("worker-finished");
        let script = format!("(sleep 2; touch '{}') & wait", marker.display());

        let err = run_with_timeout(sh(&script), "sh", Duration::from_millis(300)).unwrap_err();

        assert!(matches!(err, QueueError::TimedOut { .. }));
        thread::sleep(Duration::from_secs(3));
        assert!(!marker.exists());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = run_with_timeout(
            Command::new("definitely-not-a-real-queue-tool"),
            "definitely-not-a-real-queue-tool",
            Duration::from_secs(1),
        )
        .unwrap_err();

        assert!(matches!(err, QueueError::Spawn { .. }));
    }
}
