//! Shared utilities for integration testing the harness binary.

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

/// A spawned harness process with its stdout captured.
pub struct HarnessChild {
    child: Child,
    stdout: BufReader<ChildStdout>,
}

/// Spawn the harness binary with the given extra arguments.
pub fn spawn_harness(args: &[&str]) -> HarnessChild {
    let mut child = Command::new(env!("CARGO_BIN_EXE_signal-harness"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn harness binary");

    let stdout = BufReader::new(child.stdout.take().expect("stdout should be piped"));
    HarnessChild { child, stdout }
}

impl HarnessChild {
    /// Block until the harness prints its first heartbeat line.
    ///
    /// Signal handlers register before the heartbeat starts, so a visible
    /// line means the process is safe to signal.
    pub fn wait_for_heartbeat(&mut self) -> String {
        let mut line = String::new();
        self.stdout
            .read_line(&mut line)
            .expect("failed to read heartbeat line");
        line.trim_end().to_string()
    }

    /// Send a signal to the harness.
    pub fn signal(&self, signal: Signal) {
        kill(Pid::from_raw(self.child.id() as i32), signal).expect("failed to signal harness");
    }

    /// Wait for exit, returning the status and any stdout not yet consumed.
    ///
    /// Panics if the harness outlives `timeout`.
    pub fn wait(mut self, timeout: Duration) -> (ExitStatus, String) {
        let deadline = Instant::now() + timeout;
        let status = loop {
            match self.child.try_wait().expect("failed to poll harness") {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = self.child.kill();
                    panic!("harness did not exit within {timeout:?}");
                }
                None => thread::sleep(Duration::from_millis(50)),
            }
        };

        let mut rest = String::new();
        self.stdout
            .read_to_string(&mut rest)
            .expect("failed to drain stdout");
        (status, rest)
    }
}

/// True for lines shaped like `YYYY-MM-DD HH:MM:SS`.
#[allow(dead_code)]
pub fn is_timestamp_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() != 19 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

/// Extract the reported elapsed seconds from summary text.
#[allow(dead_code)]
pub fn parse_elapsed_secs(output: &str) -> f64 {
    output
        .lines()
        .find_map(|line| line.strip_prefix("Elapsed Time: "))
        .and_then(|rest| rest.strip_suffix('s'))
        .and_then(|secs| secs.parse().ok())
        .unwrap_or_else(|| panic!("no elapsed line in output: {output:?}"))
}
