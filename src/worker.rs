//! External worker process lifecycle.
//!
//! The shell spawns a single opaque sidecar process at startup and kills it
//! on shutdown. There is no message protocol between the shell and this
//! process in the current scope; it exists purely as a side effect of the
//! application running. Spawn failures and unexpected exits are logged and
//! otherwise ignored: no restart, no supervision.

use std::process::{Child, Command};

use log::{info, warn};

/// Environment variable overriding the worker command line.
pub const WORKER_ENV: &str = "TELEMON_WORKER";

fn default_program() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// Split an override command line into program and arguments.
///
/// Returns `None` for a blank value so an empty override falls back to the
/// default command.
fn parse_command(raw: &str) -> Option<(String, Vec<String>)> {
    let mut parts = raw.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Handle to the single worker process. `start` and `stop` are idempotent.
pub struct WorkerProcess {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl WorkerProcess {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            child: None,
        }
    }

    /// Build the worker command from `TELEMON_WORKER`, or the default
    /// sidecar invocation when unset.
    pub fn from_env() -> Self {
        match std::env::var(WORKER_ENV).ok().as_deref().and_then(parse_command) {
            Some((program, args)) => Self::new(program, args),
            None => Self::new(
                default_program(),
                vec!["backend/main.py".to_string()],
            ),
        }
    }

    /// Spawn the worker if it is not already running.
    pub fn start(&mut self) {
        if self.child.is_some() {
            return;
        }
        match Command::new(&self.program)
            .args(&self.args)
            .env("PYTHONUNBUFFERED", "1")
            .spawn()
        {
            Ok(child) => {
                info!("worker process started: {} (pid {})", self.program, child.id());
                self.child = Some(child);
            }
            Err(err) => {
                warn!("failed to start worker process '{}': {err}", self.program);
            }
        }
    }

    /// Kill the worker if it is running.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(err) = child.kill() {
                warn!("failed to kill worker process: {err}");
            }
            let _ = child.wait();
            info!("worker process stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.child.is_some()
    }

    /// Detect an unexpected exit. Called opportunistically from the shell's
    /// slow poll tick; the only observable effect is a logged diagnostic.
    pub fn poll_exit(&mut self) {
        let Some(child) = self.child.as_mut() else {
            return;
        };
        match child.try_wait() {
            Ok(Some(status)) => {
                warn!("worker process exited unexpectedly: {status}");
                self.child = None;
            }
            Ok(None) => {}
            Err(err) => warn!("failed to poll worker process: {err}"),
        }
    }
}

impl Drop for WorkerProcess {
    fn drop(&mut self) {
        self.stop();
    }
}
