//! Service supervision contract and the shared process engine behind it.
//!
//! A [`Service`] wraps exactly one external process. Its `start` operation
//! launches the process and supervises it until it exits, racing the exit
//! against the shutdown token: if shutdown wins, the child is asked to
//! terminate with SIGTERM and `start` keeps waiting for the actual exit, so
//! the call never returns with the child still alive.

use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tokio::process::{Child, Command};
use tracing::{info, warn};

use crate::error::ServiceError;
use crate::shutdown::ShutdownToken;

/// One supervisable unit of external execution.
#[async_trait]
pub trait Service: Send {
    /// Stable human-readable identifier, used in diagnostics.
    fn name(&self) -> &str;

    /// Launches the wrapped process and supervises it until it exits.
    ///
    /// Consuming `self` makes restarts unrepresentable: each service
    /// instance starts at most once. Returns `Ok(())` when the process
    /// exits cleanly or exits because of this call's own termination
    /// request following shutdown; every other outcome is an error.
    async fn start(self: Box<Self>, shutdown: ShutdownToken) -> Result<(), ServiceError>;
}

/// Spawns `command` and supervises it under `shutdown` on behalf of the
/// service named `name`.
///
/// The child inherits the node's stdout/stderr. Whichever resolves first
/// between process exit and shutdown decides the path taken; on the
/// shutdown path the child's exit is still drained before returning.
pub async fn supervise(
    name: &str,
    command: &mut Command,
    shutdown: &ShutdownToken,
) -> Result<(), ServiceError> {
    command.stdout(Stdio::inherit()).stderr(Stdio::inherit());

    let mut child = command.spawn().map_err(|source| ServiceError::Launch {
        service: name.to_string(),
        source,
    })?;

    // Race the child's exit against shutdown. The losing wait is dropped
    // here and, on the shutdown path, re-issued below: the child is always
    // waited to completion before this function returns.
    let exited = tokio::select! {
        status = child.wait() => Some(status),
        _ = shutdown.cancelled() => None,
    };

    match exited {
        Some(status) => {
            let status = status.map_err(|source| wait_error(name, source))?;
            classify(name, status, false)
        }
        None => {
            match shutdown.reason() {
                Some(reason) => info!(service = name, %reason, "stopping service"),
                None => info!(service = name, "stopping service"),
            }
            request_termination(name, &child);
            let status = child.wait().await.map_err(|source| wait_error(name, source))?;
            classify(name, status, true)
        }
    }
}

/// Sends SIGTERM to the child. ESRCH means the process exited between the
/// race resolving and the signal going out, which the pending wait reports.
fn request_termination(name: &str, child: &Child) {
    let Some(pid) = child.id() else {
        return;
    };

    match signal::kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
        Ok(()) | Err(Errno::ESRCH) => {}
        Err(err) => warn!(service = name, %err, "failed to deliver SIGTERM"),
    }
}

fn wait_error(name: &str, source: std::io::Error) -> ServiceError {
    ServiceError::Wait {
        service: name.to_string(),
        source,
    }
}

/// Classifies an observed exit status.
///
/// Death by SIGTERM after a termination request is the normal shutdown path
/// and is not an error; the same status without a request, or any other
/// abnormal status, is.
fn classify(
    name: &str,
    status: ExitStatus,
    termination_requested: bool,
) -> Result<(), ServiceError> {
    if status.success() {
        return Ok(());
    }

    if termination_requested && status.signal() == Some(Signal::SIGTERM as i32) {
        return Ok(());
    }

    Err(ServiceError::AbnormalExit {
        service: name.to_string(),
        status,
    })
}
