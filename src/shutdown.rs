//! Cancellable shutdown context shared by every supervised service.
//!
//! The controller/token split mirrors the usual source/token pattern: the
//! binary owns the [`ShutdownController`] and is the only component allowed
//! to trigger shutdown; services hold cloned [`ShutdownToken`]s and may only
//! observe it. Cancellation is irreversible, and the recorded reason is
//! write-once: the first shutdown call wins.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tokio_util::sync::CancellationToken;

/// Why the node is shutting down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The node received SIGINT.
    Interrupted,
    /// The node received SIGTERM.
    Terminated,
    /// A fatal error elsewhere in the node requested shutdown.
    Fatal(String),
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownReason::Interrupted => write!(f, "received SIGINT"),
            ShutdownReason::Terminated => write!(f, "received SIGTERM"),
            ShutdownReason::Fatal(msg) => write!(f, "fatal error: {msg}"),
        }
    }
}

/// Owner side of the shutdown context.
#[derive(Debug, Default, Clone)]
pub struct ShutdownController {
    token: CancellationToken,
    reason: Arc<OnceLock<ShutdownReason>>,
}

impl ShutdownController {
    /// Creates a fresh, not-yet-cancelled controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an observer token tied to this controller.
    pub fn token(&self) -> ShutdownToken {
        ShutdownToken {
            token: self.token.clone(),
            reason: Arc::clone(&self.reason),
        }
    }

    /// Records the shutdown reason and cancels every outstanding token.
    ///
    /// Idempotent: later calls neither overwrite the reason nor un-cancel.
    pub fn shutdown(&self, reason: ShutdownReason) {
        let _ = self.reason.set(reason);
        self.token.cancel();
    }
}

/// Observer side of the shutdown context, cheap to clone.
#[derive(Debug, Clone)]
pub struct ShutdownToken {
    token: CancellationToken,
    reason: Arc<OnceLock<ShutdownReason>>,
}

impl ShutdownToken {
    /// Completes once shutdown has been requested.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// Returns `true` once shutdown has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The recorded shutdown reason, `Some` once cancelled.
    pub fn reason(&self) -> Option<&ShutdownReason> {
        self.reason.get()
    }
}
