//! Rollupd is the parent process of a rollup node: it launches the node's
//! auxiliary servers (GraphQL, inspect) as child processes, forwards their
//! output, and supervises them until they exit or the node shuts down. On
//! shutdown every child receives a graceful termination request and is
//! waited to completion, so no orphaned processes survive the node.

/// CLI interface.
pub mod cli;

/// Environment-variable configuration.
pub mod config;

/// Error handling.
pub mod error;

/// Logger stream initialization.
pub mod logging;

/// Service supervision contract and process engine.
pub mod service;

/// Concrete service variants.
pub mod services;

/// Cancellable shutdown context.
pub mod shutdown;

/// Concurrent service startup and result aggregation.
pub mod supervisor;

/// Shared helpers for tests.
pub mod test_utils;
