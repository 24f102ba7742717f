//! Concurrent service startup and result aggregation.

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::error::ServiceError;
use crate::service::Service;
use crate::shutdown::ShutdownToken;

/// Owns the set of services to run and aggregates their outcomes.
///
/// The supervisor starts every registered service on its own tokio task,
/// all sharing one shutdown token, and waits for every task to complete
/// regardless of individual outcomes. A failing service does not cancel its
/// siblings: shutdown is driven only by the token's owner, the supervisor
/// just aggregates.
#[derive(Default)]
pub struct Supervisor {
    services: Vec<Box<dyn Service>>,
}

impl Supervisor {
    /// Creates an empty supervisor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a service. Registration order decides which error `run`
    /// reports when several services fail.
    pub fn register(&mut self, service: impl Service + 'static) {
        self.services.push(Box::new(service));
    }

    /// Starts every registered service concurrently and waits for all of
    /// them to finish, returning the first error in registration order, or
    /// `Ok(())` when every service completed cleanly.
    pub async fn run(self, shutdown: ShutdownToken) -> Result<(), ServiceError> {
        let mut handles: Vec<(String, JoinHandle<Result<(), ServiceError>>)> =
            Vec::with_capacity(self.services.len());

        for service in self.services {
            let name = service.name().to_string();
            info!(service = %name, "starting service");
            handles.push((name, tokio::spawn(service.start(shutdown.clone()))));
        }

        let mut first_error = None;
        for (name, handle) in handles {
            let result = handle.await.unwrap_or_else(|source| {
                Err(ServiceError::Task {
                    service: name.clone(),
                    source,
                })
            });

            match result {
                Ok(()) => info!(service = %name, "service finished"),
                Err(err) => {
                    error!(service = %name, %err, "service failed");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
