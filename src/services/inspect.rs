//! Inspect server variant.

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::INSPECT_PORT_KEY;
use crate::error::ServiceError;
use crate::service::{self, Service};
use crate::shutdown::ShutdownToken;

const SERVICE_NAME: &str = "inspect-server";
const BINARY_NAME: &str = "rollup-inspect-server";

/// Supervises the node's state inspection server.
#[derive(Debug)]
pub struct InspectService {
    port: u16,
}

impl InspectService {
    /// Creates the variant with the port the server should listen on.
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl Service for InspectService {
    fn name(&self) -> &str {
        SERVICE_NAME
    }

    async fn start(self: Box<Self>, shutdown: ShutdownToken) -> Result<(), ServiceError> {
        let mut command = Command::new(BINARY_NAME);
        command.env(INSPECT_PORT_KEY, self.port.to_string());
        service::supervise(SERVICE_NAME, &mut command, &shutdown).await
    }
}
