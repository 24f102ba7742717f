//! GraphQL server variant.

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::GRAPHQL_PORT_KEY;
use crate::error::ServiceError;
use crate::service::{self, Service};
use crate::shutdown::ShutdownToken;

const SERVICE_NAME: &str = "graphql-server";
const BINARY_NAME: &str = "rollup-graphql-server";

/// Supervises the node's GraphQL query server.
#[derive(Debug)]
pub struct GraphqlService {
    port: u16,
}

impl GraphqlService {
    /// Creates the variant with the port the server should listen on. The
    /// port is handed to the child through its environment; the binary takes
    /// no arguments.
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl Service for GraphqlService {
    fn name(&self) -> &str {
        SERVICE_NAME
    }

    async fn start(self: Box<Self>, shutdown: ShutdownToken) -> Result<(), ServiceError> {
        let mut command = Command::new(BINARY_NAME);
        command.env(GRAPHQL_PORT_KEY, self.port.to_string());
        service::supervise(SERVICE_NAME, &mut command, &shutdown).await
    }
}
