use std::process::ExitCode;

use tokio::signal::unix::{SignalKind, signal};
use tracing::{error, info};

use rollupd::{
    cli::parse_args,
    config::Config,
    logging,
    services::{GraphqlService, InspectService},
    shutdown::{ShutdownController, ShutdownReason},
    supervisor::Supervisor,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = parse_args();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            // The subscriber is configured from these settings, so a config
            // failure can only go to stderr directly.
            eprintln!("rollupd: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(level) = args.log_level {
        config.log.level = level.into();
    }
    logging::init(&config.log);

    let controller = ShutdownController::new();
    if let Err(err) = spawn_signal_listener(controller.clone()) {
        error!("Failed to install signal handlers: {err}");
        return ExitCode::FAILURE;
    }

    let mut supervisor = Supervisor::new();
    supervisor.register(GraphqlService::new(config.graphql_port));
    supervisor.register(InspectService::new(config.inspect_port));

    info!(
        graphql_port = config.graphql_port,
        inspect_port = config.inspect_port,
        "starting rollup node services"
    );

    match supervisor.run(controller.token()).await {
        Ok(()) => {
            info!("all services finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("node terminating after service failure: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Shuts the controller down on the first SIGINT or SIGTERM.
fn spawn_signal_listener(controller: ShutdownController) -> std::io::Result<()> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => controller.shutdown(ShutdownReason::Interrupted),
            _ = terminate.recv() => controller.shutdown(ShutdownReason::Terminated),
        }
    });

    Ok(())
}
