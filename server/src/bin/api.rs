use anyhow::Context;
use pavex::hyper::Server;
use sd_api::telemetry::{get_subscriber, init_telemetry};
use sd_server::configuration::load_configuration;
use server_sdk::{build_application_state, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("status-dashboard".into(), "info".into(), std::io::stdout);
    init_telemetry(subscriber)?;

    // Isolate setup and launch in `_main` so there is a single choke
    // point to log a fatal startup error before the process exits.
    if let Err(e) = _main().await {
        tracing::error!(
            error.msg = %e,
            error.error_chain = ?e,
            "The application is exiting due to an error"
        );
        std::process::exit(1);
    }

    Ok(())
}

async fn _main() -> anyhow::Result<()> {
    let config = load_configuration().context("Failed to load the application configuration")?;

    let tcp_listener = config
        .server
        .listener()
        .context("Failed to bind the server TCP listener")?;
    let address = tcp_listener
        .local_addr()
        .context("The server TCP listener doesn't have a local socket address")?;
    let server_builder =
        Server::from_tcp(tcp_listener).context("Failed to build a hyper Server")?;

    let application_state = build_application_state(config)
        .await
        .context("Failed to build the application state")?;

    tracing::info!("Starting to listen for incoming requests at {}", address);
    run(server_builder, application_state).await?;
    Ok(())
}
