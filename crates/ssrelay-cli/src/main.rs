//! ssrelay entry point.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use ssrelay_axum::start_server;
use ssrelay_cli::{Cli, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so it can feed clap's env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutdown requested");
                    cancel.cancel();
                }
                Err(e) => warn!(error = %e, "Could not listen for Ctrl-C"),
            }
        }
    });

    if let Err(e) = start_server(cli.into_server_config(), cancel).await {
        error!(error = %e, "ssrelay stopped with an error");
        return Err(e);
    }
    Ok(())
}
