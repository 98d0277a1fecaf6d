//! Addy server and terminal focus client.
//!
//! Usage:
//!
//! ```text
//! addy [serve]
//! addy focus --task <name> [--minutes <n>] [--server <url>]
//! ```
//!
//! `serve` (the default) loads configuration from `.env`, `addy.toml` and the
//! environment, then listens until Ctrl-C. `focus` runs a countdown for one
//! task and polls the server's `/github-commits` route every five seconds.

use addy::app;
use addy::config::AddyConfig;
use addy::focus::{
    client::{DEFAULT_SERVER_URL, ServerCommitFeed},
    runner::{FocusOutcome, FocusRunner},
    session::FocusSession,
};
use addy::http::server::ApiServer;
use addy::telemetry;
use clap::{Parser, Subcommand};
use eyre::WrapErr;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "addy", version, about = "Aggregation server for the Addy productivity assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
    /// Run a focus-session countdown in the terminal.
    Focus {
        /// Task to focus on.
        #[arg(long)]
        task: String,
        /// Session length in minutes.
        #[arg(long, default_value_t = 25)]
        minutes: u32,
        /// Base URL of a running Addy server.
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Focus {
            task,
            minutes,
            server,
        } => focus(task, minutes, server).await,
    }
}

async fn serve() -> eyre::Result<()> {
    let config = AddyConfig::load_with_dotenv().wrap_err("failed to load configuration")?;
    let router = Arc::new(app::build_router(&config)?);
    let server = ApiServer::bind(&config.server.bind_address(), router)?;
    server.serve_until(ctrl_c()).await?;
    Ok(())
}

async fn focus(task: String, minutes: u32, server: String) -> eyre::Result<()> {
    let clock = Arc::new(DefaultClock);
    let session = FocusSession::new(task, minutes, clock.utc())?;
    let feed = Arc::new(ServerCommitFeed::new(app::http_client()?, server));
    let runner = FocusRunner::new(session, clock, feed);

    let outcome = runner.run(&mut std::io::stdout(), ctrl_c()).await?;
    if outcome == FocusOutcome::Completed {
        info!("focus session completed");
    }
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
