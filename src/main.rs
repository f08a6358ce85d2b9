//! Application entry point.

use clap::Parser;
use std::path::PathBuf;

use dualstore::config::ConfigLoader;
use dualstore::logger::init_logger;
use dualstore::server::Server;

/// Dual-datasource CRUD web backend.
#[derive(Debug, Parser)]
#[command(name = "dualstore", version, about)]
struct Cli {
    /// Path to a single configuration file (skips layered loading)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the server host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Override the server port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = match cli.config {
        Some(path) => ConfigLoader::with_file(path),
        None => ConfigLoader::new()?,
    };
    let mut settings = loader.load()?;

    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    init_logger(&settings.logger)?;

    Server::new(settings).run().await
}
