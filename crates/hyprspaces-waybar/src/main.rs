//! hyprspaces-waybar CLI
//!
//! Streams the hyprspaces waybar socket to stdout until the plugin closes
//! it. Intended as the `exec` command of a waybar custom module.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hyprspaces_waybar::{paths, relay, EnvConfig};

#[derive(Parser)]
#[command(name = "hyprspaces-waybar")]
#[command(author, version, about = "Relay the hyprspaces waybar socket to stdout")]
struct Cli {
    /// Socket to read from (defaults to $XDG_CONFIG_HOME/hyprspaces/waybar/waybar.sock)
    #[arg(short, long)]
    socket: Option<PathBuf>,

    /// Print the resolved socket path and exit
    #[arg(long)]
    print_path: bool,

    /// Enable verbose output on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    // stdout carries the relayed stream, so diagnostics go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let socket_path = match cli.socket {
        Some(path) => path,
        None => paths::resolve_socket_path(&EnvConfig::from_env())?,
    };

    if cli.print_path {
        println!("{}", socket_path.display());
        return Ok(());
    }

    tracing::info!("Relaying {}", socket_path.display());

    let total = relay::run(&socket_path)
        .await
        .with_context(|| format!("Relay from {} failed", socket_path.display()))?;

    tracing::info!("Stream ended after {} bytes", total);
    Ok(())
}
