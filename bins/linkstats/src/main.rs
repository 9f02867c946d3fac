//! linkstats command - show netlink statistics for one network interface.

use std::process;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use linkstat::netlink::Connection;
use linkstat::output::{OutputFormat, OutputOptions};
use linkstat::util::ifname;

#[derive(Parser)]
#[command(
    name = "linkstats",
    version,
    about = "Show link statistics for a network interface"
)]
struct Cli {
    /// Interface name (or index).
    interface: String,

    /// Output JSON.
    #[arg(short = 'j', long)]
    json: bool,

    /// Pretty print JSON.
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Receive timeout in milliseconds (0 waits forever).
    #[arg(short = 't', long, value_name = "MS", default_value_t = 5000)]
    timeout: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // clap exits 2 on usage errors; this tool exits 1.
        Err(e) => {
            e.print().ok();
            process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let (name, ifindex) = match ifname::resolve(&cli.interface) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::debug!(error = %e, "interface resolution failed");
            eprintln!("Error: Invalid interface name: {}", cli.interface);
            process::exit(1);
        }
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let opts = OutputOptions { pretty: cli.pretty };

    match show(&name, ifindex, Duration::from_millis(cli.timeout), format, &opts).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            eprintln!("No stats for interface {}", name);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Dump link statistics and print the entry for `ifindex`.
///
/// Returns `false` if the dump held no statistics for it.
async fn show(
    name: &str,
    ifindex: u32,
    timeout: Duration,
    format: OutputFormat,
    opts: &OutputOptions,
) -> anyhow::Result<bool> {
    let conn = Connection::new()
        .context("cannot open netlink socket")?
        .timeout(timeout);

    let Some(mut entry) = conn
        .link_stats_for(ifindex)
        .await
        .context("link statistics dump failed")?
    else {
        return Ok(false);
    };

    tracing::debug!(ifindex, reported = ?entry.name, "found statistics");
    if entry.name.is_none() {
        entry.name = Some(name.to_string());
    }

    linkstat::output::print(&entry, format, opts)?;
    Ok(true)
}
