//! `dns-inventory`: list Cloudflare zones and the DNS records of one zone.
//!
//! ```text
//! dns-inventory -e me@example.com -k $KEY            # discover example.com
//! dns-inventory -e me@example.com -k $KEY -d my.org  # discover my.org
//! dns-inventory -e me@example.com -k $KEY -z <id>    # skip discovery
//! ```
//!
//! Credentials fall back to `CLOUDFLARE_API_EMAIL` / `CLOUDFLARE_API_KEY`.
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.

mod app;
mod args;
mod config;
mod output;
mod workflow;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use output::Reporter;

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[ERROR] {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    init_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let argv = std::env::args_os().collect();
    let mut out = Reporter::stdout();
    let mut err = std::io::stderr();
    let exit = runtime.block_on(app::execute(
        argv,
        |key| std::env::var(key).ok(),
        &mut out,
        &mut err,
    ));

    Ok(exit.into())
}

/// Diagnostics on stderr; stdout carries the listing.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .without_time(),
        )
        .with(filter)
        .try_init()
        .context("failed to initialize logging")
}
