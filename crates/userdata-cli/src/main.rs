//! Userdata CLI — entry point.
//!
//! # Commands
//!
//! - `userdata rhel spec [-p PAYLOAD] [--pretty]` — load a RHEL payload and print the encoded spec
//! - `userdata rhel check [-p PAYLOAD]` — show what a RHEL payload resolves to

mod helpers;
mod rhel_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Inspect operating-system userdata configs
#[derive(Parser)]
#[command(name = "userdata", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Red Hat Enterprise Linux config
    Rhel {
        #[command(subcommand)]
        action: rhel_cmd::RhelCommands,
    },
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logs);

    match cli.command {
        Commands::Rhel { action } => rhel_cmd::dispatch(action),
    }
}

/// Initialize tracing/logging. Logs go to stderr so stdout stays parseable.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_directives(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Filter directives; the `userdata` prefix also covers `userdata_core`.
fn log_directives(verbose: bool) -> &'static str {
    if verbose {
        "userdata=debug,info"
    } else {
        "warn"
    }
}
