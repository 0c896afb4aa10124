//! `userdata rhel` — load RHEL payloads from the CLI.
//!
//! - `userdata rhel spec [-p PAYLOAD] [--pretty]` — print the re-encoded spec
//! - `userdata rhel check [-p PAYLOAD]` — show resolved settings and credential status
//!
//! Credentials missing from the payload are taken from
//! `RHEL_SUBSCRIPTION_MANAGER_USER` / `RHEL_SUBSCRIPTION_MANAGER_PASSWORD`.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use tracing::info;

use userdata_core::env::{EnvSource, ProcessEnv};
use userdata_core::raw::RawExtension;
use userdata_core::rhel::{self, Config};

use crate::helpers::{read_payload, render_spec};

// ─────────────────────────────────────────────
// Subcommand enum
// ─────────────────────────────────────────────

/// RHEL subcommands.
#[derive(Subcommand)]
pub enum RhelCommands {
    /// Load a payload and print the encoded spec
    Spec {
        /// Payload file (JSON), or "-" for stdin. Omit for an empty payload.
        #[arg(short, long)]
        payload: Option<String>,

        /// Pretty-print the output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Load a payload and show what it resolves to
    Check {
        /// Payload file (JSON), or "-" for stdin. Omit for an empty payload.
        #[arg(short, long)]
        payload: Option<String>,
    },
}

// ─────────────────────────────────────────────
// Dispatcher
// ─────────────────────────────────────────────

/// Dispatch a rhel subcommand.
pub fn dispatch(cmd: RhelCommands) -> Result<()> {
    match cmd {
        RhelCommands::Spec { payload, pretty } => {
            let raw = read_payload(payload.as_deref())?;
            println!("{}", spec_output(&raw, &ProcessEnv, pretty)?);
            Ok(())
        }
        RhelCommands::Check { payload } => {
            let raw = read_payload(payload.as_deref())?;
            check(&raw, &ProcessEnv)
        }
    }
}

// ─────────────────────────────────────────────
// Command implementations
// ─────────────────────────────────────────────

/// Load `raw` and render the re-encoded spec.
fn spec_output(raw: &RawExtension, env: &dyn EnvSource, pretty: bool) -> Result<String> {
    let config = load(raw, env)?;
    let spec = config.spec().context("failed to encode RHEL config")?;
    render_spec(&spec, pretty)
}

fn load(raw: &RawExtension, env: &dyn EnvSource) -> Result<Config> {
    let config = rhel::load_config(raw, env).context("failed to load RHEL config")?;
    info!(dist_upgrade_on_boot = config.dist_upgrade_on_boot, "RHEL config loaded");
    Ok(config)
}

fn check(raw: &RawExtension, env: &dyn EnvSource) -> Result<()> {
    let config = load(raw, env)?;

    println!();
    println!("{}", "RHEL userdata".cyan().bold());
    println!();

    let payload = if raw.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        format!("{} bytes", raw.len())
    };
    println!("  {:<22} {}", "Payload:".bold(), payload);
    println!(
        "  {:<22} {}",
        "Dist upgrade on boot:".bold(),
        config.dist_upgrade_on_boot
    );
    println!(
        "  {:<22} {}",
        "Subscription user:".bold(),
        user_status(&config)
    );
    println!(
        "  {:<22} {}",
        "Subscription password:".bold(),
        password_status(&config)
    );

    if raw.is_empty() {
        println!();
        println!(
            "  {} empty payload: {} and {} were not consulted",
            "!".yellow().bold(),
            rhel::SUBSCRIPTION_MANAGER_USER_ENV,
            rhel::SUBSCRIPTION_MANAGER_PASSWORD_ENV,
        );
    }

    println!();
    Ok(())
}

fn user_status(config: &Config) -> String {
    if config.subscription_manager_user.is_empty() {
        format!("{}", "· not configured".dimmed())
    } else {
        format!("{} {}", "✓".green(), config.subscription_manager_user)
    }
}

fn password_status(config: &Config) -> String {
    if config.subscription_manager_password.is_empty() {
        format!("{}", "· not configured".dimmed())
    } else {
        format!("{} (set)", "✓".green())
    }
}
