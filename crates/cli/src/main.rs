// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nudge: send desktop notifications through whichever libnotify is installed.

mod color;
mod commands;
mod exit_error;
mod output;

use std::io::{IsTerminal, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::info::InfoReport;
use commands::send::SendArgs;
use exit_error::{ExitError, FAILURE};
use output::OutputFormat;

/// Log filter variable.
const LOG_ENV: &str = "NUDGE_LOG";

#[derive(Parser)]
#[command(name = "nudge", version, about = "Send desktop notifications", styles = color::styles())]
struct Cli {
    /// Application name passed to the notification service
    #[arg(long, global = true, default_value = "nudge")]
    app_name: String,

    /// Output format for reports
    #[arg(long, global = true, value_enum, default_value_t)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a notification and print what happens to it
    Send(SendArgs),
    /// List the capabilities the notification service advertises
    Caps,
    /// Describe the bound service and the negotiated features
    Info,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let notifier = commands::connect(&cli.app_name)?;
    match cli.command {
        Command::Send(args) => commands::send::run(&notifier, &args),
        Command::Caps => {
            print!("{}", commands::caps::render(notifier.service(), cli.format)?);
            Ok(())
        }
        Command::Info => {
            let report = InfoReport::collect(&notifier, notifier.service().library());
            print!("{}", report.render(cli.format)?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let code = match run(cli) {
        Ok(()) => 0,
        Err(err) => match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("nudge: {exit}");
                exit.code
            }
            None => {
                eprintln!("nudge: {err:#}");
                FAILURE
            }
        },
    };
    let _ = std::io::stdout().flush();
    std::process::exit(code);
}
