// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line client for a single Shelly device.
//!
//! # Usage
//!
//! ```bash
//! shelly --ip 192.168.1.74 switch              # switch configuration
//! shelly --ip 192.168.1.74 -r 1 switch on -o 30 # on, off again after 30 s
//! shelly --ip 192.168.1.74 switch status
//! shelly --ip 192.168.1.74 --legacy info
//! ```
//!
//! Every result is printed as pretty JSON on stdout. Logs go to stderr;
//! `-v` raises verbosity and `RUST_LOG` overrides it.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use shelly_rpc::protocol::{HttpConfig, Transport};
use shelly_rpc::types::{SwitchId, ToggleAfter};
use shelly_rpc::Client;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "shelly",
    author,
    version,
    about = "Control a Shelly switch over its RPC API",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'i',
        long = "ip",
        env = "SHELLY_IP",
        global = true,
        help = "Address of the device for the current command"
    )]
    ip: Option<String>,

    #[arg(
        short = 'r',
        long = "relay",
        global = true,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Switch component the command applies to"
    )]
    relay: i64,

    #[arg(
        long = "timeout",
        env = "SHELLY_TIMEOUT",
        global = true,
        default_value_t = 5,
        help = "Per-request timeout in seconds"
    )]
    timeout: u64,

    #[arg(
        long = "legacy",
        global = true,
        help = "Use GET requests with query parameters instead of JSON-RPC"
    )]
    legacy: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (repeatable)"
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Returns information about the chosen switch")]
    Switch {
        #[command(subcommand)]
        action: Option<SwitchAction>,
    },
    #[command(about = "Returns device identification and firmware information")]
    Info,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum SwitchAction {
    #[command(about = "Show switch configuration")]
    Config,
    #[command(about = "Power on switch")]
    On {
        #[arg(
            short = 'o',
            long = "off-delay",
            allow_negative_numbers = true,
            help = "Off delay in seconds, -1 for none"
        )]
        off_delay: Option<i64>,
    },
    #[command(about = "Power off switch")]
    Off,
    #[command(about = "Toggle power for switch")]
    Toggle,
    #[command(about = "Retrieve status of switch")]
    Status,
    #[command(about = "Reset energy counters of switch")]
    Reset,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ip = cli
        .ip
        .context("no device address given, use --ip or set SHELLY_IP")?;
    let config = HttpConfig::new(ip).with_timeout(Duration::from_secs(cli.timeout));
    let id = SwitchId::new(cli.relay)?;

    let output = if cli.legacy {
        run(&Client::query(config)?, id, cli.command).await?
    } else {
        run(&Client::rpc(config)?, id, cli.command).await?
    };

    println!("{output}");
    Ok(())
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run<T: Transport>(client: &Client<T>, id: SwitchId, command: Commands) -> Result<String> {
    match command {
        Commands::Info => render(&client.device_info().await?),
        Commands::Switch { action } => match action.unwrap_or(SwitchAction::Config) {
            SwitchAction::Config => render(&client.switch_config(id).await?),
            SwitchAction::On { off_delay } => {
                let was = match off_delay.filter(|secs| *secs >= 0) {
                    Some(secs) => {
                        let delay = ToggleAfter::from_secs(secs)?;
                        client.switch_on_with_timer(id, delay).await?
                    }
                    None => client.switch_on(id).await?,
                };
                render(&was)
            }
            SwitchAction::Off => render(&client.switch_off(id).await?),
            SwitchAction::Toggle => render(&client.switch_toggle(id).await?),
            SwitchAction::Status => render(&client.switch_status(id).await?),
            SwitchAction::Reset => render(&client.switch_reset_counters(id).await?),
        },
    }
}

fn render<T: Serialize>(record: &T) -> Result<String> {
    serde_json::to_string_pretty(record).context("failed to render result")
}
