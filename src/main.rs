//! Dockcraft CLI - declarative multi-server container deployments
//!
//! Usage: dockcraft <COMMAND>
//!
//! Commands:
//!   create  Collect services into data.json and render the tree
//!   update  List, add, remove or change services
//!   build   Re-render the tree from data.json
//!   up, down, start, stop, backup, shell  Drive the container runtime

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dockcraft::application::RuntimeAction;

use crate::cli::{Cli, ColorWhen, Commands};
use crate::commands::AppContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color_flag = cli.color;

    if let Err(err) = run(cli) {
        let color = match color_flag {
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Never) => false,
            _ => ui::terminal::detect_capabilities().supports_color,
        };
        ui::error::print_error(&err, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::from_cli(&cli)?;
    tracing::debug!(root = %ctx.workspace.root().display(), command = ?cli.command, "dispatch");

    match cli.command {
        Commands::Create { network } => commands::create::cmd_create(&ctx, network.as_deref()),
        Commands::Update {
            service,
            add,
            remove,
            change,
        } => commands::update::cmd_update(&ctx, service, add, remove, change),
        Commands::Build => commands::build::cmd_build(&ctx),
        Commands::Up { attached } => {
            commands::runtime::cmd_runtime(&ctx, RuntimeAction::Up { attached })
        }
        Commands::Down { volumes } => {
            commands::runtime::cmd_runtime(&ctx, RuntimeAction::Down { volumes })
        }
        Commands::Start => commands::runtime::cmd_runtime(&ctx, RuntimeAction::Start),
        Commands::Stop => commands::runtime::cmd_runtime(&ctx, RuntimeAction::Stop),
        Commands::Backup => commands::runtime::cmd_backup(&ctx),
        Commands::Shell { service } => commands::runtime::cmd_shell(&ctx, &service),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("dockcraft={}", level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
