use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::hook::HookVerdict;

#[derive(Parser, Debug)]
#[command(
    name = "toolwarden",
    version,
    about = "Policy gates for AI coding-agent tool calls"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
    /// Pre-command gate: reads the hook payload on stdin
    PreBash,
    /// Pre-write gate: reads the hook payload on stdin
    PreEdit,
    /// Post-action secret scan over the changed working tree
    Scan {
        #[arg(long)]
        root: Option<PathBuf>,
        /// Scan these files instead of discovering the changed set
        paths: Vec<PathBuf>,
    },
    /// Evaluate a single command or path without the hook transport
    Check {
        #[arg(long, conflicts_with = "path")]
        command: Option<String>,
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config {
        #[arg(long)]
        stats: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        // Exit-code transport for the host dispatcher: 0 allows the
        // action, 2 cancels it with the reason on stderr. Everything
        // else (startup/config failures) is a plain error exit.
        Ok(HookVerdict::Allow) => ExitCode::SUCCESS,
        Ok(HookVerdict::Block { reason }) => {
            eprintln!("toolwarden: {reason}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("toolwarden error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<HookVerdict> {
    match cli.command {
        Commands::Init { path, force } => {
            commands::init::execute(path, force)?;
            Ok(HookVerdict::Allow)
        }
        Commands::PreBash => commands::hook::execute(cli.config, commands::hook::GateKind::Command),
        Commands::PreEdit => commands::hook::execute(cli.config, commands::hook::GateKind::Write),
        Commands::Scan { root, paths } => {
            commands::scan::execute(cli.config, root, paths)?;
            Ok(HookVerdict::Allow)
        }
        Commands::Check { command, path } => commands::check::execute(cli.config, command, path),
        Commands::Config { stats } => {
            commands::config::execute(cli.config, stats)?;
            Ok(HookVerdict::Allow)
        }
    }
}
