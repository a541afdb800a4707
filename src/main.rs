use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

// Declare modules
mod client;
mod commands;
mod constants;
mod domain;
mod notify;
mod state;
mod theme;
mod tui;
mod tx;
mod ui;
mod wallet;
mod watcher;

use crate::domain::Cluster;
use crate::state::{App, StartupOptions};

// SolForge version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

// ASCII art logo
const LOGO: &str = r#"
███████╗ ██████╗ ██╗     ███████╗ ██████╗ ██████╗  ██████╗ ███████╗
██╔════╝██╔═══██╗██║     ██╔════╝██╔═══██╗██╔══██╗██╔════╝ ██╔════╝
███████╗██║   ██║██║     █████╗  ██║   ██║██████╔╝██║  ███╗█████╗
╚════██║██║   ██║██║     ██╔══╝  ██║   ██║██╔══██╗██║   ██║██╔══╝
███████║╚██████╔╝███████╗██║     ╚██████╔╝██║  ██║╚██████╔╝███████╗
╚══════╝ ╚═════╝ ╚══════╝╚═╝      ╚═════╝ ╚═╝  ╚═╝ ╚═════╝ ╚══════╝
"#;

/// SolForge - Terminal UI for SPL token operations
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Cluster to connect to (devnet, testnet, mainnet-beta, localnet)
    #[arg(short = 'u', long)]
    cluster: Option<Cluster>,

    /// Path to the wallet keypair file (Solana CLI JSON format)
    #[arg(short, long)]
    keypair: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let cli = Cli::parse();
    if let Some(Commands::Version) = &cli.command {
        println!("{LOGO}");
        println!("SolForge v{VERSION}");
        println!("A terminal UI for forging SPL tokens on Solana");
        return Ok(());
    }

    color_eyre::install()?;

    let startup = StartupOptions {
        cluster: cli.cluster,
        keypair_path: cli.keypair,
    };

    let mut app = App::new(startup)?;
    let mut terminal = tui::init()?;

    let run_result = app.run(&mut terminal).await;

    tui::restore()?;
    run_result
}

/// Routes tracing output away from the terminal the TUI owns.
///
/// Diagnostics land on stderr only when `RUST_LOG` is set, so a normal
/// run draws a clean screen while `RUST_LOG=debug solforge 2>log` still
/// captures client and watcher traces.
fn tracing_init() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "solforge=warn".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}
