//! che: command-line companion for Eclipse Che workspaces.
//!
//! Runs inside a workspace container and talks to the embedded editor.
//!
//! Usage:
//!   che open README.md                 # Show a file in the browser editor
//!   che --verbose open src/main.rs     # Same, with debug logging on stderr
//!   che --log-file /tmp/che.log open x # Append logs to a file instead

use std::path::PathBuf;
use std::process::ExitCode;

use che_commands::{CommandContext, Commands};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "che", about = "Eclipse Che workspace command-line tools")]
struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(cli: &Cli) {
    // RUST_LOG wins; otherwise stay quiet unless asked, so success prints nothing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    if let Some(ref log_path) = cli.log_file {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match std::fs::OpenOptions::new().create(true).append(true).open(log_path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => eprintln!("Failed to open log file {}: {e}", log_path.display()),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ctx = CommandContext::from_process();
    match cli.command.run(&ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(kind = ?e.kind(), "{} failed: {e}", cli.command.name());
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
