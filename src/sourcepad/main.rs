use clap::Parser;
use directories::ProjectDirs;
use sourcepad::error::{Result, SourcepadError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sourcepad={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let mut ctx = cli::AppContext::open(data_dir, cli.bin)?;

    if cli.command.is_empty() {
        cli::run_interactive(&mut ctx)
    } else {
        cli::run_once(&mut ctx, &cli.command)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "sourcepad", "sourcepad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            SourcepadError::Command(
                "Could not determine a data directory; pass --data-dir or set SOURCEPAD_HOME"
                    .to_string(),
            )
        })
}
