// src/main.rs

use anyhow::Result;
use clap::Parser;
use dockcopy::cli::Cli;
use dockcopy::config::ConfigBuilder;
use dockcopy::errors::Error;
use dockcopy::run;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "dockcopy=debug".parse()?
                } else {
                    "dockcopy=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting dockcopy v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    if let Err(e) = run(&config) {
        match e {
            Error::EmptySource { .. } | Error::NothingToCopy { .. } => {
                eprintln!("dockcopy: {}", e);
                std::process::exit(2);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
