use anyhow::Result;
use clap::Parser;
use colored::*;
use serplens::cli::Cli;
use serplens::{resolve_args, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // resolve first so a config-file `verbose` also picks the log level
    let args = match resolve_args(Cli::parse()) {
        Ok(args) => args,
        Err(e) => exit_with_error(e),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        exit_with_error(e);
    }
    Ok(())
}

fn exit_with_error(e: anyhow::Error) -> ! {
    eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
    std::process::exit(1);
}
