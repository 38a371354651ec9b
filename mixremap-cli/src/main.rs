mod app;
mod commands;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .expect("failed to set Ctrl+C handler");

    let cli = Cli::parse();

    // Show mixremap info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("mixremap", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    match &cli.command {
        Command::Batch {
            mappings,
            invert,
            resolver,
        } => commands::batch::run(mappings.as_deref(), *invert, resolver),
        Command::Check { mappings } => commands::check::run(mappings),
        Command::Invert { mappings, output } => {
            commands::invert::run(mappings, output.as_deref())
        }
    }
}
