//! Wordcard CLI - curation of dictionary records for flashcards.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Curate {
            dictionary,
            rank,
            output,
        } => commands::curate::run(dictionary, rank, output, cli.config, cli.verbose),

        Commands::Show {
            dictionary,
            rank,
            json,
        } => commands::show::run(dictionary, rank, json, cli.config),

        Commands::Images { term, json } => commands::images::run(term, json),

        Commands::Status {
            output_dir,
            dictionary,
            json,
        } => commands::status::run(output_dir, dictionary, json),

        Commands::Review {
            dictionary,
            output_dir,
            port,
            rank,
            no_open,
            download_media,
        } => commands::review::run(commands::review::ReviewOptions {
            dictionary,
            output_dir,
            port,
            rank,
            no_open,
            download_media,
            config: cli.config,
            verbose: cli.verbose,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `WORDCARD_LOG` overrides the level (e.g. `wordcard=debug`).
fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WORDCARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {}", e))?;

    Ok(())
}
