//! Review command - open web UI for interactive curation.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use tracing::warn;
use wordcard::{CseClient, DictionaryStore, Rank, RecordStore};

use crate::server::{app, state::AppState};

use super::load_curator;

/// Options of the `review` command.
pub struct ReviewOptions {
    pub dictionary: PathBuf,
    pub output_dir: PathBuf,
    pub port: u16,
    pub rank: u32,
    pub no_open: bool,
    pub download_media: bool,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

pub fn run(options: ReviewOptions) -> Result<(), Box<dyn std::error::Error>> {
    let rank = Rank::new(options.rank)?;
    let curator = load_curator(options.config.as_deref())?;
    let store = DictionaryStore::open(&options.dictionary, &options.output_dir)?;
    let total = store.len();

    if options.verbose {
        println!(
            "Loaded {} records from {}",
            total,
            options.dictionary.display()
        );
    }

    let mut state = AppState::new(store, curator, options.output_dir.clone())
        .with_media_download(options.download_media);

    match CseClient::from_env() {
        Ok(client) => state = state.with_image_search(Arc::new(client)),
        Err(e) => {
            warn!(error = %e, "image search disabled");
            println!(
                "{} Image search disabled: {}",
                "Note:".yellow(),
                e
            );
        }
    }

    // Print server info
    let url = format!("http://localhost:{}/#{}", options.port, rank);
    println!();
    println!(
        "{} {}",
        "Starting review server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Dictionary: {} ({} records)", options.dictionary.display(), total);
    println!("  Output:     {}", options.output_dir.display());
    if options.download_media {
        println!("  Media:      downloaded on save");
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !options.no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, options.port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
