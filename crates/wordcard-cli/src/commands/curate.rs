//! Curate command - print the curated document of one record.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use wordcard::{DictionaryStore, Rank, RecordStore};

use super::load_curator;

pub fn run(
    dictionary: PathBuf,
    rank: u32,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let curator = load_curator(config.as_deref())?;
    let store = DictionaryStore::open(&dictionary, ".")?;
    let rank = Rank::new(rank)?;

    let raw = store.get(rank)?;
    let curated = curator.curate(&raw);
    let json = serde_json::to_string_pretty(&curated)?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            if verbose {
                println!(
                    "{} #{} {} -> {}",
                    "Curated".green().bold(),
                    rank,
                    curated.title.white().bold(),
                    path.display()
                );
            }
        }
        None => println!("{}", json),
    }

    Ok(())
}
