//! Status command - show progress of a curation output directory.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::warn;
use wordcard::store::{curated_documents, load_curated};
use wordcard::{CurationSummary, DictionaryStore, RecordStore};

pub fn run(
    output_dir: PathBuf,
    dictionary: Option<PathBuf>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !output_dir.exists() {
        return Err(format!(
            "Output directory not found: {}\nRun 'wordcard review <DICTIONARY> -o {}' first.",
            output_dir.display(),
            output_dir.display()
        )
        .into());
    }

    let documents = curated_documents(&output_dir)?;

    let mut summaries = Vec::with_capacity(documents.len());
    let mut last_rank = None;
    for path in &documents {
        match load_curated(path) {
            Ok(record) => summaries.push(CurationSummary::from_record(&record)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable document");
                continue;
            }
        }
        last_rank = last_rank.max(document_rank(path));
    }

    let total = match dictionary {
        Some(path) => Some(DictionaryStore::open(&path, &output_dir)?.len()),
        None => None,
    };

    let definitions: usize = summaries.iter().map(|s| s.definitions.included).sum();
    let translation_cards = summaries.iter().filter(|s| s.card_translate).count();
    let image_cards = summaries.iter().filter(|s| s.card_image).count();
    let sample_cards: usize = summaries.iter().map(|s| s.card_samples).sum();
    let progress = total
        .filter(|total| *total > 0)
        .map(|total| summaries.len() as f64 / total as f64);

    if json_output {
        let status = serde_json::json!({
            "output_dir": output_dir.display().to_string(),
            "curated": summaries.len(),
            "total": total,
            "progress": progress,
            "last_rank": last_rank,
            "resume_rank": last_rank.and_then(resume_rank),
            "included_definitions": definitions,
            "cards": {
                "translate": translation_cards,
                "image": image_cards,
                "sample": sample_cards,
            },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Curation status for".cyan().bold(),
        output_dir.display().to_string().white()
    );
    println!();

    match (total, progress) {
        (Some(total), Some(progress)) => {
            let bar_width = 30;
            let filled = ((progress * bar_width as f64).round() as usize).min(bar_width);
            let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);
            println!(
                "Progress: {} {}/{} ({:.1}%)",
                bar.cyan(),
                summaries.len().to_string().white().bold(),
                total,
                progress * 100.0
            );
        }
        _ => println!(
            "Curated: {}",
            summaries.len().to_string().white().bold()
        ),
    }

    match (last_rank, last_rank.and_then(resume_rank)) {
        (Some(rank), Some(next)) => println!("Last rank: {} (resume at {})", rank, next),
        (Some(rank), None) => println!("Last rank: {}", rank),
        _ => {}
    }

    println!();
    println!("{}", "Proposed content".cyan().bold());
    println!("  Definitions:       {}", definitions);
    println!("  Translation cards: {}", translation_cards);
    println!("  Image cards:       {}", image_cards);
    println!("  Sample cards:      {}", sample_cards);

    Ok(())
}

/// Rank prefix of a `<rank>-<title>.json` document name.
fn document_rank(path: &Path) -> Option<u32> {
    path.file_stem()?
        .to_str()?
        .split_once('-')
        .and_then(|(rank, _)| rank.parse().ok())
}

/// Rank following the last curated one, if it can be represented.
fn resume_rank(last: u32) -> Option<u32> {
    last.checked_add(1)
}
