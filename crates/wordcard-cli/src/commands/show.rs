//! Show command - display the curation proposal of one record.

use std::path::PathBuf;

use colored::Colorize;
use wordcard::curation::SelectionCount;
use wordcard::{CuratedRecord, CurationSummary, DictionaryStore, Rank, RecordStore};

use super::load_curator;

pub fn run(
    dictionary: PathBuf,
    rank: u32,
    json_output: bool,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let curator = load_curator(config.as_deref())?;
    let store = DictionaryStore::open(&dictionary, ".")?;
    let rank = Rank::new(rank)?;

    let curated = curator.curate(&store.get(rank)?);
    let summary = CurationSummary::from_record(&curated);

    if json_output {
        let status = serde_json::json!({
            "rank": rank,
            "total": store.len(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    print_record(rank, store.len(), &curated);
    println!();
    print_summary(&summary);

    Ok(())
}

fn checkbox(include: bool) -> colored::ColoredString {
    if include {
        "[x]".green().bold()
    } else {
        "[ ]".dimmed()
    }
}

fn print_record(rank: Rank, total: usize, record: &CuratedRecord) {
    println!(
        "{} {} {}",
        format!("#{}/{}", rank, total).dimmed(),
        record.title.white().bold(),
        record.ipa.as_deref().unwrap_or("").cyan()
    );

    if let Some(audio) = &record.audio {
        println!("{} audio: {}", checkbox(audio.include), audio.name);
    }

    for word_type in &record.types {
        println!();
        println!(
            "{} {}",
            checkbox(word_type.include),
            word_type.kind.as_deref().unwrap_or("(untyped)").yellow().bold()
        );
        for definition in &word_type.definitions {
            println!("    {} {}", checkbox(definition.include), definition.text);
            for quotation in definition.quotations() {
                println!(
                    "        {} {}",
                    checkbox(quotation.include),
                    quotation.text.italic()
                );
            }
        }
    }

    if let Some(synonyms) = &record.synonyms {
        println!();
        println!("{}", "Synonyms".yellow().bold());
        for synonym in synonyms {
            println!("    {} {}", checkbox(synonym.include), synonym.text);
        }
    }

    if let Some(translations) = &record.translations {
        println!();
        println!("{}", "Translations".yellow().bold());
        for translation in translations {
            println!("    {} {}", checkbox(translation.include), translation.text);
        }
    }

    if !record.images.is_empty() {
        println!();
        println!("{}", "Images".yellow().bold());
        for image in &record.images {
            println!(
                "    {} {} {}",
                checkbox(image.include),
                image.filename,
                image.description.dimmed()
            );
        }
    }
}

fn print_count(label: &str, count: SelectionCount) {
    println!("  {:<14} {}/{}", label, count.included.to_string().white().bold(), count.total);
}

fn print_summary(summary: &CurationSummary) {
    println!("{}", "Proposal".cyan().bold());
    print_count("Word types", summary.types);
    print_count("Definitions", summary.definitions);
    print_count("Quotations", summary.quotations);
    print_count("Synonyms", summary.synonyms);
    print_count("Translations", summary.translations);
    print_count("Images", summary.images);
    println!(
        "  {:<14} translate: {}  image: {}",
        "Cards",
        checkbox(summary.card_translate),
        checkbox(summary.card_image)
    );

    if !summary.has_content() {
        println!();
        println!("{} nothing is proposed for this word", "Note:".yellow());
    }
}
