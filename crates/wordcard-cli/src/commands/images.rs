//! Images command - run an image search for a term.

use colored::Colorize;
use wordcard::{CseClient, ImageSearch};

pub fn run(term: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let search = CseClient::from_env()?;
    let candidates = search.search(&term)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    println!(
        "{} {} ({} result(s))",
        "Images for".cyan().bold(),
        term.white().bold(),
        candidates.len()
    );
    for candidate in &candidates {
        println!("  - {}", candidate.title);
        println!("    {}", candidate.link.dimmed());
    }

    Ok(())
}
