//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wordcard: curate dictionary records into flashcard-ready documents
#[derive(Parser)]
#[command(name = "wordcard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Curation policy file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Curate one record and print the curated document
    Curate {
        /// Path to the dictionary file (JSON array of records)
        #[arg(value_name = "DICTIONARY")]
        dictionary: PathBuf,

        /// Rank of the record (1-based)
        #[arg(short, long)]
        rank: u32,

        /// Write the curated document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the curation proposal for one record
    Show {
        /// Path to the dictionary file
        #[arg(value_name = "DICTIONARY")]
        dictionary: PathBuf,

        /// Rank of the record (1-based)
        #[arg(short, long)]
        rank: u32,

        /// Output the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search images for a term
    Images {
        /// Search term
        #[arg(value_name = "TERM")]
        term: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show progress of a curation output directory
    Status {
        /// Directory holding the curated documents
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Dictionary file, to report progress against its size
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open web UI for interactive review
    Review {
        /// Path to the dictionary file
        #[arg(value_name = "DICTIONARY")]
        dictionary: PathBuf,

        /// Directory to save curated documents and media
        #[arg(short, long, default_value = "curated")]
        output_dir: PathBuf,

        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Rank to open first
        #[arg(short, long, default_value = "1")]
        rank: u32,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,

        /// Download the selected image and audio when saving
        #[arg(long)]
        download_media: bool,
    },
}
