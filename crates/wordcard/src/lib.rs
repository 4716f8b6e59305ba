//! Wordcard: curation engine for dictionary records.
//!
//! Wordcard takes raw dictionary entries (word senses, definitions,
//! quotations, synonyms, translations, images) and proposes which parts of
//! each entry should become spaced-repetition study cards. A human curator
//! reviews the proposal, flips any `include` flag, and saves the result.
//!
//! # Core Principles
//!
//! - **Pure curation**: the [`Curator`] is a deterministic function from a
//!   [`RawRecord`] to a fresh [`CuratedRecord`]
//! - **Non-destructive**: raw records are never modified
//! - **Human override**: every proposal is a flag the reviewer can change
//!
//! # Example
//!
//! ```no_run
//! use wordcard::{Curator, DictionaryStore, Rank, RecordStore};
//!
//! let store = DictionaryStore::open("dictionary.json", "curated/").unwrap();
//! let raw = store.get(Rank::new(1).unwrap()).unwrap();
//!
//! let curated = Curator::new().curate(&raw);
//! println!("{}: {} word types", curated.title, curated.types.len());
//! ```

pub mod curation;
pub mod error;
pub mod images;
pub mod record;
pub mod store;

pub use curation::{CurationPolicy, CurationSummary, Curator, SelectionPath};
pub use error::{Result, WordcardError};
pub use images::{CseClient, ImageCandidate, ImageSearch, MockImageSearch};
pub use record::{
    CuratedAudio, CuratedDefinition, CuratedQuotation, CuratedRecord, CuratedWordType, Image,
    RawDefinition, RawRecord, RawWordType, Selectable,
};
pub use store::{DictionaryStore, MediaDownloader, MemoryStore, Rank, RecordStore};
