//! Record storage keyed by rank.
//!
//! A [`RecordStore`] hands out raw records by their 1-based [`Rank`] and
//! accepts curated records back as a full-document upsert under the same
//! rank. [`DictionaryStore`] reads the JSON dictionary produced by the
//! extraction scripts and writes curated documents to an output directory;
//! [`MemoryStore`] keeps everything in memory.

mod dictionary;
mod media;
mod memory;
mod persistence;
mod rank;

pub use dictionary::DictionaryStore;
pub use media::{MAX_THUMBNAIL_WIDTH, MediaDownloader, media_extension, write_thumbnail};
pub use memory::MemoryStore;
pub use persistence::{curated_documents, history_directory, load_curated, save_curated};
pub use rank::Rank;

use crate::error::Result;
use crate::record::{CuratedRecord, RawRecord};

/// Storage of dictionary records by rank.
pub trait RecordStore: Send + Sync {
    /// Number of records. Valid ranks are `1..=len()`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the raw record at `rank`.
    fn get(&self, rank: Rank) -> Result<RawRecord>;

    /// Save the curated record for `rank`, replacing any previous save.
    fn put(&mut self, rank: Rank, record: &CuratedRecord) -> Result<()>;

    /// Headword at `rank`, for peeking at neighbors without curating them.
    fn title(&self, rank: Rank) -> Result<String> {
        self.get(rank).map(|record| record.title)
    }
}
