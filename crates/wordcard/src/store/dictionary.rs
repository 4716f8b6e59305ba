//! Dictionary file store.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, WordcardError};
use crate::record::{CuratedRecord, RawRecord};

use super::persistence::save_curated;
use super::rank::Rank;
use super::RecordStore;

/// Record store backed by a JSON dictionary file.
///
/// The dictionary is a JSON array of raw records; the record at rank `n`
/// is element `n - 1`. Curated records are written to `output_dir`, one
/// document per record, named after [`CuratedRecord::descriptive_name`].
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    records: Vec<RawRecord>,
    output_dir: PathBuf,
}

impl DictionaryStore {
    /// Load the dictionary file.
    pub fn open(dictionary: impl AsRef<Path>, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let path = dictionary.as_ref();

        let file = File::open(path).map_err(|e| WordcardError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let records: Vec<RawRecord> = serde_json::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), records = records.len(), "loaded dictionary");

        Ok(Self::from_records(records, output_dir))
    }

    /// Build a store from records already in memory.
    pub fn from_records(records: Vec<RawRecord>, output_dir: impl Into<PathBuf>) -> Self {
        let records = records.into_iter().map(normalize).collect();
        Self {
            records,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the curated document saved for `record` at `rank`.
    pub fn document_path(&self, rank: Rank, record: &CuratedRecord) -> PathBuf {
        self.output_dir
            .join(format!("{}.json", record.descriptive_name(rank.get())))
    }
}

impl RecordStore for DictionaryStore {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, rank: Rank) -> Result<RawRecord> {
        self.records
            .get(rank.index())
            .cloned()
            .ok_or(WordcardError::RankOutOfRange {
                rank: rank.get(),
                total: self.records.len(),
            })
    }

    fn put(&mut self, rank: Rank, record: &CuratedRecord) -> Result<()> {
        if rank.index() >= self.records.len() {
            return Err(WordcardError::RankOutOfRange {
                rank: rank.get(),
                total: self.records.len(),
            });
        }

        debug!(%rank, title = %record.title, "saving curated record");
        save_curated(&self.output_dir, &record.descriptive_name(rank.get()), record)?;
        Ok(())
    }
}

/// Correct known defects of the extracted dictionary.
fn normalize(mut record: RawRecord) -> RawRecord {
    // Several transcriptions (`/kɑɹ/ /kɑː/`): keep the first one.
    if let Some(ipa) = record.ipa.as_mut() {
        if let Some(second_slash) = ipa.get(1..).and_then(|rest| rest.find('/')) {
            let end = second_slash + 2;
            if end < ipa.len() {
                ipa.truncate(end);
            }
        }
    }

    // Thumbnails are extracted at 600px, wider than most source pictures.
    if let Some(images) = record.images.as_mut() {
        for image in images {
            image.thumb_url = image.thumb_url.replace("600px", "100px");
        }
    }

    record
}
