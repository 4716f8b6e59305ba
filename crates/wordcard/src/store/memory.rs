//! In-memory record store.

use std::collections::BTreeMap;

use crate::error::{Result, WordcardError};
use crate::record::{CuratedRecord, RawRecord};

use super::rank::Rank;
use super::RecordStore;

/// Vector-backed store that keeps saved records in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<RawRecord>,
    saved: BTreeMap<Rank, CuratedRecord>,
}

impl MemoryStore {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            saved: BTreeMap::new(),
        }
    }

    /// The last record saved for `rank`.
    pub fn saved(&self, rank: Rank) -> Option<&CuratedRecord> {
        self.saved.get(&rank)
    }

    /// Number of ranks with a saved record.
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    fn check(&self, rank: Rank) -> Result<()> {
        if rank.index() < self.records.len() {
            Ok(())
        } else {
            Err(WordcardError::RankOutOfRange {
                rank: rank.get(),
                total: self.records.len(),
            })
        }
    }
}

impl RecordStore for MemoryStore {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, rank: Rank) -> Result<RawRecord> {
        self.check(rank)?;
        Ok(self.records[rank.index()].clone())
    }

    fn put(&mut self, rank: Rank, record: &CuratedRecord) -> Result<()> {
        self.check(rank)?;
        self.saved.insert(rank, record.clone());
        Ok(())
    }
}
