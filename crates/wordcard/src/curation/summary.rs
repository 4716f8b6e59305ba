//! Counts of proposed card content for a curated record.

use serde::{Deserialize, Serialize};

use crate::record::{CuratedRecord, Selectable};

/// Included items out of all items of one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCount {
    pub included: usize,
    pub total: usize,
}

impl SelectionCount {
    fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        flags.into_iter().fold(Self::default(), |mut count, include| {
            count.total += 1;
            if include {
                count.included += 1;
            }
            count
        })
    }

    fn from_selectables(items: Option<&Vec<Selectable>>) -> Self {
        Self::from_flags(items.into_iter().flatten().map(|item| item.include))
    }
}

/// Summary of what a curated record currently proposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationSummary {
    pub title: String,
    pub audio: bool,
    pub types: SelectionCount,
    pub definitions: SelectionCount,
    pub quotations: SelectionCount,
    pub synonyms: SelectionCount,
    pub translations: SelectionCount,
    pub images: SelectionCount,
    pub card_translate: bool,
    pub card_image: bool,
    /// Quotations flagged for a "fill the gap" card.
    pub card_samples: usize,
}

impl CurationSummary {
    /// Summarize a curated record.
    pub fn from_record(record: &CuratedRecord) -> Self {
        let quotations = || record.definitions().flat_map(|d| d.quotations().iter());

        Self {
            title: record.title.clone(),
            audio: record.audio.as_ref().is_some_and(|a| a.include),
            types: SelectionCount::from_flags(record.types.iter().map(|t| t.include)),
            definitions: SelectionCount::from_flags(record.definitions().map(|d| d.include)),
            quotations: SelectionCount::from_flags(quotations().map(|q| q.include)),
            synonyms: SelectionCount::from_selectables(record.synonyms.as_ref()),
            translations: SelectionCount::from_selectables(record.translations.as_ref()),
            images: SelectionCount::from_flags(record.images.iter().map(|i| i.include)),
            card_translate: record.card_translate.unwrap_or(false),
            card_image: record.card_image,
            card_samples: quotations().filter(|q| q.card_sample).count(),
        }
    }

    /// Whether anything at all is proposed for a card.
    pub fn has_content(&self) -> bool {
        self.definitions.included > 0
            || self.synonyms.included > 0
            || self.translations.included > 0
            || self.images.included > 0
            || self.audio
    }
}
