//! The curator: default include proposals for a raw record.

use tracing::debug;

use crate::record::{
    CuratedAudio, CuratedDefinition, CuratedQuotation, CuratedRecord, CuratedWordType,
    RawDefinition, RawRecord, Selectable, extra_without,
};

use super::policy::CurationPolicy;

/// Derives a [`CuratedRecord`] from a [`RawRecord`].
///
/// Curation is pure: the raw record is only read, and every call allocates
/// a fresh output. Curating the same input twice yields equal records.
#[derive(Debug, Clone, Default)]
pub struct Curator {
    policy: CurationPolicy,
}

impl Curator {
    /// Create a curator with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a curator with a custom policy.
    pub fn with_policy(policy: CurationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CurationPolicy {
        &self.policy
    }

    /// Curate one record.
    pub fn curate(&self, raw: &RawRecord) -> CuratedRecord {
        let audio = raw.audio.as_ref().map(|name| CuratedAudio {
            name: name.clone(),
            url: raw.audio_url.clone(),
            include: true,
        });

        // `type_index` counts every raw type, including the empty ones that are
        // dropped, so an empty type still uses up one of the first `max_types`.
        let types: Vec<CuratedWordType> = raw
            .types
            .iter()
            .enumerate()
            .filter(|(_, word_type)| !word_type.definitions.is_empty())
            .map(|(type_index, word_type)| CuratedWordType {
                kind: word_type.kind.clone(),
                definitions: word_type
                    .definitions
                    .iter()
                    .enumerate()
                    .map(|(definition_index, definition)| {
                        self.curate_definition(type_index, definition_index, definition)
                    })
                    .collect(),
                include: true,
                extra: extra_without(&word_type.extra, CuratedWordType::FIELDS),
            })
            .collect();

        let synonyms = raw
            .synonyms
            .as_ref()
            .map(|synonyms| select_first(synonyms, self.policy.max_synonyms));

        let translations = raw
            .translations
            .as_ref()
            .map(|translations| select_first(translations, self.policy.max_translations));

        let card_translate = raw
            .translations
            .as_ref()
            .filter(|translations| !translations.is_empty())
            .map(|_| true);

        let curated = CuratedRecord {
            title: raw.title.clone(),
            rank: raw.rank,
            ipa: raw.ipa.clone(),
            audio,
            audio_url: raw.audio_url.clone(),
            types,
            synonyms,
            translations,
            card_translate,
            images: raw.images.clone().unwrap_or_default(),
            card_image: false,
            copy_by_value: true,
            extra: extra_without(&raw.extra, CuratedRecord::FIELDS),
        };

        debug!(
            title = %curated.title,
            raw_types = raw.types.len(),
            types = curated.types.len(),
            included_definitions = curated.definitions().filter(|d| d.include).count(),
            "curated record"
        );

        curated
    }

    /// Check whether a definition text is marked as outdated.
    pub fn is_outdated(&self, text: &str) -> bool {
        self.policy
            .outdated_markers
            .iter()
            .any(|marker| text.contains(marker.as_str()))
    }

    fn curate_definition(
        &self,
        type_index: usize,
        definition_index: usize,
        raw: &RawDefinition,
    ) -> CuratedDefinition {
        let include = !self.is_outdated(&raw.text)
            && type_index < self.policy.max_types
            && definition_index < self.policy.max_definitions_per_type;

        let quotations = raw
            .quotations
            .as_ref()
            .filter(|quotations| !quotations.is_empty())
            .map(|quotations| curate_quotations(quotations, include));

        CuratedDefinition {
            text: raw.text.clone(),
            include,
            quotations,
            extra: extra_without(&raw.extra, CuratedDefinition::FIELDS),
        }
    }
}

/// Build the quotation list, including only the shortest one when the
/// definition itself is included.
fn curate_quotations(quotations: &[String], definition_included: bool) -> Vec<CuratedQuotation> {
    // Length in UTF-16 code units.
    // min_by_key keeps the first of several equal minimums.
    let shortest = quotations
        .iter()
        .enumerate()
        .min_by_key(|(_, text)| text.encode_utf16().count())
        .map(|(index, _)| index);

    quotations
        .iter()
        .enumerate()
        .map(|(index, text)| CuratedQuotation {
            text: text.clone(),
            include: definition_included && Some(index) == shortest,
            card_sample: false,
        })
        .collect()
}

fn select_first(items: &[String], limit: usize) -> Vec<Selectable> {
    items
        .iter()
        .enumerate()
        .map(|(index, text)| Selectable::new(text.clone(), index < limit))
        .collect()
}
