//! Curated records: raw records with selection metadata.

use serde::{Deserialize, Serialize};

use super::ExtraFields;
use super::image::Image;

/// A text item with an include proposal (synonyms, translations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectable {
    pub text: String,
    pub include: bool,
}

impl Selectable {
    pub fn new(text: impl Into<String>, include: bool) -> Self {
        Self {
            text: text.into(),
            include,
        }
    }
}

/// Audio pronunciation, proposed for inclusion whenever present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedAudio {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub include: bool,
}

/// A quotation illustrating a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedQuotation {
    pub text: String,

    pub include: bool,

    /// Request a "fill the gap" card built from this quotation.
    #[serde(default)]
    pub card_sample: bool,
}

/// A definition with its include proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedDefinition {
    pub text: String,

    pub include: bool,

    /// Absent when the raw definition had no quotations (or an empty list).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotations: Option<Vec<CuratedQuotation>>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl CuratedDefinition {
    /// Keys serialized by the definition's own fields.
    pub const FIELDS: &'static [&'static str] = &["text", "include", "quotations"];

    /// The quotations, empty when the key is absent.
    pub fn quotations(&self) -> &[CuratedQuotation] {
        self.quotations.as_deref().unwrap_or_default()
    }

    /// The included quotations.
    pub fn included_quotations(&self) -> impl Iterator<Item = &CuratedQuotation> {
        self.quotations().iter().filter(|q| q.include)
    }
}

/// A retained word type (one with at least one definition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedWordType {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub definitions: Vec<CuratedDefinition>,

    pub include: bool,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl CuratedWordType {
    /// Keys serialized by the word type's own fields.
    pub const FIELDS: &'static [&'static str] = &["type", "definitions", "include"];
}

/// A record after curation, ready for human review.
///
/// Produced by [`Curator::curate`](crate::Curator::curate). The reviewer
/// flips `include` and `card_*` flags in place (see
/// [`CuratedRecord::set_include`]) before the record is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedRecord {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<CuratedAudio>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,

    #[serde(default)]
    pub types: Vec<CuratedWordType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<Selectable>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<Selectable>>,

    /// Request a translation card. Set by the curator iff translations exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_translate: Option<bool>,

    #[serde(default)]
    pub images: Vec<Image>,

    /// Request an image card.
    #[serde(default)]
    pub card_image: bool,

    /// Consumers must deep-copy this document before mutating it.
    #[serde(rename = "copyByValue", default = "default_copy_by_value")]
    pub copy_by_value: bool,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

fn default_copy_by_value() -> bool {
    true
}

impl CuratedRecord {
    /// Keys serialized by the record's own fields.
    pub const FIELDS: &'static [&'static str] = &[
        "title",
        "rank",
        "ipa",
        "audio",
        "audio_url",
        "types",
        "synonyms",
        "translations",
        "card_translate",
        "images",
        "card_image",
        "copyByValue",
    ];

    /// Iterate over all definitions of all retained types.
    pub fn definitions(&self) -> impl Iterator<Item = &CuratedDefinition> {
        self.types.iter().flat_map(|t| t.definitions.iter())
    }

    /// URL of the first image selected by the reviewer.
    pub fn selected_image_url(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|image| image.include)
            .map(|image| image.url.as_str())
    }

    /// URL of the audio file, if audio is included.
    pub fn selected_audio_url(&self) -> Option<&str> {
        self.audio
            .as_ref()
            .filter(|audio| audio.include)
            .and_then(|audio| audio.url.as_deref())
    }

    /// `<rank>-<title>`, the base name of every file saved for this record.
    ///
    /// Uses the rank carried by the record, falling back to `fallback_rank`.
    /// Path separators and control characters of the title are replaced by
    /// `_`, so the name is always one path component.
    pub fn descriptive_name(&self, fallback_rank: u32) -> String {
        let title: String = self
            .title
            .chars()
            .map(|c| match c {
                '/' | '\\' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        format!("{}-{}", self.rank.unwrap_or(fallback_rank), title)
    }
}
