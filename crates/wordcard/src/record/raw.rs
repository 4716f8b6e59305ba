//! Raw dictionary records, as read from the record store.

use serde::{Deserialize, Serialize};

use super::ExtraFields;
use super::image::Image;

/// One dictionary headword entry before curation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// The headword.
    pub title: String,

    /// Position of the word in the frequency list, when the extraction recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    /// Pronunciation (IPA).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,

    /// Audio asset identifier (e.g. `en-us-house.ogg`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,

    /// Download URL for `audio`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,

    /// Word types (Noun, Verb, ...) in dictionary order.
    #[serde(default)]
    pub types: Vec<RawWordType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,

    /// Any other field of the entry.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl RawRecord {
    /// Create a record with only a headword.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rank: None,
            ipa: None,
            audio: None,
            audio_url: None,
            types: Vec::new(),
            synonyms: None,
            translations: None,
            images: None,
            extra: ExtraFields::new(),
        }
    }

    /// Set the audio asset and its URL.
    pub fn with_audio(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.audio = Some(name.into());
        self.audio_url = Some(url.into());
        self
    }

    /// Append a word type.
    pub fn with_type(mut self, word_type: RawWordType) -> Self {
        self.types.push(word_type);
        self
    }

    /// Set the synonyms.
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }

    /// Set the translations.
    pub fn with_translations<I, S>(mut self, translations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.translations = Some(translations.into_iter().map(Into::into).collect());
        self
    }

    /// Set the images.
    pub fn with_images(mut self, images: Vec<Image>) -> Self {
        self.images = Some(images);
        self
    }

    /// Total number of definitions across all word types.
    pub fn definition_count(&self) -> usize {
        self.types.iter().map(|t| t.definitions.len()).sum()
    }
}

/// A word type block (part of speech) with its definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWordType {
    /// Part of speech label, e.g. `Noun`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub definitions: Vec<RawDefinition>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl RawWordType {
    /// Create an empty word type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            definitions: Vec::new(),
            extra: ExtraFields::new(),
        }
    }

    /// Append a definition.
    pub fn with_definition(mut self, definition: RawDefinition) -> Self {
        self.definitions.push(definition);
        self
    }
}

/// A single definition, optionally illustrated by quotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDefinition {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotations: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl RawDefinition {
    /// Create a definition without quotations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quotations: None,
            extra: ExtraFields::new(),
        }
    }

    /// Set the quotations.
    pub fn with_quotations<I, S>(mut self, quotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quotations = Some(quotations.into_iter().map(Into::into).collect());
        self
    }
}
