//! Images attached to a record.

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// An illustration for a word.
///
/// Images come either from the dictionary extraction (Wikimedia files) or
/// from an image search run during review.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub thumb_url: String,

    #[serde(default)]
    pub url: String,

    /// Selected as the card image. Never proposed by the curator.
    #[serde(default)]
    pub include: bool,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Image {
    /// Create an image entry.
    pub fn new(
        description: impl Into<String>,
        filename: impl Into<String>,
        thumb_url: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            filename: filename.into(),
            thumb_url: thumb_url.into(),
            url: url.into(),
            include: false,
            extra: ExtraFields::new(),
        }
    }
}
