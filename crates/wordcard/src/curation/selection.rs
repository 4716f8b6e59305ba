//! Reviewer overrides of curated proposals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordcardError};
use crate::record::{CuratedDefinition, CuratedQuotation, CuratedRecord};

/// Address of one flag inside a [`CuratedRecord`].
///
/// Indices refer to the curated record, so `type_index` counts retained
/// word types only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionPath {
    Audio,
    WordType {
        type_index: usize,
    },
    Definition {
        type_index: usize,
        definition_index: usize,
    },
    Quotation {
        type_index: usize,
        definition_index: usize,
        quotation_index: usize,
    },
    /// The "fill the gap" card flag of a quotation.
    CardSample {
        type_index: usize,
        definition_index: usize,
        quotation_index: usize,
    },
    Synonym {
        index: usize,
    },
    Translation {
        index: usize,
    },
    Image {
        index: usize,
    },
    CardTranslate,
    CardImage,
}

impl fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPath::Audio => write!(f, "audio"),
            SelectionPath::WordType { type_index } => write!(f, "types[{}]", type_index),
            SelectionPath::Definition {
                type_index,
                definition_index,
            } => write!(f, "types[{}].definitions[{}]", type_index, definition_index),
            SelectionPath::Quotation {
                type_index,
                definition_index,
                quotation_index,
            } => write!(
                f,
                "types[{}].definitions[{}].quotations[{}]",
                type_index, definition_index, quotation_index
            ),
            SelectionPath::CardSample {
                type_index,
                definition_index,
                quotation_index,
            } => write!(
                f,
                "types[{}].definitions[{}].quotations[{}].card_sample",
                type_index, definition_index, quotation_index
            ),
            SelectionPath::Synonym { index } => write!(f, "synonyms[{}]", index),
            SelectionPath::Translation { index } => write!(f, "translations[{}]", index),
            SelectionPath::Image { index } => write!(f, "images[{}]", index),
            SelectionPath::CardTranslate => write!(f, "card_translate"),
            SelectionPath::CardImage => write!(f, "card_image"),
        }
    }
}

impl CuratedRecord {
    /// Set the flag addressed by `path`.
    ///
    /// Overrides are not checked against the curator's rules: a reviewer may
    /// include an outdated definition or several quotations. A path that
    /// addresses nothing returns [`WordcardError::NotFound`] and leaves the
    /// record unchanged.
    pub fn set_include(&mut self, path: &SelectionPath, include: bool) -> Result<()> {
        let title = self.title.clone();
        let not_found = || WordcardError::NotFound(format!("{} in '{}'", path, title));

        match *path {
            SelectionPath::Audio => {
                let audio = self.audio.as_mut().ok_or_else(not_found)?;
                audio.include = include;
            }
            SelectionPath::WordType { type_index } => {
                let word_type = self.types.get_mut(type_index).ok_or_else(not_found)?;
                word_type.include = include;
            }
            SelectionPath::Definition {
                type_index,
                definition_index,
            } => {
                let definition =
                    definition_mut(self, type_index, definition_index).ok_or_else(not_found)?;
                definition.include = include;
            }
            SelectionPath::Quotation {
                type_index,
                definition_index,
                quotation_index,
            } => {
                let quotation = quotation_mut(self, type_index, definition_index, quotation_index)
                    .ok_or_else(not_found)?;
                quotation.include = include;
            }
            SelectionPath::CardSample {
                type_index,
                definition_index,
                quotation_index,
            } => {
                let quotation = quotation_mut(self, type_index, definition_index, quotation_index)
                    .ok_or_else(not_found)?;
                quotation.card_sample = include;
            }
            SelectionPath::Synonym { index } => {
                let synonym = self
                    .synonyms
                    .as_mut()
                    .and_then(|s| s.get_mut(index))
                    .ok_or_else(not_found)?;
                synonym.include = include;
            }
            SelectionPath::Translation { index } => {
                let translation = self
                    .translations
                    .as_mut()
                    .and_then(|t| t.get_mut(index))
                    .ok_or_else(not_found)?;
                translation.include = include;
            }
            SelectionPath::Image { index } => {
                let image = self.images.get_mut(index).ok_or_else(not_found)?;
                image.include = include;
            }
            SelectionPath::CardTranslate => self.card_translate = Some(include),
            SelectionPath::CardImage => self.card_image = include,
        }

        Ok(())
    }

    /// Read the flag addressed by `path`, `None` if it addresses nothing.
    pub fn include_at(&self, path: &SelectionPath) -> Option<bool> {
        match *path {
            SelectionPath::Audio => self.audio.as_ref().map(|a| a.include),
            SelectionPath::WordType { type_index } => self.types.get(type_index).map(|t| t.include),
            SelectionPath::Definition {
                type_index,
                definition_index,
            } => self
                .types
                .get(type_index)
                .and_then(|t| t.definitions.get(definition_index))
                .map(|d| d.include),
            SelectionPath::Quotation {
                type_index,
                definition_index,
                quotation_index,
            } => quotation_ref(self, type_index, definition_index, quotation_index).map(|q| q.include),
            SelectionPath::CardSample {
                type_index,
                definition_index,
                quotation_index,
            } => quotation_ref(self, type_index, definition_index, quotation_index).map(|q| q.card_sample),
            SelectionPath::Synonym { index } => self
                .synonyms
                .as_ref()
                .and_then(|s| s.get(index))
                .map(|s| s.include),
            SelectionPath::Translation { index } => self
                .translations
                .as_ref()
                .and_then(|t| t.get(index))
                .map(|t| t.include),
            SelectionPath::Image { index } => self.images.get(index).map(|i| i.include),
            SelectionPath::CardTranslate => self.card_translate,
            SelectionPath::CardImage => Some(self.card_image),
        }
    }
}

fn definition_mut(
    record: &mut CuratedRecord,
    type_index: usize,
    definition_index: usize,
) -> Option<&mut CuratedDefinition> {
    record
        .types
        .get_mut(type_index)?
        .definitions
        .get_mut(definition_index)
}

fn quotation_ref(
    record: &CuratedRecord,
    type_index: usize,
    definition_index: usize,
    quotation_index: usize,
) -> Option<&CuratedQuotation> {
    record
        .types
        .get(type_index)?
        .definitions
        .get(definition_index)?
        .quotations
        .as_ref()?
        .get(quotation_index)
}

fn quotation_mut(
    record: &mut CuratedRecord,
    type_index: usize,
    definition_index: usize,
    quotation_index: usize,
) -> Option<&mut CuratedQuotation> {
    definition_mut(record, type_index, definition_index)?
        .quotations
        .as_mut()?
        .get_mut(quotation_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::Curator;
    use crate::record::{RawDefinition, RawRecord, RawWordType};

    fn curated() -> CuratedRecord {
        let raw = RawRecord::new("house")
            .with_audio("house.ogg", "http://example.org/house.ogg")
            .with_type(
                RawWordType::new("Noun").with_definition(
                    RawDefinition::new("An abode.").with_quotations(["a long one here", "short"]),
                ),
            )
            .with_synonyms(["home"])
            .with_translations(["maison"]);
        Curator::new().curate(&raw)
    }

    #[test]
    fn test_toggle_definition() {
        let mut record = curated();
        let path = SelectionPath::Definition {
            type_index: 0,
            definition_index: 0,
        };

        assert_eq!(record.include_at(&path), Some(true));
        record.set_include(&path, false).unwrap();
        assert_eq!(record.include_at(&path), Some(false));
    }

    #[test]
    fn test_reviewer_can_include_several_quotations() {
        let mut record = curated();
        let first = SelectionPath::Quotation {
            type_index: 0,
            definition_index: 0,
            quotation_index: 0,
        };

        record.set_include(&first, true).unwrap();
        assert_eq!(record.types[0].definitions[0].included_quotations().count(), 2);
    }

    #[test]
    fn test_card_flags() {
        let mut record = curated();

        record.set_include(&SelectionPath::CardTranslate, false).unwrap();
        record.set_include(&SelectionPath::CardImage, true).unwrap();
        record
            .set_include(
                &SelectionPath::CardSample {
                    type_index: 0,
                    definition_index: 0,
                    quotation_index: 1,
                },
                true,
            )
            .unwrap();

        assert_eq!(record.card_translate, Some(false));
        assert!(record.card_image);
        assert!(record.types[0].definitions[0].quotations()[1].card_sample);
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let mut record = curated();
        let before = record.clone();

        let err = record
            .set_include(&SelectionPath::Image { index: 0 }, true)
            .unwrap_err();
        assert!(matches!(err, WordcardError::NotFound(_)));
        assert_eq!(record, before);

        let err = record
            .set_include(&SelectionPath::WordType { type_index: 5 }, true)
            .unwrap_err();
        assert!(err.to_string().contains("types[5]"));
    }

    #[test]
    fn test_path_json_shape() {
        let path: SelectionPath =
            serde_json::from_str(r#"{"kind": "synonym", "index": 0}"#).unwrap();
        assert_eq!(path, SelectionPath::Synonym { index: 0 });

        let json = serde_json::to_value(SelectionPath::CardImage).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "card_image"}));
    }
}
