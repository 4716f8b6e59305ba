//! Dictionary record data model.
//!
//! A [`RawRecord`] is one headword entry as produced by the dictionary
//! extraction. A [`CuratedRecord`] has the same shape with selection
//! metadata (`include`, `card_*` flags) attached at every curatable level.
//!
//! Fields the model does not know about are kept in an ordered `extra` map
//! at each level, so a curated document round-trips everything the raw
//! entry carried.

mod curated;
mod image;
mod raw;

pub use curated::{
    CuratedAudio, CuratedDefinition, CuratedQuotation, CuratedRecord, CuratedWordType, Selectable,
};
pub use image::Image;
pub use raw::{RawDefinition, RawRecord, RawWordType};

/// Unknown fields preserved in document order.
pub type ExtraFields = indexmap::IndexMap<String, serde_json::Value>;

/// Copy of `extra` without the keys in `fields`.
///
/// A curated level serializes its own fields next to the flattened extra
/// map, so an extra key named like one of them would be written twice.
pub(crate) fn extra_without(extra: &ExtraFields, fields: &[&str]) -> ExtraFields {
    extra
        .iter()
        .filter(|(key, _)| !fields.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
