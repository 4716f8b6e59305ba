//! Curation of dictionary records.
//!
//! The [`Curator`] turns a [`RawRecord`](crate::RawRecord) into a
//! [`CuratedRecord`](crate::CuratedRecord) carrying default `include`
//! proposals. A reviewer then overrides individual proposals through
//! [`SelectionPath`]s before the record is saved.
//!
//! # Usage
//!
//! ```
//! use wordcard::{Curator, RawDefinition, RawRecord, RawWordType, SelectionPath};
//!
//! let raw = RawRecord::new("house").with_type(
//!     RawWordType::new("Noun")
//!         .with_definition(RawDefinition::new("A structure serving as an abode.")),
//! );
//!
//! let mut curated = Curator::new().curate(&raw);
//! assert!(curated.types[0].definitions[0].include);
//!
//! // The reviewer rejects the definition
//! curated
//!     .set_include(&SelectionPath::Definition { type_index: 0, definition_index: 0 }, false)
//!     .unwrap();
//! ```

mod curator;
mod policy;
mod selection;
mod summary;

pub use curator::Curator;
pub use policy::CurationPolicy;
pub use selection::SelectionPath;
pub use summary::{CurationSummary, SelectionCount};
