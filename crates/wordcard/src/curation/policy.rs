//! Limits applied when proposing card content.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordcardError};

/// Defaults: 3 word types, 3 definitions per type, 10 synonyms, 6 translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurationPolicy {
    /// Definitions are only proposed in the first `max_types` word types,
    /// counted before empty types are dropped.
    pub max_types: usize,

    /// Definitions proposed per word type.
    pub max_definitions_per_type: usize,

    pub max_synonyms: usize,

    pub max_translations: usize,

    /// Case-sensitive substrings marking a definition as outdated.
    pub outdated_markers: Vec<String>,
}

impl Default for CurationPolicy {
    fn default() -> Self {
        Self {
            max_types: 3,
            max_definitions_per_type: 3,
            max_synonyms: 10,
            max_translations: 6,
            outdated_markers: vec!["archaic".to_string(), "dated".to_string()],
        }
    }
}

impl CurationPolicy {
    /// Create the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_types(mut self, max_types: usize) -> Self {
        self.max_types = max_types;
        self
    }

    pub fn with_max_definitions_per_type(mut self, max: usize) -> Self {
        self.max_definitions_per_type = max;
        self
    }

    pub fn with_max_synonyms(mut self, max: usize) -> Self {
        self.max_synonyms = max;
        self
    }

    pub fn with_max_translations(mut self, max: usize) -> Self {
        self.max_translations = max;
        self
    }

    /// Replace the outdated markers.
    pub fn with_outdated_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outdated_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Load a policy from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| WordcardError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            WordcardError::Config(format!(
                "Invalid curation policy '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
