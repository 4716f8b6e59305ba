//! CLI command implementations.

pub mod curate;
pub mod images;
pub mod review;
pub mod show;
pub mod status;

use std::path::Path;

use tracing::debug;
use wordcard::{CurationPolicy, Curator};

/// Build the curator, with the policy file if one was given.
pub fn load_curator(config: Option<&Path>) -> Result<Curator, wordcard::WordcardError> {
    match config {
        Some(path) => {
            let policy = CurationPolicy::load(path)?;
            debug!(path = %path.display(), ?policy, "loaded curation policy");
            Ok(Curator::with_policy(policy))
        }
        None => Ok(Curator::new()),
    }
}
