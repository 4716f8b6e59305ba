//! Mock image search for testing.

use std::collections::HashMap;

use crate::error::{Result, WordcardError};

use super::{ImageCandidate, ImageSearch};

/// Image search returning canned results.
///
/// Terms without canned results get one generated candidate per term, so
/// tests can exercise augmentation without configuring anything.
#[derive(Debug, Clone, Default)]
pub struct MockImageSearch {
    results: HashMap<String, Vec<ImageCandidate>>,
    failing: bool,
}

impl MockImageSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register results for a term.
    pub fn with_results(mut self, term: impl Into<String>, results: Vec<ImageCandidate>) -> Self {
        self.results.insert(term.into(), results);
        self
    }

    /// Make every search fail.
    pub fn failing() -> Self {
        Self {
            results: HashMap::new(),
            failing: true,
        }
    }
}

impl ImageSearch for MockImageSearch {
    fn name(&self) -> &str {
        "mock"
    }

    fn search(&self, term: &str) -> Result<Vec<ImageCandidate>> {
        if self.failing {
            return Err(WordcardError::ImageSearch(format!(
                "mock search failed for '{}'",
                term
            )));
        }

        if let Some(results) = self.results.get(term) {
            return Ok(results.clone());
        }

        Ok(vec![ImageCandidate::new(
            format!("A picture of {}", term),
            format!("http://images.example.org/{}.jpg", term),
            format!("http://images.example.org/thumbs/{}.jpg", term),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_result() {
        let results = MockImageSearch::new().search("house").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].filename(), "house.jpg");
    }

    #[test]
    fn test_canned_results() {
        let search = MockImageSearch::new().with_results("house", Vec::new());
        assert!(search.search("house").unwrap().is_empty());
        assert_eq!(search.search("car").unwrap().len(), 1);
    }

    #[test]
    fn test_failing() {
        assert!(MockImageSearch::failing().search("house").is_err());
    }
}
