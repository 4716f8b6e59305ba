//! Image search for illustrating curated records.
//!
//! Image search runs after curation, on demand during review. Results are
//! appended to the record's `images` without being selected; the reviewer
//! picks one by setting its `include` flag.

mod cse;
mod mock;

pub use cse::CseClient;
pub use mock::MockImageSearch;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{CuratedRecord, Image};

/// One image search result, in the Google Custom Search item shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageCandidate {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub image: ImageMetadata,
}

/// Image details of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    #[serde(default)]
    pub thumbnail_link: String,
}

impl ImageCandidate {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        thumbnail_link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            image: ImageMetadata {
                thumbnail_link: thumbnail_link.into(),
            },
        }
    }

    /// Last path segment of the link.
    pub fn filename(&self) -> &str {
        self.link.rsplit('/').next().unwrap_or(&self.link)
    }

    /// Convert into a record image, not selected.
    pub fn to_image(&self) -> Image {
        Image::new(
            self.title.clone(),
            self.filename(),
            self.image.thumbnail_link.clone(),
            self.link.clone(),
        )
    }
}

/// A source of images for a search term.
pub trait ImageSearch: Send + Sync {
    /// Name of the search backend (for display).
    fn name(&self) -> &str;

    /// Search images for `term`, best results first.
    fn search(&self, term: &str) -> Result<Vec<ImageCandidate>>;
}

impl CuratedRecord {
    /// Append search results to `images`, in order.
    pub fn append_image_candidates(&mut self, candidates: &[ImageCandidate]) {
        self.images
            .extend(candidates.iter().map(ImageCandidate::to_image));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::Curator;
    use crate::record::RawRecord;

    #[test]
    fn test_candidate_to_image() {
        let candidate = ImageCandidate::new(
            "Small house in the woods",
            "http://example.org/photos/house-01.jpg",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:abc",
        );
        let image = candidate.to_image();

        assert_eq!(image.description, "Small house in the woods");
        assert_eq!(image.filename, "house-01.jpg");
        assert_eq!(image.thumb_url, "https://encrypted-tbn0.gstatic.com/images?q=tbn:abc");
        assert_eq!(image.url, "http://example.org/photos/house-01.jpg");
        assert!(!image.include);
    }

    #[test]
    fn test_append_keeps_existing_images() {
        let existing = Image::new("drawing", "House.png", "t", "http://example.org/House.png");
        let raw = RawRecord::new("house").with_images(vec![existing.clone()]);
        let mut curated = Curator::new().curate(&raw);

        curated.append_image_candidates(&[
            ImageCandidate::new("one", "http://example.org/1.jpg", "t1"),
            ImageCandidate::new("two", "http://example.org/2.jpg", "t2"),
        ]);

        assert_eq!(curated.images.len(), 3);
        assert_eq!(curated.images[0], existing);
        assert_eq!(curated.images[2].filename, "2.jpg");
        assert!(!curated.card_image);
    }

    #[test]
    fn test_deserialize_search_item() {
        let json = r#"{
            "kind": "customsearch#result",
            "title": "House - Wikipedia",
            "link": "https://upload.wikimedia.org/wikipedia/commons/House.jpg",
            "image": {"contextLink": "https://en.wikipedia.org/wiki/House", "thumbnailLink": "https://t.example/1"}
        }"#;

        let candidate: ImageCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.filename(), "House.jpg");
        assert_eq!(candidate.image.thumbnail_link, "https://t.example/1");
    }
}
