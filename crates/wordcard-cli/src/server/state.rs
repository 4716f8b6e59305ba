//! Application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use wordcard::{CuratedRecord, Curator, ImageSearch, Rank, RecordStore};

/// The record currently open in the review page.
#[derive(Debug, Clone)]
pub struct Review {
    pub rank: Rank,
    pub record: CuratedRecord,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Source of raw records and sink of curated ones.
    pub store: Arc<RwLock<Box<dyn RecordStore>>>,
    /// Record under review, edited by selection overrides.
    pub current: Arc<RwLock<Option<Review>>>,
    pub curator: Arc<Curator>,
    /// If None, image augmentation is disabled.
    pub image_search: Option<Arc<dyn ImageSearch>>,
    /// Directory receiving curated documents and media.
    pub output_dir: PathBuf,
    /// Download the selected media after each save.
    pub download_media: bool,
}

impl AppState {
    pub fn new(store: impl RecordStore + 'static, curator: Curator, output_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(RwLock::new(Box::new(store))),
            current: Arc::new(RwLock::new(None)),
            curator: Arc::new(curator),
            image_search: None,
            output_dir,
            download_media: false,
        }
    }

    pub fn with_image_search(mut self, search: Arc<dyn ImageSearch>) -> Self {
        self.image_search = Some(search);
        self
    }

    pub fn with_media_download(mut self, enabled: bool) -> Self {
        self.download_media = enabled;
        self
    }

    /// Name of the configured image search (for display).
    pub fn image_search_name(&self) -> Option<&str> {
        self.image_search.as_deref().map(|search| search.name())
    }
}
