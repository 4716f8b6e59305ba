//! Download of the media selected for a curated record.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::ImageFormat;
use image::imageops::FilterType;
use reqwest::blocking::Client;
use tracing::info;

use crate::error::{Result, WordcardError};
use crate::record::CuratedRecord;

use super::rank::Rank;

/// Downloads the selected image and audio of a record next to its document.
pub struct MediaDownloader {
    client: Client,
}

impl MediaDownloader {
    /// Create a downloader with a 60 second timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| WordcardError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Download the selected image and audio into `dir`.
    ///
    /// Files are named `<rank>-<title>.<ext>`; the image also gets a
    /// `<rank>-<title>-thumb.jpg` thumbnail (see [`write_thumbnail`]). A file
    /// that already exists is not downloaded again. Returns the paths of the
    /// media files.
    pub fn save_media(
        &self,
        rank: Rank,
        record: &CuratedRecord,
        dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let name = record.descriptive_name(rank.get());

        let mut saved = Vec::new();
        if let Some(url) = record.selected_image_url() {
            let path = dir.join(media_filename(&name, url)?);
            self.download(url, &path)?;

            let thumbnail = dir.join(format!("{}-thumb.jpg", name));
            write_thumbnail(&path, &thumbnail)?;

            saved.push(path);
            saved.push(thumbnail);
        }

        if let Some(url) = record.selected_audio_url() {
            let path = dir.join(media_filename(&name, url)?);
            self.download(url, &path)?;
            saved.push(path);
        }

        Ok(saved)
    }

    fn download(&self, url: &str, path: &Path) -> Result<()> {
        if path.exists() {
            info!(path = %path.display(), "file already exists, not downloading");
            return Ok(());
        }

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| WordcardError::Download(format!("Request to '{}' failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(WordcardError::Download(format!(
                "Download of '{}' failed ({})",
                url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| WordcardError::Download(format!("Failed to read '{}': {}", url, e)))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| WordcardError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, &bytes).map_err(|e| WordcardError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!(path = %path.display(), bytes = bytes.len(), "downloaded file");
        Ok(())
    }
}

/// Widest thumbnail written by [`write_thumbnail`].
pub const MAX_THUMBNAIL_WIDTH: u32 = 400;

/// Write a JPEG copy of the picture at `original`, scaled down to at most
/// [`MAX_THUMBNAIL_WIDTH`] pixels wide. Narrower pictures keep their size.
pub fn write_thumbnail(original: &Path, thumbnail: &Path) -> Result<()> {
    let picture = image::open(original).map_err(|e| {
        WordcardError::Image(format!("Failed to read '{}': {}", original.display(), e))
    })?;

    let (width, height) = (picture.width(), picture.height());
    let picture = if width > MAX_THUMBNAIL_WIDTH {
        let scaled_height = (u64::from(height) * u64::from(MAX_THUMBNAIL_WIDTH) / u64::from(width))
            .max(1) as u32;
        picture.resize_exact(MAX_THUMBNAIL_WIDTH, scaled_height, FilterType::Triangle)
    } else {
        picture
    };

    // JPEG has no alpha channel
    picture
        .to_rgb8()
        .save_with_format(thumbnail, ImageFormat::Jpeg)
        .map_err(|e| {
            WordcardError::Image(format!("Failed to write '{}': {}", thumbnail.display(), e))
        })?;

    info!(
        path = %thumbnail.display(),
        width = picture.width(),
        height = picture.height(),
        "wrote thumbnail"
    );
    Ok(())
}

/// File extension of a media URL: the part of the last path segment after its
/// last `.`, ignoring any query string.
///
/// ```
/// use wordcard::store::media_extension;
///
/// assert_eq!(media_extension("http://example.org/a/House.JPG?width=100"), Some("JPG"));
/// assert_eq!(media_extension("http://example.org/audio"), None);
/// ```
pub fn media_extension(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);

    segment
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

fn media_filename(name: &str, url: &str) -> Result<String> {
    let extension = media_extension(url)
        .ok_or_else(|| WordcardError::Download(format!("No file extension in '{}'", url)))?;
    Ok(format!("{}.{}", name, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::Curator;
    use crate::record::{Image, RawRecord};

    #[test]
    fn test_media_extension() {
        assert_eq!(
            media_extension("http://upload.wikimedia.org/wikipedia/commons/a/a1/En-us-house.ogg"),
            Some("ogg")
        );
        assert_eq!(media_extension("http://example.org/p.tar.gz"), Some("gz"));
        assert_eq!(media_extension("http://example.org/dir.d/file"), None);
        assert_eq!(media_extension("http://example.org/file."), None);
    }

    #[test]
    fn test_media_filename() {
        assert_eq!(
            media_filename("42-house", "http://example.org/House.jpg?x=1").unwrap(),
            "42-house.jpg"
        );
        assert!(media_filename("42-house", "http://example.org/house").is_err());
    }

    fn write_picture(path: &Path, width: u32, height: u32) {
        image::RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_thumbnail_is_scaled_to_max_width() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("1-house.png");
        let thumbnail = dir.path().join("1-house-thumb.jpg");
        write_picture(&original, 800, 300);

        write_thumbnail(&original, &thumbnail).unwrap();

        let written = image::open(&thumbnail).unwrap();
        assert_eq!((written.width(), written.height()), (400, 150));
        assert_eq!(
            image::ImageFormat::from_path(&thumbnail).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_narrow_picture_keeps_its_size() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("2-car.png");
        let thumbnail = dir.path().join("2-car-thumb.jpg");
        write_picture(&original, 120, 90);

        write_thumbnail(&original, &thumbnail).unwrap();

        let written = image::open(&thumbnail).unwrap();
        assert_eq!((written.width(), written.height()), (120, 90));
    }

    #[test]
    fn test_thumbnail_of_unreadable_picture() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("3-run.jpg");
        fs::write(&original, b"not a picture").unwrap();

        let err = write_thumbnail(&original, &dir.path().join("3-run-thumb.jpg")).unwrap_err();
        assert!(matches!(err, WordcardError::Image(_)));
    }

    #[test]
    fn test_existing_image_gets_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("1-house.png");
        write_picture(&original, 600, 600);

        // The URL is unreachable; the existing file short-circuits the request.
        let picture = Image::new("A house", "house.png", "t", "http://127.0.0.1:9/house.png");
        let raw = RawRecord::new("house").with_images(vec![picture]);
        let mut curated = Curator::new().curate(&raw);
        curated.images[0].include = true;

        let saved = MediaDownloader::new()
            .unwrap()
            .save_media(Rank::FIRST, &curated, dir.path())
            .unwrap();

        let thumbnail = dir.path().join("1-house-thumb.jpg");
        assert_eq!(saved, vec![original, thumbnail.clone()]);
        assert_eq!(image::open(&thumbnail).unwrap().width(), 400);
    }

    #[test]
    fn test_nothing_selected_downloads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let curated = Curator::new().curate(&RawRecord::new("house"));

        let saved = MediaDownloader::new()
            .unwrap()
            .save_media(Rank::FIRST, &curated, dir.path())
            .unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn test_existing_file_is_not_downloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1-house.ogg");
        fs::write(&path, b"cached").unwrap();

        // The URL is unreachable; the existing file short-circuits the request.
        let raw = RawRecord::new("house").with_audio("house.ogg", "http://127.0.0.1:9/house.ogg");
        let curated = Curator::new().curate(&raw);

        let saved = MediaDownloader::new()
            .unwrap()
            .save_media(Rank::FIRST, &curated, dir.path())
            .unwrap();

        assert_eq!(saved, vec![path.clone()]);
        assert_eq!(fs::read(&path).unwrap(), b"cached");
    }
}
