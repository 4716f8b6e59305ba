//! Persistence for curated records - save/load JSON documents.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::error::{Result, WordcardError};
use crate::record::CuratedRecord;

/// Save a curated record as `<dir>/<name>.json`.
///
/// If a document already exists under that name, it is first copied into
/// the history directory with a timestamped file name:
///
/// ```text
/// curated/
/// ├── 42-house.json                       # Current version
/// └── 42-house.history/
///     └── 2024-12-30T10-00-00.json        # Previous version
/// ```
pub fn save_curated(dir: impl AsRef<Path>, name: &str, record: &CuratedRecord) -> Result<PathBuf> {
    let dir = dir.as_ref();
    create_dir(dir)?;

    let path = dir.join(format!("{}.json", name));
    if path.exists() {
        save_to_history(&path)?;
    }

    write_json(&path, record)?;
    info!(path = %path.display(), "saved curated record");

    Ok(path)
}

/// Load a curated record from a JSON file.
pub fn load_curated(path: impl AsRef<Path>) -> Result<CuratedRecord> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        WordcardError::Persistence(format!("Failed to open file '{}': {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        WordcardError::Persistence(format!(
            "Failed to parse curated record '{}': {}",
            path.display(),
            e
        ))
    })
}

/// List the curated documents in an output directory, sorted by file name.
///
/// History directories and non-JSON files are skipped.
pub fn curated_documents(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| {
            WordcardError::Persistence(format!(
                "Failed to read directory '{}': {}",
                dir.display(),
                e
            ))
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    entries.sort();

    Ok(entries)
}

/// Get the history directory for a curated document.
pub fn history_directory(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.history", stem))
}

/// Copy the current file into the history directory.
fn save_to_history(path: &Path) -> Result<()> {
    let history_dir = history_directory(path);
    create_dir(&history_dir)?;

    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
    let history_file = history_dir.join(format!("{}.json", timestamp));

    fs::copy(path, &history_file).map_err(|e| {
        WordcardError::Persistence(format!(
            "Failed to back up '{}' to '{}': {}",
            path.display(),
            history_file.display(),
            e
        ))
    })?;

    Ok(())
}

fn create_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            WordcardError::Persistence(format!(
                "Failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }
    Ok(())
}

fn write_json(path: &Path, record: &CuratedRecord) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        WordcardError::Persistence(format!("Failed to create file '{}': {}", path.display(), e))
    })?;

    serde_json::to_writer_pretty(BufWriter::new(file), record).map_err(|e| {
        WordcardError::Persistence(format!("Failed to serialize curated record: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_directory() {
        let path = Path::new("curated/42-house.json");
        assert_eq!(
            history_directory(path).to_string_lossy(),
            "curated/42-house.history"
        );
    }

    #[test]
    fn test_missing_directory_has_no_documents() {
        let documents = curated_documents("/nonexistent/curated").unwrap();
        assert!(documents.is_empty());
    }
}
