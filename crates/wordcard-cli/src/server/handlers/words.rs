//! Handlers for the record under review.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use wordcard::{CurationSummary, CuratedRecord, MediaDownloader, Rank, SelectionPath};

use crate::server::error::ApiError;
use crate::server::state::{AppState, Review};

/// Response containing a record and its place in the dictionary.
#[derive(Serialize)]
pub struct WordResponse {
    pub rank: Rank,
    pub total: usize,
    pub previous_title: Option<String>,
    pub next_title: Option<String>,
    pub record: CuratedRecord,
    pub summary: CurationSummary,
}

/// Response containing the record under review after an edit.
#[derive(Serialize)]
pub struct RecordResponse {
    pub rank: Rank,
    pub record: CuratedRecord,
    pub summary: CurationSummary,
}

impl RecordResponse {
    pub fn new(rank: Rank, record: &CuratedRecord) -> Self {
        Self {
            rank,
            record: record.clone(),
            summary: CurationSummary::from_record(record),
        }
    }
}

/// Request body for a selection override.
#[derive(Deserialize)]
pub struct SelectRequest {
    pub path: SelectionPath,
    pub include: bool,
}

/// Response after saving a record.
#[derive(Serialize)]
pub struct SaveResponse {
    pub rank: Rank,
    pub title: String,
    pub media: Vec<String>,
}

/// GET /api/word/:rank
///
/// Curates the raw record at `rank` and makes it the record under review.
pub async fn get_word(
    State(state): State<AppState>,
    Path(rank): Path<u32>,
) -> Result<Json<WordResponse>, ApiError> {
    let rank = Rank::new(rank)?;

    let store = state.store.read().await;
    let raw = store.get(rank)?;
    let total = store.len();
    let previous_title = rank.previous().map(|r| store.title(r)).transpose()?;
    let next_title = rank.next(total).map(|r| store.title(r)).transpose()?;
    drop(store);

    let record = state.curator.curate(&raw);
    let summary = CurationSummary::from_record(&record);

    *state.current.write().await = Some(Review {
        rank,
        record: record.clone(),
    });

    Ok(Json(WordResponse {
        rank,
        total,
        previous_title,
        next_title,
        record,
        summary,
    }))
}

/// POST /api/word/:rank/select
pub async fn select_item(
    State(state): State<AppState>,
    Path(rank): Path<u32>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let rank = Rank::new(rank)?;

    let mut current = state.current.write().await;
    let review = under_review(&mut current, rank)?;
    review.record.set_include(&req.path, req.include)?;

    Ok(Json(RecordResponse::new(rank, &review.record)))
}

/// PUT /api/word/:rank
///
/// Saves the reviewed document as sent by the page. The document replaces
/// any previous save for the rank.
pub async fn save_word(
    State(state): State<AppState>,
    Path(rank): Path<u32>,
    Json(record): Json<CuratedRecord>,
) -> Result<Json<SaveResponse>, ApiError> {
    let rank = Rank::new(rank)?;

    let mut store = state.store.clone().write_owned().await;
    let document = record.clone();
    tokio::task::spawn_blocking(move || store.put(rank, &document)).await??;
    info!(%rank, title = %record.title, "record saved");

    let media = if state.download_media {
        download_media(&state, rank, &record).await
    } else {
        Vec::new()
    };

    let mut current = state.current.write().await;
    if current.as_ref().is_some_and(|review| review.rank == rank) {
        *current = None;
    }

    Ok(Json(SaveResponse {
        rank,
        title: record.title,
        media,
    }))
}

/// The record under review, if it is the one at `rank`.
pub(super) fn under_review(
    current: &mut Option<Review>,
    rank: Rank,
) -> Result<&mut Review, ApiError> {
    match current {
        Some(review) => {
            if review.rank == rank {
                Ok(review)
            } else {
                Err(ApiError::Conflict(format!(
                    "Rank {} is not under review (reviewing rank {})",
                    rank, review.rank
                )))
            }
        }
        None => Err(ApiError::Conflict(format!(
            "Rank {} is not under review",
            rank
        ))),
    }
}

/// Download failures do not fail the save.
async fn download_media(state: &AppState, rank: Rank, record: &CuratedRecord) -> Vec<String> {
    let dir = state.output_dir.clone();
    let record = record.clone();

    let result = tokio::task::spawn_blocking(move || {
        MediaDownloader::new()?.save_media(rank, &record, &dir)
    })
    .await;

    match result {
        Ok(Ok(paths)) => paths
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
        Ok(Err(e)) => {
            warn!(%rank, error = %e, "media download failed");
            Vec::new()
        }
        Err(e) => {
            warn!(%rank, error = %e, "media download task failed");
            Vec::new()
        }
    }
}
