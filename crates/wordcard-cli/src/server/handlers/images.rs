//! Image search handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::warn;

use wordcard::{ImageCandidate, ImageSearch, Rank};

use super::words::{RecordResponse, under_review};
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Server capabilities shown by the review page.
#[derive(Serialize)]
pub struct InfoResponse {
    pub total: usize,
    pub image_search: Option<String>,
    pub download_media: bool,
}

/// GET /api/info
pub async fn get_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let total = state.store.read().await.len();

    Json(InfoResponse {
        total,
        image_search: state.image_search_name().map(str::to_string),
        download_media: state.download_media,
    })
}

/// GET /api/images/:query
pub async fn search_images(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<ImageCandidate>>, ApiError> {
    let search = image_search(&state)?;
    let candidates = tokio::task::spawn_blocking(move || search.search(&query)).await??;
    Ok(Json(candidates))
}

/// POST /api/word/:rank/images
///
/// Appends search results for the headword to the record under review.
/// A failed search adds nothing.
pub async fn add_images(
    State(state): State<AppState>,
    Path(rank): Path<u32>,
) -> Result<Json<RecordResponse>, ApiError> {
    let rank = Rank::new(rank)?;
    let search = image_search(&state)?;

    let title = {
        let mut current = state.current.write().await;
        under_review(&mut current, rank)?.record.title.clone()
    };

    let candidates = match tokio::task::spawn_blocking(move || search.search(&title)).await {
        Ok(Ok(candidates)) => candidates,
        Ok(Err(e)) => {
            warn!(%rank, error = %e, "image search failed");
            Vec::new()
        }
        Err(e) => {
            warn!(%rank, error = %e, "image search task failed");
            Vec::new()
        }
    };

    // The record may have changed hands during the search
    let mut current = state.current.write().await;
    let review = under_review(&mut current, rank)?;
    review.record.append_image_candidates(&candidates);

    Ok(Json(RecordResponse::new(rank, &review.record)))
}

fn image_search(state: &AppState) -> Result<Arc<dyn ImageSearch>, ApiError> {
    state
        .image_search
        .clone()
        .ok_or_else(|| ApiError::BadRequest("Image search is not configured".to_string()))
}
