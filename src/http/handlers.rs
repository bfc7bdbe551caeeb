use super::state::AppState;
use crate::transcript::format_transcript;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

/// Prefix of every `detail` message in a failed transcript response
pub const ERROR_PREFIX: &str = "An error occurred: ";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    /// Video ID exactly as given in the path
    pub video_id: String,

    /// `"<start> seconds: <text>"` entries joined with `|`
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
pub async fn read_root() -> impl IntoResponse {
    Json(json!({ "Hello": "LearnLab" }))
}

/// GET /transcript/:video_id
/// Fetch captions for a video and flatten them into one string
pub async fn download_transcript(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    match state.fetcher.fetch(&video_id).await {
        Ok(entries) => {
            info!(
                "Serving transcript for {} ({} entries via {})",
                video_id,
                entries.len(),
                state.fetcher.name()
            );

            (
                StatusCode::OK,
                Json(TranscriptResponse {
                    transcript: format_transcript(&entries),
                    video_id,
                }),
            )
                .into_response()
        }
        Err(e) => {
            // Every failure maps to 500; the kind is only surfaced in logs
            error!(
                "Failed to fetch transcript for {} ({:?}): {}",
                video_id,
                e.kind(),
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("{}{}", ERROR_PREFIX, e),
                }),
            )
                .into_response()
        }
    }
}
