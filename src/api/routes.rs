use axum::{
    Router,
    extract::{Json, State},
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::api::models::{SummaryResponse, VideoRequest};
use crate::error::{AppError, Result};
use crate::llm::Summarizer;
use crate::youtube::{TranscriptFetcher, extract_video_id, join_fragments};
use crate::AppState;

pub fn create_router<F, S>(state: AppState<F, S>) -> Router
where
    F: TranscriptFetcher,
    S: Summarizer,
{
    // Credentials are allowed, so methods and headers mirror the
    // request instead of using the wildcard.
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origin.clone())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/summarize", post(summarize_handler::<F, S>))
        .layer(cors)
        .with_state(state)
}

async fn ping_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "pong" }))
}

/// Drives the whole request flow: extract the video ID, fetch the
/// transcript, summarize it, shape the response. Any failure falls
/// straight through to the error mapping; there are no retries.
#[tracing::instrument(skip_all, fields(youtube_url = %req.youtube_url, language = %req.language))]
async fn summarize_handler<F, S>(
    State(state): State<AppState<F, S>>,
    Json(req): Json<VideoRequest>,
) -> Result<Json<SummaryResponse>>
where
    F: TranscriptFetcher,
    S: Summarizer,
{
    let video_id = extract_video_id(&req.youtube_url)?;
    tracing::debug!(%video_id, "Extracted video id");

    let fragments = state
        .fetcher
        .fetch_transcript(&video_id)
        .await
        .map_err(|e| AppError::Transcript(e.to_string()))?;

    let transcript_text = join_fragments(&fragments);
    tracing::debug!(
        fragments = fragments.len(),
        chars = transcript_text.len(),
        "Transcript fetched"
    );

    let summary = state
        .summarizer
        .summarize(&transcript_text, &req.language)
        .await
        .map_err(|e| AppError::Summarize(e.to_string()))?;

    tracing::info!(%video_id, "Summarized video");

    Ok(Json(SummaryResponse::build(
        video_id,
        &transcript_text,
        summary,
    )))
}
