use serde::{Deserialize, Serialize};

// Title and duration are not retrieved from YouTube; the response
// carries fixed placeholder values (known gap in the upstream flow).
const PLACEHOLDER_TITLE: &str = "Mock Title";
const PLACEHOLDER_DURATION: &str = "Unknown";

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    pub youtube_url: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct VideoDetails {
    pub title: String,
    pub video_id: String,
    pub duration: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptDetails {
    pub word_count: usize,
    pub chunk_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub video_details: VideoDetails,
    pub transcript_details: TranscriptDetails,
    pub summary: String,
}

impl SummaryResponse {
    /// Assemble the response from the extracted ID, the joined
    /// transcript text and the summary. The transcript is never
    /// chunked, so `chunk_count` is always 1.
    pub fn build(video_id: String, transcript_text: &str, summary: String) -> Self {
        SummaryResponse {
            video_details: VideoDetails {
                title: PLACEHOLDER_TITLE.to_string(),
                video_id,
                duration: PLACEHOLDER_DURATION.to_string(),
            },
            transcript_details: TranscriptDetails {
                word_count: transcript_text.split_whitespace().count(),
                chunk_count: 1,
            },
            summary,
        }
    }
}
