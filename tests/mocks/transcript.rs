use std::sync::{Arc, Mutex};

use youtube_summarizer::youtube::{TranscriptFetcher, TranscriptFragment};

use super::MockError;

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub fragments: Vec<TranscriptFragment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptFetcher {
    pub fn new(texts: &[&str]) -> Self {
        let fragments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptFragment {
                text: text.to_string(),
                start: i as f64,
                duration: 1.0,
            })
            .collect();

        Self {
            fragments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fragments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    type Error = MockError;

    async fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptFragment>, MockError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(MockError(msg.clone()));
        }
        Ok(self.fragments.clone())
    }
}
