use std::sync::{Arc, Mutex};

use youtube_summarizer::llm::Summarizer;

use super::MockError;

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Summarizer for MockSummarizer {
    type Error = MockError;

    async fn summarize(&self, transcript: &str, language: &str) -> Result<String, MockError> {
        self.calls
            .lock()
            .unwrap()
            .push((transcript.to_string(), language.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(MockError(msg.clone()));
        }
        Ok(self.summary.clone())
    }
}
