pub mod summarizer;
pub mod transcript;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);
