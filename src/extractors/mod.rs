use async_trait::async_trait;

pub mod video_id;
pub mod youtube;

pub use video_id::extract_video_id;

use crate::transcript::Transcript;

/// Errors surfaced by a caption source
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("{0} is not available. Please install it: https://github.com/yt-dlp/yt-dlp")]
    ToolUnavailable(String),

    #[error("yt-dlp failed: {0}")]
    Tool(String),

    #[error("No captions are available for video {0}")]
    NoCaptions(String),

    #[error("No captions in {requested} for video {video_id} (available: {available})")]
    LanguageUnavailable {
        video_id: String,
        requested: String,
        available: String,
    },

    #[error("Caption download failed: {0}")]
    Http(String),

    #[error("Could not parse caption data: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// A source of caption tracks for a video identifier
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the caption records for `video_id`, trying `languages` in order
    async fn fetch_transcript(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<Transcript, FetchError>;

    /// Get the name of the caption source
    fn source_name(&self) -> &'static str;
}
