//! ytsubs - A Rust CLI tool for saving YouTube transcripts to disk
//!
//! This library provides the pieces behind the `ytsubs` binary: video identifier
//! extraction, caption fetching through yt-dlp, and serialization of the captions
//! as SRT subtitles, plain text lines or reflowed paragraphs.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod output;
pub mod transcript;
pub mod utils;

use std::path::PathBuf;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use extractors::{extract_video_id, FetchError, TranscriptFetcher};
pub use transcript::{CaptionRecord, ConversionRequest, Transcript, TranscriptPipeline};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types that end a conversion attempt
#[derive(thiserror::Error, Debug)]
pub enum SubtitleError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidIdentifier(String),

    #[error("Failed to fetch subtitles")]
    Fetch(#[from] FetchError),

    #[error("Failed to save subtitles to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
