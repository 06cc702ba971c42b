use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::extractors::youtube::YoutubeFetcher;
use crate::extractors::{extract_video_id, TranscriptFetcher};
use crate::{output, utils, SubtitleError};

pub mod processor;

/// One timed caption segment
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionRecord {
    /// Caption text, may span several lines
    pub text: String,

    /// Offset from the start of the media in seconds
    pub start: f64,

    /// Display duration in seconds
    pub duration: f64,
}

impl CaptionRecord {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// End offset in seconds
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Caption records for one video, in playback order
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,

    /// Language code of the selected track
    pub language: String,

    /// Whether the track was generated by speech recognition
    pub is_generated: bool,

    pub fetched_at: chrono::DateTime<chrono::Utc>,

    pub records: Vec<CaptionRecord>,
}

/// A single conversion, as asked for by the user
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// URL as pasted by the user
    pub url: String,

    pub format: OutputFormat,

    /// Destination file; derived from the video id when absent
    pub output: Option<PathBuf>,

    /// Language preference; the configured list is used when empty
    pub languages: Vec<String>,
}

impl ConversionRequest {
    pub fn new(url: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            url: url.into(),
            format,
            output: None,
            languages: Vec::new(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }
}

/// Serialized transcript ready to be written
#[derive(Debug, Clone)]
pub struct Conversion {
    pub transcript: Transcript,
    pub format: OutputFormat,
    pub content: String,
}

/// Main conversion pipeline: URL -> video id -> captions -> text -> file
pub struct TranscriptPipeline<F: TranscriptFetcher> {
    config: Config,
    fetcher: F,
    show_progress: bool,
}

impl TranscriptPipeline<YoutubeFetcher> {
    /// Create a pipeline backed by yt-dlp
    pub fn from_config(config: Config) -> crate::Result<Self> {
        let fetcher = YoutubeFetcher::from_config(&config)?;
        Ok(Self::new(config, fetcher))
    }
}

impl<F: TranscriptFetcher> TranscriptPipeline<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            show_progress: false,
        }
    }

    /// Show a spinner while captions are fetched
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Resolve the video id and fetch its captions
    pub async fn fetch(&self, request: &ConversionRequest) -> Result<Transcript, SubtitleError> {
        let video_id = extract_video_id(&request.url)?;
        tracing::info!("Resolved video id {} from {}", video_id, request.url);

        let languages = if request.languages.is_empty() {
            &self.config.fetcher.languages
        } else {
            &request.languages
        };

        let progress = if self.show_progress {
            let progress = ProgressBar::new_spinner();
            progress.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            progress.enable_steady_tick(std::time::Duration::from_millis(100));
            progress
        } else {
            ProgressBar::hidden()
        };
        progress.set_message(format!(
            "Fetching captions for {} from {}...",
            video_id,
            self.fetcher.source_name()
        ));

        let result = self.fetcher.fetch_transcript(&video_id, languages).await;

        match &result {
            Ok(transcript) => progress.finish_with_message(format!(
                "Fetched {} captions ({})",
                transcript.records.len(),
                transcript.language
            )),
            Err(_) => progress.finish_with_message("Fetching captions failed"),
        }

        Ok(result?)
    }

    /// Fetch and serialize, without touching the filesystem
    pub async fn convert(&self, request: &ConversionRequest) -> Result<Conversion, SubtitleError> {
        let transcript = self.fetch(request).await?;
        if let Some(last) = transcript.records.last() {
            tracing::info!(
                "Transcript covers {} in {} captions",
                utils::format_duration(last.end()),
                transcript.records.len()
            );
        }

        let content = output::render(&transcript.records, request.format);

        tracing::debug!(
            "Serialized {} records as {} ({} bytes)",
            transcript.records.len(),
            request.format,
            content.len()
        );

        Ok(Conversion {
            transcript,
            format: request.format,
            content,
        })
    }

    /// Run a full conversion and return the path written
    pub async fn run(&self, request: &ConversionRequest) -> Result<PathBuf, SubtitleError> {
        let conversion = self.convert(request).await?;

        let path = utils::resolve_output_path(
            request.output.as_deref(),
            &self.config.output_dir(),
            &conversion.transcript.video_id,
            conversion.format,
        );

        output::save_to_file(&conversion.content, &path)?;
        tracing::info!("Wrote {} to {}", conversion.format, path.display());

        Ok(path)
    }
}
