use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::process::Stdio;
use tokio::process::Command;
use url::Url;

use super::video_id::watch_url;
use super::{FetchError, TranscriptFetcher};
use crate::config::Config;
use crate::transcript::{processor, Transcript};

/// Caption format requested from YouTube
const CAPTION_EXT: &str = "json3";

/// The parts of `yt-dlp --dump-json` output we read
#[derive(Debug, Default, Deserialize)]
struct VideoInfo {
    #[serde(default)]
    subtitles: BTreeMap<String, Vec<TrackFormat>>,
    #[serde(default)]
    automatic_captions: BTreeMap<String, Vec<TrackFormat>>,
}

#[derive(Debug, Clone, Deserialize)]
struct TrackFormat {
    ext: String,
    url: String,
}

/// A caption track picked for download
#[derive(Debug, Clone, PartialEq)]
struct SelectedTrack {
    language: String,
    is_generated: bool,
    url: String,
}

/// YouTube caption fetcher using yt-dlp for track discovery
pub struct YoutubeFetcher {
    yt_dlp_path: String,
    allow_generated: bool,
    client: reqwest::Client,
}

impl YoutubeFetcher {
    pub fn new() -> Self {
        Self {
            yt_dlp_path: "yt-dlp".to_string(),
            allow_generated: true,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            yt_dlp_path: config.fetcher.yt_dlp_path.clone(),
            allow_generated: config.fetcher.allow_generated,
            client,
        })
    }

    /// Get video information using yt-dlp
    async fn get_video_info(&self, video_id: &str) -> Result<VideoInfo, FetchError> {
        let url = watch_url(video_id);
        tracing::debug!("Listing caption tracks for: {}", url);

        let output = Command::new(&self.yt_dlp_path)
            .args(["--dump-json", "--skip-download", "--no-playlist", "--no-warnings", &url])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => FetchError::ToolUnavailable(self.yt_dlp_path.clone()),
                _ => FetchError::Tool(err.to_string()),
            })?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            return Err(FetchError::Tool(error.trim().to_string()));
        }

        let info: VideoInfo = serde_json::from_slice(&output.stdout)?;
        Ok(info)
    }

    /// Pick the first requested language, manual tracks before generated ones
    fn select_track(
        &self,
        info: &VideoInfo,
        video_id: &str,
        languages: &[String],
    ) -> Result<SelectedTrack, FetchError> {
        let mut sources = vec![(&info.subtitles, false)];
        if self.allow_generated {
            sources.push((&info.automatic_captions, true));
        }

        for language in languages {
            for (tracks, is_generated) in &sources {
                let found = tracks
                    .get(language)
                    .and_then(|formats| formats.iter().find(|f| f.ext == CAPTION_EXT));

                if let Some(format) = found {
                    return Ok(SelectedTrack {
                        language: language.clone(),
                        is_generated: *is_generated,
                        url: format.url.clone(),
                    });
                }
            }
        }

        let available: Vec<String> = sources
            .iter()
            .flat_map(|(tracks, is_generated)| {
                tracks.keys().map(move |lang| {
                    if *is_generated {
                        format!("{} (generated)", lang)
                    } else {
                        lang.clone()
                    }
                })
            })
            .collect();

        if available.is_empty() {
            return Err(FetchError::NoCaptions(video_id.to_string()));
        }

        Err(FetchError::LanguageUnavailable {
            video_id: video_id.to_string(),
            requested: languages.join(", "),
            available: available.join(", "),
        })
    }

    /// Download the caption document for a track
    async fn download_track(&self, track: &SelectedTrack) -> Result<String, FetchError> {
        let url = Url::parse(&track.url)
            .map_err(|_| FetchError::Parse(format!("Invalid caption URL: {}", track.url)))?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Http(format!("HTTP {}", response.status())));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeFetcher {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<Transcript, FetchError> {
        let info = self.get_video_info(video_id).await?;
        let track = self.select_track(&info, video_id, languages)?;

        tracing::info!(
            "Using {} caption track '{}'",
            if track.is_generated { "generated" } else { "manual" },
            track.language
        );

        let payload = self.download_track(&track).await?;
        let records = processor::parse_json3(&payload)?;

        Ok(Transcript {
            video_id: video_id.to_string(),
            language: track.language,
            is_generated: track.is_generated,
            fetched_at: chrono::Utc::now(),
            records,
        })
    }

    fn source_name(&self) -> &'static str {
        "YouTube"
    }
}

impl Default for YoutubeFetcher {
    fn default() -> Self {
        Self::new()
    }
}
