use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::OutputFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Caption fetching configuration
    pub fetcher: FetcherConfig,

    /// Application settings
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Path or name of the yt-dlp executable
    pub yt_dlp_path: String,

    /// Caption languages in order of preference
    pub languages: Vec<String>,

    /// Fall back to auto-generated captions when no manual track matches
    pub allow_generated: bool,

    /// Timeout for the caption download request
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default output format
    pub default_output_format: OutputFormat,

    /// Directory for files written without an explicit output path
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetcher: FetcherConfig {
                yt_dlp_path: "yt-dlp".to_string(),
                languages: vec!["en".to_string()],
                allow_generated: true,
                request_timeout_secs: 30,
            },
            app: AppConfig {
                default_output_format: OutputFormat::Srt,
                output_dir: None,
            },
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub async fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = Self::config_path(explicit_path)?;

        if config_path.exists() {
            tracing::debug!("Loading configuration from {}", config_path.display());

            let content = fs_err::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let config: Config = serde_yaml::from_str(&content)
                .context("Failed to parse config file")?;

            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(&config_path).await?;
            tracing::debug!("Wrote default configuration to {}", config_path.display());
            Ok(config)
        }
    }

    /// Save configuration to file
    pub async fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    pub fn config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit_path {
            return Ok(path.to_path_buf());
        }

        // Current directory wins so a project can carry its own settings
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;

        Ok(config_dir.join("ytsubs").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.fetcher.yt_dlp_path.trim().is_empty() {
            anyhow::bail!("fetcher.yt_dlp_path must not be empty");
        }

        if self.fetcher.languages.is_empty() {
            anyhow::bail!("fetcher.languages must list at least one language code");
        }

        if self.fetcher.request_timeout_secs == 0 {
            anyhow::bail!("fetcher.request_timeout_secs must be greater than zero");
        }

        Ok(())
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        println!("  yt-dlp: {}", self.fetcher.yt_dlp_path);
        println!("  Languages: {}", self.fetcher.languages.join(", "));
        println!("  Auto-generated captions: {}", self.fetcher.allow_generated);
        println!("  Request timeout: {}s", self.fetcher.request_timeout_secs);
        println!("  Default Format: {}", self.app.default_output_format);
        match &self.app.output_dir {
            Some(dir) => println!("  Output Directory: {}", dir.display()),
            None => println!("  Output Directory: (current directory)"),
        }
    }

    /// Output directory for files without an explicit path
    pub fn output_dir(&self) -> PathBuf {
        self.app
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.fetcher.request_timeout_secs)
    }
}
