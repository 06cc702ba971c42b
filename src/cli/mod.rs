use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytsubs",
    about = "ytsubs - Save YouTube transcripts as SRT subtitles or plain text",
    version,
    long_about = "Fetches the caption track of a YouTube video and writes it to a local file, either as timed SRT subtitles, one caption per line, or reflowed into paragraphs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "YTSUBS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the transcript of a video
    Download {
        /// YouTube URL (watch, youtu.be, embed or shorts link)
        #[arg(value_name = "URL")]
        url: String,

        /// Output file path (defaults to <VIDEO_ID>.<ext> in the configured output directory)
        #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Preferred caption language, may be repeated (defaults to the configured list)
        #[arg(short, long = "language", value_name = "LANG")]
        languages: Vec<String>,

        /// Print the transcript instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Show the current configuration
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },

    /// List supported output formats
    Formats,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SRT subtitles with numbered, timed blocks
    Srt,
    /// One caption per line, no timing
    Text,
    /// Captions joined and reflowed into paragraphs
    Paragraphs,
}

impl OutputFormat {
    /// File extension written for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Srt => "srt",
            OutputFormat::Text | OutputFormat::Paragraphs => "txt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Srt => "numbered subtitle blocks with start --> end timestamps",
            OutputFormat::Text => "caption text only, one caption per line",
            OutputFormat::Paragraphs => "caption text joined with spaces and split on blank lines",
        }
    }

    pub fn all() -> [OutputFormat; 3] {
        [OutputFormat::Srt, OutputFormat::Text, OutputFormat::Paragraphs]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Srt => write!(f, "srt"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Paragraphs => write!(f, "paragraphs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Srt.extension(), "srt");
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Paragraphs.extension(), "txt");
    }

    #[test]
    fn test_parse_download_args() {
        let cli = Cli::try_parse_from([
            "ytsubs",
            "download",
            "https://youtu.be/dQw4w9WgXcQ",
            "-f",
            "paragraphs",
            "-l",
            "de",
            "-l",
            "en",
        ])
        .unwrap();

        match cli.command {
            Commands::Download { url, format, languages, output, stdout } => {
                assert_eq!(url, "https://youtu.be/dQw4w9WgXcQ");
                assert_eq!(format, Some(OutputFormat::Paragraphs));
                assert_eq!(languages, vec!["de".to_string(), "en".to_string()]);
                assert!(output.is_none());
                assert!(!stdout);
            }
            _ => panic!("expected download command"),
        }
    }

    #[test]
    fn test_output_conflicts_with_stdout() {
        let result = Cli::try_parse_from([
            "ytsubs",
            "download",
            "https://youtu.be/dQw4w9WgXcQ",
            "-o",
            "out.srt",
            "--stdout",
        ]);
        assert!(result.is_err());
    }
}
