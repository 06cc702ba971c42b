use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

/// Work out where a transcript is written.
///
/// An explicit path without an extension gets the format's extension appended;
/// an explicit path with any extension is used as given. Without a path the file
/// is named after the video id inside `output_dir`.
pub fn resolve_output_path(
    explicit: Option<&Path>,
    output_dir: &Path,
    video_id: &str,
    format: OutputFormat,
) -> PathBuf {
    match explicit {
        Some(path) if path.extension().is_some() => path.to_path_buf(),
        Some(path) => path.with_extension(format.extension()),
        None => output_dir.join(format!("{}.{}", video_id, format.extension())),
    }
}

/// Format duration in human-readable format
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Check if the current environment has required tools
pub async fn check_dependencies(yt_dlp_path: &str) -> Vec<String> {
    let mut missing = Vec::new();

    if !check_command_available(yt_dlp_path).await {
        missing.push(format!("{} - required to look up YouTube caption tracks", yt_dlp_path));
    }

    missing
}

/// Check if a command is available in PATH
async fn check_command_available(command: &str) -> bool {
    use tokio::process::Command;

    Command::new(command)
        .arg("--version")
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}
