use std::path::Path;

use crate::cli::OutputFormat;
use crate::transcript::CaptionRecord;
use crate::SubtitleError;

pub mod formatters;

pub use formatters::*;

/// Serialize records in the selected format
pub fn render(records: &[CaptionRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Srt => format_as_srt(records),
        OutputFormat::Text => format_as_text(records),
        OutputFormat::Paragraphs => format_as_paragraphs(records),
    }
}

/// Save serialized transcript to file in a single write
pub fn save_to_file(content: &str, path: &Path) -> Result<(), SubtitleError> {
    fs_err::write(path, content).map_err(|source| SubtitleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Print serialized transcript to console
pub fn print_to_console(content: &str) {
    print!("{}", content);
}
