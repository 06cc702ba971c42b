//! Transcript serializers.
//!
//! All functions here are pure: they take caption records in playback order and
//! return the complete text of the output file.

use regex::Regex;
use std::sync::OnceLock;

use crate::transcript::CaptionRecord;

/// Format seconds as an SRT timestamp, `HH:MM:SS,mmm`.
///
/// Milliseconds come from the untruncated value, rounded to the nearest
/// millisecond. Hours are not wrapped and widen past two digits.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Numbered SRT blocks, one per record.
pub fn format_as_srt(records: &[CaptionRecord]) -> String {
    let mut out = String::new();

    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(record.start),
            format_timestamp(record.end()),
            record.text
        ));
    }

    out
}

/// Caption text only, one record per line.
pub fn format_as_text(records: &[CaptionRecord]) -> String {
    let mut out = String::new();

    for record in records {
        out.push_str(&record.text);
        out.push('\n');
    }

    out
}

/// Runs of two or more newlines
fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{2,}").expect("valid paragraph pattern"))
}

/// All caption text joined with spaces, then split into paragraphs on blank lines.
///
/// Caption text rarely carries blank lines, so this usually yields a single
/// paragraph. An empty transcript yields an empty string rather than one empty
/// paragraph.
pub fn format_as_paragraphs(records: &[CaptionRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let joined = records
        .iter()
        .map(|record| record.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    for paragraph in paragraph_break().split(&joined) {
        out.push_str(paragraph.trim());
        out.push_str("\n\n");
    }

    out
}
