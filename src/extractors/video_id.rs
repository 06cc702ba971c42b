//! Video identifier extraction.
//!
//! The match is a heuristic over the raw string, not a URL parser: the first run
//! of 11 identifier characters that follows `v=` or `/` wins, wherever it sits.

use regex::Regex;
use std::sync::OnceLock;

use crate::SubtitleError;

/// `v=` or `/` followed by 11 identifier characters
fn video_id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("valid video id pattern"))
}

/// Extract the 11-character video identifier from a pasted URL.
pub fn extract_video_id(input: &str) -> Result<String, SubtitleError> {
    video_id_pattern()
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| SubtitleError::InvalidIdentifier(input.to_string()))
}

/// Canonical watch URL for an identifier
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(input: &str) -> Option<String> {
        extract_video_id(input).ok()
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120&list=PL123"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            id("https://www.youtube.com/watch?feature=share&v=a-b_c1D2e3F"),
            Some("a-b_c1D2e3F".to_string())
        );
    }

    #[test]
    fn test_path_style_urls() {
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ?t=30"), Some("dQw4w9WgXcQ".to_string()));
        assert_eq!(id("https://www.youtube.com/embed/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
        assert_eq!(id("https://www.youtube.com/shorts/abc123def45"), Some("abc123def45".to_string()));
    }

    #[test]
    fn test_only_first_match_is_used() {
        assert_eq!(
            id("https://youtu.be/AAAAAAAAAAA?v=BBBBBBBBBBB"),
            Some("AAAAAAAAAAA".to_string())
        );
    }

    #[test]
    fn test_longer_token_is_cut_to_eleven() {
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQXYZ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_unrelated_path_segment_matches() {
        // Accepted false positive: any 11 identifier characters after a slash
        assert_eq!(id("https://example.com/abcdefghijk"), Some("abcdefghijk".to_string()));
    }

    #[test]
    fn test_invalid_inputs() {
        for input in ["", "dQw4w9WgXcQ", "https://youtu.be/short", "v=abc", "not a url at all"] {
            match extract_video_id(input) {
                Err(SubtitleError::InvalidIdentifier(raw)) => assert_eq!(raw, input),
                other => panic!("expected InvalidIdentifier for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_watch_url_builder() {
        assert_eq!(watch_url("dQw4w9WgXcQ"), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
