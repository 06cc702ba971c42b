use serde::Deserialize;

use super::CaptionRecord;
use crate::extractors::FetchError;

/// YouTube `json3` caption document
#[derive(Debug, Deserialize)]
struct Json3Document {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,
    #[serde(rename = "dDurationMs", default)]
    duration_ms: u64,
    segs: Option<Vec<Json3Segment>>,
}

#[derive(Debug, Deserialize)]
struct Json3Segment {
    #[serde(default)]
    utf8: String,
}

/// Parse a `json3` caption payload into records in playback order.
///
/// Events without segments are window/style markers and carry no text. Events
/// whose text is only line breaks are the spacer events auto-generated tracks
/// insert between lines; both are dropped.
pub fn parse_json3(payload: &str) -> Result<Vec<CaptionRecord>, FetchError> {
    let document: Json3Document = serde_json::from_str(payload)?;

    let records = document
        .events
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;
            let text: String = segs.into_iter().map(|seg| seg.utf8).collect();

            if text.trim_matches('\n').is_empty() {
                return None;
            }

            Some(CaptionRecord {
                text,
                start: event.start_ms as f64 / 1000.0,
                duration: event.duration_ms as f64 / 1000.0,
            })
        })
        .collect();

    Ok(records)
}
