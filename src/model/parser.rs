//! Score extraction from completion responses
//!
//! Completion services are not guaranteed to emit strictly-conforming
//! JSON; they frequently wrap the object in prose or trailing commentary.
//! Parsing runs in two stages: a direct parse of the whole text, then a
//! single brace-delimited substring attempt before giving up.

use crate::error::{AnalysisError, Result};
use crate::types::SentimentScores;

/// Parse the raw completion text into sentiment scores.
///
/// Stage 1 parses the whole trimmed text. Stage 2 takes the substring from
/// the first `{` to the last `}` (a maximal non-nested scan, kept as-is
/// rather than a real parser). The terminal error embeds the full raw text
/// so the operator can inspect exactly what the service returned.
pub fn parse_scores(raw: &str) -> Result<SentimentScores> {
    if let Ok(scores) = serde_json::from_str::<SentimentScores>(raw.trim()) {
        return Ok(scores);
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(scores) = serde_json::from_str::<SentimentScores>(&raw[start..=end]) {
                return Ok(scores);
            }
        }
    }

    Err(AnalysisError::Parse {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_parse() {
        let scores = parse_scores(r#"{"positive":0.5,"negative":0.3,"neutral":0.2}"#).unwrap();
        assert_eq!(scores.positive, 0.5);
        assert_eq!(scores.negative, 0.3);
        assert_eq!(scores.neutral, 0.2);
    }

    #[test]
    fn test_direct_parse_with_surrounding_whitespace() {
        let scores =
            parse_scores("\n  {\"positive\":1.0,\"negative\":0.0,\"neutral\":0.0}  \n").unwrap();
        assert_eq!(scores.positive, 1.0);
    }

    #[test]
    fn test_fallback_extracts_json_from_prose() {
        let raw = r#"Sure! Here's the result: {"positive":0.6,"negative":0.1,"neutral":0.3} Hope that helps."#;
        let scores = parse_scores(raw).unwrap();
        assert_eq!(scores.positive, 0.6);
        assert_eq!(scores.negative, 0.1);
        assert_eq!(scores.neutral, 0.3);
    }

    #[test]
    fn test_fallback_handles_multiline_prose() {
        let raw = "Here is the analysis:\n\n{\"positive\": 0.2,\n \"negative\": 0.7,\n \"neutral\": 0.1}\n\nOverall quite negative.";
        let scores = parse_scores(raw).unwrap();
        assert_eq!(scores.negative, 0.7);
    }

    #[test]
    fn test_missing_key_fails_both_stages() {
        let raw = r#"{"positive":0.5,"negative":0.5}"#;
        let err = parse_scores(raw).unwrap_err();
        match err {
            AnalysisError::Parse { raw: embedded } => assert_eq!(embedded, raw),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_braceless_prose_fails() {
        let raw = "I could not determine the sentiment of these reviews.";
        let err = parse_scores(raw).unwrap_err();
        match err {
            AnalysisError::Parse { raw: embedded } => assert_eq!(embedded, raw),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_error_message_contains_raw_text() {
        let err = parse_scores("garbage output").unwrap_err();
        assert!(err.to_string().contains("garbage output"));
    }

    #[test]
    fn test_non_numeric_values_fail() {
        let raw = r#"{"positive":"high","negative":"low","neutral":"none"}"#;
        assert!(parse_scores(raw).is_err());
    }

    #[test]
    fn test_greedy_scan_spans_first_to_last_brace() {
        // Two objects in one response: the scan covers both and fails to
        // parse, rather than picking either candidate.
        let raw = r#"{"positive":0.5,"negative":0.3,"neutral":0.2} and {"positive":1.0,"negative":0.0,"neutral":0.0}"#;
        assert!(parse_scores(raw).is_err());
    }

    #[test]
    fn test_reversed_braces_fail() {
        let raw = "} nothing useful {";
        assert!(parse_scores(raw).is_err());
    }
}
