//! Core data types

use serde::{Deserialize, Serialize};

/// Ordered batch of review texts submitted for analysis.
pub type ReviewBatch = Vec<String>;

/// Aggregate sentiment proportions returned by the completion service.
///
/// All three keys must be present when deserializing; extra keys are
/// ignored. The values are intended to sum to 1.0, but the sum is not
/// enforced at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Positive proportion (0.0 to 1.0)
    pub positive: f64,
    /// Negative proportion (0.0 to 1.0)
    pub negative: f64,
    /// Neutral proportion (0.0 to 1.0)
    pub neutral: f64,
}

impl SentimentScores {
    /// Sum of the three proportions.
    pub fn sum(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }

    /// Label of the largest proportion.
    pub fn dominant_label(&self) -> &'static str {
        if self.positive >= self.negative && self.positive >= self.neutral {
            "positive"
        } else if self.negative >= self.neutral {
            "negative"
        } else {
            "neutral"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_label() {
        let scores = SentimentScores {
            positive: 0.6,
            negative: 0.1,
            neutral: 0.3,
        };
        assert_eq!(scores.dominant_label(), "positive");

        let scores = SentimentScores {
            positive: 0.1,
            negative: 0.5,
            neutral: 0.4,
        };
        assert_eq!(scores.dominant_label(), "negative");

        let scores = SentimentScores {
            positive: 0.2,
            negative: 0.2,
            neutral: 0.6,
        };
        assert_eq!(scores.dominant_label(), "neutral");
    }

    #[test]
    fn test_sum() {
        let scores = SentimentScores {
            positive: 0.5,
            negative: 0.3,
            neutral: 0.2,
        };
        assert!((scores.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_requires_all_keys() {
        let ok: std::result::Result<SentimentScores, _> =
            serde_json::from_str(r#"{"positive":0.5,"negative":0.3,"neutral":0.2}"#);
        assert!(ok.is_ok());

        let missing: std::result::Result<SentimentScores, _> =
            serde_json::from_str(r#"{"positive":0.5,"negative":0.5}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_deserialize_ignores_extra_keys() {
        let scores: SentimentScores = serde_json::from_str(
            r#"{"positive":0.4,"negative":0.4,"neutral":0.2,"comment":"mixed"}"#,
        )
        .unwrap();
        assert_eq!(scores.positive, 0.4);
    }
}
