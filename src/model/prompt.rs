//! Prompt construction for sentiment extraction

use crate::error::Result;

/// Fixed system-role instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "You are a sentiment analysis expert.";

/// Build the user prompt for a review batch.
///
/// Pure function: JSON-encodes the reviews exactly once and embeds them
/// verbatim into the instructional template. Standard JSON escaping is the
/// only escaping applied.
pub fn build_prompt(reviews: &[String]) -> Result<String> {
    let encoded = serde_json::to_string(reviews)?;

    Ok(format!(
        r#"Analyze the sentiment of the following customer reviews.
Provide a score for positive, negative, and neutral sentiments.
The scores should add up to 1.0.
Reviews: {encoded}

Return only a JSON object in the following format:
{{
  "positive": score,
  "negative": score,
  "neutral": score
}}
"#
    ))
}
