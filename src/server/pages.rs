//! HTML page rendering

use crate::types::SentimentScores;

/// Upload form, optionally with an error banner.
pub fn analyze_page(error: Option<&str>) -> String {
    let banner = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape(message)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Review Sentiment Analysis</title></head>
<body>
<h1>Review Sentiment Analysis</h1>
{banner}
<form action="/analyze" method="post" enctype="multipart/form-data">
  <input type="file" name="file" accept=".csv,.xlsx,.xls">
  <button type="submit">Analyze</button>
</form>
</body>
</html>
"#
    )
}

/// Result page showing the three proportions.
pub fn result_page(scores: &SentimentScores) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Sentiment Results</title></head>
<body>
<h1>Sentiment Results</h1>
<ul>
  <li>Positive: {:.3}</li>
  <li>Negative: {:.3}</li>
  <li>Neutral: {:.3}</li>
</ul>
<p>Overall: {}</p>
<p><a href="/">Analyze another file</a></p>
</body>
</html>
"#,
        scores.positive,
        scores.negative,
        scores.neutral,
        scores.dominant_label(),
    )
}

/// Minimal HTML escaping for user-controlled text. Error messages can
/// embed the raw completion response, which may contain markup.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
