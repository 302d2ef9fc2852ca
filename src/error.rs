//! Error types for the sentiment service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Invalid file format. Please upload CSV or XLSX file.")]
    InvalidFormat,

    #[error("Error reading file: {0}")]
    FileRead(String),

    #[error("The file does not contain a \"review\" column")]
    MissingColumn,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse sentiment scores from response: {raw}")]
    Parse { raw: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalysisError {
    /// True for errors detected before any completion call is attempted.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::NoFile
                | AnalysisError::InvalidFormat
                | AnalysisError::FileRead(_)
                | AnalysisError::MissingColumn
        )
    }

    /// The message rendered to the user for this failure.
    ///
    /// Input errors are shown verbatim; everything that happens during or
    /// after the completion call is wrapped in a single descriptive prefix.
    pub fn user_message(&self) -> String {
        if self.is_input_error() {
            self.to_string()
        } else {
            format!("Error during sentiment analysis: {}", self)
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
