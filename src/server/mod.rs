//! HTTP layer
//!
//! One upload form, one multipart analysis endpoint. Every failure is
//! recovered here and rendered as a page; nothing crashes the process.

mod pages;

use crate::error::{AnalysisError, Result};
use crate::loader;
use crate::model::SentimentModel;
use crate::types::SentimentScores;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<SentimentModel>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(pages::analyze_page(None))
}

async fn analyze(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let result = match read_upload(multipart).await {
        Ok((filename, data)) => process_upload(&state.model, &filename, &data).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(scores) => Html(pages::result_page(&scores)),
        Err(err) => {
            tracing::warn!("analysis request failed: {}", err);
            Html(pages::analyze_page(Some(&err.user_message())))
        }
    }
}

/// Pull the single `file` field out of the multipart form.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AnalysisError::FileRead(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AnalysisError::FileRead(e.to_string()))?;
        return Ok((filename, data.to_vec()));
    }

    Err(AnalysisError::NoFile)
}

/// Run one uploaded file through the full pipeline.
///
/// Input validation happens entirely before the completion call; a file
/// that fails to load never reaches the service.
pub async fn process_upload(
    model: &SentimentModel,
    filename: &str,
    data: &[u8],
) -> Result<SentimentScores> {
    let reviews = loader::load_reviews(filename, data)?;
    model.analyze(&reviews).await
}
