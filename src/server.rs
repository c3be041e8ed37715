//! HTTP surface for the analysis service.
//!
//! Four routes: text analysis, audio analysis (speech-to-text first),
//! image processing, and a health probe. Every response is JSON; failures
//! go through [`AppError`] so clients always get `{"error": message}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

use crate::analysis::{emotion, sentiment, stats};
use crate::analysis::{EmotionDetection, MatchMode, SentimentScore, TextStatistics};
use crate::error::AppError;
use crate::images;
use crate::stt::TranscriptionProvider;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub stt: Arc<dyn TranscriptionProvider>,
    pub match_mode: MatchMode,
    pub image_output_dir: PathBuf,
}

/// Build the service router with CORS and body-limit layers applied
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/analyze-text", post(analyze_text))
        .route("/analyze-audio", post(analyze_audio))
        .route("/process-image", post(process_image))
        .route("/health", get(health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

#[derive(Debug, Deserialize)]
struct AnalyzeTextRequest {
    // Absent and null both coerce to empty string at this boundary
    #[serde(default)]
    text: Option<String>,
}

/// Combined analysis of one transcript
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub text: String,
    pub sentiment: SentimentScore,
    pub emotion: EmotionDetection,
    pub text_analysis: TextStatistics,
}

/// Run all three analyses over a transcript
fn analyze_transcript(text: String, mode: MatchMode) -> AnalysisResponse {
    AnalysisResponse {
        sentiment: sentiment::score(&text),
        emotion: emotion::detect(&text, mode),
        text_analysis: stats::summarize(&text),
        text,
    }
}

/// POST /analyze-text — analyze a transcript supplied as JSON
async fn analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let text = request.text.unwrap_or_default();
    info!("Analyzing text: {} chars", text.len());

    Ok(Json(analyze_transcript(text, state.match_mode)))
}

/// POST /analyze-audio — transcribe an uploaded clip, then analyze it
async fn analyze_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut audio: Option<(Vec<u8>, String)> = None;
    let mut language: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("audio") => {
                let filename = field
                    .file_name()
                    .unwrap_or("audio.wav")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read audio: {}", e)))?;
                audio = Some((bytes.to_vec(), filename));
            }
            Some("language") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read language: {}", e)))?;
                language = Some(value);
            }
            _ => {}
        }
    }

    let (bytes, filename) =
        audio.ok_or_else(|| AppError::BadRequest("Missing 'audio' field".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Audio upload is empty".to_string()));
    }

    info!("Received audio upload: {} ({} bytes)", filename, bytes.len());

    let transcript = state
        .stt
        .transcribe(bytes, &filename, language.as_deref())
        .await?;

    Ok(Json(analyze_transcript(transcript, state.match_mode)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessImageResponse {
    output_path: String,
    width: u32,
    height: u32,
    operations: usize,
}

/// POST /process-image — apply a filter chain to an uploaded image
async fn process_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessImageResponse>, AppError> {
    let mut image: Option<Vec<u8>> = None;
    let mut operations_raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read image: {}", e)))?;
                image = Some(bytes.to_vec());
            }
            Some("operations") => {
                let value = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read operations: {}", e))
                })?;
                operations_raw = Some(value);
            }
            _ => {}
        }
    }

    let bytes = image.ok_or_else(|| AppError::BadRequest("Missing 'image' field".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Image upload is empty".to_string()));
    }

    let operations = images::parse_operations(operations_raw.as_deref().unwrap_or("[]"))?;
    let processed = images::process_image(&bytes, &operations, &state.image_output_dir)?;

    Ok(Json(ProcessImageResponse {
        output_path: processed.output_path.to_string_lossy().to_string(),
        width: processed.width,
        height: processed.height,
        operations: operations.len(),
    }))
}

/// GET /health — liveness probe
async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "healthy": true,
        "service": "analysis-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
