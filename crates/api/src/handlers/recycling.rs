//! Handler for `/recycling/analyze`: multipart image upload dispatched
//! to the configured classification provider.
//!
//! Provider failures never surface as 5xx; the response degrades to an
//! "unknown" analysis carrying an error description so the frontend can
//! still render something.

use axum::extract::{Multipart, State};
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_vision::RecyclingAnalysis;

use crate::config::VisionProvider;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /recycling/analyze
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<RecyclingAnalysis>> {
    let mut image: Option<(Vec<u8>, String, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("image") {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read image field: {e}")))?;
            image = Some((bytes.to_vec(), file_name, content_type));
        }
    }

    let (bytes, file_name, content_type) = image.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "image field is required".to_string(),
        ))
    })?;

    let result = match state.vision.provider {
        VisionProvider::Gemini => state.vision.gemini.analyze(&bytes, &content_type).await,
        VisionProvider::Imagga => state.vision.imagga.analyze(&bytes, &file_name).await,
    };

    let analysis = match result {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(error = %e, provider = ?state.vision.provider, "Image analysis failed");
            RecyclingAnalysis::unknown(format!("Error analyzing image: {e}"))
        }
    };

    Ok(Json(analysis))
}
