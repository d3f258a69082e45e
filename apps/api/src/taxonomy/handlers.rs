//! Axum route handlers for the taxonomy API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::taxonomy::domain::classify;
use crate::taxonomy::generator::{
    generate_attributes, GenerateRequest, GenerateResponse, GenerateSettings,
};
use crate::taxonomy::hs_code::heading;

#[derive(Debug, Serialize)]
pub struct DomainResponse {
    pub hs_code: String,
    pub chapter: Option<u8>,
    pub domain: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    pub hs4: String,
    /// Stored parent attribute JSON text, unparsed.
    pub reference_attributes: String,
}

/// GET /api/v1/domain/:hs_code
pub async fn handle_classify(Path(hs_code): Path<String>) -> Json<DomainResponse> {
    let classification = classify(&hs_code);
    Json(DomainResponse {
        hs_code,
        chapter: classification.chapter,
        domain: classification.domain,
    })
}

/// GET /api/v1/reference/:hs_code
///
/// Previews the parent attributes that a generation request for this code would use.
pub async fn handle_get_reference(
    State(state): State<AppState>,
    Path(hs_code): Path<String>,
) -> Result<Json<ReferenceResponse>, AppError> {
    let hs4 = heading(&hs_code);
    let reference_attributes = state
        .store
        .fetch_parent_attributes(&hs4)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No reference attributes found for HS4 {hs4}")))?;

    Ok(Json(ReferenceResponse {
        hs4,
        reference_attributes,
    }))
}

/// POST /api/v1/attributes/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let settings = GenerateSettings {
        model: &state.config.openai_model,
        default_profile: state.config.prompt_profile,
    };

    let response = generate_attributes(
        &state.store,
        state.reconciler.as_deref(),
        settings,
        &request,
    )
    .await?;

    Ok(Json(response))
}
