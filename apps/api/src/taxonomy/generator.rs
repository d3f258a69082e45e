//! Attribute generation pipeline:
//! credential check → input check → reference lookup → domain → prompt → one LLM call.
//!
//! Every input error short-circuits before the model is called. Model output that
//! is not a JSON object is still returned, just without the parsed map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::taxonomy::domain::classify_domain;
use crate::taxonomy::hs_code::heading;
use crate::taxonomy::prompt_builder::{build_reconciliation_prompt, PromptInputs, PromptProfile};
use crate::taxonomy::reconciler::AttributeReconciler;
use crate::taxonomy::reference_store::ReferenceStore;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub hs_code: String,
    pub item_description: String,
    /// Overrides the configured prompt profile for this request.
    #[serde(default)]
    pub profile: Option<PromptProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub hs4: String,
    pub domain: String,
    pub profile: PromptProfile,
    /// The exact prompt sent to the model, for inspection.
    pub prompt: String,
    pub raw_output: String,
    /// Parsed flat attribute map; `None` when the output is not a JSON object.
    pub attributes: Option<Map<String, Value>>,
}

/// Settings that apply to every generation request.
#[derive(Debug, Clone, Copy)]
pub struct GenerateSettings<'a> {
    pub model: &'a str,
    pub default_profile: PromptProfile,
}

pub async fn generate_attributes(
    store: &ReferenceStore,
    reconciler: Option<&dyn AttributeReconciler>,
    settings: GenerateSettings<'_>,
    request: &GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let reconciler = reconciler.ok_or_else(|| {
        AppError::MissingCredential("OpenAI API key is not configured".to_string())
    })?;

    let hs_code = request.hs_code.trim();
    let item_description = request.item_description.trim();
    if hs_code.is_empty() || item_description.is_empty() {
        return Err(AppError::Validation(
            "hs_code and item_description are both required".to_string(),
        ));
    }

    let hs4 = heading(hs_code);
    let reference_attributes = store
        .fetch_parent_attributes(&hs4)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No reference attributes found for HS4 {hs4}"))
        })?;

    let domain = classify_domain(hs_code);
    let profile = request.profile.unwrap_or(settings.default_profile);
    info!(hs4 = %hs4, domain, profile = %profile, "Generating customer attributes");

    let prompt = build_reconciliation_prompt(
        profile,
        &PromptInputs {
            hs_code,
            domain,
            item_description,
            reference_attributes: &reference_attributes,
        },
    );

    let raw_output = reconciler
        .reconcile(&prompt, settings.model)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let attributes = parse_attribute_map(&raw_output);
    match &attributes {
        Some(map) => info!(hs4 = %hs4, attribute_count = map.len(), "Attributes generated"),
        None => warn!(hs4 = %hs4, "Model output is not a JSON object; returning raw text only"),
    }

    Ok(GenerateResponse {
        hs4,
        domain: domain.to_string(),
        profile,
        prompt,
        raw_output,
        attributes,
    })
}

/// Parses model output as a JSON object, tolerating markdown code fences.
/// No further shape checks are applied.
pub fn parse_attribute_map(raw: &str) -> Option<Map<String, Value>> {
    serde_json::from_str::<Map<String, Value>>(strip_json_fences(raw)).ok()
}

#[cfg(test)]
pub mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::LlmError;
    use crate::taxonomy::reconciler::AttributeReconciler;

    /// Fake engine that records every call and answers with a fixed reply.
    pub struct RecordingReconciler {
        reply: Result<String, (u16, String)>,
        pub calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingReconciler {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16, message: &str) -> Self {
            Self {
                reply: Err((status, message.to_string())),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AttributeReconciler for RecordingReconciler {
        async fn reconcile(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), model.to_string()));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err((status, message)) => Err(LlmError::Api {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }
}
