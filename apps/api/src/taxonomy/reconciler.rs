//! Reconciliation Engine seam. The engine is opaque: one prompt in, raw text out.
//!
//! `AppState` holds an `Arc<dyn AttributeReconciler>` so tests can swap in a fake
//! without touching handlers.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};
use crate::taxonomy::prompts::RECONCILE_SYSTEM;

#[async_trait]
pub trait AttributeReconciler: Send + Sync {
    /// Runs one reconciliation call and returns the model's raw output,
    /// expected (but not guaranteed) to be a JSON object.
    async fn reconcile(&self, prompt: &str, model: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl AttributeReconciler for LlmClient {
    async fn reconcile(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        self.call_text(prompt, RECONCILE_SYSTEM, model).await
    }
}
