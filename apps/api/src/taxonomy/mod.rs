// HS attribute reconciliation: domain classification, parent attribute lookup,
// prompt construction, and the single LLM call that reconciles them.
// All LLM calls go through llm_client; the reconciliation itself is never done locally.

pub mod domain;
pub mod generator;
pub mod handlers;
pub mod hs_code;
pub mod prompt_builder;
pub mod prompts;
pub mod reconciler;
pub mod reference_store;
