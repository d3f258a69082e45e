use std::sync::Arc;

use crate::config::Config;
use crate::taxonomy::reconciler::AttributeReconciler;
use crate::taxonomy::reference_store::ReferenceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ReferenceStore,
    /// `None` when no API key is configured; generation is then refused up front.
    pub reconciler: Option<Arc<dyn AttributeReconciler>>,
    pub config: Config,
}
