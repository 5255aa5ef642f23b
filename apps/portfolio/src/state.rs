use std::sync::Arc;

use crate::config::Config;
use crate::render::TemplateSet;
use crate::store::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only once the server is listening.
#[derive(Clone)]
pub struct AppState {
    /// Content reads. `PgContentStore` in production, `MemoryStore` in tests.
    pub store: Arc<dyn ContentStore>,
    pub templates: Arc<TemplateSet>,
    pub config: Config,
}
