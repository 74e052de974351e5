use crate::config::Config;
use crate::llm_client::GenerationClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every report run is independent.
#[derive(Clone)]
pub struct AppState {
    pub llm: GenerationClient,
    pub config: Config,
}
