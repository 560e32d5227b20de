use textrelay_common::AppConfig;
use textrelay_llm::OpenRouterClient;

/// Shared application state
///
/// Injected into every handler; there is no process-wide singleton.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Completion relay client
    pub relay: OpenRouterClient,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        let relay =
            OpenRouterClient::new(config.upstream_base_url.as_str(), config.http_referer.as_str());
        Self { config, relay }
    }
}
