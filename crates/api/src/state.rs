use std::sync::Arc;

use ecobin_vision::{GeminiClient, ImaggaClient};

use crate::config::{ServerConfig, VisionProvider};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ecobin_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image-classification clients for `/recycling/analyze`.
    pub vision: Arc<VisionClients>,
}

/// Both classification clients plus the configured provider selection.
pub struct VisionClients {
    pub provider: VisionProvider,
    pub gemini: GeminiClient,
    pub imagga: ImaggaClient,
}

impl VisionClients {
    /// Build the clients from server configuration, honoring the base
    /// URL overrides when set.
    pub fn from_config(config: &ServerConfig) -> Self {
        let gemini = match &config.gemini_api_url {
            Some(url) => GeminiClient::with_base_url(config.gemini_api_key.clone(), url.clone()),
            None => GeminiClient::new(config.gemini_api_key.clone()),
        };
        let imagga = match &config.imagga_api_url {
            Some(url) => ImaggaClient::with_base_url(
                config.imagga_api_key.clone(),
                config.imagga_api_secret.clone(),
                url.clone(),
            ),
            None => ImaggaClient::new(
                config.imagga_api_key.clone(),
                config.imagga_api_secret.clone(),
            ),
        };
        Self {
            provider: config.recycling_provider,
            gemini,
            imagga,
        }
    }
}
