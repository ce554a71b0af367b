use std::sync::Arc;

use survey_config::ServerConfig;
use survey_db::service::SurveyService;

/// Shared, read-only application state handed to every handler.
pub struct AppState {
    pub service: SurveyService,
    pub server: ServerConfig,
}

impl AppState {
    pub fn new(service: SurveyService, server: ServerConfig) -> Arc<Self> {
        Arc::new(Self { service, server })
    }
}
