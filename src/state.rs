use crate::domain::error::DetectError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::HttpDetectionService;
use crate::infrastructure::network::http::create_client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<HttpDetectionService>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, DetectError> {
        let http_client = create_client(&config)?;
        let service = HttpDetectionService::new(http_client, &config);

        Ok(Self {
            config: Arc::new(config),
            service: Arc::new(service),
        })
    }
}
