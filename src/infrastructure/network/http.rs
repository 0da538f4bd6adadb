// HTTP client utilities
use crate::domain::error::DetectError;
use crate::infrastructure::config::Config;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Build the shared HTTP client from config (timeout, optional proxy).
pub fn create_client(config: &Config) -> Result<Client, DetectError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("langid/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = Proxy::all(proxy)
            .map_err(|e| DetectError::Config(format!("Invalid http_proxy '{}': {}", proxy, e)))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| DetectError::Config(format!("Failed to build HTTP client: {}", e)))
}
