//! Adapter Factory
//!
//! Creates the LLM adapter from resolved configuration.

use crate::config::Config;
use crate::llm::adapters::gemini::GeminiAdapter;
use crate::llm::adapters::transport::{ReqwestTransport, Transport};
use crate::llm::adapters::AdapterError;
use std::time::Duration;
use tracing::warn;

/// Create adapter from configuration
///
/// A missing API key only warns; the first call will fail with an
/// authentication error instead.
pub fn create_adapter_from_config(config: &Config) -> Result<GeminiAdapter, AdapterError> {
    if !config.has_api_key() {
        warn!("No API key configured (set API_KEY); generation requests will fail");
    }

    let transport = match config.timeout_secs {
        Some(secs) => ReqwestTransport::with_timeout(Duration::from_secs(secs))?,
        None => ReqwestTransport::new(),
    };

    Ok(GeminiAdapter::with_transport(
        config.base_url.clone(),
        config.model.clone(),
        config.api_key.clone(),
        Transport::Real(transport),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::adapters::LlmAdapter;

    #[test]
    fn test_factory_uses_config_values() {
        let config = Config {
            api_key: "k".to_string(),
            model: "gemini-x".to_string(),
            base_url: "http://localhost:9999".to_string(),
            timeout_secs: Some(5),
            log_dir: None,
        };
        let adapter = create_adapter_from_config(&config).unwrap();
        assert_eq!(adapter.provider_name(), "gemini");
        assert_eq!(adapter.model(), "gemini-x");
        assert_eq!(
            adapter.endpoint(),
            "http://localhost:9999/models/gemini-x:generateContent"
        );
        assert!(matches!(adapter.transport(), Transport::Real(_)));
    }

    #[test]
    fn test_factory_without_key_still_builds() {
        let adapter = create_adapter_from_config(&Config::default());
        assert!(adapter.is_ok());
    }
}
