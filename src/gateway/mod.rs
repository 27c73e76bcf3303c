pub mod image_client;

use crate::{
    config::GatewayConfig,
    error::{Result, SdGateError},
};

pub use image_client::ImageClient;

#[derive(Clone)]
pub struct GatewayClient {
    image_client: ImageClient,
}

impl GatewayClient {
    pub fn new(gateway_config: GatewayConfig) -> Result<Self> {
        let api_key = gateway_config
            .api_key
            .ok_or_else(|| SdGateError::ConfigError("gateway API key is required".into()))?;
        let image_url = gateway_config
            .image_url
            .ok_or_else(|| SdGateError::ConfigError("gateway image URL is required".into()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = gateway_config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SdGateError::ConfigError(e.to_string()))?;

        Ok(Self {
            image_client: ImageClient::new(http, api_key, image_url),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
