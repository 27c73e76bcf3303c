use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub image_url: Option<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gateway: Option<GatewayConfig>,
    pub cache: Option<CacheConfig>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            api_key: None,
            image_url: None,
            timeout: None,
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("SDGATE_API_KEY").ok();
        let image_url = env::var("SDGATE_IMAGE_URL").ok();
        let timeout = env::var("SDGATE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);

        GatewayConfig {
            api_key,
            image_url,
            timeout,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Request timeout for gateway calls. Left unset, the HTTP client's own
    /// default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig { root: None }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let root = env::var("SDGATE_CACHE_DIR").ok().map(PathBuf::from);

        CacheConfig { root }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gateway: None,
            cache: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Config {
            gateway: Some(GatewayConfig::from_env()),
            cache: Some(CacheConfig::from_env()),
        }
    }

    pub fn with_gateway(mut self, config: GatewayConfig) -> Self {
        self.gateway = Some(config);
        self
    }

    pub fn with_cache(mut self, config: CacheConfig) -> Self {
        self.cache = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = GatewayConfig::new()
            .with_api_key("sk-test")
            .with_image_url("https://gateway.example.com/images/generations")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(
            config.image_url.as_deref(),
            Some("https://gateway.example.com/images/generations")
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_defaults_are_empty() {
        let config = Config::new();
        assert!(config.gateway.is_none());
        assert!(config.cache.is_none());

        let gateway = GatewayConfig::default();
        assert!(gateway.timeout.is_none());
    }
}
