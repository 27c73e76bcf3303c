pub mod action;
pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod models;
pub mod prompt;

pub use action::{Event, EventSink, ImageGenerationAction, InputPrompt, InputRequest};
pub use cache::ArtifactCache;
pub use config::{CacheConfig, Config, GatewayConfig};
pub use error::{Result, SdGateError};
pub use gateway::{GatewayClient, ImageClient};
pub use models::*;
