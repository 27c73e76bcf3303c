use crate::{
    error::{Result, SdGateError},
    models::{GatewayImageResponse, ImageGenerationRequest, ModelKey},
    prompt,
};
use serde_json::json;

/// First entry of every payload's metadata tags.
pub const METADATA_TAG: &str = "sdgate";

#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    api_key: String,
    image_url: String,
}

impl ImageClient {
    pub(crate) fn new(http: reqwest::Client, api_key: String, image_url: String) -> Self {
        Self {
            http,
            api_key,
            image_url,
        }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        ModelKey::all()
            .iter()
            .map(|model| (model.as_key(), model.backend_id(), model.price_hint()))
            .collect()
    }

    /// Build the wire payload for a request. Pure; the shape is decided
    /// entirely by the model family.
    ///
    /// The full prompt is forwarded as-is in both shapes, including any
    /// "negative:" clause; only the non-sdxl shape additionally carries the
    /// extracted text as `negative_prompt`, with the literal "None" when the
    /// marker is absent. Both quirks are wire compatibility with existing
    /// gateway clients.
    pub fn build_payload(request: &ImageGenerationRequest) -> serde_json::Value {
        let model_id = request.model.backend_id();

        let mut payload = if request.model.is_sdxl_family() {
            json!({
                "prompt": request.prompt,
                "cfg_scale": 7,
                "height": 1024,
                "width": 1024,
                "samples": 1,
                "steps": 30,
                "response_format": "b64_json",
                "model": model_id
            })
        } else {
            json!({
                "prompt": request.prompt,
                "negative_prompt": prompt::extract_negative(&request.prompt)
                    .unwrap_or_else(|| "None".to_string()),
                "mode": "text-to-image",
                "model": model_id,
                "aspect_ratio": "1:1",
                "response_format": "b64_json"
            })
        };

        let requester = request.requester.clone().unwrap_or_default();
        payload["metadata"] = json!({
            "tags": [
                METADATA_TAG,
                model_id,
                requester.email_tag(),
                requester.name_tag()
            ]
        });

        payload
    }

    /// Submit a built payload to the gateway. One attempt, no retry.
    pub async fn generate(&self, payload: &serde_json::Value) -> Result<GatewayImageResponse> {
        log::info!("Submitting image generation request to {}", self.image_url);
        log::debug!("Image generation payload: {}", payload);

        let response = self
            .http
            .post(&self.image_url)
            .header("X-API-KEY", &self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| SdGateError::BackendError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdGateError::BackendError(format!(
                "gateway returned {}: {}",
                status, body
            )));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SdGateError::ResponseError(e.to_string()))?;

        if !value
            .as_object()
            .map_or(false, |object| object.contains_key("data"))
        {
            return Err(SdGateError::ResponseError(format!(
                "Unexpected response format: {}",
                value
            )));
        }

        serde_json::from_value(value).map_err(|e| SdGateError::ResponseError(e.to_string()))
    }
}
