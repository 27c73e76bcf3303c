pub mod events;

use crate::{
    cache::ArtifactCache,
    error::{Result, SdGateError},
    gateway::{GatewayClient, ImageClient},
    models::{ChatBody, ImageArtifact, ImageGenerationRequest, ModelKey, Requester},
};

pub use events::{Event, EventSink, InputPrompt, InputRequest};

/// One generation round for a chat plugin host: ask the user for a model,
/// build the payload from the transcript's last message, call the gateway,
/// persist every returned image, and report progress through the sink.
pub struct ImageGenerationAction {
    gateway: GatewayClient,
    cache: ArtifactCache,
}

impl ImageGenerationAction {
    pub fn new(gateway: GatewayClient, cache: ArtifactCache) -> Self {
        Self { gateway, cache }
    }

    /// Run a round against the host collaborators.
    ///
    /// The host observes the outcome only through the status channel, so
    /// every failure ends up as a terminal status here instead of a returned
    /// error.
    pub async fn run(
        &self,
        body: &ChatBody,
        requester: Option<&Requester>,
        events: &dyn EventSink,
        input: &dyn InputPrompt,
    ) {
        if let Err(err) = self.execute(body, requester, events, input).await {
            log::error!("Image generation failed: {}", err);
            let _ = events
                .emit(Event::status(format!("Error generating image: {}", err), true))
                .await;
        }
    }

    /// Typed inner flow. Returns the persisted artifacts; an empty list means
    /// the round ended before the gateway was called (no model picked).
    pub async fn execute(
        &self,
        body: &ChatBody,
        requester: Option<&Requester>,
        events: &dyn EventSink,
        input: &dyn InputPrompt,
    ) -> Result<Vec<ImageArtifact>> {
        let model = match self.select_model(input).await {
            Ok(model) => model,
            Err(SdGateError::SelectionError(reason)) => {
                log::warn!("No model selected: {}", reason);
                events
                    .emit(Event::status("You didn't pick a model!", true))
                    .await?;
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        // Validate on the trimmed text, but forward the prompt untouched.
        let prompt = body
            .last_content()
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| SdGateError::RequestError("prompt is empty".into()))?;

        events
            .emit(Event::status("Generating Stable Diffusion Image...", false))
            .await?;

        let request = ImageGenerationRequest {
            prompt: prompt.to_string(),
            model,
            requester: requester.cloned(),
        };
        let payload = ImageClient::build_payload(&request);
        let response = self.gateway.image().generate(&payload).await?;

        let mut artifacts = Vec::new();
        for image in &response.data {
            let artifact = self.cache.save_b64_image(&image.b64_json, &payload)?;
            events
                .emit(Event::message(format!(
                    "![Generated Image]({})\n",
                    artifact.url
                )))
                .await?;
            artifacts.push(artifact);
        }

        events
            .emit(Event::status("Image generated successfully", true))
            .await?;

        Ok(artifacts)
    }

    async fn select_model(&self, input: &dyn InputPrompt) -> Result<ModelKey> {
        let keys: Vec<&str> = ModelKey::all().iter().map(|m| m.as_key()).collect();
        let prices: Vec<&str> = ModelKey::all().iter().map(|m| m.price_hint()).collect();

        let answer = input
            .request(InputRequest {
                title: format!("Enter the SD Model ({})", keys.join(", ")),
                message: prices.join(", "),
                placeholder: "Enter the model name".to_string(),
            })
            .await?;

        match answer.as_deref().and_then(ModelKey::parse) {
            Some(model) => Ok(model),
            None => Err(SdGateError::SelectionError(format!(
                "got {:?}, expected one of: {}",
                answer,
                keys.join(", ")
            ))),
        }
    }
}
