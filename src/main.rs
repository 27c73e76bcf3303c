use async_trait::async_trait;
use sdgate::{
    ArtifactCache, ChatBody, ChatMessage, Config, Event, EventSink, GatewayClient,
    ImageGenerationAction, InputPrompt, InputRequest, Requester, Result,
};
use std::env;
use std::io::{self, BufRead, Write};

/// Prints status updates through the logger and image references to stdout.
struct ConsoleEvents;

#[async_trait]
impl EventSink for ConsoleEvents {
    async fn emit(&self, event: Event) -> Result<()> {
        match event {
            Event::Status { description, done } => {
                if done {
                    log::info!("🏁 {}", description);
                } else {
                    log::info!("{}", description);
                }
            }
            Event::Message { content } => {
                print!("{}", content);
            }
        }
        Ok(())
    }
}

/// Reads the model choice from the terminal, off the runtime so the reactor
/// keeps turning while we wait.
struct StdinPrompt;

#[async_trait]
impl InputPrompt for StdinPrompt {
    async fn request(&self, request: InputRequest) -> Result<Option<String>> {
        println!("{}", request.title);
        println!("{}", request.message);
        print!("{}> ", request.placeholder);
        let _ = io::stdout().flush();

        let line = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await
        .map_err(|e| sdgate::SdGateError::RequestError(e.to_string()))?
        .map_err(|e| sdgate::SdGateError::RequestError(e.to_string()))?;

        let line = line.trim().to_string();
        Ok(if line.is_empty() { None } else { Some(line) })
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    sdgate::logger::init_with_config(
        sdgate::logger::LoggerConfig::development()
            .with_level(sdgate::logger::LogLevel::Debug),
    )?;

    let config = Config::from_env();
    let gateway_config = config.gateway.unwrap_or_default();
    let cache_config = config.cache.unwrap_or_default();

    log::info!("🔄 Creating gateway client...");
    let gateway = match GatewayClient::new(gateway_config) {
        Ok(gateway) => {
            log::info!("✅ Gateway client initialized successfully");
            gateway
        }
        Err(e) => {
            log::error!("❌ Failed to initialize gateway client: {}", e);
            log::warn!("💡 Set SDGATE_API_KEY and SDGATE_IMAGE_URL");
            return Err(e.into());
        }
    };

    let cache_root = cache_config
        .root
        .unwrap_or_else(|| env::temp_dir().join("sdgate-cache"));
    log::info!("📁 Cache root: {}", cache_root.display());
    let cache = ArtifactCache::new(&cache_root)?;

    log::info!("🖼️  Available image generation models:");
    for (key, id, price) in sdgate::ImageClient::supported_models() {
        log::info!("  {} - {} ({})", key, id, price);
    }

    let prompt = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let prompt = if prompt.is_empty() {
        "A serene landscape with mountains and a lake at sunset, digital art style".to_string()
    } else {
        prompt
    };
    log::info!("📝 Prompt: {}", prompt);

    let body = ChatBody {
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt,
        }],
    };
    let requester = Requester::new("demo@sdgate.local", "sdgate demo");

    let action = ImageGenerationAction::new(gateway, cache);
    action
        .run(&body, Some(&requester), &ConsoleEvents, &StdinPrompt)
        .await;

    log::info!("💡 Check {} for generated artifacts", cache_root.display());
    Ok(())
}
