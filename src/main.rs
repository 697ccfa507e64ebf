//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use feedback_pulse::adapters::ai::{GeminiAdapter, MockAiAdapter, OpenAiAdapter};
use feedback_pulse::adapters::ui::tui::TuiInputPort;
use feedback_pulse::ports::{InputPort, LanguageModelPort};
use feedback_pulse::shared::config::{AppConfig, ModelProvider};
use feedback_pulse::usecases::AnalysisService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    feedback_pulse::adapters::ui::init_ui();

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    let provider = cfg.provider().map_err(|e| anyhow::anyhow!("{}", e))?;

    let model = build_model(&cfg, provider);
    info!(model = %model.describe(), "language model ready");

    let service = Arc::new(AnalysisService::new(model));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(service));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

/// Construct the configured model adapter.
///
/// A missing key is not fatal: it is passed through empty and the provider's
/// rejection shows up as an "API call error" in the UI.
fn build_model(cfg: &AppConfig, provider: ModelProvider) -> Arc<dyn LanguageModelPort> {
    let api_url = cfg.api_url_or_default(provider);
    let model = cfg.model_or_default(provider);
    let api_key = || {
        cfg.api_key(provider).unwrap_or_else(|| {
            warn!(%provider, "API key is not set (PULSE_API_KEY / GOOGLE_API_KEY / OPENAI_API_KEY)");
            String::new()
        })
    };

    match provider {
        ModelProvider::Mock => {
            warn!("using mock language model, no API calls will be made");
            Arc::new(MockAiAdapter::with_delay(cfg.mock_delay_ms_or_default()))
        }
        ModelProvider::OpenAi => {
            info!(model = %model, url = %api_url, "OpenAI-compatible provider enabled");
            Arc::new(OpenAiAdapter::new(api_url, api_key(), model))
        }
        ModelProvider::Gemini => {
            info!(model = %model, url = %api_url, "Gemini provider enabled");
            Arc::new(GeminiAdapter::new(api_url, api_key(), model))
        }
    }
}
