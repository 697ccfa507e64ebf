//! Application configuration. Provider selection, API credentials, model names.

use crate::domain::DomainError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MOCK_DELAY_MS: u64 = 100;

/// Which language model backend to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelProvider {
    #[default]
    Gemini,
    OpenAi,
    Mock,
}

impl FromStr for ModelProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            "mock" => Ok(Self::Mock),
            other => Err(DomainError::Config(format!(
                "unknown provider '{}' (expected gemini, openai or mock)",
                other
            ))),
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Mock => "mock",
        })
    }
}

/// Accepts a number or a numeric string (env values arrive as strings).
/// Anything else becomes `None`.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match &value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    if value.is_some() && parsed.is_none() {
        warn!(value = ?value, "ignoring invalid mock_delay_ms");
    }
    Ok(parsed)
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Provider name: gemini (default), openai or mock. Read from PULSE_PROVIDER.
    #[serde(default)]
    pub provider: Option<String>,

    /// Provider API key. Read from PULSE_API_KEY, falling back to GOOGLE_API_KEY / OPENAI_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name. Read from PULSE_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// API root (Gemini) or chat-completions endpoint (OpenAI). Read from PULSE_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Simulated latency of the mock provider. Read from PULSE_MOCK_DELAY_MS.
    /// Unparsable values are ignored rather than failing the whole config.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub mock_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("PULSE"));
        if let Ok(path) = std::env::var("PULSE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Selected provider. Defaults to Gemini.
    pub fn provider(&self) -> Result<ModelProvider, DomainError> {
        match &self.provider {
            Some(name) => name.parse(),
            None => Ok(ModelProvider::default()),
        }
    }

    /// API key for `provider`, if any is configured.
    ///
    /// Order: config / PULSE_API_KEY, then the provider's conventional variable.
    pub fn api_key(&self, provider: ModelProvider) -> Option<String> {
        self.api_key.clone().or_else(|| match provider {
            ModelProvider::Gemini => std::env::var("GOOGLE_API_KEY").ok(),
            ModelProvider::OpenAi => std::env::var("OPENAI_API_KEY").ok(),
            ModelProvider::Mock => None,
        })
    }

    /// Returns the model name. Defaults per provider.
    pub fn model_or_default(&self, provider: ModelProvider) -> String {
        self.model.clone().unwrap_or_else(|| {
            match provider {
                ModelProvider::OpenAi => DEFAULT_OPENAI_MODEL,
                ModelProvider::Gemini | ModelProvider::Mock => DEFAULT_GEMINI_MODEL,
            }
            .to_string()
        })
    }

    /// Returns the API URL. Defaults per provider.
    pub fn api_url_or_default(&self, provider: ModelProvider) -> String {
        self.api_url.clone().unwrap_or_else(|| {
            match provider {
                ModelProvider::OpenAi => DEFAULT_OPENAI_API_URL,
                ModelProvider::Gemini | ModelProvider::Mock => DEFAULT_GEMINI_API_URL,
            }
            .to_string()
        })
    }

    /// Returns mock delay in milliseconds. Defaults to 100.
    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(DEFAULT_MOCK_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse() {
        assert_eq!("Gemini".parse::<ModelProvider>().unwrap(), ModelProvider::Gemini);
        assert_eq!(" OPENAI ".parse::<ModelProvider>().unwrap(), ModelProvider::OpenAi);
        assert_eq!("mock".parse::<ModelProvider>().unwrap(), ModelProvider::Mock);
        let err = "claude-ish".parse::<ModelProvider>().unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_provider_defaults_to_gemini() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.provider().unwrap(), ModelProvider::Gemini);
    }

    #[test]
    fn test_per_provider_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.model_or_default(ModelProvider::Gemini), DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.model_or_default(ModelProvider::OpenAi), DEFAULT_OPENAI_MODEL);
        assert_eq!(cfg.api_url_or_default(ModelProvider::Gemini), DEFAULT_GEMINI_API_URL);
        assert_eq!(cfg.api_url_or_default(ModelProvider::OpenAi), DEFAULT_OPENAI_API_URL);
        assert_eq!(cfg.mock_delay_ms_or_default(), DEFAULT_MOCK_DELAY_MS);
    }

    #[test]
    fn test_explicit_values_win() {
        let cfg = AppConfig {
            provider: Some("openai".to_string()),
            api_key: Some("sk-explicit".to_string()),
            model: Some("llama3.2".to_string()),
            api_url: Some("http://localhost:11434/v1/chat/completions".to_string()),
            mock_delay_ms: Some(5),
        };
        let provider = cfg.provider().unwrap();
        assert_eq!(provider, ModelProvider::OpenAi);
        assert_eq!(cfg.api_key(provider).as_deref(), Some("sk-explicit"));
        assert_eq!(cfg.model_or_default(provider), "llama3.2");
        assert_eq!(
            cfg.api_url_or_default(provider),
            "http://localhost:11434/v1/chat/completions"
        );
        assert_eq!(cfg.mock_delay_ms_or_default(), 5);
    }

    #[test]
    fn test_mock_needs_no_key() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_key(ModelProvider::Mock), None);
    }

    /// Every variable `load` and `api_key` look at, cleared unless overridden.
    fn env_with<'a>(overrides: &[(&'a str, &'a str)]) -> Vec<(&'a str, Option<&'a str>)> {
        let mut vars: Vec<(&str, Option<&str>)> = [
            "PULSE_PROVIDER",
            "PULSE_API_KEY",
            "PULSE_MODEL",
            "PULSE_API_URL",
            "PULSE_MOCK_DELAY_MS",
            "PULSE_CONFIG",
            "GOOGLE_API_KEY",
            "OPENAI_API_KEY",
        ]
        .into_iter()
        .map(|k| (k, None))
        .collect();
        for (key, value) in overrides {
            match vars.iter_mut().find(|slot| slot.0 == *key) {
                Some(slot) => slot.1 = Some(*value),
                None => vars.push((*key, Some(*value))),
            }
        }
        vars
    }

    #[test]
    fn test_load_reads_prefixed_env() {
        let vars = env_with(&[
            ("PULSE_PROVIDER", "openai"),
            ("PULSE_API_KEY", "sk-from-env"),
            ("PULSE_MODEL", "gpt-4.1-mini"),
            ("PULSE_API_URL", "http://localhost:8080/v1/chat/completions"),
            ("PULSE_MOCK_DELAY_MS", "25"),
        ]);
        temp_env::with_vars(vars, || {
            let cfg = AppConfig::load().unwrap();
            let provider = cfg.provider().unwrap();
            assert_eq!(provider, ModelProvider::OpenAi);
            assert_eq!(cfg.api_key(provider).as_deref(), Some("sk-from-env"));
            assert_eq!(cfg.model_or_default(provider), "gpt-4.1-mini");
            assert_eq!(
                cfg.api_url_or_default(provider),
                "http://localhost:8080/v1/chat/completions"
            );
            assert_eq!(cfg.mock_delay_ms_or_default(), 25);
        });
    }

    #[test]
    fn test_load_with_nothing_set_uses_defaults() {
        temp_env::with_vars(env_with(&[]), || {
            let cfg = AppConfig::load().unwrap();
            let provider = cfg.provider().unwrap();
            assert_eq!(provider, ModelProvider::Gemini);
            assert_eq!(cfg.api_key(provider), None);
            assert_eq!(cfg.model_or_default(provider), DEFAULT_GEMINI_MODEL);
            assert_eq!(cfg.mock_delay_ms_or_default(), DEFAULT_MOCK_DELAY_MS);
        });
    }

    #[test]
    fn test_key_falls_back_per_provider() {
        let vars = env_with(&[
            ("GOOGLE_API_KEY", "google-key"),
            ("OPENAI_API_KEY", "openai-key"),
        ]);
        temp_env::with_vars(vars, || {
            let cfg = AppConfig::load().unwrap();
            assert_eq!(
                cfg.api_key(ModelProvider::Gemini).as_deref(),
                Some("google-key")
            );
            assert_eq!(
                cfg.api_key(ModelProvider::OpenAi).as_deref(),
                Some("openai-key")
            );
            assert_eq!(cfg.api_key(ModelProvider::Mock), None);
        });
    }

    #[test]
    fn test_prefixed_key_beats_provider_key() {
        let vars = env_with(&[
            ("PULSE_API_KEY", "pulse-key"),
            ("GOOGLE_API_KEY", "google-key"),
        ]);
        temp_env::with_vars(vars, || {
            let cfg = AppConfig::load().unwrap();
            assert_eq!(
                cfg.api_key(ModelProvider::Gemini).as_deref(),
                Some("pulse-key")
            );
        });
    }

    #[test]
    fn test_bad_delay_keeps_rest_of_config() {
        let vars = env_with(&[
            ("PULSE_PROVIDER", "openai"),
            ("PULSE_MOCK_DELAY_MS", "abc"),
        ]);
        temp_env::with_vars(vars, || {
            let cfg = AppConfig::load().unwrap();
            assert_eq!(cfg.provider().unwrap(), ModelProvider::OpenAi);
            assert_eq!(cfg.mock_delay_ms, None);
            assert_eq!(cfg.mock_delay_ms_or_default(), DEFAULT_MOCK_DELAY_MS);
        });
    }
}
