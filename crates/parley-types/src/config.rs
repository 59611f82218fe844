//! Chat configuration for Parley.
//!
//! `ChatConfig` binds a provider endpoint, credential, and model choice
//! into one value. Client handles are memoized per distinct configuration,
//! so the type implements `Eq` and `Hash` over every field (including the
//! exposed credential -- two configs with different keys are different
//! clients).

use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

/// Default OpenRouter endpoint root.
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Configuration for one chat provider client.
///
/// Read-only after construction; the API key stays wrapped in a
/// [`SecretString`] so accidental `Debug` output redacts it.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Endpoint root, e.g. `https://openrouter.ai/api/v1`.
    pub base_url: String,
    /// Credential for the endpoint.
    pub api_key: SecretString,
    /// Model identifier to request completions from.
    pub model: String,
    /// Sampling temperature; `None` leaves the provider default.
    pub temperature: Option<f64>,
    /// Completion token cap; `None` leaves the provider default.
    pub max_tokens: Option<u32>,
}

impl ChatConfig {
    /// Create a configuration with no sampling overrides.
    pub fn new(
        base_url: impl Into<String>,
        api_key: SecretString,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Create a configuration against the default OpenRouter endpoint.
    pub fn openrouter(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(
            OPENROUTER_BASE_URL,
            SecretString::from(api_key.into()),
            model,
        )
    }

    /// The same configuration pointed at a different model.
    pub fn with_model(&self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self.clone()
        }
    }

    /// Check that the endpoint and credential are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the base URL, API key, or
    /// model is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base URL is empty".to_string()));
        }
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::Invalid("API key is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model identifier is empty".to_string()));
        }
        Ok(())
    }
}

// SecretString implements neither Eq nor Hash, and f64 has no Eq, so
// configuration identity is spelled out by hand. Temperature compares by
// bit pattern, which is exact for any value a config would carry.
impl PartialEq for ChatConfig {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && self.api_key.expose_secret() == other.api_key.expose_secret()
            && self.model == other.model
            && self.temperature.map(f64::to_bits) == other.temperature.map(f64::to_bits)
            && self.max_tokens == other.max_tokens
    }
}

impl Eq for ChatConfig {}

impl Hash for ChatConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base_url.hash(state);
        self.api_key.expose_secret().hash(state);
        self.model.hash(state);
        self.temperature.map(f64::to_bits).hash(state);
        self.max_tokens.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openrouter_defaults() {
        let config = ChatConfig::openrouter("sk-test", "openai/gpt-4o");
        assert_eq!(config.base_url, OPENROUTER_BASE_URL);
        assert_eq!(config.model, "openai/gpt-4o");
        assert!(config.temperature.is_none());
        assert!(config.max_tokens.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let config = ChatConfig::new("", SecretString::from("sk-test"), "gpt-4o");
        assert!(config.validate().is_err());

        let config = ChatConfig::new("https://example.com/v1", SecretString::from(""), "gpt-4o");
        assert!(config.validate().is_err());

        let config = ChatConfig::new("https://example.com/v1", SecretString::from("sk-test"), " ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_identity() {
        let a = ChatConfig::openrouter("sk-test", "openai/gpt-4o");
        let b = ChatConfig::openrouter("sk-test", "openai/gpt-4o");
        assert_eq!(a, b);

        let other_model = a.with_model("mistralai/mistral-large");
        assert_ne!(a, other_model);

        let other_key = ChatConfig::openrouter("sk-other", "openai/gpt-4o");
        assert_ne!(a, other_key);
    }

    #[test]
    fn test_with_model_keeps_everything_else() {
        let mut config = ChatConfig::openrouter("sk-test", "openai/gpt-4o");
        config.temperature = Some(0.7);
        let switched = config.with_model("anthropic/claude-sonnet-4");
        assert_eq!(switched.model, "anthropic/claude-sonnet-4");
        assert_eq!(switched.base_url, config.base_url);
        assert_eq!(switched.temperature, Some(0.7));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ChatConfig::openrouter("sk-very-secret", "openai/gpt-4o");
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-very-secret"));
    }
}
