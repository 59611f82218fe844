//! Environment configuration loading.
//!
//! Credentials and the endpoint root come from environment variables, the
//! same contract the original deployment used:
//!
//! - `OPENROUTER_API_KEY` -- credential, required
//! - `BASE_URL` -- endpoint root, required
//! - `MODEL_NAME` -- preferred model, optional (the CLI reads it through
//!   clap's `env` support and falls back to the catalog default)
//!
//! Every missing required variable is reported in one error so the user
//! can fix the whole environment at once.

use secrecy::SecretString;

use parley_types::config::ChatConfig;
use parley_types::error::ConfigError;

/// Required: the API credential.
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
/// Required: the endpoint root, e.g. `https://openrouter.ai/api/v1`.
pub const BASE_URL_VAR: &str = "BASE_URL";
/// Optional: the preferred model identifier.
pub const MODEL_VAR: &str = "MODEL_NAME";

/// Read a variable, treating absent, empty, and non-unicode values as unset.
fn var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        // Non-unicode values cannot be credentials or URLs; treat as unset
        _ => None,
    }
}

/// Load the chat configuration from the environment.
///
/// `model` is the already-resolved model identifier (the catalog default
/// or the user's `MODEL_NAME`/`--model` choice).
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnv`] naming every required variable
/// that is absent or empty. This is fatal and surfaces before any
/// conversation turn is accepted.
pub fn load_config(model: &str) -> Result<ChatConfig, ConfigError> {
    match (var(API_KEY_VAR), var(BASE_URL_VAR)) {
        (Some(api_key), Some(base_url)) => Ok(ChatConfig::new(
            base_url,
            SecretString::from(api_key),
            model,
        )),
        (api_key, base_url) => {
            let mut names = Vec::new();
            if api_key.is_none() {
                names.push(API_KEY_VAR);
            }
            if base_url.is_none() {
                names.push(BASE_URL_VAR);
            }
            Err(ConfigError::MissingEnv { names })
        }
    }
}
