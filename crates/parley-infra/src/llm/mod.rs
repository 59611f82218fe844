//! Chat client construction and caching.
//!
//! [`ClientFactory`] memoizes one provider handle per distinct
//! [`ChatConfig`]: the first `get_client` call with a configuration
//! constructs and caches the handle, later calls with an equal
//! configuration return the same `Arc`. Construction binds credentials but
//! performs no network I/O; the first real use happens when the handle's
//! `complete` is called.

pub mod openai_compat;

use std::sync::Arc;

use dashmap::DashMap;

use parley_core::llm::box_provider::BoxChatProvider;
use parley_types::config::ChatConfig;
use parley_types::error::ConfigError;

use self::openai_compat::OpenAiCompatibleProvider;

/// Memoizing factory for chat provider handles.
///
/// Handles are read-only after construction, so sharing one `Arc` across
/// sessions needs no locking discipline beyond the cache's own. The cache
/// is never invalidated within a process; switching models produces a
/// distinct configuration and therefore a distinct cached handle.
pub struct ClientFactory {
    cache: DashMap<ChatConfig, Arc<BoxChatProvider>>,
}

impl ClientFactory {
    /// Create an empty factory.
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Get or construct the provider handle for a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the configuration's endpoint,
    /// credential, or model is empty. This surfaces before any
    /// conversation turn is accepted.
    pub fn get_client(&self, config: &ChatConfig) -> Result<Arc<BoxChatProvider>, ConfigError> {
        config.validate()?;
        let handle = self.cache.entry(config.clone()).or_insert_with(|| {
            tracing::info!(base_url = %config.base_url, model = %config.model, "constructing chat client");
            Arc::new(BoxChatProvider::new(OpenAiCompatibleProvider::new(
                config.clone(),
            )))
        });
        Ok(Arc::clone(handle.value()))
    }

    /// Number of distinct configurations constructed so far.
    pub fn cached_clients(&self) -> usize {
        self.cache.len()
    }
}

impl Default for ClientFactory {
    fn default() -> Self {
        Self::new()
    }
}
