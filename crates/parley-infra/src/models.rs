//! Model catalog loaded from a `MODELS.txt` file.
//!
//! One model identifier per line; `#` comments and blank lines are
//! ignored. The catalog bounds which models the user may switch to at
//! runtime, and supplies the default when no preference is configured.

use std::path::Path;

use parley_types::error::ConfigError;

/// Default catalog file name, looked up in the working directory.
pub const DEFAULT_MODELS_FILE: &str = "MODELS.txt";

/// The set of models the chat UI offers.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    models: Vec<String>,
}

impl ModelCatalog {
    /// Load the catalog from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Catalog`] when the file cannot be read or
    /// lists no models. Both are fatal at startup: a chat session without
    /// a model to talk to cannot begin.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Catalog(format!("{}: {e}", path.display())))?;
        let catalog = Self::parse(&raw);
        if catalog.models.is_empty() {
            return Err(ConfigError::Catalog(format!(
                "{} lists no models",
                path.display()
            )));
        }
        Ok(catalog)
    }

    /// Parse catalog text, skipping comments and blank lines.
    pub fn parse(raw: &str) -> Self {
        let models = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        Self { models }
    }

    /// All cataloged model identifiers, in file order.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Whether a model identifier is cataloged.
    pub fn contains(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    /// Resolve the model a session should start with.
    ///
    /// The requested model wins when it is cataloged; otherwise the first
    /// catalog entry. `None` only for an empty catalog, which
    /// [`ModelCatalog::load`] never produces.
    pub fn default_model<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        match requested {
            Some(model) if self.contains(model) => Some(model),
            _ => self.models.first().map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = "\
# Chat models available through the endpoint
openai/gpt-4o

mistralai/mistral-large
  # indented comment
anthropic/claude-sonnet-4
";

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let catalog = ModelCatalog::parse(CATALOG);
        assert_eq!(
            catalog.models(),
            &[
                "openai/gpt-4o",
                "mistralai/mistral-large",
                "anthropic/claude-sonnet-4"
            ]
        );
    }

    #[test]
    fn test_default_model_prefers_cataloged_request() {
        let catalog = ModelCatalog::parse(CATALOG);
        assert_eq!(
            catalog.default_model(Some("mistralai/mistral-large")),
            Some("mistralai/mistral-large")
        );
        // Unknown request falls back to the first entry
        assert_eq!(
            catalog.default_model(Some("no-such/model")),
            Some("openai/gpt-4o")
        );
        assert_eq!(catalog.default_model(None), Some("openai/gpt-4o"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{CATALOG}").unwrap();

        let catalog = ModelCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.models().len(), 3);
        assert!(catalog.contains("openai/gpt-4o"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = ModelCatalog::load(Path::new("/nonexistent/MODELS.txt"));
        assert!(matches!(result, Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn test_load_rejects_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# only comments\n\n").unwrap();

        let result = ModelCatalog::load(file.path());
        assert!(matches!(result, Err(ConfigError::Catalog(_))));
    }
}
