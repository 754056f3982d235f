use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::export::PageLayout;
use crate::model::RecipeOptions;
use crate::ComposeError;

/// Main configuration structure, resolved once at start-up
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ComposerConfig {
    /// Vision service settings
    #[serde(default)]
    pub vision: VisionConfig,
    /// Recipe options used when the caller doesn't choose
    #[serde(default)]
    pub defaults: RecipeOptions,
    /// Page geometry for exported documents
    #[serde(default)]
    pub layout: PageLayout,
}

/// Configuration for the Gemini vision service
#[derive(Debug, Deserialize, Clone)]
pub struct VisionConfig {
    /// API key. Image analysis falls back to placeholder data without one.
    pub api_key: Option<String>,
    /// Model identifier (e.g., "gemini-2.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL for the API endpoint (for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl VisionConfig {
    /// The API key, if one is set and not blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

// Default value functions
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ComposerConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`].
    pub fn load() -> Result<Self, ComposeError> {
        Ok(load_config()?)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE__VISION__API_KEY
///
/// When no API key is configured, GOOGLE_API_KEY is read as a last resort.
pub fn load_config() -> Result<ComposerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE__VISION__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: ComposerConfig = settings.try_deserialize()?;
    if config.vision.credential().is_none() {
        config.vision.api_key = std::env::var("GOOGLE_API_KEY").ok();
    }

    Ok(config)
}

/// Parse configuration from a TOML string, without consulting the environment
pub fn parse_config(toml: &str) -> Result<ComposerConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}
