use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::logic::pagination::PaginationStrategy;
use crate::logic::thumbnail::ThumbnailTransform;
use crate::model::PageSize;

pub const DEFAULT_BASE_URL: &str = "https://cdn.contentful.com";
pub const DEFAULT_ENVIRONMENT: &str = "master";
pub const DEFAULT_GRID_COLUMNS: usize = 3;
pub const MAX_GRID_COLUMNS: usize = 6;

/// Configuration file contents (`config.yaml`)
///
/// Every field is optional on disk; the three host parameters are checked
/// later by [`HostParameters::validate`] so a missing value shows up as a
/// visible error instead of a startup failure.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub space_id: String,
    #[serde(default)]
    pub delivery_api_token: String,
    #[serde(default)]
    pub default_locale: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub pagination: PaginationStrategy,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub grid_columns: Option<usize>,
    #[serde(default)]
    pub thumbnail: ThumbnailTransform,
    #[serde(default)]
    pub vim_mode: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            space_id: String::new(),
            delivery_api_token: String::new(),
            default_locale: String::new(),
            base_url: default_base_url(),
            environment: default_environment(),
            pagination: PaginationStrategy::default(),
            page_size: None,
            grid_columns: None,
            thumbnail: ThumbnailTransform::default(),
            vim_mode: false,
        }
    }
}

impl Config {
    /// Parse a YAML config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid (all defaults) config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required parameter(s): {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),
}

/// The three parameters the hosting environment must supply
#[derive(Clone, PartialEq, Eq)]
pub struct HostParameters {
    pub space_id: String,
    pub delivery_api_token: String,
    pub default_locale: String,
}

impl std::fmt::Debug for HostParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostParameters")
            .field("space_id", &self.space_id)
            .field("delivery_api_token", &"<redacted>")
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

impl HostParameters {
    /// Reject empty or whitespace-only parameters, naming all of them
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.space_id.trim().is_empty() {
            missing.push("space_id");
        }
        if self.delivery_api_token.trim().is_empty() {
            missing.push("delivery_api_token");
        }
        if self.default_locale.trim().is_empty() {
            missing.push("default_locale");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingParameters(missing))
        }
    }
}

/// Immutable dialog configuration, built once at startup and shared by reference
#[derive(Debug, Clone)]
pub struct DialogConfig {
    pub params: HostParameters,
    pub base_url: String,
    pub environment: String,
    pub pagination: PaginationStrategy,
    pub page_size: PageSize,
    pub grid_columns: usize,
    pub thumbnail: ThumbnailTransform,
    pub vim_mode: bool,
}

impl DialogConfig {
    /// Normalise a parsed config file into the dialog configuration
    pub fn from_config(config: Config) -> Self {
        let page_size = match config.page_size {
            Some(value) => {
                let nearest = PageSize::nearest(value);
                if nearest.get() != value {
                    tracing::warn!(value, using = nearest.get(), "Unsupported page size");
                }
                nearest
            }
            None => PageSize::default(),
        };

        let grid_columns = match config.grid_columns {
            Some(value) => {
                let clamped = value.clamp(1, MAX_GRID_COLUMNS);
                if clamped != value {
                    tracing::warn!(value, using = clamped, "Grid columns out of range");
                }
                clamped
            }
            None => DEFAULT_GRID_COLUMNS,
        };

        Self {
            params: HostParameters {
                space_id: config.space_id.trim().to_string(),
                delivery_api_token: config.delivery_api_token.trim().to_string(),
                default_locale: config.default_locale.trim().to_string(),
            },
            base_url: config.base_url,
            environment: config.environment,
            pagination: config.pagination,
            page_size,
            grid_columns,
            thumbnail: config.thumbnail,
            vim_mode: config.vim_mode,
        }
    }
}
