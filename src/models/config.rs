//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote catalog endpoint and HTTP client settings
    #[serde(default)]
    pub api: ApiConfig,

    /// View defaults and filter dimension catalogs
    #[serde(default)]
    pub view: ViewConfig,

    /// User-facing message strings
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(AppError::validation("api.endpoint is empty"));
        }
        url::Url::parse(&self.api.endpoint)
            .map_err(|e| AppError::validation(format!("api.endpoint is not a valid URL: {e}")))?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.view.max_price <= 0.0 {
            return Err(AppError::validation("view.max_price must be > 0"));
        }
        if self.view.levels.is_empty() {
            return Err(AppError::validation("No levels defined"));
        }
        if self.view.kinds.is_empty() {
            return Err(AppError::validation("No kinds defined"));
        }
        Ok(())
    }
}

/// Remote catalog endpoint and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// URL of the offer collection endpoint
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// View defaults and filter dimension catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Default price ceiling applied when no explicit maximum is given
    #[serde(default = "defaults::max_price")]
    pub max_price: f64,

    /// Academic levels offered by the filter form
    #[serde(default = "defaults::levels")]
    pub levels: Vec<Dimension>,

    /// Course modalities offered by the filter form
    #[serde(default = "defaults::kinds")]
    pub kinds: Vec<Dimension>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_price: defaults::max_price(),
            levels: defaults::levels(),
            kinds: defaults::kinds(),
        }
    }
}

impl ViewConfig {
    /// Resolve the display name for a level tag.
    pub fn level_name<'a>(&'a self, id: &'a str) -> &'a str {
        Self::display_name(&self.levels, id)
    }

    /// Resolve the display name for a kind tag.
    pub fn kind_name<'a>(&'a self, id: &'a str) -> &'a str {
        Self::display_name(&self.kinds, id)
    }

    fn display_name<'a>(dimensions: &'a [Dimension], id: &'a str) -> &'a str {
        dimensions
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.display_name.as_str())
            .unwrap_or(id)
    }
}

/// One entry of a filter dimension catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    /// Categorical tag as it appears on offers
    pub id: String,

    /// Human-readable display name
    pub display_name: String,
}

/// User-facing message strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "defaults::msg_loading")]
    pub loading: String,

    #[serde(default = "defaults::msg_load_failed")]
    pub load_failed: String,

    #[serde(default = "defaults::msg_results_header")]
    pub results_header: String,

    #[serde(default = "defaults::msg_no_results")]
    pub no_results: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            loading: defaults::msg_loading(),
            load_failed: defaults::msg_load_failed(),
            results_header: defaults::msg_results_header(),
            no_results: defaults::msg_no_results(),
        }
    }
}

mod defaults {
    use super::Dimension;

    // Api defaults
    pub fn endpoint() -> String {
        "http://localhost:3000/offers".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; Ofertas/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // View defaults
    pub fn max_price() -> f64 {
        crate::models::DEFAULT_MAX_PRICE
    }
    pub fn levels() -> Vec<Dimension> {
        vec![
            Dimension {
                id: "bacharelado".to_string(),
                display_name: "Graduação (bacharelado)".to_string(),
            },
            Dimension {
                id: "licenciatura".to_string(),
                display_name: "Graduação (licenciatura)".to_string(),
            },
            Dimension {
                id: "tecnologo".to_string(),
                display_name: "Graduação (tecnólogo)".to_string(),
            },
        ]
    }
    pub fn kinds() -> Vec<Dimension> {
        vec![
            Dimension {
                id: "presencial".to_string(),
                display_name: "Presencial".to_string(),
            },
            Dimension {
                id: "ead".to_string(),
                display_name: "EaD".to_string(),
            },
        ]
    }

    // Message defaults
    pub fn msg_loading() -> String {
        "Carregando ofertas...".into()
    }
    pub fn msg_load_failed() -> String {
        "Não foi possível carregar as ofertas. Tente novamente mais tarde.".into()
    }
    pub fn msg_results_header() -> String {
        "Veja as opções que encontramos".into()
    }
    pub fn msg_no_results() -> String {
        "Nenhuma oferta encontrada.".into()
    }
}
