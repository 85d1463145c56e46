//! Frontend configuration.
//!
//! Defaults are embedded in the bundle as TOML. `IASO_API_BASE` set at build
//! time overrides the API origin (e.g. `IASO_API_BASE=https://iaso.example.org trunk build`).

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub tables: TablesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Origin of the API. Empty means same origin as the page.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TablesConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[tables]
default_page_size = 20
page_size_options = [10, 20, 50, 100]
"#;

/// Parses the embedded configuration and applies build-time overrides.
pub fn load_config() -> Result<AppConfig, String> {
    let mut config: AppConfig =
        toml::from_str(DEFAULT_CONFIG).map_err(|e| format!("Invalid embedded config: {}", e))?;

    if let Some(base_url) = option_env!("IASO_API_BASE") {
        config.api.base_url = base_url.trim_end_matches('/').to_string();
    }

    Ok(config)
}

/// Configuration provided through context, or the embedded defaults.
pub fn use_config() -> AppConfig {
    leptos::context::use_context::<AppConfig>()
        .or_else(|| load_config().ok())
        .unwrap_or_else(fallback_config)
}

fn fallback_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: String::new(),
        },
        tables: TablesConfig {
            default_page_size: 20,
            page_size_options: vec![10, 20, 50, 100],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.tables.default_page_size, 20);
        assert!(config
            .tables
            .page_size_options
            .contains(&config.tables.default_page_size));
    }

    #[test]
    fn test_fallback_matches_embedded_defaults() {
        let embedded: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(embedded, fallback_config());
    }
}
