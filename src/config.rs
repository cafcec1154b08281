use crate::api::DEFAULT_MAX_FOODS;
use crate::schema::ValidationError;
use crate::storage::RecipeStore;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "RECIPE_API_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub foods: FoodsConfig,
    /// Seed records, validated against the recipe shape at startup.
    /// `None` serves the built-in set.
    pub recipes: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FoodsConfig {
    /// Largest `total` accepted by `/foods/{total}`
    pub max_total: i64,
}

impl Default for FoodsConfig {
    fn default() -> Self {
        Self {
            max_total: DEFAULT_MAX_FOODS,
        }
    }
}

impl AppConfig {
    /// Load from `$RECIPE_API_CONFIG` (default `config.toml`), then apply `$PORT`.
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_path(&path)?;

        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT: {}", port))?;
        }

        Ok(config)
    }

    /// A missing file yields the defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;

        Self::from_toml(&raw).with_context(|| format!("Invalid config {:?}", path))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn recipe_store(&self) -> Result<RecipeStore, ValidationError> {
        match &self.recipes {
            Some(raw) => RecipeStore::from_raw(raw.clone()),
            None => RecipeStore::seeded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8001");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.foods.max_total, DEFAULT_MAX_FOODS);
        assert_eq!(config.recipe_store().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = AppConfig::from_path(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.server.port, 8001);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 9000

            [logging]
            level = "debug"

            [foods]
            max_total = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:9000");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.foods.max_total, 50);
    }

    #[test]
    fn test_custom_recipes() {
        let config = AppConfig::from_toml(
            r#"
            [[recipes]]
            id = 5
            label = "Lentil Soup"
            source = "Grandma"
            url = "https://soup.example/lentil"
            "#,
        )
        .unwrap();

        let store = config.recipe_store().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(5).unwrap().label, "Lentil Soup");
    }

    #[test]
    fn test_custom_recipe_bad_url() {
        let config = AppConfig::from_toml(
            r#"
            [[recipes]]
            id = 5
            label = "Lentil Soup"
            source = "Grandma"
            url = "not-a-url"
            "#,
        )
        .unwrap();

        let err = config.recipe_store().unwrap_err();
        assert_eq!(err.errors[0].field, "recipes[0].url");
    }

    #[test]
    fn test_bad_port_type() {
        assert!(AppConfig::from_toml("[server]\nport = \"eighty\"").is_err());
    }
}
