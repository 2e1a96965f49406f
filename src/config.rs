//! Application Config
//!
//! Optional overrides read from `window.__INVENTORY_CONFIG__`.

use serde::Deserialize;

use crate::models::Category;

const CONFIG_GLOBAL: &str = "__INVENTORY_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin the REST paths are resolved against (None = page origin)
    pub api_base: Option<String>,
    pub categories: Vec<String>,
    pub default_category: String,
    /// Price suffix, also stripped from imported price cells
    pub currency: String,
    pub dark_mode_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            categories: vec!["lcd".to_string(), "battery".to_string(), "back".to_string()],
            default_category: "lcd".to_string(),
            currency: "DT".to_string(),
            dark_mode_key: "lcd-dark-mode".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the config global, falling back to defaults when absent or malformed
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()) {
            Ok(v) if !v.is_undefined() && !v.is_null() => v,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value::<AppConfig>(value) {
            Ok(config) => {
                log::info!("[CONFIG] Loaded overrides from window.{}", CONFIG_GLOBAL);
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed window.{}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.iter().map(Category::new).collect()
    }

    /// Configured default, or the first listed category when it is not listed
    pub fn initial_category(&self) -> Category {
        if self.categories.iter().any(|c| c == &self.default_category) {
            Category::new(self.default_category.clone())
        } else {
            self.categories
                .first()
                .map(Category::new)
                .unwrap_or_else(|| Category::new(self.default_category.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"currency":"EUR"}"#).unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.categories, vec!["lcd", "battery", "back"]);
        assert_eq!(config.dark_mode_key, "lcd-dark-mode");
        assert_eq!(config.api_base, None);
    }

    #[test]
    fn test_initial_category_falls_back_to_first() {
        let config = AppConfig {
            categories: vec!["battery".to_string(), "back".to_string()],
            ..Default::default()
        };
        assert_eq!(config.initial_category(), Category::new("battery"));
        assert_eq!(AppConfig::default().initial_category(), Category::new("lcd"));
    }
}
