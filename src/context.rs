//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::browser;
use crate::commands::HttpInventory;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::models::Category;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
    /// Origin the REST paths are resolved against
    origin: StoredValue<String>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        let origin = config.api_base.clone().unwrap_or_else(browser::origin);
        Self {
            store,
            config: StoredValue::new(config),
            origin: StoredValue::new(origin),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn currency(&self) -> String {
        self.config.with_value(|c| c.currency.clone())
    }

    /// REST client for the category that is active right now
    pub fn api(&self) -> HttpInventory {
        let category = self.store.read_untracked().session.category.clone();
        self.api_for(&category)
    }

    pub fn api_for(&self, category: &Category) -> HttpInventory {
        HttpInventory::new(&self.origin.get_value(), category)
    }

    /// Log and alert a failed operation; returns the value on success
    pub fn report<T>(&self, operation: &str, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("[{}] {}", operation, e);
                browser::alert(&e.user_message());
                None
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
