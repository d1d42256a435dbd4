//! App-wide feature flags
//!
//! Loaded once from `GET /config` and shared through Leptos context. Until the
//! request completes (or if it fails) every optional feature stays off.

use crate::api::config_api;
use contracts::config::Config;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppConfig {
    pub config: RwSignal<Config>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(Config::default()),
        }
    }

    /// Fetch flags from the backend and publish them
    pub fn load(&self) {
        let this = *self;
        leptos::task::spawn_local(async move {
            match config_api().await {
                Ok(config) => {
                    log::debug!("Config loaded: {:?}", config);
                    this.config.set(config);
                }
                Err(e) => log::warn!("Failed to load config, optional features disabled: {}", e),
            }
        });
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found")
}
