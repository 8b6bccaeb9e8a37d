//! Show Search Tauri Integration
//!
//! Provides a Tauri plugin hosting the show search widget for a webview frontend.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(showsearch_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Optionally point it at another catalog in `tauri.conf.json`:
//!
//! ```json
//! { "plugins": { "showsearch": { "baseUrl": "https://api.tvmaze.com", "timeoutSecs": 10 } } }
//! ```
//!
//! Then invoke commands from the frontend and swap the returned markup in:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const page = await invoke('plugin:showsearch|submit_search', { query: 'batman' });
//! showsList.innerHTML = page.showsListHtml;
//! episodesArea.hidden = !page.episodesVisible;
//!
//! // On a click inside the shows list
//! const next = await invoke('plugin:showsearch|click_shows_list', {
//!   target: { selector: 'button[data-role=episodes]', index: 0 }
//! });
//! episodesList.innerHTML = next.episodesListHtml;
//! ```

use serde::Deserialize;
use showsearch_core::{ClientConfig, ShowWidget};
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

mod commands;

/// Plugin configuration read from `plugins.showsearch` in the Tauri config
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Catalog base URL (default: https://api.tvmaze.com)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: none)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl PluginConfig {
    /// Client configuration with these overrides applied
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout_secs: self.timeout_secs.or(defaults.timeout_secs),
            user_agent: defaults.user_agent,
        }
    }
}

/// Widget shared by all commands of one app
///
/// Handlers take `&self`, so commands run concurrently without a lock,
/// matching a page where event handlers are never serialized.
pub struct WidgetState {
    pub(crate) widget: ShowWidget,
}

impl WidgetState {
    /// Create a new WidgetState with default configuration
    ///
    /// # Errors
    /// Returns error string if widget initialization fails
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new WidgetState with custom client configuration
    ///
    /// # Errors
    /// Returns error string if widget initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let widget = ShowWidget::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self { widget })
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new().expect("Failed to create default WidgetState")
    }
}

/// Initialize the showsearch plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<PluginConfig>> {
    Builder::<R, Option<PluginConfig>>::new("showsearch")
        .invoke_handler(tauri::generate_handler![
            commands::search_shows,
            commands::get_episodes,
            commands::submit_search,
            commands::click_shows_list,
            commands::page_snapshot
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default().client_config();
            tracing::debug!(base_url = %config.base_url, "showsearch plugin setup");
            let state = WidgetState::with_config(config).map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use showsearch_core::{EpisodeRecord as Episode, PageSnapshot, ShowRecord as Show};
