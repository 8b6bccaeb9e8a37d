//! Show Search Core Library
//!
//! Provides an async search widget for TV shows backed by the TVMaze catalog.
//!
//! # Overview
//!
//! This crate contains everything behind the widget:
//! - HTTP client for the catalog's show-search and episode-list endpoints
//! - HTML renderers for show cards and episode entries
//! - An in-memory page model (containers, episode panel, query input)
//! - A controller binding search submission and "Episodes" clicks to the above
//!
//! # Example
//!
//! ```no_run
//! use showsearch_core::{ClickTarget, Result, ShowWidget, SubmitEvent, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let widget = ShowWidget::with_config(ClientConfig::default())?;
//!
//!     // The user types a query and submits the form
//!     widget.page().search_form.query_input.set_value("batman");
//!     let mut event = SubmitEvent::new();
//!     widget.on_search_submit(&mut event).await?;
//!
//!     // The user clicks "Episodes" on the first card
//!     widget.on_shows_list_click(&ClickTarget::new("button")).await?;
//!
//!     println!("{}", widget.page().episodes_list.inner_html());
//!     Ok(())
//! }
//! ```
//!
//! # Overlapping requests
//!
//! Handlers never cancel each other. When two searches are in flight the
//! one whose response arrives last determines the rendered list.

mod api_types;
mod catalog;
mod client;
pub mod dom;
mod error;
pub mod render;
mod types;
pub mod url;
mod widget;

// Re-export client types
pub use client::{CatalogClient, ClientConfig};

// Re-export catalog API
pub use catalog::TvCatalog;

// Re-export error types
pub use error::{Result, ShowSearchError};

// Re-export page model
pub use dom::{ClickTarget, Element, PageHandles, PageSnapshot, SearchForm, SubmitEvent, TextInput};

// Re-export renderer functions
pub use render::{populate_episodes, populate_shows, render_episode_entry, render_show_card};

// Re-export data types
pub use types::{EpisodeRecord, FALLBACK_IMAGE_URL, ImageVariants, ShowImage, ShowRecord};

// Re-export controller
pub use widget::{ClickOutcome, ShowWidget};
