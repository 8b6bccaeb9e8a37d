//! Tauri commands for the show search widget
//!
//! This module contains all Tauri command implementations.

use showsearch_core::{
    ClickTarget, EpisodeRecord, PageSnapshot, ShowRecord, ShowSearchError, SubmitEvent,
};
use tauri::State;

use crate::WidgetState;

/// Logs a command failure and converts it for the frontend
fn report(command: &str, error: ShowSearchError) -> String {
    tracing::warn!(command, %error, "showsearch command failed");
    error.to_string()
}

/// Search the catalog for shows
///
/// # Arguments
/// * `state` - Managed WidgetState from Tauri
/// * `query` - Search query string
///
/// # Returns
/// Matching shows in catalog order
///
/// # Errors
/// Returns error message as String if search fails
#[tauri::command]
pub async fn search_shows(
    state: State<'_, WidgetState>,
    query: String,
) -> Result<Vec<ShowRecord>, String> {
    state
        .widget
        .catalog()
        .search_shows(&query)
        .await
        .map_err(|e| report("search_shows", e))
}

/// Fetch the episode list of a show
///
/// # Arguments
/// * `state` - Managed WidgetState from Tauri
/// * `show_id` - Catalog show identifier
///
/// # Errors
/// Returns error message as String if the fetch fails
#[tauri::command]
pub async fn get_episodes(
    state: State<'_, WidgetState>,
    show_id: u64,
) -> Result<Vec<EpisodeRecord>, String> {
    state
        .widget
        .catalog()
        .episodes_of_show(show_id)
        .await
        .map_err(|e| report("get_episodes", e))
}

/// Submit the search form with `query` as the input value
///
/// # Returns
/// The page after the shows were rendered
///
/// # Errors
/// Returns error message as String if search or rendering fails
#[tauri::command]
pub async fn submit_search(
    state: State<'_, WidgetState>,
    query: String,
) -> Result<PageSnapshot, String> {
    let widget = &state.widget;

    let mut event = SubmitEvent::new();
    widget
        .submit_query(query, &mut event)
        .await
        .map_err(|e| report("submit_search", e))?;

    Ok(widget.page().snapshot())
}

/// Handle a click inside the shows container
///
/// # Arguments
/// * `state` - Managed WidgetState from Tauri
/// * `target` - The clicked element, as selector and index
///
/// # Returns
/// The page after the click was handled
///
/// # Errors
/// Returns error message as String if the show cannot be resolved or
/// its episodes cannot be fetched
#[tauri::command]
pub async fn click_shows_list(
    state: State<'_, WidgetState>,
    target: ClickTarget,
) -> Result<PageSnapshot, String> {
    let widget = &state.widget;
    widget
        .on_shows_list_click(&target)
        .await
        .map_err(|e| report("click_shows_list", e))?;

    Ok(widget.page().snapshot())
}

/// Current state of the page
#[tauri::command]
pub fn page_snapshot(state: State<'_, WidgetState>) -> PageSnapshot {
    state.widget.page().snapshot()
}
