//! Episode list renderer

use askama::Template;

use crate::dom::Element;
use crate::error::Result;
use crate::types::EpisodeRecord;

#[derive(Template)]
#[template(
    source = "<li>{{ name }} (season {{ season }}, number {{ number }})</li>",
    ext = "html"
)]
struct EpisodeEntryTemplate<'a> {
    name: &'a str,
    season: i64,
    number: String,
}

/// Renders the list entry for one episode
///
/// Reads `<name> (season <season>, number <number>)`. Specials without
/// an episode number show `?` as the number.
///
/// # Errors
/// Returns `RenderError` if the template fails to render
pub fn render_episode_entry(episode: &EpisodeRecord) -> Result<String> {
    let entry = EpisodeEntryTemplate {
        name: &episode.name,
        season: episode.season,
        number: episode
            .number
            .map_or_else(|| "?".to_string(), |n| n.to_string()),
    };
    Ok(entry.render()?)
}

/// Fills the episode list and reveals the episode panel
///
/// The list is replaced with one entry per episode in input order and
/// `panel` is visible afterwards, whatever its prior state.
///
/// # Errors
/// Returns `RenderError` if any entry fails to render; the page is then
/// left untouched
pub fn populate_episodes(
    panel: &Element,
    list: &Element,
    episodes: &[EpisodeRecord],
) -> Result<()> {
    let entries = episodes
        .iter()
        .map(render_episode_entry)
        .collect::<Result<Vec<_>>>()?;

    panel.show();
    list.replace_children(entries);
    Ok(())
}
