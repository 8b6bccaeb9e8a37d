//! Show card renderer
//!
//! Builds one card per show and fills the shows container with them.

use askama::Template;

use crate::dom::Element;
use crate::error::Result;
use crate::types::ShowRecord;

#[derive(Template)]
#[template(path = "show_card.html")]
struct ShowCardTemplate<'a> {
    id: u64,
    name: &'a str,
    summary: &'a str,
    image_url: &'a str,
}

/// Renders the card markup for one show
///
/// The card carries `data-show-id`, and its "Episodes" button carries
/// `data-role="episodes"`. Name and image URL are escaped; the summary is
/// catalog markup and is inserted as-is.
///
/// # Errors
/// Returns `RenderError` if the template fails to render
pub fn render_show_card(show: &ShowRecord) -> Result<String> {
    let card = ShowCardTemplate {
        id: show.id,
        name: &show.name,
        summary: show.summary.as_deref().unwrap_or_default(),
        image_url: show.image_url(),
    };
    Ok(card.render()?)
}

/// Replaces the contents of `container` with one card per show
///
/// Cards appear in input order. On error the container is left untouched.
///
/// # Errors
/// Returns `RenderError` if any card fails to render
pub fn populate_shows(container: &Element, shows: &[ShowRecord]) -> Result<()> {
    let cards = shows
        .iter()
        .map(render_show_card)
        .collect::<Result<Vec<_>>>()?;

    container.replace_children(cards);
    Ok(())
}
