//! HTML renderers for the widget
//!
//! Turn show and episode records into markup and place it in the page
//! containers.

pub mod episodes;
pub mod shows;

pub use episodes::{populate_episodes, render_episode_entry};
pub use shows::{populate_shows, render_show_card};
