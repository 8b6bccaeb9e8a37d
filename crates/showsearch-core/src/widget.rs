//! Interaction controller
//!
//! Binds the two page events (search submission and clicks inside the
//! shows container) to the catalog and the renderers.
//!
//! Handlers do not guard against overlap. Two searches in flight both
//! render when they complete, so the one that resolves last decides what
//! the shows container holds.

use tracing::instrument;

use crate::catalog::TvCatalog;
use crate::client::ClientConfig;
use crate::dom::{ClickTarget, PageHandles, SubmitEvent, resolve_show_id};
use crate::error::Result;
use crate::render::{populate_episodes, populate_shows};

/// What a click inside the shows container led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was not on an "Episodes" affordance; nothing was fetched
    Ignored,
    /// Episodes of `show_id` were fetched and displayed
    Displayed {
        /// Show whose episodes are now displayed
        show_id: u64,
        /// Number of entries rendered
        episode_count: usize,
    },
}

/// The search widget for one page session
///
/// Owns the catalog and explicit handles to the page elements it drives.
pub struct ShowWidget {
    catalog: TvCatalog,
    page: PageHandles,
}

impl ShowWidget {
    /// Create a widget driving `page`
    pub fn new(catalog: TvCatalog, page: PageHandles) -> Self {
        Self { catalog, page }
    }

    /// Create a widget on a fresh page with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(TvCatalog::with_config(config)?, PageHandles::new()))
    }

    /// The page elements this widget drives
    pub fn page(&self) -> &PageHandles {
        &self.page
    }

    /// The catalog used for lookups
    pub fn catalog(&self) -> &TvCatalog {
        &self.catalog
    }

    /// Handle a search form submission
    ///
    /// Suppresses the form's default navigation and reads the query input
    /// immediately; the returned future performs the search and renders.
    /// The future resolves to the number of cards rendered.
    pub fn on_search_submit<'a>(
        &'a self,
        event: &mut SubmitEvent,
    ) -> impl Future<Output = Result<usize>> + use<'a> {
        event.prevent_default();
        let term = self.page.search_form.query_input.value();
        async move { self.search_and_display(&term).await }
    }

    /// Type `query` into the search input and submit the form
    ///
    /// The returned future searches for `query` itself, so a concurrent
    /// submission that overwrites the input cannot change which term this
    /// one searches for.
    pub fn submit_query<'a>(
        &'a self,
        query: String,
        event: &mut SubmitEvent,
    ) -> impl Future<Output = Result<usize>> + use<'a> {
        event.prevent_default();
        self.page.search_form.query_input.set_value(query.as_str());
        async move { self.search_and_display(&query).await }
    }

    /// Search for shows and display them
    ///
    /// Once the search resolves the episode panel is hidden and the shows
    /// container is replaced with the results. A failed search leaves the
    /// page as it was.
    ///
    /// # Errors
    /// Propagates search and render failures
    #[instrument(skip(self))]
    pub async fn search_and_display(&self, term: &str) -> Result<usize> {
        let shows = self.catalog.search_shows(term).await?;

        self.page.episodes_area.hide();
        populate_shows(&self.page.shows_list, &shows)?;

        Ok(shows.len())
    }

    /// Handle a click inside the shows container
    ///
    /// Clicks that do not land on an "Episodes" affordance are ignored.
    /// Otherwise the enclosing card's show is looked up and its episodes
    /// displayed.
    ///
    /// # Errors
    /// - `InvalidSelector` if the target selector does not parse
    /// - `InvalidId` if the affordance is not inside a card with a valid id
    /// - Episode fetch and render failures
    #[instrument(skip(self))]
    pub async fn on_shows_list_click(&self, target: &ClickTarget) -> Result<ClickOutcome> {
        let container_html = self.page.shows_list.inner_html();
        let Some(show_id) = resolve_show_id(&container_html, target)? else {
            tracing::debug!("click outside an episodes affordance");
            return Ok(ClickOutcome::Ignored);
        };

        let episode_count = self.display_episodes(show_id).await?;
        Ok(ClickOutcome::Displayed {
            show_id,
            episode_count,
        })
    }

    /// Fetch a show's episodes and display them in the episode panel
    ///
    /// The panel is revealed once the fetch resolves. A failed fetch
    /// leaves the panel as it was.
    ///
    /// # Errors
    /// Propagates fetch and render failures
    #[instrument(skip(self))]
    pub async fn display_episodes(&self, show_id: u64) -> Result<usize> {
        let episodes = self.catalog.episodes_of_show(show_id).await?;

        populate_episodes(
            &self.page.episodes_area,
            &self.page.episodes_list,
            &episodes,
        )?;

        Ok(episodes.len())
    }
}
