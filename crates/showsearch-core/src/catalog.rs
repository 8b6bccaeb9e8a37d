//! Catalog API for TVMaze shows and episodes
//!
//! Provides the show search and episode fetch operations on top of
//! the HTTP client.

use tracing::instrument;

use crate::api_types::{RawEpisode, SearchHit};
use crate::client::{CatalogClient, ClientConfig};
use crate::error::{Result, ShowSearchError};
use crate::types::{EpisodeRecord, ShowRecord};
use crate::url::{build_episodes_path, build_search_path};

/// Show and episode lookups against the TVMaze catalog
pub struct TvCatalog {
    client: CatalogClient,
}

impl TvCatalog {
    /// Create a new catalog with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = CatalogClient::new()?;
        Ok(Self { client })
    }

    /// Create a new catalog with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = CatalogClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search for shows by title
    ///
    /// # Arguments
    /// * `query` - Search query string
    ///
    /// # Returns
    /// Matching shows in the order the catalog ranked them,
    /// empty if nothing matched
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty or whitespace only
    /// - `HttpError` if network request fails
    /// - `ParseError` if the response is malformed
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> showsearch_core::Result<()> {
    /// use showsearch_core::TvCatalog;
    /// let catalog = TvCatalog::new()?;
    /// for show in catalog.search_shows("batman").await? {
    ///     println!("{}: {}", show.id, show.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn search_shows(&self, query: &str) -> Result<Vec<ShowRecord>> {
        if query.trim().is_empty() {
            return Err(ShowSearchError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let hits: Vec<SearchHit> = self.client.get_json(&build_search_path(query)).await?;
        tracing::debug!(count = hits.len(), "shows found");

        Ok(hits.into_iter().map(ShowRecord::from).collect())
    }

    /// Fetch the episode list of a show
    ///
    /// # Arguments
    /// * `show_id` - Catalog show identifier
    ///
    /// # Returns
    /// Episodes in catalog order
    ///
    /// # Errors
    /// - `NotFound` if the catalog does not know the show
    /// - `HttpError` if network request fails
    /// - `ParseError` if the response is malformed
    #[instrument(skip(self))]
    pub async fn episodes_of_show(&self, show_id: u64) -> Result<Vec<EpisodeRecord>> {
        let raw: Vec<RawEpisode> = self.client.get_json(&build_episodes_path(show_id)).await?;
        tracing::debug!(count = raw.len(), "episodes found");

        Ok(raw.into_iter().map(EpisodeRecord::from).collect())
    }
}
