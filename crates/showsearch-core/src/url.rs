//! URL helper functions for the TVMaze catalog
//!
//! Provides functions for building the show-search and episode-list paths.
//! Paths are relative to the configured catalog base URL.

/// Default catalog base URL
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Builds the show-search path for a given query
///
/// URL encodes the query and places it in the `q` parameter.
///
/// # Arguments
/// * `query` - Search query string
///
/// # Returns
/// Path with encoded query, relative to the catalog base URL
///
/// # Example
/// ```
/// use showsearch_core::url::build_search_path;
/// let path = build_search_path("doctor who");
/// assert_eq!(path, "/search/shows?q=doctor%20who");
/// ```
pub fn build_search_path(query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("/search/shows?q={}", encoded)
}

/// Builds the episode-list path for a show
///
/// # Example
/// ```
/// use showsearch_core::url::build_episodes_path;
/// assert_eq!(build_episodes_path(975), "/shows/975/episodes");
/// ```
pub fn build_episodes_path(show_id: u64) -> String {
    format!("/shows/{}/episodes", show_id)
}

/// Joins a catalog base URL and a path
///
/// A trailing slash on the base URL is dropped so the result never
/// contains `//` between the two.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_path_simple() {
        assert_eq!(build_search_path("batman"), "/search/shows?q=batman");
    }

    #[test]
    fn test_build_search_path_with_spaces() {
        assert_eq!(
            build_search_path("the good place"),
            "/search/shows?q=the%20good%20place"
        );
    }

    #[test]
    fn test_build_search_path_escapes_reserved_characters() {
        assert_eq!(
            build_search_path("law & order?"),
            "/search/shows?q=law%20%26%20order%3F"
        );
    }

    #[test]
    fn test_build_episodes_path() {
        assert_eq!(build_episodes_path(1), "/shows/1/episodes");
    }

    #[test]
    fn test_join_url_without_trailing_slash() {
        assert_eq!(
            join_url("https://api.tvmaze.com", "/shows/1/episodes"),
            "https://api.tvmaze.com/shows/1/episodes"
        );
    }

    #[test]
    fn test_join_url_with_trailing_slash() {
        assert_eq!(
            join_url("http://127.0.0.1:8080/", "/search/shows?q=x"),
            "http://127.0.0.1:8080/search/shows?q=x"
        );
    }
}
