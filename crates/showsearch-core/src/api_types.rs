//! TVMaze API response types for deserialization.
//!
//! These structures mirror the JSON response format of the catalog
//! endpoints. Fields the widget does not use are ignored.

use serde::Deserialize;

use crate::types::{EpisodeRecord, ShowImage, ShowRecord};

/// One entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    /// The matched show
    pub show: RawShow,
}

/// Show object nested in a search hit.
#[derive(Debug, Deserialize)]
pub(crate) struct RawShow {
    pub id: u64,
    pub name: String,
    /// HTML summary, may be null
    #[serde(default)]
    pub summary: Option<String>,
    /// Poster image, may be null or absent
    #[serde(default)]
    pub image: Option<ShowImage>,
}

/// One entry of the `/shows/:id/episodes` response.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEpisode {
    pub id: u64,
    pub name: String,
    pub season: i64,
    /// Null for specials
    #[serde(default)]
    pub number: Option<i64>,
}

impl From<SearchHit> for ShowRecord {
    fn from(hit: SearchHit) -> Self {
        let RawShow {
            id,
            name,
            summary,
            image,
        } = hit.show;
        ShowRecord {
            id,
            name,
            summary,
            image,
        }
    }
}

impl From<RawEpisode> for EpisodeRecord {
    fn from(raw: RawEpisode) -> Self {
        EpisodeRecord {
            id: raw.id,
            name: raw.name,
            season: raw.season,
            number: raw.number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hit_ignores_extra_fields() {
        let json = r#"{
            "score": 0.91,
            "show": {
                "id": 975,
                "url": "https://www.tvmaze.com/shows/975/batman",
                "name": "Batman",
                "type": "Scripted",
                "summary": "<p>Dark.</p>",
                "image": null
            }
        }"#;

        let hit: SearchHit = serde_json::from_str(json).unwrap();
        let record = ShowRecord::from(hit);
        assert_eq!(record.id, 975);
        assert_eq!(record.name, "Batman");
        assert_eq!(record.summary.as_deref(), Some("<p>Dark.</p>"));
        assert_eq!(record.image, None);
    }

    #[test]
    fn test_search_hit_without_image_or_summary() {
        let json = r#"{"show": {"id": 1, "name": "Untitled"}}"#;
        let record = ShowRecord::from(serde_json::from_str::<SearchHit>(json).unwrap());
        assert_eq!(record.summary, None);
        assert_eq!(record.image, None);
    }

    #[test]
    fn test_search_hit_missing_show_is_error() {
        let result = serde_json::from_str::<SearchHit>(r#"{"score": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_episode_special_without_number() {
        let json = r#"{"id": 9, "name": "Christmas Special", "season": 2, "number": null}"#;
        let episode = EpisodeRecord::from(serde_json::from_str::<RawEpisode>(json).unwrap());
        assert_eq!(episode.number, None);
        assert_eq!(episode.season, 2);
    }

    #[test]
    fn test_raw_episode_passes_numbers_through() {
        let json = r#"{"id": 3, "name": "Odd", "season": 0, "number": -4}"#;
        let episode = EpisodeRecord::from(serde_json::from_str::<RawEpisode>(json).unwrap());
        assert_eq!(episode.season, 0);
        assert_eq!(episode.number, Some(-4));
    }
}
