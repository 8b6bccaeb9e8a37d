//! Core data types for the show search widget
//!
//! Contains the normalized show and episode records handed from the
//! catalog clients to the renderers.

use serde::{Deserialize, Serialize};

/// Placeholder image used when a show has no usable `medium` image
pub const FALLBACK_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// A show returned by the catalog search
///
/// All fields are kept exactly as the catalog sent them. The image
/// fallback is applied at render time, see [`ShowRecord::image_url`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowRecord {
    /// Catalog-assigned show identifier
    pub id: u64,

    /// Show title
    pub name: String,

    /// HTML summary (the catalog sends `null` for some shows)
    pub summary: Option<String>,

    /// Poster image, if any
    pub image: Option<ShowImage>,
}

impl ShowRecord {
    /// URL of the image shown on this show's card
    ///
    /// Uses the `medium` variant when present and non-empty,
    /// otherwise [`FALLBACK_IMAGE_URL`].
    pub fn image_url(&self) -> &str {
        self.image
            .as_ref()
            .and_then(ShowImage::medium)
            .unwrap_or(FALLBACK_IMAGE_URL)
    }
}

/// Image field of a show as it appears on the wire
///
/// The catalog normally sends an object with `medium` and `original`
/// URLs. Anything else is still accepted so one odd record never fails
/// a whole search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShowImage {
    /// Object with size variants
    Variants(ImageVariants),
    /// Bare URL string
    Url(String),
    /// Any other JSON value
    Other(serde_json::Value),
}

impl ShowImage {
    /// The `medium` variant URL, if this image has a non-empty one
    pub fn medium(&self) -> Option<&str> {
        match self {
            ShowImage::Variants(variants) => {
                variants.medium.as_deref().filter(|url| !url.is_empty())
            }
            ShowImage::Url(_) | ShowImage::Other(_) => None,
        }
    }
}

/// Size variants of a show image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariants {
    /// Medium-sized poster URL
    #[serde(default)]
    pub medium: Option<String>,

    /// Full-size poster URL
    #[serde(default)]
    pub original: Option<String>,
}

/// An episode of a show
///
/// Numeric fields are passed through from the catalog without checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Catalog-assigned episode identifier
    pub id: u64,

    /// Episode title
    pub name: String,

    /// Season number
    pub season: i64,

    /// Episode number within the season (`None` for specials)
    pub number: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(image: Option<ShowImage>) -> ShowRecord {
        ShowRecord {
            id: 975,
            name: "Batman".to_string(),
            summary: Some("<p>Dark.</p>".to_string()),
            image,
        }
    }

    #[test]
    fn test_image_url_uses_medium_variant() {
        let record = show(Some(ShowImage::Variants(ImageVariants {
            medium: Some("https://static.tvmaze.com/medium/975.jpg".to_string()),
            original: Some("https://static.tvmaze.com/original/975.jpg".to_string()),
        })));
        assert_eq!(record.image_url(), "https://static.tvmaze.com/medium/975.jpg");
    }

    #[test]
    fn test_image_url_fallback_when_absent() {
        assert_eq!(show(None).image_url(), FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_image_url_fallback_without_medium() {
        let record = show(Some(ShowImage::Variants(ImageVariants {
            medium: None,
            original: Some("https://static.tvmaze.com/original/975.jpg".to_string()),
        })));
        assert_eq!(record.image_url(), FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_image_url_fallback_with_empty_medium() {
        let record = show(Some(ShowImage::Variants(ImageVariants {
            medium: Some(String::new()),
            original: None,
        })));
        assert_eq!(record.image_url(), FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_image_url_fallback_for_bare_string() {
        let record = show(Some(ShowImage::Url("https://example.com/a.jpg".to_string())));
        assert_eq!(record.image_url(), FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_show_image_deserializes_variants() {
        let image: ShowImage =
            serde_json::from_str(r#"{"medium": "m.jpg", "original": "o.jpg"}"#).unwrap();
        assert_eq!(image.medium(), Some("m.jpg"));
    }

    #[test]
    fn test_show_image_tolerates_non_string_medium() {
        let image: ShowImage = serde_json::from_str(r#"{"medium": 42}"#).unwrap();
        assert!(matches!(image, ShowImage::Other(_)));
        assert_eq!(image.medium(), None);
    }

    #[test]
    fn test_show_image_tolerates_number() {
        let image: ShowImage = serde_json::from_str("7").unwrap();
        assert!(matches!(image, ShowImage::Other(_)));
    }

    #[test]
    fn test_episode_record_serialization() {
        let episode = EpisodeRecord {
            id: 1,
            name: "Pilot".to_string(),
            season: 1,
            number: Some(1),
        };

        let json = serde_json::to_string(&episode).expect("Serialization should succeed");
        assert_eq!(json, r#"{"id":1,"name":"Pilot","season":1,"number":1}"#);
    }
}
