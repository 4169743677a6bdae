//! Media record fixtures
//!
//! The catalogue returned by the discover, search, movie and tv endpoints.

use serde::{Serialize, Serializer};

/// Kind of media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

/// Availability of a media item, serialized as its numeric code.
/// Only the codes the catalogue uses are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaStatus {
    Pending = 2,
    Available = 5,
}

impl Serialize for MediaStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaInfo {
    pub status: MediaStatus,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub id: u32,
    pub media_type: MediaType,
    pub title: &'static str,
    pub overview: &'static str,
    pub poster_path: &'static str,
    pub backdrop_path: &'static str,
    pub release_date: &'static str,
    pub vote_average: f64,
    pub media_info: MediaInfo,
    /// Only present on the tv-shaped variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

impl MediaRecord {
    /// The same record presented as a tv show
    pub const fn as_show(&self, name: &'static str) -> Self {
        Self {
            media_type: MediaType::Tv,
            name: Some(name),
            ..*self
        }
    }
}

pub const SHOW_NAME: &str = "Fake Show";

pub static MEDIA: [MediaRecord; 4] = [
    MediaRecord {
        id: 1001,
        media_type: MediaType::Movie,
        title: "Neon Horizons",
        overview: "In a futuristic city where technology and humanity collide, a rogue AI gains consciousness and must choose between its programmed directives and its newfound sense of morality.",
        poster_path: "/poster/movie_1001.jpg",
        backdrop_path: "/backdrop/movie_1001.jpg",
        release_date: "2025-06-15",
        vote_average: 8.7,
        media_info: MediaInfo {
            status: MediaStatus::Available,
            available: true,
        },
        name: None,
    },
    MediaRecord {
        id: 1002,
        media_type: MediaType::Movie,
        title: "The Last Cartographer",
        overview: "An aging mapmaker discovers that the mysterious islands he's been charting for decades are actually gateways to parallel dimensions.",
        poster_path: "/poster/movie_1002.jpg",
        backdrop_path: "/backdrop/movie_1002.jpg",
        release_date: "2024-06-15",
        vote_average: 8.2,
        media_info: MediaInfo {
            status: MediaStatus::Available,
            available: true,
        },
        name: None,
    },
    MediaRecord {
        id: 1003,
        media_type: MediaType::Movie,
        title: "Velvet Club",
        overview: "A jazz pianist uncovers a citywide conspiracy after witnessing a murder at the legendary Velvet Club.",
        poster_path: "/poster/movie_1003.jpg",
        backdrop_path: "/backdrop/movie_1001.jpg",
        release_date: "2025-01-15",
        vote_average: 7.9,
        media_info: MediaInfo {
            status: MediaStatus::Pending,
            available: false,
        },
        name: None,
    },
    MediaRecord {
        id: 1004,
        media_type: MediaType::Movie,
        title: "Echoes of Tomorrow",
        overview: "After a devastating solar storm erases all digital data on Earth, humanity must rebuild society from memory.",
        poster_path: "/poster/movie_1004.jpg",
        backdrop_path: "/backdrop/movie_1002.jpg",
        release_date: "2024-11-20",
        vote_average: 8.5,
        media_info: MediaInfo {
            status: MediaStatus::Available,
            available: true,
        },
        name: None,
    },
];

/// Record returned by every movie and tv detail lookup
pub fn featured() -> &'static MediaRecord {
    &MEDIA[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_catalogue_ids() {
        let ids: Vec<u32> = MEDIA.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1001, 1002, 1003, 1004]);
        assert_eq!(featured().id, 1001);
    }

    #[test]
    fn test_record_wire_shape() {
        let value = serde_json::to_value(featured()).unwrap();
        assert_eq!(value["mediaType"], "movie");
        assert_eq!(value["posterPath"], "/poster/movie_1001.jpg");
        assert_eq!(value["releaseDate"], "2025-06-15");
        assert_eq!(value["voteAverage"], 8.7);
        assert_eq!(value["mediaInfo"], json!({"status": 5, "available": true}));
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_status_numeric_codes() {
        assert_eq!(serde_json::to_value(MediaStatus::Pending).unwrap(), json!(2));
        assert_eq!(serde_json::to_value(MediaStatus::Available).unwrap(), json!(5));
    }

    #[test]
    fn test_pending_status_code() {
        let value = serde_json::to_value(&MEDIA[2]).unwrap();
        assert_eq!(value["mediaInfo"], json!({"status": 2, "available": false}));
    }

    #[test]
    fn test_show_reshape() {
        let show = featured().as_show(SHOW_NAME);
        let value = serde_json::to_value(&show).unwrap();
        assert_eq!(value["mediaType"], "tv");
        assert_eq!(value["name"], "Fake Show");
        assert_eq!(value["id"], 1001);
        assert_eq!(value["title"], "Neon Horizons");

        // The catalogue entry itself is untouched
        assert_eq!(featured().media_type, MediaType::Movie);
    }

    #[test]
    fn test_show_name_is_last_key() {
        let show = featured().as_show(SHOW_NAME);
        let text = serde_json::to_string(&show).unwrap();
        assert!(text.ends_with(r#""name":"Fake Show"}"#), "got: {text}");
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_object().unwrap().len(), 10);
    }
}
