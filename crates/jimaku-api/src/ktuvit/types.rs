use serde::{Deserialize, Serialize};

// ── Request types ────────────────────────────────────────────────

/// The provider wraps every POST body under a single `request` key.
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<T> {
    pub request: T,
}

/// Query payload for `FindSeries` / `FindFilm`.
#[derive(Debug, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "SearchPhrase")]
    pub phrase: String,
    #[serde(rename = "SearchType")]
    pub search_type: &'static str,
    #[serde(rename = "Version")]
    pub version: &'static str,
    #[serde(rename = "Season", skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(rename = "Episode", skip_serializing_if = "Option::is_none")]
    pub episode: Option<String>,
    #[serde(rename = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl SearchRequest {
    /// Both endpoints expect the same search type marker.
    const SEARCH_TYPE: &'static str = "FilmName";
    const VERSION: &'static str = "1.0";

    /// Episode lookup. Season and episode travel as decimal strings, empty
    /// when the caller could not parse them out of the release name.
    pub fn series(phrase: &str, season: Option<u32>, episode: Option<u32>) -> Self {
        Self {
            phrase: phrase.to_string(),
            search_type: Self::SEARCH_TYPE,
            version: Self::VERSION,
            season: Some(season.map(|n| n.to_string()).unwrap_or_default()),
            episode: Some(episode.map(|n| n.to_string()).unwrap_or_default()),
            year: None,
        }
    }

    /// Movie lookup; the year key is left out of the body entirely when
    /// the caller has none.
    pub fn film(phrase: &str, year: Option<u32>) -> Self {
        Self {
            phrase: phrase.to_string(),
            search_type: Self::SEARCH_TYPE,
            version: Self::VERSION,
            season: None,
            episode: None,
            year: year.map(|y| y.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DownloadRequest {
    #[serde(rename = "subtitleID")]
    pub subtitle_id: String,
}

// ── Response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "IsSuccess")]
    pub is_success: bool,
    #[serde(rename = "Results", default)]
    pub results: Vec<WireSubtitle>,
}

#[derive(Debug, Deserialize)]
pub struct WireSubtitle {
    #[serde(rename = "SubtitleName")]
    pub name: String,
    #[serde(rename = "Identifier")]
    pub identifier: String,
}
