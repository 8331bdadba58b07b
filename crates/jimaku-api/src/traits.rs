//! Trait definitions for subtitle providers.
//!
//! Provider clients implement these traits, allowing the search
//! orchestrator and the CLI to stay provider-agnostic.

use std::future::Future;

/// A provider query built from parsed media metadata.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SubtitleQuery {
    /// Episode lookup by show name plus season and episode numbers.
    Series {
        phrase: String,
        season: Option<u32>,
        episode: Option<u32>,
    },
    /// Movie lookup by title, optionally narrowed by release year.
    Film { phrase: String, year: Option<u32> },
}

impl SubtitleQuery {
    /// The search phrase sent to the provider.
    pub fn phrase(&self) -> &str {
        match self {
            Self::Series { phrase, .. } | Self::Film { phrase, .. } => phrase,
        }
    }
}

/// One candidate subtitle file as listed by a provider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubtitleSummary {
    /// Opaque provider identifier, passed back verbatim on download.
    pub identifier: String,
    /// Display name, usually mirroring the release the subtitle fits.
    pub name: String,
}

/// Subtitles grouped under the provider's own language tag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LanguageListing {
    pub language_tag: String,
    pub subtitles: Vec<SubtitleSummary>,
}

/// Outcome of a search the provider actually answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was processed; listings may be empty.
    Listings(Vec<LanguageListing>),
    /// The provider answered but flagged the search as failed.
    Rejected,
}

/// A subtitle search and download service.
pub trait SubtitleProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Provider name used in logs.
    fn name(&self) -> &'static str;

    /// Run one search against the provider.
    fn search(
        &self,
        query: &SubtitleQuery,
    ) -> impl Future<Output = Result<SearchOutcome, Self::Error>> + Send;

    /// Fetch the raw subtitle payload for a listed identifier.
    fn download(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;
}
