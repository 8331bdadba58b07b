use jimaku_api::LanguageListing;
use jimaku_parse::{clean_title, normalize_string, parse_release_title, ReleaseTitle};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::language;

/// Everything the engine knows about the media a subtitle is wanted for.
/// Immutable once `parsed` has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQuery {
    /// Title as reported by the player, often a release or file name.
    pub title: String,
    /// Show name, empty when the media is not part of a series.
    pub tvshow: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub year: Option<u32>,
    /// Candidate subtitle languages as ISO 639-2 codes, in request order.
    pub languages: Vec<String>,
    /// ISO 639-2 code of the language ranked ahead of all others.
    pub preferred_language: String,
    /// Full path of the playing file; feeds the release-name rating.
    pub source_path: String,
}

impl MediaQuery {
    /// Normalizes a raw query: decomposes unicode, strips extensions and
    /// trailing parentheticals from the names, extracts season, episode and
    /// year from the release title, and maps language tags to ISO 639-2.
    /// Tags the language table does not know are dropped.
    pub fn parsed(self) -> Self {
        let release = clean_title(ReleaseTitle {
            title: normalize_string(&self.title),
            tvshow: normalize_string(&self.tvshow),
            season: self.season,
            episode: self.episode,
            year: self.year,
        });
        let release = parse_release_title(release);

        let languages: Vec<String> = self
            .languages
            .iter()
            .filter_map(|tag| match language::iso639_2(tag) {
                Some(code) => Some(code.to_string()),
                None => {
                    warn!(tag = %tag, "dropping unrecognized language");
                    None
                }
            })
            .collect();
        let preferred_language = language::iso639_2(&self.preferred_language)
            .unwrap_or_default()
            .to_string();

        Self {
            title: release.title,
            tvshow: release.tvshow,
            season: release.season,
            episode: release.episode,
            year: release.year,
            languages,
            preferred_language,
            ..self
        }
    }
}

/// One provider response, grouped under the provider's own language tags.
/// Lives only between search and ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The phrase the provider was asked for.
    pub name: String,
    pub listings: Vec<LanguageListing>,
}

/// A subtitle listing scored against the playing file, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSubtitle {
    /// Position of the listing's language within the query's language list.
    pub language_index: usize,
    pub filename: String,
    pub language_name: String,
    /// Provider-side language tag.
    pub language_tag: String,
    /// Provider identifier used for download.
    pub id: String,
    /// Flat display rating; the site publishes no quality figures.
    pub rating: f32,
    /// Whether the release-name overlap cleared the sync threshold.
    pub synced: bool,
    /// The provider does not flag hearing-impaired subtitles.
    pub hearing_impaired: bool,
    /// Whether the language equals the query's preferred language.
    pub preferred: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_extracts_series_fields() {
        let query = MediaQuery {
            title: "The.Flash.2014.S02E05.480p.HDTV.X264-DIMENSION.mkv".into(),
            languages: vec!["heb".into()],
            preferred_language: "heb".into(),
            ..Default::default()
        }
        .parsed();

        assert_eq!(query.tvshow, "The Flash");
        assert_eq!(query.season, Some(2));
        assert_eq!(query.episode, Some(5));
        assert_eq!(query.year, Some(2014));
    }

    #[test]
    fn test_parsed_normalizes_languages() {
        let query = MediaQuery {
            title: "Inception".into(),
            languages: vec!["he".into(), "English".into(), "klingon".into()],
            preferred_language: "he".into(),
            ..Default::default()
        }
        .parsed();

        assert_eq!(query.languages, vec!["heb", "eng"]);
        assert_eq!(query.preferred_language, "heb");
    }

    #[test]
    fn test_parsed_leaves_unknown_preferred_empty() {
        let query = MediaQuery {
            title: "Inception".into(),
            preferred_language: "klingon".into(),
            ..Default::default()
        }
        .parsed();

        assert_eq!(query.preferred_language, "");
    }

    #[test]
    fn test_parsed_keeps_plain_episode_metadata() {
        let query = MediaQuery {
            title: "Episode 5".into(),
            tvshow: "The Affair".into(),
            season: Some(3),
            episode: Some(5),
            year: Some(2016),
            ..Default::default()
        }
        .parsed();

        assert_eq!(query.tvshow, "The Affair");
        assert_eq!(query.season, Some(3));
        assert_eq!(query.episode, Some(5));
        assert_eq!(query.year, Some(2016));
    }

    #[test]
    fn test_parsed_decomposes_unicode() {
        let query = MediaQuery {
            title: "Ｔｈｅ　Ｏｆｆｉｃｅ".into(),
            ..Default::default()
        }
        .parsed();

        assert_eq!(query.title, "The Office");
    }
}
