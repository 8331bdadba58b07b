use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

static KNOWN_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\.[a-z]{2,4}$").unwrap());

static TRAILING_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]+\)\W*$").unwrap());

/// Series pattern: show name, optional four-digit year, season and episode
/// numbers with their usual separators. Applied to a whitespace-collapsed
/// working copy of the input.
static SERIES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(.*?) (\d{4})? ?(?:s|season|)(\d{1,2})(?:e|episode|x|\n)(\d{1,2})")
        .unwrap()
});

/// Movie fallback: leading text followed by a four-digit year, applied to
/// the uncollapsed title so punctuation still separates the year.
static MOVIE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(.*?)(\d{4})").unwrap());

/// Identity fields extracted from a release name or host metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseTitle {
    /// Movie title, or the raw release string before parsing.
    pub title: String,
    /// Series name; empty when the media is not an episode.
    pub tvshow: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub year: Option<u32>,
}

/// Apply NFKD normalization to a host-supplied string, decomposing
/// compatibility characters (fullwidth forms, ligatures) before parsing.
pub fn normalize_string(s: &str) -> String {
    s.nfkd().collect()
}

/// Strip a recognized file extension and a trailing parenthetical marker
/// (country tag, year qualifier) from both identity fields.
///
/// An extension is a final `.` followed by 2 to 4 alphabetic characters;
/// anything else stays part of the name.
pub fn clean_title(release: ReleaseTitle) -> ReleaseTitle {
    ReleaseTitle {
        title: clean_field(&release.title),
        tvshow: clean_field(&release.tvshow),
        ..release
    }
}

fn clean_field(raw: &str) -> String {
    let name = base_name(raw);
    let (stem, extension) = split_extension(name);
    let without_extension = match extension {
        Some(ext) if KNOWN_EXTENSION.is_match(ext) => stem,
        _ => name,
    };
    TRAILING_PARENTHETICAL
        .replace(without_extension, "")
        .trim()
        .to_string()
}

fn base_name(s: &str) -> &str {
    Path::new(s).file_name().and_then(|n| n.to_str()).unwrap_or(s)
}

/// Split a trailing extension off a file name. Leading dot runs belong to
/// the stem, so hidden files carry no extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if !name[..idx].chars().all(|c| c == '.') => {
            (&name[..idx], Some(&name[idx..]))
        }
        _ => (name, None),
    }
}

/// Parse season/episode/year information out of a noisy release title.
///
/// The series pattern runs over the collapsed `title` first and falls back
/// to the collapsed `tvshow`; when it matches, the captured show name
/// replaces `tvshow` and the year is overwritten by the optional capture
/// (cleared when the capture is empty). Otherwise a looser movie pattern
/// extracts a title and year. When nothing matches the input is returned
/// unchanged.
///
/// # Example
/// ```
/// use jimaku_parse::{parse_release_title, ReleaseTitle};
///
/// let parsed = parse_release_title(ReleaseTitle {
///     title: "The.Flash.2014.S02E05.480p.HDTV.X264-DIMENSION.mkv".into(),
///     ..Default::default()
/// });
/// assert_eq!(parsed.tvshow, "The Flash");
/// assert_eq!(parsed.season, Some(2));
/// assert_eq!(parsed.episode, Some(5));
/// assert_eq!(parsed.year, Some(2014));
/// ```
pub fn parse_release_title(release: ReleaseTitle) -> ReleaseTitle {
    let series = {
        let collapsed_title = NON_WORD.replace_all(&release.title, " ");
        let collapsed_tvshow = NON_WORD.replace_all(&release.tvshow, " ");
        SERIES_PATTERN
            .captures(&collapsed_title)
            .or_else(|| SERIES_PATTERN.captures(&collapsed_tvshow))
            .map(|captures| {
                let show = NON_WORD
                    .replace_all(captures.get(1).map_or("", |m| m.as_str()), " ")
                    .trim()
                    .to_string();
                let raw_year = captures.get(2).map_or("", |m| m.as_str());
                // An empty capture clears any year the caller supplied.
                let year = if raw_year.len() == 4 {
                    raw_year.parse().ok()
                } else {
                    None
                };
                let season = captures.get(3).map_or("", |m| m.as_str()).parse::<u32>();
                let episode = captures.get(4).map_or("", |m| m.as_str()).parse::<u32>();
                (show, year, season, episode)
            })
    };

    if let Some((show, year, Ok(season), Ok(episode))) = series {
        let parsed = ReleaseTitle {
            tvshow: show,
            season: Some(season),
            episode: Some(episode),
            year,
            title: release.title,
        };
        debug!(
            tvshow = %parsed.tvshow,
            season = parsed.season,
            episode = parsed.episode,
            year = parsed.year,
            "parsed series release"
        );
        return parsed;
    }

    let movie = MOVIE_PATTERN.captures(&release.title).map(|captures| {
        let title = NON_WORD
            .replace_all(captures.get(1).map_or("", |m| m.as_str()), " ")
            .trim()
            .to_string();
        let year = captures.get(2).and_then(|m| m.as_str().parse().ok());
        (title, year)
    });

    if let Some((title, year)) = movie {
        let parsed = ReleaseTitle {
            title,
            year,
            ..release
        };
        debug!(title = %parsed.title, year = parsed.year, "parsed movie release");
        return parsed;
    }

    release
}
