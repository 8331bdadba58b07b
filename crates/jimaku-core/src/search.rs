use std::sync::LazyLock;

use jimaku_api::{SearchOutcome, SubtitleProvider, SubtitleQuery};
use regex::Regex;
use tracing::{debug, warn};

use crate::language;
use crate::models::{MediaQuery, RankedSubtitle, SearchResult};
use crate::notify::Notifier;
use crate::rating;

/// Notice raised when the provider refuses a search outright.
const SEARCH_FAILED_NOTICE: &str = "Search failed, please try again later";

/// Display rating attached to every listing; the site has no quality data.
const DISPLAY_RATING: f32 = 5.0;

/// Trailing parenthesized qualifier on a show name, e.g. "The Office (US)".
static TRAILING_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\(\w+\)$").unwrap());

/// Runs one search against the provider and ranks whatever comes back.
///
/// Every failure collapses to an empty list at this boundary: transport
/// and decode errors are logged, an explicit provider rejection also
/// raises a user notice, and an empty result set stays silent.
pub async fn search_subtitles<P, N>(
    provider: &P,
    query: &MediaQuery,
    notifier: &N,
) -> Vec<RankedSubtitle>
where
    P: SubtitleProvider,
    N: Notifier,
{
    let phrase = search_phrase(query);
    debug!(provider = provider.name(), phrase = %phrase, "searching subtitles");

    let request = if query.tvshow.is_empty() {
        SubtitleQuery::Film {
            phrase: phrase.clone(),
            year: query.year,
        }
    } else {
        SubtitleQuery::Series {
            phrase: phrase.clone(),
            season: query.season,
            episode: query.episode,
        }
    };

    let outcome = match provider.search(&request).await {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(error = %error, "subtitle search failed");
            return Vec::new();
        }
    };

    let listings = match outcome {
        SearchOutcome::Rejected => {
            warn!(phrase = %phrase, "provider rejected the search");
            notifier.notify(SEARCH_FAILED_NOTICE);
            return Vec::new();
        }
        SearchOutcome::Listings(listings) => listings,
    };
    if listings.is_empty() {
        return Vec::new();
    }

    let result = SearchResult {
        name: phrase,
        listings,
    };
    let count: usize = result.listings.iter().map(|l| l.subtitles.len()).sum();
    debug!(name = %result.name, count, "provider returned listings");

    rank(&result, query)
}

/// The phrase sent to the provider: the show name stripped of a trailing
/// qualifier, or the title for non-series media.
fn search_phrase(query: &MediaQuery) -> String {
    if query.tvshow.is_empty() {
        query.title.clone()
    } else {
        TRAILING_QUALIFIER
            .split(&query.tvshow)
            .next()
            .unwrap_or(&query.tvshow)
            .to_string()
    }
}

/// Flattens a provider result into scored listings, keeping only languages
/// the query asked for, then orders them for display.
pub fn rank(result: &SearchResult, query: &MediaQuery) -> Vec<RankedSubtitle> {
    let mut ranked = Vec::new();

    for listing in &result.listings {
        let Some(code) = language::iso639_2(&listing.language_tag) else {
            warn!(tag = %listing.language_tag, "skipping unrecognized provider language");
            continue;
        };
        let Some(language_index) = query.languages.iter().position(|l| l == code) else {
            continue;
        };

        for subtitle in &listing.subtitles {
            let overlap = rating::score(&subtitle.name, &query.source_path);
            ranked.push(RankedSubtitle {
                language_index,
                filename: subtitle.name.clone(),
                language_name: language::english_name(&listing.language_tag)
                    .unwrap_or_default()
                    .to_string(),
                language_tag: listing.language_tag.clone(),
                id: subtitle.identifier.clone(),
                rating: DISPLAY_RATING,
                synced: overlap >= rating::SYNC_THRESHOLD,
                hearing_impaired: false,
                preferred: code == query.preferred_language,
            });
        }
    }

    // Descending over the whole tuple. The rating key never breaks a tie
    // since every listing carries the same display value, but it stays
    // part of the ordering.
    ranked.sort_by(|a, b| {
        b.preferred
            .cmp(&a.preferred)
            .then(b.language_index.cmp(&a.language_index))
            .then(b.synced.cmp(&a.synced))
            .then(b.rating.total_cmp(&a.rating))
    });

    ranked
}
