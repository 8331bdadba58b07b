use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Minimum overlap score for a listing to count as synced.
pub const SYNC_THRESHOLD: f32 = 3.8;

/// Scores how well a subtitle release name matches the playing file.
///
/// The name is compared token-wise against the file name or, when the
/// folder name carries at least as many tokens, against the folder name.
/// The share of base tokens found in the subtitle name maps onto a 0 to 5
/// scale, rounded to one decimal.
pub fn score(subtitle_name: &str, media_path: &str) -> f32 {
    let path = Path::new(media_path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let folder_name = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let subtitle_tokens = tokenize(subtitle_name);
    let mut file_tokens = tokenize(&file_name);
    // The trailing token of the file name is its extension.
    file_tokens.pop();
    let folder_tokens = tokenize(&folder_name);

    debug!(
        subtitle = %subtitle_tokens.join("."),
        file = %file_tokens.join("."),
        folder = %folder_tokens.join("."),
        "comparing releases"
    );

    let base = if file_tokens.len() > folder_tokens.len() {
        &file_tokens
    } else {
        &folder_tokens
    };
    if base.is_empty() {
        return 0.0;
    }

    let subtitle_set: HashSet<&str> = subtitle_tokens.iter().map(String::as_str).collect();
    let missing = base
        .iter()
        .map(String::as_str)
        .collect::<HashSet<&str>>()
        .difference(&subtitle_set)
        .count();

    // The distinct missing tokens count against the full base length,
    // duplicates included.
    let rating = (1.0 - missing as f32 / base.len() as f32) * 5.0;
    round_tenth(rating)
}

/// Lower-cases a release name and splits it on runs of non-word
/// characters. Empty segments are kept, matching how leading or trailing
/// punctuation tokenizes.
fn tokenize(name: &str) -> Vec<String> {
    NON_WORD
        .replace_all(name, ".")
        .to_lowercase()
        .split('.')
        .map(str::to_string)
        .collect()
}

fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_release_scores_five() {
        let score = score(
            "The.Flash.2014.S02E05.480p.HDTV.X264-DIMENSION",
            "/tv/The.Flash.2014.S02E05.480p.HDTV.X264-DIMENSION/The.Flash.2014.S02E05.480p.HDTV.X264-DIMENSION.mkv",
        );
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_disjoint_release_scores_zero() {
        let score = score(
            "Totally.Different.Name",
            "/tv/Some.Show.S01E01/Some.Show.S01E01.mkv",
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // Folder tokens: alpha, beta, gamma; subtitle covers two of three.
        let score = score("Alpha.Beta.Other", "/tv/Alpha.Beta.Gamma/file.mkv");
        assert_eq!(score, 3.3);
    }

    #[test]
    fn test_file_name_wins_when_longer() {
        let score = score(
            "Show.S01E01.720p.X264",
            "/tv/Different.Folder.Name/Show.S01E01.720p.X264.mkv",
        );
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_folder_name_wins_on_tie() {
        // Two tokens either side; the folder is the comparison base.
        let score = score("Show.S01E01", "/tv/Show.S01E01/Video.Extra.mkv");
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_duplicate_tokens_count_toward_length() {
        // Folder splits into [show, show, 2020]; only 2020 is missing, but
        // it weighs against all three slots.
        let score = score("Show", "/tv/Show.Show.2020/f.mkv");
        assert_eq!(score, 3.3);
    }

    #[test]
    fn test_case_and_punctuation_are_ignored() {
        let score = score("the flash 2014", "/tv/The-Flash-2014/x.mkv");
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_empty_path_scores_zero() {
        assert_eq!(score("anything", ""), 0.0);
    }

    #[test]
    fn test_threshold_boundary_rounds_up() {
        // Three of four folder tokens present: (1 - 1/4) * 5 = 3.75,
        // which rounds to the sync threshold.
        let score = score("One.Two.Three", "/tv/One.Two.Three.Four/f.mkv");
        assert_eq!(score, 3.8);
        assert!(score >= SYNC_THRESHOLD);
    }
}
