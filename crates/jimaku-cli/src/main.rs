//! Command line front end for the jimaku subtitle engine.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use jimaku_api::KtuvitClient;
use jimaku_core::config::AppConfig;
use jimaku_core::download::download_subtitle;
use jimaku_core::error::JimakuError;
use jimaku_core::models::MediaQuery;
use jimaku_core::notify::{Notifier, NullNotifier};
use jimaku_core::search::search_subtitles;

#[derive(Parser)]
#[command(name = "jimaku")]
#[command(about = "Search and download subtitles from Ktuvit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for subtitles matching a release
    Search {
        /// Release or file name to search for
        title: String,
        /// Show name, for series lookups
        #[arg(long, default_value = "")]
        tvshow: String,
        #[arg(long)]
        season: Option<u32>,
        #[arg(long)]
        episode: Option<u32>,
        #[arg(long)]
        year: Option<u32>,
        /// Path of the media file the subtitles are for
        #[arg(long)]
        path: Option<PathBuf>,
        /// Candidate language, repeatable; overrides the configured list
        #[arg(short = 'l', long = "language")]
        languages: Vec<String>,
        /// Print the ranked listings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Download a subtitle payload by provider identifier
    Download {
        /// Identifier from a previous search
        id: String,
        /// Language tag of the listing
        #[arg(long, default_value = "he")]
        language: String,
        /// Destination file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Prints notices to stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

async fn run(cli: Cli) -> Result<(), JimakuError> {
    let config = AppConfig::load()?;
    let provider = KtuvitClient::new()?;

    match cli.command {
        Command::Search {
            title,
            tvshow,
            season,
            episode,
            year,
            path,
            languages,
            json,
        } => {
            let languages = if languages.is_empty() {
                config.search.languages.clone()
            } else {
                languages
            };
            let query = MediaQuery {
                title,
                tvshow,
                season,
                episode,
                year,
                languages,
                preferred_language: config.search.preferred.clone(),
                source_path: path.map(|p| p.display().to_string()).unwrap_or_default(),
            }
            .parsed();

            let ranked = if config.general.notifications {
                search_subtitles(&provider, &query, &StderrNotifier).await
            } else {
                search_subtitles(&provider, &query, &NullNotifier).await
            };

            if json {
                let body =
                    serde_json::to_string_pretty(&ranked).expect("listings serialize to JSON");
                println!("{body}");
            } else if ranked.is_empty() {
                println!("no subtitles found");
            } else {
                for subtitle in &ranked {
                    println!(
                        "{:>8}  {:<10} {} {}",
                        subtitle.id,
                        subtitle.language_name,
                        if subtitle.synced { "sync" } else { "    " },
                        subtitle.filename,
                    );
                }
            }
        }
        Command::Download {
            id,
            language,
            output,
        } => {
            let output = output.unwrap_or_else(|| {
                config
                    .download
                    .directory
                    .clone()
                    .unwrap_or_default()
                    .join(format!("{id}.srt"))
            });
            download_subtitle(&provider, &id, &language, &AppConfig::temp_dir(), &output).await?;
            println!("saved {}", output.display());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jimaku=info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(error = %error, "command failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_search_command() {
        let cli = Cli::try_parse_from([
            "jimaku",
            "search",
            "The.Flash.2014.S02E05.mkv",
            "--season",
            "2",
            "--episode",
            "5",
            "-l",
            "heb",
        ])
        .unwrap();

        match cli.command {
            Command::Search {
                title,
                season,
                episode,
                languages,
                ..
            } => {
                assert_eq!(title, "The.Flash.2014.S02E05.mkv");
                assert_eq!(season, Some(2));
                assert_eq!(episode, Some(5));
                assert_eq!(languages, vec!["heb"]);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_cli_parses_download_command() {
        let cli =
            Cli::try_parse_from(["jimaku", "download", "74512", "--output", "out.srt"]).unwrap();

        match cli.command {
            Command::Download {
                id,
                language,
                output,
            } => {
                assert_eq!(id, "74512");
                assert_eq!(language, "he");
                assert_eq!(output, Some(PathBuf::from("out.srt")));
            }
            _ => panic!("expected download command"),
        }
    }
}
