use std::fs;
use std::path::Path;

use jimaku_api::SubtitleProvider;
use tracing::{debug, info};

use crate::error::JimakuError;

/// Wipes and recreates the scratch directory subtitles unpack into.
pub fn prepare_work_dir(dir: &Path) -> Result<(), JimakuError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Fetches one subtitle payload and writes it verbatim to `target`.
///
/// The work directory is cleared first. An absent payload fails instead
/// of leaving an empty file behind.
pub async fn download_subtitle<P>(
    provider: &P,
    identifier: &str,
    language: &str,
    work_dir: &Path,
    target: &Path,
) -> Result<(), JimakuError>
where
    P: SubtitleProvider,
{
    prepare_work_dir(work_dir)?;
    debug!(identifier, language, "requesting subtitle payload");

    let payload = provider
        .download(identifier)
        .await
        .map_err(|error| JimakuError::Api(error.to_string()))?;
    if payload.is_empty() {
        return Err(JimakuError::Download(format!(
            "provider returned no payload for subtitle {identifier}"
        )));
    }

    fs::write(target, &payload)?;
    info!(
        identifier,
        target = %target.display(),
        bytes = payload.len(),
        "subtitle downloaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use jimaku_api::{SearchOutcome, SubtitleQuery};

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("fake provider error")]
    struct FakeError;

    struct FakeProvider {
        payload: Vec<u8>,
    }

    impl SubtitleProvider for FakeProvider {
        type Error = FakeError;

        fn name(&self) -> &'static str {
            "fake"
        }

        async fn search(&self, _query: &SubtitleQuery) -> Result<SearchOutcome, FakeError> {
            Ok(SearchOutcome::Listings(Vec::new()))
        }

        async fn download(&self, _identifier: &str) -> Result<Vec<u8>, FakeError> {
            Ok(self.payload.clone())
        }
    }

    #[tokio::test]
    async fn test_writes_payload_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().join("work");
        let target = dir.path().join("subtitle.srt");
        let provider = FakeProvider {
            payload: b"1\n00:00:01,000 --> 00:00:02,000\nhello\n".to_vec(),
        };

        download_subtitle(&provider, "74512", "he", &work_dir, &target)
            .await
            .unwrap();

        assert_eq!(fs::read(&target).unwrap(), provider.payload);
    }

    #[tokio::test]
    async fn test_empty_payload_fails() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().join("work");
        let target = dir.path().join("subtitle.srt");
        let provider = FakeProvider {
            payload: Vec::new(),
        };

        let error = download_subtitle(&provider, "74512", "he", &work_dir, &target)
            .await
            .unwrap_err();

        assert!(matches!(error, JimakuError::Download(_)));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_clears_stale_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().join("work");
        fs::create_dir_all(&work_dir).unwrap();
        fs::write(work_dir.join("stale.srt"), b"old").unwrap();
        let target = dir.path().join("subtitle.srt");
        let provider = FakeProvider {
            payload: b"new payload".to_vec(),
        };

        download_subtitle(&provider, "74512", "he", &work_dir, &target)
            .await
            .unwrap();

        assert!(work_dir.exists());
        assert!(!work_dir.join("stale.srt").exists());
    }

    #[test]
    fn test_prepare_work_dir_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().join("a").join("b");

        prepare_work_dir(&work_dir).unwrap();

        assert!(work_dir.is_dir());
    }
}
