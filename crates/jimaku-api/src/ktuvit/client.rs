use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::error::KtuvitError;
use super::types::{DownloadRequest, RequestEnvelope, SearchRequest, SearchResponse};
use crate::traits::{
    LanguageListing, SearchOutcome, SubtitleProvider, SubtitleQuery, SubtitleSummary,
};

const BASE_URL: &str = "http://api.ktuvit.me/";

/// Language tag the provider serves; every listing comes back under it.
pub const LANGUAGE_TAG: &str = "he";

const USER_AGENT_VALUE: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Jimaku/",
    env!("CARGO_PKG_VERSION"),
    " Chrome/78.0.3904.97 Safari/537.36",
);

/// Ktuvit subtitle API client.
pub struct KtuvitClient {
    http: reqwest::Client,
    base_url: String,
}

impl KtuvitClient {
    /// Creates a client against the production API.
    pub fn new() -> Result<Self, KtuvitError> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a client against an arbitrary base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, KtuvitError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-us,en;q=0.5"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        // Accept-Encoding must stay with reqwest's gzip feature; setting the
        // header by hand disables the automatic decompression.
        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, KtuvitError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(KtuvitError::Api {
                status,
                message: body,
            })
        }
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: Req) -> Result<Resp, KtuvitError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "posting request");

        let resp = self
            .http
            .post(&url)
            .json(&RequestEnvelope { request })
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body = resp.text().await?;
        decode_double_json(&body)
    }
}

/// The API serializes its reply twice: the HTTP body is a JSON string whose
/// contents are the actual JSON document.
fn decode_double_json<T: DeserializeOwned>(body: &str) -> Result<T, KtuvitError> {
    let inner: String =
        serde_json::from_str(body).map_err(|e| KtuvitError::Parse(e.to_string()))?;
    serde_json::from_str(&inner).map_err(|e| KtuvitError::Parse(e.to_string()))
}

impl SubtitleProvider for KtuvitClient {
    type Error = KtuvitError;

    fn name(&self) -> &'static str {
        "ktuvit"
    }

    async fn search(&self, query: &SubtitleQuery) -> Result<SearchOutcome, KtuvitError> {
        let (path, request) = match query {
            SubtitleQuery::Series {
                phrase,
                season,
                episode,
            } => (
                "FindSeries",
                SearchRequest::series(phrase, *season, *episode),
            ),
            SubtitleQuery::Film { phrase, year } => ("FindFilm", SearchRequest::film(phrase, *year)),
        };

        let response: SearchResponse = self.post_json(path, request).await?;

        if !response.is_success {
            debug!(phrase = %query.phrase(), "provider rejected the search");
            return Ok(SearchOutcome::Rejected);
        }
        if response.results.is_empty() {
            return Ok(SearchOutcome::Listings(Vec::new()));
        }

        let subtitles = response
            .results
            .into_iter()
            .map(|subtitle| SubtitleSummary {
                identifier: subtitle.identifier,
                name: subtitle.name,
            })
            .collect();

        Ok(SearchOutcome::Listings(vec![LanguageListing {
            language_tag: LANGUAGE_TAG.to_string(),
            subtitles,
        }]))
    }

    async fn download(&self, identifier: &str) -> Result<Vec<u8>, KtuvitError> {
        let url = format!("{}Download", self.base_url);
        debug!(%url, identifier, "downloading subtitle");

        let resp = self
            .http
            .post(&url)
            .json(&RequestEnvelope {
                request: DownloadRequest {
                    subtitle_id: identifier.to_string(),
                },
            })
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}
