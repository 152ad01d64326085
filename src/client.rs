//! Deezer-backed implementation of the catalog client.
//!
//! Deezer's public API needs no authentication for search and album
//! lookups. Failures come back in-band as a JSON `error` object, which this
//! module maps onto the crate's error types before the payload is parsed.

use crate::r#trait::CatalogClient;
use crate::types::{AlbumDetails, TrackCandidate};
use crate::{Result, TapedeckError};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use serde::Deserialize;

const DEEZER_API_BASE: &str = "https://api.deezer.com";

// Deezer in-band error codes
const CODE_QUOTA_EXCEEDED: i64 = 4;
const CODE_DATA_NOT_FOUND: i64 = 800;

// Deezer quotas are windowed over a few seconds; reported, never waited out.
const QUOTA_RETRY_AFTER_SECS: u64 = 5;

/// Catalog client backed by the Deezer public API.
///
/// # Examples
///
/// ```rust,no_run
/// use tapedeck::{CatalogClient, DeezerClient, Result};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let http_client = http_client::native::NativeClient::new();
///     let client = DeezerClient::new(Box::new(http_client));
///
///     let candidates = client.search_tracks("one more time daft punk", 10).await?;
///     for candidate in &candidates {
///         println!("{} - {}", candidate.artist, candidate.title);
///     }
///
///     Ok(())
/// }
/// ```
pub struct DeezerClient {
    client: Box<dyn HttpClient>,
    base_url: String,
}

impl DeezerClient {
    /// Create a new [`DeezerClient`] against the public Deezer API.
    ///
    /// # Arguments
    ///
    /// * `client` - Any HTTP client implementation that implements [`HttpClient`]
    pub fn new(client: Box<dyn HttpClient>) -> Self {
        Self::with_base_url(client, DEEZER_API_BASE.to_string())
    }

    /// Create a new [`DeezerClient`] with a custom base URL.
    ///
    /// This is useful for testing against a local fixture server.
    pub fn with_base_url(client: Box<dyn HttpClient>, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn get(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");

        let request = Request::new(Method::Get, url.parse::<Url>().unwrap());
        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| TapedeckError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TapedeckError::Http(format!(
                "{url} returned status {}",
                response.status()
            )));
        }

        response
            .body_string()
            .await
            .map_err(|e| TapedeckError::Http(e.to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogClient for DeezerClient {
    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<TrackCandidate>> {
        let url = format!(
            "{}/search/track?q={}&limit={}&order=RANKING",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        let body = self.get(&url).await?;
        parse_search_response(&body)
    }

    async fn get_album(&self, album_id: u64) -> Result<AlbumDetails> {
        let url = format!("{}/album/{album_id}", self.base_url);
        let body = self.get(&url).await?;
        parse_album_response(&body)
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: String,
    message: String,
    code: i64,
}

#[derive(Deserialize)]
struct ApiSearchResponse {
    data: Vec<ApiSearchTrack>,
}

#[derive(Deserialize)]
struct ApiSearchTrack {
    id: u64,
    title: String,
    artist: ApiArtist,
    album: ApiAlbumRef,
}

#[derive(Deserialize)]
struct ApiArtist {
    name: String,
}

#[derive(Deserialize)]
struct ApiAlbumRef {
    id: u64,
    title: String,
}

#[derive(Deserialize)]
struct ApiAlbum {
    id: u64,
    title: String,
    artist: ApiArtist,
    cover: String,
    #[serde(default)]
    release_date: String,
}

/// Map an in-band Deezer error object, if the body carries one.
fn check_api_error(json: &str) -> Result<()> {
    // Bodies that are not a JSON object fall through to the payload parse,
    // which produces the more useful decode error.
    let envelope: ApiErrorEnvelope = match serde_json::from_str(json) {
        Ok(envelope) => envelope,
        Err(_) => return Ok(()),
    };

    if let Some(error) = envelope.error {
        return Err(match error.code {
            CODE_QUOTA_EXCEEDED => TapedeckError::RateLimit {
                retry_after: QUOTA_RETRY_AFTER_SECS,
            },
            CODE_DATA_NOT_FOUND => TapedeckError::NotFound(error.message),
            _ => TapedeckError::Http(format!(
                "{}: {} (code {})",
                error.kind, error.message, error.code
            )),
        });
    }

    Ok(())
}

fn parse_search_response(json: &str) -> Result<Vec<TrackCandidate>> {
    check_api_error(json)?;

    let response: ApiSearchResponse =
        serde_json::from_str(json).map_err(|e| TapedeckError::Decode(e.to_string()))?;

    Ok(response
        .data
        .into_iter()
        .map(|track| TrackCandidate {
            id: track.id,
            title: track.title,
            artist: track.artist.name,
            album_title: track.album.title,
            album_id: track.album.id,
        })
        .collect())
}

fn parse_album_response(json: &str) -> Result<AlbumDetails> {
    check_api_error(json)?;

    let album: ApiAlbum =
        serde_json::from_str(json).map_err(|e| TapedeckError::Decode(e.to_string()))?;

    Ok(AlbumDetails {
        id: album.id,
        title: album.title,
        artist: album.artist.name,
        cover_url: album.cover,
        release_date: album.release_date,
    })
}
