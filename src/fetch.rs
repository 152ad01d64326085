//! Downloading remote assets (cover art) to local files.

use crate::{Result, TapedeckError};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use std::fs;
use std::path::Path;

/// Trait for fetching a remote resource to a local file.
///
/// Cover art lives on whatever host the catalog's URLs point at, so this is
/// a separate seam from [`crate::CatalogClient`]; tests substitute it to
/// observe downloads without a network.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait AssetFetcher {
    /// GET `url` and write the response body to `dest`, overwriting any
    /// existing file.
    async fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

/// [`AssetFetcher`] over any [`HttpClient`] implementation.
///
/// No retry and no timeout are configured; a hung remote server blocks the
/// run until the operator terminates the process.
pub struct HttpAssetFetcher {
    client: Box<dyn HttpClient>,
}

impl HttpAssetFetcher {
    pub fn new(client: Box<dyn HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AssetFetcher for HttpAssetFetcher {
    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        log::debug!("Downloading {url} to {}", dest.display());

        let parsed = url
            .parse::<Url>()
            .map_err(|e| TapedeckError::Http(format!("invalid asset URL {url}: {e}")))?;
        let request = Request::new(Method::Get, parsed);

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

        let body = response
            .body_bytes()
            .await
            .map_err(|e| TapedeckError::Http(e.to_string()))?;

        fs::write(dest, body)?;
        Ok(())
    }
}
