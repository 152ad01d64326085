use crate::types::{AlbumDetails, TrackCandidate};
use crate::Result;
use async_trait::async_trait;

/// Trait for music catalog operations that can be mocked for testing.
///
/// This is the narrow seam between the enrichment workflow and the remote
/// catalog service: a ranked track search plus a full album lookup. The
/// production implementation is [`crate::DeezerClient`]; tests substitute a
/// stub so no network is involved.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides
/// `MockCatalogClient` implementing this trait via the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait CatalogClient {
    /// Search the catalog for tracks matching `query`, ranked by relevance.
    ///
    /// An empty result set is not an error.
    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<TrackCandidate>>;

    /// Fetch the full album record for a catalog album identifier.
    async fn get_album(&self, album_id: u64) -> Result<AlbumDetails>;
}
