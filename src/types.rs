//! Data records returned by the music catalog.
//!
//! These are ephemeral: they are consumed immediately to populate playlist
//! fields and are never persisted verbatim.

/// Pixel size requested for downloaded cover art.
pub const COVER_ART_SIZE: u32 = 1000;

/// A candidate track from a catalog search, ranked by relevance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCandidate {
    /// Catalog identifier of the track
    pub id: u64,
    /// The track title
    pub title: String,
    /// The artist name
    pub artist: String,
    /// Title of the album this track belongs to
    pub album_title: String,
    /// Catalog identifier of that album, used for the follow-up lookup
    pub album_id: u64,
}

impl TrackCandidate {
    /// Public web page for this track, shown alongside search results so
    /// the operator can double-check a candidate before selecting it.
    pub fn url(&self) -> String {
        format!("https://deezer.com/us/track/{}", self.id)
    }
}

/// A full album record from a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumDetails {
    /// Catalog identifier of the album
    pub id: u64,
    /// The album title
    pub title: String,
    /// The album artist name
    pub artist: String,
    /// Base URL of the album cover image
    pub cover_url: String,
    /// Release date in "YYYY-MM-DD" form
    pub release_date: String,
}

impl AlbumDetails {
    /// Cover image URL with the size parameter applied.
    pub fn cover_art_url(&self) -> String {
        format!("{}?size={}", self.cover_url, COVER_ART_SIZE)
    }
}
