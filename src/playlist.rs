//! The playlist document as stored on disk.
//!
//! A playlist is a single JSON file owning an ordered list of tracks. Track
//! order is meaningful (it reflects play order) and is preserved through a
//! load/save round trip. Optional fields serialize only when present, so a
//! document that never carried them stays byte-compatible with its source.

use serde::{Deserialize, Serialize};

/// One song entry within a playlist.
///
/// A track with a non-empty `album` is considered resolved: the autofill
/// workflow skips it and never mutates it again, which makes repeated runs
/// over the same file idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// The track title
    pub title: String,
    /// The artist name
    pub artist: String,
    /// The album title; empty means not yet resolved
    #[serde(default)]
    pub album: String,
    /// Local file name of the downloaded cover art (if any)
    #[serde(rename = "albumArt", skip_serializing_if = "Option::is_none")]
    pub album_art: Option<String>,
    /// Album release year (if known)
    #[serde(rename = "albumYear", skip_serializing_if = "Option::is_none")]
    pub album_year: Option<i32>,
    /// Position of this track within the source recording (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Track {
    /// Whether this track already carries album metadata.
    pub fn is_resolved(&self) -> bool {
        !self.album.is_empty()
    }
}

/// An ordered, named collection of tracks persisted as one JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist identifier (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable playlist name
    pub name: String,
    /// Creation timestamp, stored as opaque text
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Reference to the audio source backing this playlist
    pub audio: String,
    /// The tracks, in play order
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Serialize the playlist to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a playlist from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "pl-1",
        "name": "Late Night Tape",
        "createdAt": "2021-06-01T20:00:00Z",
        "audio": "side-a.mp3",
        "tracks": [
            {"title": "One More Time", "artist": "Daft Punk", "album": ""},
            {"title": "Digital Love", "artist": "Daft Punk", "album": "Discovery",
             "albumArt": "daft-punk-discovery.jpg", "albumYear": 2001,
             "timestamp": "12:34"}
        ]
    }"#;

    #[test]
    fn test_round_trip() {
        let playlist = Playlist::from_json(SAMPLE).unwrap();
        let json = playlist.to_json().unwrap();
        let restored = Playlist::from_json(&json).unwrap();
        assert_eq!(playlist, restored);
    }

    #[test]
    fn test_resolved_state() {
        let playlist = Playlist::from_json(SAMPLE).unwrap();
        assert!(!playlist.tracks[0].is_resolved());
        assert!(playlist.tracks[1].is_resolved());
    }

    #[test]
    fn test_track_order_preserved() {
        let playlist = Playlist::from_json(SAMPLE).unwrap();
        assert_eq!(playlist.tracks[0].title, "One More Time");
        assert_eq!(playlist.tracks[1].title, "Digital Love");
    }

    #[test]
    fn test_absent_optionals_stay_absent() {
        let playlist = Playlist::from_json(SAMPLE).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&playlist.to_json().unwrap()).unwrap();

        let unresolved = &value["tracks"][0];
        assert!(unresolved.get("albumArt").is_none());
        assert!(unresolved.get("albumYear").is_none());
        assert!(unresolved.get("timestamp").is_none());
        // The empty album field itself is always written
        assert_eq!(unresolved["album"], "");
    }

    #[test]
    fn test_missing_id_stays_missing() {
        let playlist = Playlist::from_json(
            r#"{"name": "n", "createdAt": "c", "audio": "a", "tracks": []}"#,
        )
        .unwrap();
        assert_eq!(playlist.id, None);

        let value: serde_json::Value =
            serde_json::from_str(&playlist.to_json().unwrap()).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(Playlist::from_json("{\"name\": 42}").is_err());
        assert!(Playlist::from_json("not json").is_err());
    }
}
