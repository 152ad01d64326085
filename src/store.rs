//! Loading and saving playlist files.

use crate::playlist::Playlist;
use crate::{Result, TapedeckError};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Persistence for playlist documents.
///
/// The autofill workflow saves after every successfully enriched track, so
/// the file on disk always reflects the last completed track. A crash
/// mid-run loses at most the in-flight track's enrichment.
pub struct PlaylistStore;

impl PlaylistStore {
    /// Read and deserialize the playlist at `path`.
    ///
    /// Fails with [`TapedeckError::Io`] when the path is unreadable and
    /// [`TapedeckError::Decode`] when the content is not a well-formed
    /// playlist document.
    pub fn load(path: &Path) -> Result<Playlist> {
        let raw = fs::read_to_string(path)?;
        let playlist = Playlist::from_json(&raw)
            .map_err(|e| TapedeckError::Decode(e.to_string()))?;
        log::debug!(
            "Loaded playlist '{}' ({} tracks) from {}",
            playlist.name,
            playlist.tracks.len(),
            path.display()
        );
        Ok(playlist)
    }

    /// Serialize `playlist` and replace the file at `path`.
    ///
    /// The document is written to a sibling temp file first and moved into
    /// place, so a failed write never leaves a truncated playlist behind.
    pub fn save(playlist: &Playlist, path: &Path) -> Result<()> {
        let json = playlist
            .to_json()
            .map_err(|e| TapedeckError::Decode(e.to_string()))?;

        let mut tmp_name = OsString::from(path.as_os_str());
        tmp_name.push(".tmp");
        let tmp_path = Path::new(&tmp_name);

        fs::write(tmp_path, json)?;
        fs::rename(tmp_path, path)?;

        log::debug!("Saved playlist to {}", path.display());
        Ok(())
    }
}
