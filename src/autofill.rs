//! The interactive enrichment workflow.
//!
//! One run walks the playlist's tracks in order and, for each track still
//! missing album metadata, searches the catalog, lets the operator pick a
//! candidate, downloads the cover art, and writes the updated document back
//! to disk before moving on. Persisting per track means a crash loses at
//! most the in-flight track's enrichment.

use crate::date::parse_release_date;
use crate::fetch::AssetFetcher;
use crate::menu::{AlbumPicker, Prompt, DEFAULT_MAX_ATTEMPTS};
use crate::r#trait::CatalogClient;
use crate::sanitize::filenamify;
use crate::store::PlaylistStore;
use crate::Result;
use std::path::{Path, PathBuf};

/// How many search candidates are requested per track.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Orchestrates enrichment of a playlist file.
///
/// Failure handling is asymmetric: search and selection problems leave the
/// current track unresolved and the run continues, while album-lookup and
/// art-download failures abort the whole run. Tracks enriched before an
/// abort are already persisted.
pub struct Autofill {
    catalog: Box<dyn CatalogClient>,
    fetcher: Box<dyn AssetFetcher>,
    prompt: Box<dyn Prompt>,
    art_dir: PathBuf,
    search_limit: usize,
    max_menu_attempts: u32,
}

impl Autofill {
    pub fn new(
        catalog: Box<dyn CatalogClient>,
        fetcher: Box<dyn AssetFetcher>,
        prompt: Box<dyn Prompt>,
    ) -> Self {
        Self {
            catalog,
            fetcher,
            prompt,
            art_dir: PathBuf::from("."),
            search_limit: DEFAULT_SEARCH_LIMIT,
            max_menu_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the directory cover art files are written into.
    ///
    /// The playlist document stores only the sanitized file name; this
    /// controls where that file lands. Defaults to the current directory.
    pub fn with_art_dir(mut self, art_dir: impl Into<PathBuf>) -> Self {
        self.art_dir = art_dir.into();
        self
    }

    /// Set how many candidates each catalog search requests.
    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    /// Set the per-track menu attempt budget.
    pub fn with_max_menu_attempts(mut self, max_menu_attempts: u32) -> Self {
        self.max_menu_attempts = max_menu_attempts;
        self
    }

    /// Run the enrichment workflow over the playlist at `path`, mutating
    /// the file in place.
    pub async fn run(&mut self, path: &Path) -> Result<()> {
        let mut playlist = PlaylistStore::load(path)?;
        println!("{} {}", playlist.name, playlist.created_at);

        for index in 0..playlist.tracks.len() {
            let (title, artist) = {
                let track = &playlist.tracks[index];
                println!(
                    "Track {index}. {} • {} • {}",
                    track.title, track.artist, track.album
                );

                if track.is_resolved() {
                    log::debug!("'{}' already has album metadata, skipping", track.title);
                    continue;
                }
                (track.title.clone(), track.artist.clone())
            };

            let query = format!("{title} {artist}");
            let mut picker = AlbumPicker::new(self.catalog.as_ref(), self.prompt.as_mut())
                .with_search_limit(self.search_limit)
                .with_max_attempts(self.max_menu_attempts);

            let album_id = match picker.pick(&query).await {
                Ok(album_id) => album_id,
                Err(err) => {
                    // Search/selection failures are per-track recoverable.
                    log::warn!("Leaving '{title}' unresolved: {err}");
                    println!("{err}");
                    continue;
                }
            };

            // From here on failures abort the run.
            let album = self.catalog.get_album(album_id).await?;

            let (year, _, _) = parse_release_date(&album.release_date);
            let art_name = filenamify(&format!("{} {}", album.artist, album.title), ".jpg");
            let art_path = self.art_dir.join(&art_name);

            println!("Year {year}. Album Art: {art_name}");
            self.fetcher
                .download(&album.cover_art_url(), &art_path)
                .await?;

            let track = &mut playlist.tracks[index];
            track.album = album.title;
            // Year 0 means the release date failed to parse; leave the
            // field out of the document.
            track.album_year = (year != 0).then_some(year);
            track.album_art = Some(art_name);

            PlaylistStore::save(&playlist, path)?;
        }

        Ok(())
    }
}
