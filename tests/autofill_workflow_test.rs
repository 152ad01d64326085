//! End-to-end tests for the enrichment workflow, driven by stub
//! implementations of the catalog, fetcher, and prompt seams.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tapedeck::{
    AlbumDetails, AssetFetcher, Autofill, CatalogClient, PlaylistStore, Result, ScriptedPrompt,
    TapedeckError, TrackCandidate,
};

struct StubCatalog {
    candidates: Vec<TrackCandidate>,
    albums: RefCell<Vec<Option<AlbumDetails>>>,
    searches: Rc<Cell<u32>>,
}

impl StubCatalog {
    fn new(candidates: Vec<TrackCandidate>, albums: Vec<Option<AlbumDetails>>) -> Self {
        Self {
            candidates,
            albums: RefCell::new(albums),
            searches: Rc::new(Cell::new(0)),
        }
    }

    fn search_counter(&self) -> Rc<Cell<u32>> {
        self.searches.clone()
    }
}

#[async_trait(?Send)]
impl CatalogClient for StubCatalog {
    async fn search_tracks(&self, _query: &str, _limit: usize) -> Result<Vec<TrackCandidate>> {
        self.searches.set(self.searches.get() + 1);
        Ok(self.candidates.clone())
    }

    async fn get_album(&self, _album_id: u64) -> Result<AlbumDetails> {
        let mut albums = self.albums.borrow_mut();
        if albums.is_empty() {
            return Err(TapedeckError::Http("album lookup failed".to_string()));
        }
        match albums.remove(0) {
            Some(album) => Ok(album),
            None => Err(TapedeckError::Http("album lookup failed".to_string())),
        }
    }
}

/// Fetcher that records requested URLs and writes a marker file.
struct StubFetcher {
    downloads: Rc<RefCell<Vec<(String, PathBuf)>>>,
}

impl StubFetcher {
    fn new() -> Self {
        Self {
            downloads: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn download_log(&self) -> Rc<RefCell<Vec<(String, PathBuf)>>> {
        self.downloads.clone()
    }
}

#[async_trait(?Send)]
impl AssetFetcher for StubFetcher {
    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        fs::write(dest, b"jpeg-bytes")?;
        self.downloads
            .borrow_mut()
            .push((url.to_string(), dest.to_path_buf()));
        Ok(())
    }
}

fn discovery_album() -> AlbumDetails {
    AlbumDetails {
        id: 302127,
        title: "Discovery".to_string(),
        artist: "Daft Punk".to_string(),
        cover_url: "https://cdn.example/album/302127/image".to_string(),
        release_date: "1999-05-01".to_string(),
    }
}

fn discovery_candidate() -> TrackCandidate {
    TrackCandidate {
        id: 3135556,
        title: "One More Time".to_string(),
        artist: "Daft Punk".to_string(),
        album_title: "Discovery".to_string(),
        album_id: 302127,
    }
}

fn write_playlist(path: &Path, tracks_json: &str) {
    let document = format!(
        r#"{{"id": "pl-1", "name": "Late Night Tape",
            "createdAt": "2021-06-01T20:00:00Z", "audio": "side-a.mp3",
            "tracks": [{tracks_json}]}}"#
    );
    fs::write(path, document).unwrap();
}

#[test_log::test(tokio::test)]
async fn test_enrichment_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let playlist_path = dir.path().join("playlist.json");
    write_playlist(
        &playlist_path,
        r#"{"title": "One More Time", "artist": "Daft Punk", "album": ""}"#,
    );

    let catalog = StubCatalog::new(vec![discovery_candidate()], vec![Some(discovery_album())]);
    let fetcher = StubFetcher::new();
    let downloads = fetcher.download_log();

    let mut autofill = Autofill::new(
        Box::new(catalog),
        Box::new(fetcher),
        Box::new(ScriptedPrompt::new(["0"])),
    )
    .with_art_dir(dir.path());

    autofill.run(&playlist_path).await.unwrap();

    // All three fields are on disk
    let playlist = PlaylistStore::load(&playlist_path).unwrap();
    let track = &playlist.tracks[0];
    assert_eq!(track.album, "Discovery");
    assert_eq!(track.album_year, Some(1999));
    assert_eq!(track.album_art.as_deref(), Some("daft-punk-discovery.jpg"));

    // The art file exists at the sanitized path, fetched with the size
    // parameter applied
    let art_path = dir.path().join("daft-punk-discovery.jpg");
    assert!(art_path.exists());
    let downloads = downloads.borrow();
    assert_eq!(downloads.len(), 1);
    assert_eq!(
        downloads[0].0,
        "https://cdn.example/album/302127/image?size=1000"
    );
    assert_eq!(downloads[0].1, art_path);
}

#[tokio::test]
async fn test_zero_results_leaves_track_unmodified_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let playlist_path = dir.path().join("playlist.json");
    write_playlist(
        &playlist_path,
        r#"{"title": "Obscure Song", "artist": "Nobody", "album": ""},
           {"title": "Another Obscure Song", "artist": "Nobody", "album": ""}"#,
    );
    let original = fs::read_to_string(&playlist_path).unwrap();

    // No candidates, and no scripted input: the picker fails per track and
    // the run must still finish cleanly.
    let catalog = StubCatalog::new(vec![], vec![]);
    let searches = catalog.search_counter();
    let fetcher = StubFetcher::new();
    let downloads = fetcher.download_log();

    let mut autofill = Autofill::new(
        Box::new(catalog),
        Box::new(fetcher),
        Box::new(ScriptedPrompt::new(Vec::<String>::new())),
    )
    .with_art_dir(dir.path());

    autofill.run(&playlist_path).await.unwrap();

    // Both tracks were searched, nothing was downloaded or rewritten
    assert_eq!(searches.get(), 2);
    assert!(downloads.borrow().is_empty());
    assert_eq!(fs::read_to_string(&playlist_path).unwrap(), original);
}

#[tokio::test]
async fn test_resolved_tracks_are_never_requeried() {
    let dir = tempfile::tempdir().unwrap();
    let playlist_path = dir.path().join("playlist.json");
    write_playlist(
        &playlist_path,
        r#"{"title": "Digital Love", "artist": "Daft Punk", "album": "Discovery",
            "albumArt": "daft-punk-discovery.jpg", "albumYear": 2001}"#,
    );
    let original = fs::read_to_string(&playlist_path).unwrap();

    let catalog = StubCatalog::new(vec![discovery_candidate()], vec![Some(discovery_album())]);
    let searches = catalog.search_counter();

    let mut autofill = Autofill::new(
        Box::new(catalog),
        Box::new(StubFetcher::new()),
        Box::new(ScriptedPrompt::new(Vec::<String>::new())),
    )
    .with_art_dir(dir.path());

    autofill.run(&playlist_path).await.unwrap();

    assert_eq!(searches.get(), 0);
    assert_eq!(fs::read_to_string(&playlist_path).unwrap(), original);
}

#[tokio::test]
async fn test_lookup_failure_aborts_but_keeps_prior_enrichment() {
    let dir = tempfile::tempdir().unwrap();
    let playlist_path = dir.path().join("playlist.json");
    write_playlist(
        &playlist_path,
        r#"{"title": "One More Time", "artist": "Daft Punk", "album": ""},
           {"title": "Aerodynamic", "artist": "Daft Punk", "album": ""}"#,
    );

    // First lookup succeeds, second fails: the run aborts, but the first
    // track's enrichment is already persisted.
    let catalog = StubCatalog::new(
        vec![discovery_candidate()],
        vec![Some(discovery_album()), None],
    );

    let mut autofill = Autofill::new(
        Box::new(catalog),
        Box::new(StubFetcher::new()),
        Box::new(ScriptedPrompt::new(["0", "0"])),
    )
    .with_art_dir(dir.path());

    let err = autofill.run(&playlist_path).await.unwrap_err();
    assert!(matches!(err, TapedeckError::Http(_)));

    let playlist = PlaylistStore::load(&playlist_path).unwrap();
    assert_eq!(playlist.tracks[0].album, "Discovery");
    assert_eq!(playlist.tracks[0].album_year, Some(1999));
    assert!(playlist.tracks[1].album.is_empty());
    assert_eq!(playlist.tracks[1].album_year, None);
}

#[tokio::test]
async fn test_unparseable_release_date_omits_year() {
    let dir = tempfile::tempdir().unwrap();
    let playlist_path = dir.path().join("playlist.json");
    write_playlist(
        &playlist_path,
        r#"{"title": "One More Time", "artist": "Daft Punk", "album": ""}"#,
    );

    let album = AlbumDetails {
        release_date: "0000-00-00".to_string(),
        ..discovery_album()
    };
    let catalog = StubCatalog::new(vec![discovery_candidate()], vec![Some(album)]);

    let mut autofill = Autofill::new(
        Box::new(catalog),
        Box::new(StubFetcher::new()),
        Box::new(ScriptedPrompt::new(["0"])),
    )
    .with_art_dir(dir.path());

    autofill.run(&playlist_path).await.unwrap();

    let playlist = PlaylistStore::load(&playlist_path).unwrap();
    assert_eq!(playlist.tracks[0].album, "Discovery");
    assert_eq!(playlist.tracks[0].album_year, None);

    // The omission shows up in the raw document too
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&playlist_path).unwrap()).unwrap();
    assert!(value["tracks"][0].get("albumYear").is_none());
}
