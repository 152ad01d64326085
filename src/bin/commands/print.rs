use std::path::Path;
use tapedeck::PlaylistStore;

/// Handle the print command: show the playlist's name, creation date, and
/// numbered track list.
pub fn handle_print_command(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let playlist = PlaylistStore::load(path)?;

    println!("{} {}", playlist.name, playlist.created_at);
    for (index, track) in playlist.tracks.iter().enumerate() {
        println!(
            "{index}. {} • {} • {}",
            track.title, track.artist, track.album
        );
    }

    Ok(())
}
