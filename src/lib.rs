pub mod autofill;
pub mod client;
pub mod date;
pub mod error;
pub mod fetch;
pub mod menu;
pub mod playlist;
pub mod sanitize;
pub mod store;
pub mod r#trait;
pub mod types;

pub use autofill::Autofill;
pub use client::DeezerClient;
pub use date::parse_release_date;
pub use error::TapedeckError;
pub use fetch::{AssetFetcher, HttpAssetFetcher};
pub use menu::{AlbumPicker, Prompt, ScriptedPrompt, StdinPrompt};
pub use playlist::{Playlist, Track};
pub use r#trait::CatalogClient;
pub use sanitize::filenamify;
pub use store::PlaylistStore;
pub use types::{AlbumDetails, TrackCandidate};

#[cfg(feature = "mock")]
pub use fetch::MockAssetFetcher;
#[cfg(feature = "mock")]
pub use r#trait::MockCatalogClient;

pub type Result<T> = std::result::Result<T, TapedeckError>;
