use std::path::Path;
use tapedeck::{Autofill, DeezerClient, HttpAssetFetcher, StdinPrompt};

/// Handle the autofill command: run the interactive enrichment workflow
/// against the playlist file, mutating it in place.
pub async fn handle_autofill_command(
    path: &Path,
    art_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = DeezerClient::new(Box::new(http_client::native::NativeClient::new()));
    let fetcher = HttpAssetFetcher::new(Box::new(http_client::native::NativeClient::new()));

    let mut autofill = Autofill::new(
        Box::new(catalog),
        Box::new(fetcher),
        Box::new(StdinPrompt),
    )
    .with_art_dir(art_dir);

    autofill.run(path).await?;
    Ok(())
}
