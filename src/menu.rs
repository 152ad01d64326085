//! Interactive album disambiguation.
//!
//! The picker owns the selection step of the enrichment workflow: it
//! presents ranked candidates and loops on operator input until an album is
//! chosen or the attempt budget runs out. The loop is iterative with a
//! bounded attempt counter; unbounded invalid input cannot grow the call
//! stack.

use crate::r#trait::CatalogClient;
use crate::types::TrackCandidate;
use crate::{Result, TapedeckError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// How many menu interactions a single track may consume before the picker
/// gives up and the track is skipped.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Trait for reading one line of operator input.
///
/// The console implementation is [`StdinPrompt`]; tests drive the menu with
/// a [`ScriptedPrompt`] instead.
pub trait Prompt {
    /// Display `prompt` and read one line, trimmed of surrounding whitespace.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// [`Prompt`] over the process's standard input.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

/// [`Prompt`] that replays a fixed sequence of responses.
///
/// Once the script is exhausted every further read fails with
/// [`TapedeckError::Input`], which the workflow treats like any other
/// unusable operator input.
pub struct ScriptedPrompt {
    responses: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.responses
            .pop_front()
            .ok_or_else(|| TapedeckError::Input("no scripted response left".to_string()))
    }
}

/// Drives the interactive selection of an album for one track.
///
/// # Examples
///
/// ```rust,no_run
/// use tapedeck::{AlbumPicker, DeezerClient, ScriptedPrompt};
///
/// # tokio_test::block_on(async {
/// let catalog = DeezerClient::new(Box::new(http_client::native::NativeClient::new()));
/// let mut prompt = ScriptedPrompt::new(["0"]);
///
/// let album_id = AlbumPicker::new(&catalog, &mut prompt)
///     .pick("one more time daft punk")
///     .await?;
/// println!("chosen album: {album_id}");
/// # Ok::<(), tapedeck::TapedeckError>(())
/// # });
/// ```
pub struct AlbumPicker<'a> {
    catalog: &'a dyn CatalogClient,
    prompt: &'a mut dyn Prompt,
    search_limit: usize,
    max_attempts: u32,
}

impl<'a> AlbumPicker<'a> {
    pub fn new(catalog: &'a dyn CatalogClient, prompt: &'a mut dyn Prompt) -> Self {
        Self {
            catalog,
            prompt,
            search_limit: 10,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set how many candidates a search requests.
    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    /// Set the menu attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Search for `query` and interact with the operator until an album is
    /// chosen.
    ///
    /// Returns the chosen catalog album id. Fails with
    /// [`TapedeckError::Input`] when the attempt budget is exhausted;
    /// search errors propagate as-is. Both are per-track recoverable from
    /// the workflow's point of view.
    pub async fn pick(&mut self, query: &str) -> Result<u64> {
        let mut candidates = self.search(query).await?;

        for _ in 0..self.max_attempts {
            println!("0-9: select album");
            println!("A: enter album ID");
            println!("?: edit search query");

            let input = self.prompt.read_line("> ")?;
            match input.as_str() {
                "A" => {
                    let raw = self.prompt.read_line("Enter an albumID: ")?;
                    match raw.parse::<u64>() {
                        Ok(album_id) => return Ok(album_id),
                        // Bad id: keep the candidate list and re-prompt
                        Err(_) => println!("Not a valid number: '{raw}'"),
                    }
                }
                "?" => {
                    let next_query = self.prompt.read_line("Enter a query: ")?;
                    if next_query.is_empty() {
                        println!("Error: missing search query");
                        continue;
                    }
                    candidates = self.search(&next_query).await?;
                }
                other => match other.parse::<usize>() {
                    Ok(index) if index < candidates.len() => {
                        return Ok(candidates[index].album_id)
                    }
                    Ok(index) => println!("Could not find track {index}"),
                    Err(_) => println!("Invalid selection: '{other}'"),
                },
            }
        }

        Err(TapedeckError::Input(format!(
            "no album selected after {} attempts",
            self.max_attempts
        )))
    }

    async fn search(&self, query: &str) -> Result<Vec<TrackCandidate>> {
        let candidates = self.catalog.search_tracks(query, self.search_limit).await?;

        println!("Search results for '{query}':");
        for (index, candidate) in candidates.iter().enumerate() {
            println!(
                "{index}. {} • {} • {} • {}",
                candidate.title,
                candidate.artist,
                candidate.album_title,
                candidate.url()
            );
        }
        if candidates.is_empty() {
            println!("No tracks found");
        }

        Ok(candidates)
    }
}
