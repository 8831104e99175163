use super::{
    error::{LoadError, MappingCause},
    types::{HeaderRecord, RawHeaders},
    visitor::{GameSource, PgnGameSource, PgnInput},
};
use std::fs::File;
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, info};
use zstd::stream::read::Decoder as ZstdDecoder;

pub const DEFAULT_REPORT_EVERY: NonZeroUsize = NonZeroUsize::new(10_000).unwrap();

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionMode {
    Plain,
    Zstd,
}

impl CompressionMode {
    /// `.zst` (any case) selects zstd; everything else is read as plain PGN.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("zst") => Self::Zstd,
            _ => Self::Plain,
        }
    }
}

pub fn open_input_stream(path: &Path, compression: CompressionMode) -> Result<PgnInput, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    match compression {
        CompressionMode::Plain => Ok(Box::new(file)),
        CompressionMode::Zstd => ZstdDecoder::new(file)
            .map(|decoder| Box::new(decoder) as PgnInput)
            .map_err(|source| LoadError::Decoder {
                path: path.to_path_buf(),
                source,
            }),
    }
}

/// Opens `path` as a game source. The file handle lives exactly as long as
/// the returned source.
pub fn open_pgn(
    path: &Path,
    compression: CompressionMode,
) -> Result<PgnGameSource<PgnInput>, LoadError> {
    let input = open_input_stream(path, compression)?;
    info!(path = %path.display(), ?compression, "opened PGN input");
    Ok(PgnGameSource::new(input))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    /// Upper bound on games pulled from the source; `None` reads to the end.
    pub max_games: Option<usize>,
    /// Progress is reported each time this many more games have been pulled.
    pub report_every: NonZeroUsize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_games: None,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }
}

pub trait ProgressObserver {
    fn games_pulled(&mut self, count: usize);
}

impl<F: FnMut(usize)> ProgressObserver for F {
    fn games_pulled(&mut self, count: usize) {
        self(count)
    }
}

impl ProgressObserver for () {
    fn games_pulled(&mut self, _: usize) {}
}

/// Result of one batch. `damaged[i]` failed with `causes[i]`.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<HeaderRecord>,
    pub damaged: Vec<RawHeaders>,
    pub causes: Vec<MappingCause>,
}

impl LoadOutcome {
    pub fn games_pulled(&self) -> usize {
        self.records.len() + self.damaged.len()
    }

    fn push_damaged(&mut self, headers: RawHeaders, cause: MappingCause) {
        self.damaged.push(headers);
        self.causes.push(cause);
    }
}

/// Pulls games until the source ends or `max_games` is reached, mapping each
/// one. Mapping failures are collected; a source error aborts the batch.
///
/// The source is consumed and dropped before returning on every path.
pub fn load_games<S, P>(
    mut source: S,
    options: &LoadOptions,
    mut progress: P,
) -> Result<LoadOutcome, LoadError>
where
    S: GameSource,
    P: ProgressObserver,
{
    let mut outcome = LoadOutcome::default();
    let mut pulled = 0usize;

    info!(max_games = ?options.max_games, "loading games");

    while options.max_games.is_none_or(|max| pulled < max) {
        let headers = match source.next_game() {
            Ok(Some(headers)) => headers,
            Ok(None) => break,
            Err(error) => {
                return Err(LoadError::Read {
                    game_index: pulled + 1,
                    source: error,
                });
            }
        };
        pulled += 1;

        match HeaderRecord::from_headers(headers) {
            Ok(record) => outcome.records.push(record),
            Err(error) => {
                debug!(game_index = pulled, cause = %error.cause, "damaged headers");
                let (headers, cause) = error.into_parts();
                outcome.push_damaged(headers, cause);
            }
        }

        if pulled.is_multiple_of(options.report_every.get()) {
            progress.games_pulled(pulled);
        }
    }

    info!(
        pulled,
        loaded = outcome.records.len(),
        damaged = outcome.damaged.len(),
        "finished loading games"
    );
    Ok(outcome)
}
