//! Extracts per-game header metadata from PGN files into a typed,
//! CSV-ready table.
//!
//! ```no_run
//! use chess_headers::chess::{CompressionMode, LoadOptions, load_games, open_pgn};
//! use std::path::Path;
//!
//! let path = Path::new("lichess_db_standard_rated_2013-01.pgn.zst");
//! let source = open_pgn(path, CompressionMode::detect(path))?;
//! let outcome = load_games(source, &LoadOptions::default(), ())?;
//! println!("{} games, {} damaged", outcome.records.len(), outcome.damaged.len());
//! # Ok::<(), chess_headers::chess::LoadError>(())
//! ```

pub mod chess;
