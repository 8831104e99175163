pub mod error;
pub mod fields;
pub mod log;
pub mod output;
pub mod reader;
pub mod types;
pub mod visitor;

pub use error::{LoadError, MappingCause, MappingError, OutputError};
pub use fields::{HEADER_FIELDS, HeaderField};
pub use output::{write_damaged_report, write_records};
pub use reader::{CompressionMode, LoadOptions, LoadOutcome, ProgressObserver, load_games, open_pgn};
pub use types::{HeaderRecord, RawHeaders};
pub use visitor::{GameSource, PgnGameSource};
