use super::types::RawHeaders;
use pgn_reader::{RawTag, Reader, SanPlus, Skip, Visitor};
use std::io::{self, Read};
use std::ops::ControlFlow;

/// Pull-based supply of games: the next game's headers, or `None` at end of
/// input. An `Err` means the stream itself is unusable.
pub trait GameSource {
    fn next_game(&mut self) -> io::Result<Option<RawHeaders>>;
}

impl<S: GameSource + ?Sized> GameSource for &mut S {
    fn next_game(&mut self) -> io::Result<Option<RawHeaders>> {
        (**self).next_game()
    }
}

/// Streaming PGN visitor (pgn-reader) that keeps tag pairs only.
///
/// Tags are threaded through `Tags` and `Movetext` so nothing is buffered on
/// the visitor between games. Mainline SAN is ignored and variations are
/// skipped.
#[derive(Debug, Default)]
pub struct HeaderVisitor;

impl Visitor for HeaderVisitor {
    type Tags = RawHeaders;
    type Movetext = RawHeaders;
    type Output = RawHeaders;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Continue(RawHeaders::new())
    }

    fn tag(
        &mut self,
        tags: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        tags.push(String::from_utf8_lossy(key), value.decode_utf8_lossy());
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(tags)
    }

    fn san(&mut self, _: &mut Self::Movetext, _: SanPlus) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn end_game(&mut self, tags: Self::Movetext) -> Self::Output {
        tags
    }
}

pub type PgnInput = Box<dyn Read + Send>;

/// `GameSource` over a PGN byte stream. Owns the stream; dropping the source
/// closes it.
pub struct PgnGameSource<R: Read> {
    pgn_reader: Reader<R>,
    visitor: HeaderVisitor,
}

impl<R: Read> PgnGameSource<R> {
    // pgn-reader buffers internally, so `input` should not be a `BufReader`.
    pub fn new(input: R) -> Self {
        Self {
            pgn_reader: Reader::new(input),
            visitor: HeaderVisitor,
        }
    }
}

impl<R: Read> GameSource for PgnGameSource<R> {
    fn next_game(&mut self) -> io::Result<Option<RawHeaders>> {
        self.pgn_reader.read_game(&mut self.visitor)
    }
}
