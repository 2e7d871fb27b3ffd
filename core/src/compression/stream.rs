//! compression/stream.rs
//! Stream-codec collaborator: wraps a raw transport in a compressing or
//! decompressing stream. The byte layout on the transport is entirely the
//! collaborator's.
use std::io::{self, Read, Write};

use crate::compression::types::{RawSink, RawSource};

pub trait StreamCodec: Send + Sync {
    fn wrap_for_compression<'a>(&self, sink: RawSink<'a>) -> io::Result<Box<dyn Write + 'a>>;
    fn wrap_for_decompression<'a>(&self, source: RawSource<'a>) -> io::Result<Box<dyn Read + 'a>>;
}

/// Snappy framing format via `snap`.
///
/// `flush` emits every buffered block as a complete frame, then flushes the
/// raw sink. Flushing again with nothing buffered adds no frames.
#[derive(Copy, Clone, Debug, Default)]
pub struct SnapFrameCodec;

impl StreamCodec for SnapFrameCodec {
    fn wrap_for_compression<'a>(&self, sink: RawSink<'a>) -> io::Result<Box<dyn Write + 'a>> {
        Ok(Box::new(FlushThrough(snap::write::FrameEncoder::new(sink))))
    }

    fn wrap_for_decompression<'a>(&self, source: RawSource<'a>) -> io::Result<Box<dyn Read + 'a>> {
        Ok(Box::new(snap::read::FrameDecoder::new(source)))
    }
}

/// `FrameEncoder::flush` stops at the raw sink; this carries the flush through.
struct FlushThrough<W: Write>(snap::write::FrameEncoder<W>);

impl<W: Write> Write for FlushThrough<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()?;
        self.0.get_mut().flush()
    }
}
