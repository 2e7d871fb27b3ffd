//! codecs/snappy.rs
//! Snappy adapter: stream decorators over the snappy framing codec, plus the
//! stream-only handles pools expect to borrow.
//!
//! Record readers commonly do this:
//!
//! ```text
//! decompressor = pool.borrow(codec)
//! stream = codec.create_input_stream_with(empty_buffer, decompressor)
//! loop { refill empty_buffer; stream.reset_state(); read records }
//! ```
//!
//! The borrowed handle is never touched for data, so a stream-only handle is
//! enough, and `reset_state` on the input side has to be a harmless no-op.
use std::{
    io::{self, Read, Write},
    sync::Arc,
};

use tracing::{debug, trace, warn};

use crate::{
    compression::{
        codecs::inert::{InertCompressor, InertDecompressor},
        stream::{SnapFrameCodec, StreamCodec},
        types::{
            CompressionCodec, CompressionInputStream, CompressionOutputStream, Compressor,
            Decompressor, HandleType, RawSink, RawSource,
        },
    },
    constants::{handle_labels, SNAPPY_CODEC_NAME, SNAPPY_EXTENSION},
    types::{CodecError, Result},
};

pub struct SnappyCodec<S: StreamCodec = SnapFrameCodec> {
    streams: S,
    compressor: Arc<dyn Compressor>,
    decompressor: Arc<dyn Decompressor>,
}

impl SnappyCodec<SnapFrameCodec> {
    pub fn new() -> Self {
        Self::with_stream_codec(SnapFrameCodec)
    }
}

impl Default for SnappyCodec<SnapFrameCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StreamCodec> SnappyCodec<S> {
    /// Build the adapter over a custom stream collaborator.
    pub fn with_stream_codec(streams: S) -> Self {
        Self {
            streams,
            compressor: Arc::new(InertCompressor::new(handle_labels::SNAPPY_COMPRESSOR)),
            decompressor: Arc::new(InertDecompressor::new(handle_labels::SNAPPY_DECOMPRESSOR)),
        }
    }

    /// Typed form of `CompressionCodec::create_output_stream`.
    pub fn output_stream<'a, W: Write + 'a>(
        &self,
        sink: W,
    ) -> Result<SnappyCompressionOutputStream<'a>> {
        debug!(codec = SNAPPY_CODEC_NAME, "creating output stream");
        let out = self.streams.wrap_for_compression(Box::new(sink))?;
        Ok(SnappyCompressionOutputStream { out })
    }

    /// Typed form of `CompressionCodec::create_input_stream`.
    pub fn input_stream<'a, R: Read + 'a>(
        &self,
        source: R,
    ) -> Result<SnappyCompressionInputStream<'a>> {
        debug!(codec = SNAPPY_CODEC_NAME, "creating input stream");
        let input = self.streams.wrap_for_decompression(Box::new(source))?;
        Ok(SnappyCompressionInputStream { input })
    }

    fn check_compressor(&self, compressor: &Arc<dyn Compressor>) -> Result<()> {
        if same_handle(&self.compressor, compressor) {
            return Ok(());
        }
        warn!(codec = SNAPPY_CODEC_NAME, "rejecting compressor not lent out by this codec");
        Err(CodecError::ForeignHandle { expected: handle_labels::SNAPPY_COMPRESSOR })
    }

    fn check_decompressor(&self, decompressor: &Arc<dyn Decompressor>) -> Result<()> {
        if same_handle(&self.decompressor, decompressor) {
            return Ok(());
        }
        warn!(codec = SNAPPY_CODEC_NAME, "rejecting decompressor not lent out by this codec");
        Err(CodecError::ForeignHandle { expected: handle_labels::SNAPPY_DECOMPRESSOR })
    }
}

/// Address identity, ignoring vtable metadata.
fn same_handle<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl<S: StreamCodec> CompressionCodec for SnappyCodec<S> {
    fn name(&self) -> &'static str {
        SNAPPY_CODEC_NAME
    }

    fn create_output_stream<'a>(
        &self,
        sink: RawSink<'a>,
    ) -> Result<Box<dyn CompressionOutputStream + 'a>> {
        Ok(Box::new(self.output_stream(sink)?))
    }

    fn create_output_stream_with<'a>(
        &self,
        sink: RawSink<'a>,
        compressor: &Arc<dyn Compressor>,
    ) -> Result<Box<dyn CompressionOutputStream + 'a>> {
        self.check_compressor(compressor)?;
        self.create_output_stream(sink)
    }

    fn create_input_stream<'a>(
        &self,
        source: RawSource<'a>,
    ) -> Result<Box<dyn CompressionInputStream + 'a>> {
        Ok(Box::new(self.input_stream(source)?))
    }

    fn create_input_stream_with<'a>(
        &self,
        source: RawSource<'a>,
        decompressor: &Arc<dyn Decompressor>,
    ) -> Result<Box<dyn CompressionInputStream + 'a>> {
        self.check_decompressor(decompressor)?;
        self.create_input_stream(source)
    }

    fn create_compressor(&self) -> Arc<dyn Compressor> {
        trace!(codec = SNAPPY_CODEC_NAME, "lending compressor");
        Arc::clone(&self.compressor)
    }

    fn create_decompressor(&self) -> Arc<dyn Decompressor> {
        trace!(codec = SNAPPY_CODEC_NAME, "lending decompressor");
        Arc::clone(&self.decompressor)
    }

    fn compressor_type(&self) -> HandleType {
        HandleType::of::<InertCompressor>()
    }

    fn decompressor_type(&self) -> HandleType {
        HandleType::of::<InertDecompressor>()
    }

    fn default_extension(&self) -> &'static str {
        SNAPPY_EXTENSION
    }
}

/// Compressing decorator. Owns the wrapped snappy stream; the raw sink
/// belongs to whoever supplied it.
///
/// Dropping flushes on a best-effort basis and discards any error. Call
/// `finish` before dropping when write failures must be reported.
pub struct SnappyCompressionOutputStream<'a> {
    out: Box<dyn Write + 'a>,
}

impl<'a> SnappyCompressionOutputStream<'a> {
    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.out.write_all(&[byte])
    }

    /// Give up the decorator and return the wrapped compressing stream.
    pub fn into_inner(self) -> Box<dyn Write + 'a> {
        self.out
    }
}

impl Write for SnappyCompressionOutputStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.out.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl CompressionOutputStream for SnappyCompressionOutputStream<'_> {
    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Snappy streams only append, so resetting degrades to a flush.
    fn reset_state(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Decompressing decorator.
pub struct SnappyCompressionInputStream<'a> {
    input: Box<dyn Read + 'a>,
}

impl<'a> SnappyCompressionInputStream<'a> {
    /// Next decompressed byte, or `None` at end of stream.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_inner(self) -> Box<dyn Read + 'a> {
        self.input
    }
}

impl Read for SnappyCompressionInputStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.input.read(buf)
    }
}

impl CompressionInputStream for SnappyCompressionInputStream<'_> {
    fn reset_state(&mut self) -> io::Result<()> {
        // nothing carried between segments
        Ok(())
    }
}
