//! compression/types.rs
//! Plugin contract between a codec and the host framework.
//!
//! A codec exposes two consumption models:
//! - stream decorators (`CompressionOutputStream` / `CompressionInputStream`)
//!   wrapping a caller-owned raw transport;
//! - pooled buffer-pump handles (`Compressor` / `Decompressor`) the host feeds
//!   raw buffers into and drains processed buffers from.
//!
//! A codec may support only the first model. Its handles then report
//! `HandleCapability::StreamOnly` and fail every data-bearing call.
use std::{
    any::{type_name, TypeId},
    fmt,
    io::{self, Read, Write},
    sync::Arc,
};

use crate::{config::CodecConfig, types::Result};

/// Raw transport a caller hands to `create_output_stream`.
pub type RawSink<'a> = Box<dyn Write + 'a>;
/// Raw transport a caller hands to `create_input_stream`.
pub type RawSource<'a> = Box<dyn Read + 'a>;

/// What a pooled handle can actually do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleCapability {
    /// Functional compressor/decompressor.
    BufferPump,
    /// Placeholder; use the codec's stream decorators instead.
    StreamOnly,
}

impl HandleCapability {
    pub fn supports_buffer_pump(self) -> bool {
        matches!(self, HandleCapability::BufferPump)
    }
}

/// Identity of a handle type, used by pools to know what they manage.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct HandleType {
    id: TypeId,
    name: &'static str,
}

impl HandleType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for HandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Pooled buffer-pump compressor.
///
/// Handles are shared between pool loans, so every method takes `&self`.
pub trait Compressor: Send + Sync {
    fn capability(&self) -> HandleCapability;

    /// Queue `input` for compression.
    fn set_input(&self, input: &[u8]) -> Result<()>;
    fn needs_input(&self) -> Result<bool>;
    fn set_dictionary(&self, dict: &[u8]) -> Result<()>;
    fn bytes_read(&self) -> Result<u64>;
    fn bytes_written(&self) -> Result<u64>;
    /// Signal that no more input follows.
    fn finish(&self) -> Result<()>;
    fn finished(&self) -> Result<bool>;
    /// Fill `out` with compressed bytes, returning how many were written.
    fn compress(&self, out: &mut [u8]) -> Result<usize>;
    /// Called by pools between loans. Must never fail.
    fn reset(&self);
    /// Release native resources; the handle is unusable afterwards.
    fn end(&self) -> Result<()>;
    /// Configuration-reload hook, called by pools before re-lending.
    fn reinit(&self, config: &CodecConfig);
}

/// Pooled buffer-pump decompressor.
pub trait Decompressor: Send + Sync {
    fn capability(&self) -> HandleCapability;

    fn set_input(&self, input: &[u8]) -> Result<()>;
    fn needs_input(&self) -> Result<bool>;
    fn set_dictionary(&self, dict: &[u8]) -> Result<()>;
    fn needs_dictionary(&self) -> Result<bool>;
    fn finished(&self) -> Result<bool>;
    /// Fill `out` with decompressed bytes, returning how many were written.
    fn decompress(&self, out: &mut [u8]) -> Result<usize>;
    /// Compressed bytes still buffered in the handle.
    fn remaining(&self) -> Result<usize>;
    /// Called by pools between loans. Must never fail.
    fn reset(&self);
    fn end(&self) -> Result<()>;
    fn reinit(&self, config: &CodecConfig);
}

/// Compressing stream decorator.
pub trait CompressionOutputStream: Write {
    /// Push all buffered compressed output to the raw sink without closing it.
    fn finish(&mut self) -> io::Result<()>;
    /// Return to a state where more data may be written.
    fn reset_state(&mut self) -> io::Result<()>;
}

/// Decompressing stream decorator.
pub trait CompressionInputStream: Read {
    /// Drop any state carried between independent compressed segments.
    fn reset_state(&mut self) -> io::Result<()>;
}

/// Factory the host framework discovers and instantiates.
pub trait CompressionCodec: Send + Sync {
    /// Registered name, used by the registry.
    fn name(&self) -> &'static str;

    fn create_output_stream<'a>(
        &self,
        sink: RawSink<'a>,
    ) -> Result<Box<dyn CompressionOutputStream + 'a>>;

    /// Same as `create_output_stream`; `compressor` must be a handle this codec lent out.
    fn create_output_stream_with<'a>(
        &self,
        sink: RawSink<'a>,
        compressor: &Arc<dyn Compressor>,
    ) -> Result<Box<dyn CompressionOutputStream + 'a>>;

    fn create_input_stream<'a>(
        &self,
        source: RawSource<'a>,
    ) -> Result<Box<dyn CompressionInputStream + 'a>>;

    /// Same as `create_input_stream`; `decompressor` must be a handle this codec lent out.
    fn create_input_stream_with<'a>(
        &self,
        source: RawSource<'a>,
        decompressor: &Arc<dyn Decompressor>,
    ) -> Result<Box<dyn CompressionInputStream + 'a>>;

    fn create_compressor(&self) -> Arc<dyn Compressor>;
    fn create_decompressor(&self) -> Arc<dyn Decompressor>;

    fn compressor_type(&self) -> HandleType;
    fn decompressor_type(&self) -> HandleType;

    /// Conventional file suffix, including the leading dot.
    fn default_extension(&self) -> &'static str;
}
