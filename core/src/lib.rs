//! snappy-codec
//!
//! Snappy framing exposed through a host framework's compression plugin
//! contract: stream decorators for real work, stream-only handles for pools.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;

pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::codecs::{SnappyCodec, SnappyCompressionInputStream, SnappyCompressionOutputStream};
    pub use crate::compression::registry::CodecRegistry;
    pub use crate::compression::types::{
        CompressionCodec, CompressionInputStream, CompressionOutputStream, Compressor,
        Decompressor, HandleCapability, HandleType,
    };
    pub use crate::config::CodecConfig;
    pub use crate::types::{CodecError, Result};
}
