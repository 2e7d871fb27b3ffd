//! compression/mod.rs
//! Compression plugin surface.
//!
//! - `types` defines what the host framework calls.
//! - `stream` is the seam to the library that does the actual compression.
//! - `codecs` adapts one onto the other.
//! - `registry` finds a codec by name or by file suffix.

pub mod types;
pub mod stream;
pub mod codecs;
pub mod registry;

pub use types::*;
pub use stream::*;
pub use registry::*;
