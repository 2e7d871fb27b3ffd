//! compression/codecs/mod.rs
//! Codec adapters and their pooled handles.

pub mod inert;
pub mod snappy;

pub use inert::*;
pub use snappy::*;
