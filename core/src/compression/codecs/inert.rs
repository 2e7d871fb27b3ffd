//! codecs/inert.rs
//! Stream-only placeholder handles.
//!
//! Some host paths always borrow a handle from the pool before opening a
//! stream, then never use it for data. These handles let that borrow succeed
//! and defer failure to the first data-bearing call. `reset` and `reinit` are
//! accepted as no-ops; everything else fails with `CodecError::Unsupported`.
//! They hold no state, so sharing one instance across threads is safe.
use tracing::trace;

use crate::{
    compression::types::{Compressor, Decompressor, HandleCapability},
    config::CodecConfig,
    types::{CodecError, Result},
};

#[derive(Debug)]
pub struct InertCompressor {
    label: &'static str,
}

#[derive(Debug)]
pub struct InertDecompressor {
    label: &'static str,
}

impl InertCompressor {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    fn refuse<T>(&self, operation: &'static str) -> Result<T> {
        Err(CodecError::unsupported(self.label, operation))
    }
}

impl InertDecompressor {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    fn refuse<T>(&self, operation: &'static str) -> Result<T> {
        Err(CodecError::unsupported(self.label, operation))
    }
}

impl Compressor for InertCompressor {
    fn capability(&self) -> HandleCapability {
        HandleCapability::StreamOnly
    }

    fn set_input(&self, _input: &[u8]) -> Result<()> {
        self.refuse("set_input")
    }

    fn needs_input(&self) -> Result<bool> {
        self.refuse("needs_input")
    }

    fn set_dictionary(&self, _dict: &[u8]) -> Result<()> {
        self.refuse("set_dictionary")
    }

    fn bytes_read(&self) -> Result<u64> {
        self.refuse("bytes_read")
    }

    fn bytes_written(&self) -> Result<u64> {
        self.refuse("bytes_written")
    }

    fn finish(&self) -> Result<()> {
        self.refuse("finish")
    }

    fn finished(&self) -> Result<bool> {
        self.refuse("finished")
    }

    fn compress(&self, _out: &mut [u8]) -> Result<usize> {
        self.refuse("compress")
    }

    fn reset(&self) {
        // nothing to reset
        trace!(handle = self.label, "reset ignored");
    }

    fn end(&self) -> Result<()> {
        self.refuse("end")
    }

    fn reinit(&self, _config: &CodecConfig) {
        trace!(handle = self.label, "reinit ignored");
    }
}

impl Decompressor for InertDecompressor {
    fn capability(&self) -> HandleCapability {
        HandleCapability::StreamOnly
    }

    fn set_input(&self, _input: &[u8]) -> Result<()> {
        self.refuse("set_input")
    }

    fn needs_input(&self) -> Result<bool> {
        self.refuse("needs_input")
    }

    fn set_dictionary(&self, _dict: &[u8]) -> Result<()> {
        self.refuse("set_dictionary")
    }

    fn needs_dictionary(&self) -> Result<bool> {
        self.refuse("needs_dictionary")
    }

    fn finished(&self) -> Result<bool> {
        self.refuse("finished")
    }

    fn decompress(&self, _out: &mut [u8]) -> Result<usize> {
        self.refuse("decompress")
    }

    fn remaining(&self) -> Result<usize> {
        self.refuse("remaining")
    }

    fn reset(&self) {
        trace!(handle = self.label, "reset ignored");
    }

    fn end(&self) -> Result<()> {
        self.refuse("end")
    }

    fn reinit(&self, _config: &CodecConfig) {
        trace!(handle = self.label, "reinit ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unsupported<T: std::fmt::Debug>(r: Result<T>, op: &str) {
        match r {
            Err(CodecError::Unsupported { operation, .. }) => assert_eq!(operation, op),
            other => panic!("{op}: expected Unsupported, got {other:?}"),
        }
    }

    #[test]
    fn compressor_refuses_all_data_calls() {
        let c = InertCompressor::new("test compressor");
        let mut out = [0u8; 4];
        assert_unsupported(c.set_input(b"abc"), "set_input");
        assert_unsupported(c.set_input(&[]), "set_input");
        assert_unsupported(c.needs_input(), "needs_input");
        assert_unsupported(c.set_dictionary(&[]), "set_dictionary");
        assert_unsupported(c.bytes_read(), "bytes_read");
        assert_unsupported(c.bytes_written(), "bytes_written");
        assert_unsupported(c.finish(), "finish");
        assert_unsupported(c.finished(), "finished");
        assert_unsupported(c.compress(&mut out), "compress");
        assert_unsupported(c.compress(&mut []), "compress");
        assert_unsupported(c.end(), "end");
        assert_eq!(out, [0u8; 4]);
    }

    #[test]
    fn decompressor_refuses_all_data_calls() {
        let d = InertDecompressor::new("test decompressor");
        let mut out = [0u8; 4];
        assert_unsupported(d.set_input(b"abc"), "set_input");
        assert_unsupported(d.needs_input(), "needs_input");
        assert_unsupported(d.set_dictionary(&[]), "set_dictionary");
        assert_unsupported(d.needs_dictionary(), "needs_dictionary");
        assert_unsupported(d.finished(), "finished");
        assert_unsupported(d.decompress(&mut out), "decompress");
        assert_unsupported(d.remaining(), "remaining");
        assert_unsupported(d.end(), "end");
    }

    #[test]
    fn reset_and_reinit_are_tolerated_in_any_state() {
        let c = InertCompressor::new("c");
        let d = InertDecompressor::new("d");
        let config = CodecConfig::default();

        c.reset();
        let _ = c.set_input(b"x");
        let _ = c.end();
        c.reset();
        c.reinit(&config);

        d.reset();
        let _ = d.decompress(&mut [0u8; 1]);
        d.reset();
        d.reinit(&config);

        // still refusing after the tolerated calls
        assert!(c.needs_input().unwrap_err().is_unsupported());
        assert!(d.needs_input().unwrap_err().is_unsupported());
    }

    #[test]
    fn handles_report_stream_only() {
        assert_eq!(InertCompressor::new("c").capability(), HandleCapability::StreamOnly);
        assert_eq!(InertDecompressor::new("d").capability(), HandleCapability::StreamOnly);
    }
}
