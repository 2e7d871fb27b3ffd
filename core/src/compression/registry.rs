//! compression/registry.rs
//! Codec discovery by configured name and by file suffix.
use std::{path::Path, sync::Arc};

use tracing::debug;

use crate::{
    compression::{
        codecs::snappy::SnappyCodec,
        types::{CompressionCodec, HandleCapability},
    },
    config::CodecConfig,
    constants::{SNAPPY_CODEC_NAME, SNAPPY_EXTENSION},
    types::{CodecError, Result},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub extension: &'static str,
    pub capability: HandleCapability,
}

pub fn resolve(name: &str) -> Result<CodecInfo> {
    match name {
        x if x.eq_ignore_ascii_case(SNAPPY_CODEC_NAME) => Ok(CodecInfo {
            name: SNAPPY_CODEC_NAME,
            extension: SNAPPY_EXTENSION,
            capability: HandleCapability::StreamOnly,
        }),
        other => Err(CodecError::UnknownCodec(other.to_string())),
    }
}

pub fn create_codec(name: &str) -> Result<Arc<dyn CompressionCodec>> {
    let info = resolve(name)?;
    match info.name {
        SNAPPY_CODEC_NAME => Ok(Arc::new(SnappyCodec::new())),
        other => Err(CodecError::UnknownCodec(other.to_string())),
    }
}

#[derive(Default)]
pub struct CodecRegistry {
    codecs: Vec<Arc<dyn CompressionCodec>>,
}

impl CodecRegistry {
    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        let mut registry = Self::default();
        for name in &config.codecs {
            registry.register(create_codec(name)?);
        }
        debug!(codecs = ?registry.names(), "codec registry built");
        Ok(registry)
    }

    /// Add `codec`, replacing any codec registered under the same name.
    pub fn register(&mut self, codec: Arc<dyn CompressionCodec>) {
        match self.codecs.iter().position(|c| c.name() == codec.name()) {
            Some(i) => self.codecs[i] = codec,
            None => self.codecs.push(codec),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.codecs.iter().map(|c| c.name()).collect()
    }

    pub fn by_name(&self, name: &str) -> Option<Arc<dyn CompressionCodec>> {
        self.codecs
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Codec whose default extension ends `path`; the longest suffix wins.
    pub fn for_path(&self, path: impl AsRef<Path>) -> Option<Arc<dyn CompressionCodec>> {
        let file_name = path.as_ref().file_name()?.to_string_lossy().into_owned();
        let codec = self
            .codecs
            .iter()
            .filter(|c| file_name.ends_with(c.default_extension()))
            .max_by_key(|c| c.default_extension().len())
            .cloned();
        debug!(path = %path.as_ref().display(), codec = ?codec.as_ref().map(|c| c.name()), "codec lookup by suffix");
        codec
    }

    /// Strip `suffix` from `name` if present.
    pub fn remove_suffix<'n>(name: &'n str, suffix: &str) -> &'n str {
        name.strip_suffix(suffix).unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_and_unknown() {
        let info = resolve("Snappy").unwrap();
        assert_eq!(info.name, "snappy");
        assert_eq!(info.extension, ".snappy");
        assert_eq!(info.capability, HandleCapability::StreamOnly);

        assert!(matches!(resolve("brotli"), Err(CodecError::UnknownCodec(n)) if n == "brotli"));
    }

    #[test]
    fn registry_from_default_config() {
        let registry = CodecRegistry::from_config(&CodecConfig::default()).unwrap();
        assert_eq!(registry.names(), vec!["snappy"]);
        assert!(registry.by_name("SNAPPY").is_some());
        assert!(registry.by_name("gzip").is_none());
    }

    #[test]
    fn unknown_configured_codec_fails() {
        let config = CodecConfig { codecs: vec!["snappy".into(), "lzo".into()] };
        assert!(matches!(
            CodecRegistry::from_config(&config),
            Err(CodecError::UnknownCodec(_))
        ));
    }

    #[test]
    fn lookup_by_suffix() {
        let registry = CodecRegistry::from_config(&CodecConfig::default()).unwrap();
        let codec = registry.for_path("/data/part-00000.snappy").unwrap();
        assert_eq!(codec.name(), "snappy");
        assert!(registry.for_path("/data/part-00000.gz").is_none());
        assert!(registry.for_path("/").is_none());
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = CodecRegistry::default();
        registry.register(Arc::new(SnappyCodec::new()));
        registry.register(Arc::new(SnappyCodec::new()));
        assert_eq!(registry.names().len(), 1);
    }

    #[test]
    fn suffix_removal() {
        assert_eq!(CodecRegistry::remove_suffix("part-0.snappy", ".snappy"), "part-0");
        assert_eq!(CodecRegistry::remove_suffix("part-0.gz", ".snappy"), "part-0.gz");
    }
}
