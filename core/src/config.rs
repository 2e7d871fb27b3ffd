//! config.rs
//! Codec configuration handed to the registry and to the handles' reload hook.
use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_CODECS,
    types::{CodecError, Result},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Codec names to register, in lookup order.
    #[serde(default = "default_codecs")]
    pub codecs: Vec<String>,
}

fn default_codecs() -> Vec<String> {
    DEFAULT_CODECS.iter().map(|name| name.to_string()).collect()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { codecs: default_codecs() }
    }
}

impl CodecConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: CodecConfig =
            serde_json::from_str(raw).map_err(|e| CodecError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| CodecError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CodecError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.codecs.is_empty() {
            return Err(CodecError::Config("codec list is empty".into()));
        }
        let mut seen = HashSet::new();
        for name in &self.codecs {
            if name.trim().is_empty() {
                return Err(CodecError::Config("blank codec name".into()));
            }
            if !seen.insert(name.as_str()) {
                return Err(CodecError::Config(format!("duplicate codec name: {}", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registers_snappy() {
        let config = CodecConfig::default();
        assert_eq!(config.codecs, vec!["snappy".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = CodecConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = CodecConfig::from_json_str(r#"{"codecs":["snappy"],"level":3}"#).unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }

    #[test]
    fn empty_blank_and_duplicate_lists_are_rejected() {
        for raw in [
            r#"{"codecs":[]}"#,
            r#"{"codecs":["  "]}"#,
            r#"{"codecs":["snappy","snappy"]}"#,
        ] {
            assert!(
                matches!(CodecConfig::from_json_str(raw), Err(CodecError::Config(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn json_roundtrip() {
        let config = CodecConfig::default();
        let raw = config.to_json_string().unwrap();
        assert_eq!(CodecConfig::from_json_str(&raw).unwrap(), config);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = CodecConfig::from_path("/nonexistent/codec-config.json").unwrap_err();
        match err {
            CodecError::Config(msg) => assert!(msg.contains("codec-config.json")),
            other => panic!("expected Config, got {other:?}"),
        }
    }
}
