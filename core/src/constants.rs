/// Registered name of the snappy codec.
pub const SNAPPY_CODEC_NAME: &str = "snappy";

/// Conventional file suffix for snappy-framed data.
pub const SNAPPY_EXTENSION: &str = ".snappy";

/// Codec names registered when no configuration is supplied.
pub const DEFAULT_CODECS: &[&str] = &[SNAPPY_CODEC_NAME];

/// Handle labels used in unsupported-operation failures.
pub mod handle_labels {
    pub const SNAPPY_COMPRESSOR: &str = "Snappy Compressor";
    pub const SNAPPY_DECOMPRESSOR: &str = "Snappy Decompressor";
}
