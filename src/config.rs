//! Marker definitions and rewriter settings.

use serde::{Deserialize, Serialize};

/// Opening marker of a decode span.
pub const DECODE_PREFIX: &str = "</@decode>";
/// Closing marker of a decode span.
pub const DECODE_SUFFIX: &str = "<@decode>";
/// Opening marker of an encode span.
pub const ENCODE_PREFIX: &str = "</@encode>";
/// Closing marker of an encode span.
pub const ENCODE_SUFFIX: &str = "<@encode>";

/// The two marker kinds recognized in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Decode,
    Encode,
}

/// A prefix/suffix pair delimiting one transformable span.
///
/// Marker syntax is fixed; pairs are immutable values built from a
/// [`MarkerKind`] and passed into the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPair {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl MarkerPair {
    /// The marker pair for a kind.
    pub fn for_kind(kind: MarkerKind) -> Self {
        match kind {
            MarkerKind::Decode => Self {
                prefix: DECODE_PREFIX,
                suffix: DECODE_SUFFIX,
            },
            MarkerKind::Encode => Self {
                prefix: ENCODE_PREFIX,
                suffix: ENCODE_SUFFIX,
            },
        }
    }
}

/// Rewriter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Configuration version
    pub version: String,
    /// Global settings
    pub settings: Settings,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            settings: Settings::default(),
        }
    }
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum body size to rewrite (bytes). 0 disables the limit.
    /// Oversized bodies are passed through unchanged.
    pub max_body_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_body_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl RewriteConfig {
    /// Parse a YAML configuration string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON configuration string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configuration parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
