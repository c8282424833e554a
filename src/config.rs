//! Runtime decode policy.
//!
//! Build-time limits (maximum AEM payload sizes) come from Cargo features and
//! live in [`crate::constants`]; this module only carries choices a caller can
//! make per decoder.

use serde::{Deserialize, Serialize};

/// How to treat an AVTP control data length that disagrees with the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthPolicy {
    /// Log a warning and decode what the buffer holds.
    #[default]
    Lenient,
    /// Reject the frame with [`crate::error::ParsingError::LengthMismatch`].
    Strict,
}

/// Decoder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Control data length mismatch handling.
    pub length_policy: LengthPolicy,
    /// Whether fixed-size AEM payloads may carry trailing bytes.
    pub allow_trailing_bytes: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            length_policy: LengthPolicy::Lenient,
            allow_trailing_bytes: true,
        }
    }
}

impl CodecConfig {
    /// Configuration rejecting every length inconsistency.
    pub fn strict() -> Self {
        Self {
            length_policy: LengthPolicy::Strict,
            allow_trailing_bytes: false,
        }
    }

    /// Whether length mismatches are errors.
    #[inline]
    pub fn is_strict(&self) -> bool {
        self.length_policy == LengthPolicy::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        let config = CodecConfig::default();
        assert_eq!(config.length_policy, LengthPolicy::Lenient);
        assert!(config.allow_trailing_bytes);
        assert!(!config.is_strict());
        assert!(CodecConfig::strict().is_strict());
    }

    #[test]
    fn config_serde_fills_missing_fields() {
        let config: CodecConfig = serde_json::from_str(r#"{"length_policy":"Strict"}"#).unwrap();
        assert_eq!(config.length_policy, LengthPolicy::Strict);
        assert!(config.allow_trailing_bytes);

        let json = serde_json::to_string(&CodecConfig::strict()).unwrap();
        let back: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CodecConfig::strict());
    }
}
