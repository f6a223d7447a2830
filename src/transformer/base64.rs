//! Base64 span transforms.
//!
//! Decode strips whitespace first so a marker pair can wrap Base64 text
//! that was reflowed or indented inside the body. Encode always emits the
//! standard alphabet with canonical padding.

use super::{InnerTransform, TransformError};
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine as _};

/// Standard alphabet; canonical or absent padding accepted on decode.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64-decodes span content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Decode;

impl InnerTransform for Base64Decode {
    fn apply(&self, inner: &[u8]) -> Result<Vec<u8>, TransformError> {
        let cleaned: Vec<u8> = inner
            .iter()
            .copied()
            .filter(|&b| !is_whitespace(b))
            .collect();
        Ok(STANDARD_LENIENT.decode(cleaned)?)
    }

    fn name(&self) -> &'static str {
        "base64_decode"
    }
}

/// Base64-encodes span content. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Encode;

impl InnerTransform for Base64Encode {
    fn apply(&self, inner: &[u8]) -> Result<Vec<u8>, TransformError> {
        Ok(STANDARD.encode(inner).into_bytes())
    }

    fn name(&self) -> &'static str {
        "base64_encode"
    }
}

/// ASCII whitespace, vertical tab included.
fn is_whitespace(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let out = Base64Decode.apply(b"aGVsbG8=").unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_decode_strips_whitespace() {
        let out = Base64Decode.apply(b" aG\r\n Vs\tbG8= ").unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_decode_unpadded() {
        let out = Base64Decode.apply(b"aGk").unwrap();
        assert_eq!(out, b"hi");
    }

    #[test]
    fn test_decode_rejects_non_alphabet() {
        assert!(Base64Decode.apply(b"!!!").is_err());
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(Base64Decode.apply(b"").unwrap(), b"");
    }

    #[test]
    fn test_encode() {
        let out = Base64Encode.apply(b"hi").unwrap();
        assert_eq!(out, b"aGk=");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(Base64Encode.apply(b"").unwrap(), b"");
    }

    #[test]
    fn test_encode_binary_roundtrip() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = Base64Encode.apply(&data).unwrap();
        let decoded = Base64Decode.apply(&encoded).unwrap();
        assert_eq!(decoded, data);
    }
}
