//! Span content transforms.

mod base64;

pub use base64::{Base64Decode, Base64Encode};

/// A transform applied to the inner bytes of one marker span.
///
/// Implementations must be pure functions of their input: no shared mutable
/// state, so a rewriter can process any number of messages concurrently.
pub trait InnerTransform: Send + Sync {
    /// Transform the inner bytes of a single span.
    ///
    /// An error means the span could not be transformed; the caller keeps
    /// the original span, markers included, and continues scanning.
    fn apply(&self, inner: &[u8]) -> Result<Vec<u8>, TransformError>;

    /// Transform name for logging.
    fn name(&self) -> &'static str;
}

/// Errors produced by span transforms.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("invalid base64: {0}")]
    Base64(#[from] ::base64::DecodeError),
}
