//! Inline Base64 marker rewriting for HTTP request bodies.
//!
//! Bodies may carry two kinds of marker pairs:
//!
//! - `</@decode>` ... `<@decode>` — the enclosed span is Base64-decoded
//! - `</@encode>` ... `<@encode>` — the enclosed span is Base64-encoded
//!
//! The rewriter removes the markers, splices the transformed bytes into the
//! body, and refreshes the `Content-Length` header when the body changed.
//! Decode markers are resolved before encode markers, so an encode span may
//! wrap text produced by a decode span. Malformed Base64 and unterminated
//! markers pass through byte-for-byte; a rewrite never fails a request.
//!
//! ## Example
//!
//! ```
//! use marker64::{MarkerRewriter, RewriteConfig};
//!
//! let rewriter = MarkerRewriter::new(&RewriteConfig::default());
//!
//! let body = rewriter.rewrite_body(b"ABC</@encode>hi<@encode>DEF").unwrap();
//! assert_eq!(body, b"ABCaGk=DEF");
//!
//! // No markers, no change.
//! assert!(rewriter.rewrite_body(b"plain body").is_none());
//! ```

pub mod config;
pub mod message;
pub mod rewriter;
pub mod scanner;
pub mod transformer;

pub use config::{ConfigError, MarkerKind, MarkerPair, RewriteConfig};
pub use rewriter::{insert_markers, MarkerRewriter};
pub use scanner::Span;
pub use transformer::{InnerTransform, TransformError};
