//! Marker span scanning.
//!
//! The scanner walks a body left to right, pairing each occurrence of a
//! marker prefix with the first suffix after it. Buffers are raw byte
//! slices throughout, so bodies carrying arbitrary binary octets round-trip
//! losslessly; the markers themselves are pure ASCII.

use crate::config::MarkerPair;
use crate::transformer::InnerTransform;
use memchr::memmem;
use tracing::trace;

/// A located marker span: byte offsets into the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start of the opening marker.
    pub marker_start: usize,
    /// First byte of the inner content.
    pub inner_start: usize,
    /// One past the last byte of the inner content.
    pub inner_end: usize,
    /// One past the closing marker.
    pub marker_end: usize,
}

impl Span {
    /// The inner content, strictly between the markers.
    pub fn inner<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.inner_start..self.inner_end]
    }

    /// The whole span, markers included.
    pub fn raw<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.marker_start..self.marker_end]
    }
}

/// Find the next marker span at or after `from`.
///
/// Returns `None` when no opening marker remains, or when an opening marker
/// has no closing marker after it — the tail is then literal content.
pub fn next_span(buf: &[u8], pair: &MarkerPair, from: usize) -> Option<Span> {
    let prefix = pair.prefix.as_bytes();
    let suffix = pair.suffix.as_bytes();

    let marker_start = from + memmem::find(&buf[from..], prefix)?;
    let inner_start = marker_start + prefix.len();
    let inner_end = inner_start + memmem::find(&buf[inner_start..], suffix)?;

    Some(Span {
        marker_start,
        inner_start,
        inner_end,
        marker_end: inner_end + suffix.len(),
    })
}

/// Rewrite every marker span in `buf`, left to right.
///
/// Well-formed spans are replaced by `op` applied to their inner bytes, the
/// markers dropped. Spans `op` rejects are kept byte-for-byte, markers
/// included, and scanning continues after them. Everything outside a span
/// is copied through untouched.
pub fn transform(buf: &[u8], pair: &MarkerPair, op: &dyn InnerTransform) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut cursor = 0;

    while let Some(span) = next_span(buf, pair, cursor) {
        out.extend_from_slice(&buf[cursor..span.marker_start]);

        match op.apply(span.inner(buf)) {
            Ok(replaced) => out.extend_from_slice(&replaced),
            Err(e) => {
                trace!(
                    op = op.name(),
                    offset = span.marker_start,
                    error = %e,
                    "span left unchanged"
                );
                out.extend_from_slice(span.raw(buf));
            }
        }

        cursor = span.marker_end;
    }

    out.extend_from_slice(&buf[cursor..]);
    out
}
