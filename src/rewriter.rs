//! Request body rewriting pipeline.

use crate::config::{MarkerKind, MarkerPair, RewriteConfig};
use crate::message::{self, HeaderList};
use crate::scanner;
use crate::transformer::{Base64Decode, Base64Encode};
use tracing::{debug, trace};

/// Rewrites marker spans in request bodies.
///
/// Holds the two marker pairs and the size limit as immutable values; the
/// rewriter carries no mutable state, so one instance may serve any number
/// of messages, concurrently or not.
pub struct MarkerRewriter {
    decode: MarkerPair,
    encode: MarkerPair,
    max_body_size: usize,
}

impl MarkerRewriter {
    /// Create a rewriter from configuration.
    pub fn new(config: &RewriteConfig) -> Self {
        Self {
            decode: MarkerPair::for_kind(MarkerKind::Decode),
            encode: MarkerPair::for_kind(MarkerKind::Encode),
            max_body_size: config.settings.max_body_size,
        }
    }

    /// Run the decode pass, then the encode pass, over `body`.
    ///
    /// The decode pass output feeds the encode pass, so an encode span may
    /// wrap text a decode span produced. Returns `None` when the passes
    /// leave the body byte-identical, when the body is empty, or when it
    /// exceeds the configured size limit — callers then keep the original
    /// message untouched.
    pub fn rewrite_body(&self, body: &[u8]) -> Option<Vec<u8>> {
        if body.is_empty() {
            return None;
        }
        if self.max_body_size != 0 && body.len() > self.max_body_size {
            debug!(
                len = body.len(),
                limit = self.max_body_size,
                "body over size limit, skipped"
            );
            return None;
        }

        let decoded = scanner::transform(body, &self.decode, &Base64Decode);
        let encoded = scanner::transform(&decoded, &self.encode, &Base64Encode);

        if encoded.as_slice() == body {
            trace!("no marker spans rewritten");
            return None;
        }
        Some(encoded)
    }

    /// Rewrite one raw request.
    ///
    /// `body_offset` and `headers` come from the host's request analysis.
    /// Returns the rebuilt message with a refreshed `Content-Length`, or
    /// `None` when the body needs no rewrite.
    pub fn rewrite_request(
        &self,
        raw: &[u8],
        body_offset: usize,
        headers: &[String],
    ) -> Option<Vec<u8>> {
        let body = raw.get(body_offset..).unwrap_or_default();
        let new_body = self.rewrite_body(body)?;

        let new_headers: HeaderList = message::update_content_length(headers, new_body.len());
        debug!(
            old_len = body.len(),
            new_len = new_body.len(),
            "request body rewritten"
        );
        Some(message::build_message(&new_headers, &new_body))
    }

    /// Parse and rewrite a raw request without host-supplied analysis.
    pub fn rewrite_raw(&self, raw: &[u8]) -> Option<Vec<u8>> {
        let offset = message::body_offset(raw);
        let (headers, _) = message::split_message(raw);
        self.rewrite_request(raw, offset, &headers)
    }
}

/// Wrap the selection `[sel_start, sel_end)` of `buf` in a marker pair.
///
/// Returns the new buffer, or `None` (no mutation) for an empty or
/// out-of-range selection.
pub fn insert_markers(
    buf: &[u8],
    sel_start: usize,
    sel_end: usize,
    pair: &MarkerPair,
) -> Option<Vec<u8>> {
    if sel_start >= sel_end || sel_end > buf.len() {
        return None;
    }

    let mut out = Vec::with_capacity(buf.len() + pair.prefix.len() + pair.suffix.len());
    out.extend_from_slice(&buf[..sel_start]);
    out.extend_from_slice(pair.prefix.as_bytes());
    out.extend_from_slice(&buf[sel_start..sel_end]);
    out.extend_from_slice(pair.suffix.as_bytes());
    out.extend_from_slice(&buf[sel_end..]);
    Some(out)
}
