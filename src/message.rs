//! HTTP message splitting and reassembly.
//!
//! Header lines are kept as an ordered list of `Name: Value` strings with
//! the request line first, matching the wire order. The body stays raw
//! bytes end to end.

use memchr::memmem;

/// Ordered header lines of a message, request line included.
pub type HeaderList = Vec<String>;

const CONTENT_LENGTH: &str = "content-length:";

/// Upsert the `Content-Length` header.
///
/// Every line already carrying the field (case-insensitive) is rewritten to
/// the new length, so duplicate headers collapse to one value. If no line
/// matches, a `Content-Length` header is appended at the end.
pub fn update_content_length(headers: &[String], body_len: usize) -> HeaderList {
    let mut found = false;
    let mut out = Vec::with_capacity(headers.len() + 1);

    for line in headers {
        let bytes = line.as_bytes();
        if bytes.len() >= CONTENT_LENGTH.len()
            && bytes[..CONTENT_LENGTH.len()].eq_ignore_ascii_case(CONTENT_LENGTH.as_bytes())
        {
            out.push(format!("Content-Length: {body_len}"));
            found = true;
        } else {
            out.push(line.clone());
        }
    }

    if !found {
        out.push(format!("Content-Length: {body_len}"));
    }

    out
}

/// Serialize header lines and a body back into one message buffer.
///
/// Each line is terminated with CRLF, the header block is closed with a
/// blank line, and the body follows verbatim.
pub fn build_message(headers: &[String], body: &[u8]) -> Vec<u8> {
    let head_len: usize = headers.iter().map(|h| h.len() + 2).sum();
    let mut out = Vec::with_capacity(head_len + 2 + body.len());

    for line in headers {
        out.extend_from_slice(line.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(b"\r\n");
    out.extend_from_slice(body);
    out
}

/// Offset of the first body byte: one past the blank line that closes the
/// header block. A message without a blank line has no body.
pub fn body_offset(raw: &[u8]) -> usize {
    if let Some(pos) = memmem::find(raw, b"\r\n\r\n") {
        return pos + 4;
    }
    // Tolerate bare-LF line endings.
    if let Some(pos) = memmem::find(raw, b"\n\n") {
        return pos + 2;
    }
    raw.len()
}

/// Split a raw request into its header lines and body.
pub fn split_message(raw: &[u8]) -> (HeaderList, &[u8]) {
    let offset = body_offset(raw);

    let headers = raw[..offset]
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect();

    (headers, &raw[offset..])
}
