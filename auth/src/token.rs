//! Token segment decoding.
//!
//! Tokens are compact strings of three dot-separated base64-encoded
//! segments: header, payload, signature. Decoding here is pure parsing.
//! No signature verification is performed; the server is the sole
//! verifier, and nothing decoded from a token is a trust decision.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

/// Segment index of the token header.
pub const HEADER_SEGMENT: usize = 0;

/// Segment index of the token payload.
pub const PAYLOAD_SEGMENT: usize = 1;

/// Claims carried in a token payload segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPayload {
    /// Subject: the username the token was issued for.
    pub sub: String,
    /// Permission scopes granted to the subject.
    pub scopes: Vec<String>,
    /// Expiry as unix seconds.
    pub exp: i64,
}

/// Decode one segment of a token into a JSON value.
///
/// Returns `None` when the token has fewer than two segments, the segment
/// at `index` is missing, or the segment is not valid base64 / UTF-8 / JSON.
/// Invalid tokens are expected input here, never an error.
///
/// # Examples
///
/// ```
/// use itemdeck_auth::token::{decode_segment, PAYLOAD_SEGMENT};
///
/// assert_eq!(decode_segment("not-a-token", PAYLOAD_SEGMENT), None);
/// ```
#[must_use]
pub fn decode_segment(token: &str, index: usize) -> Option<serde_json::Value> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() < 2 {
        return None;
    }
    let bytes = decode_base64(segments.get(index)?)?;
    let text = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&text).ok()
}

/// Decode the token header as a JSON value.
#[must_use]
pub fn decode_header(token: &str) -> Option<serde_json::Value> {
    decode_segment(token, HEADER_SEGMENT)
}

/// Decode the token payload into typed claims.
///
/// Returns `None` when the payload segment does not decode or is missing
/// any of the expected claims.
#[must_use]
pub fn decode_payload(token: &str) -> Option<TokenPayload> {
    serde_json::from_value(decode_segment(token, PAYLOAD_SEGMENT)?).ok()
}

/// Tokens in the wild mix the standard and url-safe base64 alphabets and
/// usually drop padding. Normalize to the standard alphabet and re-pad
/// before decoding.
fn decode_base64(segment: &str) -> Option<Vec<u8>> {
    let mut normalized: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }
    STANDARD.decode(normalized).ok()
}
