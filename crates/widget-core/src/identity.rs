//! # Principal Text Round Trip
//!
//! The notify target names a ledger actor by its textual principal. A
//! principal text is the lowercase RFC 4648 base32 encoding (no padding) of
//! `crc32_be(body) ++ body`, rendered in dash-separated groups of five
//! characters. A string is accepted only if decoding it and re-encoding the
//! body reproduces the input exactly, so non-canonical case, grouping, or a
//! corrupted checksum all fail.

use data_encoding::BASE32_NOPAD;

/// Maximum length of a principal body in bytes
pub const MAX_IDENTITY_BODY_LEN: usize = 29;

/// Canonically encode a principal body into its textual form.
///
/// Bodies longer than [`MAX_IDENTITY_BODY_LEN`] have no textual form and are
/// rejected by [`is_valid_identity`] on the way back in, but encoding does
/// not enforce the limit so test fixtures can exercise it.
pub fn encode_identity(body: &[u8]) -> String {
    let checksum = crc32fast::hash(body);
    let mut blob = Vec::with_capacity(4 + body.len());
    blob.extend_from_slice(&checksum.to_be_bytes());
    blob.extend_from_slice(body);

    let raw = BASE32_NOPAD.encode(&blob).to_ascii_lowercase();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 5);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && i % 5 == 0 {
            grouped.push('-');
        }
        grouped.push(ch);
    }
    grouped
}

/// Decode a principal text into its body bytes, verifying the checksum.
///
/// Lenient about grouping and case; canonicality is enforced by the
/// round-trip comparison in [`is_valid_identity`].
fn decode_identity(text: &str) -> Option<Vec<u8>> {
    let compact: String = text.chars().filter(|c| *c != '-').collect();
    let blob = BASE32_NOPAD
        .decode(compact.to_ascii_uppercase().as_bytes())
        .ok()?;

    if blob.len() < 4 || blob.len() > 4 + MAX_IDENTITY_BODY_LEN {
        return None;
    }

    let (checksum, body) = blob.split_at(4);
    if checksum != crc32fast::hash(body).to_be_bytes().as_slice() {
        return None;
    }
    Some(body.to_vec())
}

/// True if `text` is a canonical principal text.
///
/// This is the round-trip contract: decode, re-encode, compare for exact
/// equality with the input.
pub fn is_valid_identity(text: &str) -> bool {
    match decode_identity(text) {
        Some(body) => encode_identity(&body) == text,
        None => false,
    }
}
