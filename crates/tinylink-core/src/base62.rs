//! Base62 encoding of numeric identifiers into short codes.
//!
//! The alphabet order is part of the public contract: digits, then lowercase
//! letters, then uppercase letters. Changing it changes every issued code.

/// The 62 symbols, indexed by digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest possible encoding of a `u64` (62^11 > 2^64).
pub const MAX_ENCODED_LEN: usize = 11;

/// Encodes `id` as a base62 string, most significant digit first.
///
/// `0` encodes to `"0"`. Every input has exactly one output and distinct
/// inputs never share an output.
pub fn encode(mut id: u64) -> String {
    if id == 0 {
        return char::from(ALPHABET[0]).to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut start = buf.len();
    while id > 0 {
        start -= 1;
        buf[start] = ALPHABET[(id % BASE) as usize];
        id /= BASE;
    }

    buf[start..].iter().copied().map(char::from).collect()
}
