//! base64url helpers for token segments.
//!
//! Encoding drops the `=` padding. Decoding restores it by right-padding to
//! a multiple of four characters and then decodes strictly, so any string
//! produced by a standard base64url-without-padding encoder round-trips.

use base64::engine::general_purpose::URL_SAFE;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::DecodeError;
use base64::Engine;

pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let missing = (4 - input.len() % 4) % 4;
    let mut padded = String::with_capacity(input.len() + missing);
    padded.push_str(input);
    padded.extend(std::iter::repeat('=').take(missing));
    URL_SAFE.decode(padded)
}
