/// Base62 encoding and decoding for FlakeIDs
///
/// Encodes the raw 64-bit value with the alphabet `0-9A-Z a-z` and decodes
/// through a lookup table built on first use.
use once_cell::sync::Lazy;

/// Character set for base62 encoding (0-9, A-Z, a-z)
const BASE62_CHARS: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Lookup table for decoding base62 characters to their values
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in BASE62_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
    }
    map
});

/// Maximum length of a base62 encoded u64 (11 characters)
pub const MAX_LEN: usize = 11;

/// Encode into a caller-provided buffer, returning the written suffix
pub fn encode_into(mut id: u64, buf: &mut [u8; MAX_LEN]) -> &str {
    let mut position = MAX_LEN;
    loop {
        position -= 1;
        buf[position] = BASE62_CHARS[(id % 62) as usize];
        id /= 62;
        if id == 0 {
            break;
        }
    }
    std::str::from_utf8(&buf[position..]).unwrap_or_default()
}

/// Encode a u64 to a base62 string
pub fn encode(id: u64) -> String {
    let mut buffer = [0u8; MAX_LEN];
    encode_into(id, &mut buffer).to_owned()
}

/// Decode a base62 string to a u64
pub fn decode(encoded: &str) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }

    let mut result: u64 = 0;
    for &c in encoded.as_bytes() {
        let value = DECODE_MAP[c as usize];
        if value == -1 {
            return Err(DecodeError::InvalidCharacter(c as char));
        }

        result = result
            .checked_mul(62)
            .and_then(|r| r.checked_add(value as u64))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(result)
}

/// Errors that can occur during base62 decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("cannot decode an empty string")]
    EmptyString,

    /// The input string contains an invalid character
    #[error("invalid base62 character: {0}")]
    InvalidCharacter(char),

    /// The decoded value would overflow a u64
    #[error("decoded value would overflow u64")]
    Overflow,
}
