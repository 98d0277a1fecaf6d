//! Minimal Ethereum ABI codec for the three ERC-721 calls the lookup uses.
//!
//! Call data is a four-byte selector followed by 32-byte words. Return data
//! is either a single `uint256` word or a dynamic `string` (offset word,
//! length word, then the UTF-8 bytes padded to a word boundary).

use crate::nft::domain::{Address, Uint256};
use thiserror::Error;

/// Size of one ABI word in bytes.
pub const WORD_LEN: usize = 32;

/// Selector of `balanceOf(address)`.
pub const BALANCE_OF: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

/// Selector of `tokenOfOwnerByIndex(address,uint256)`.
pub const TOKEN_OF_OWNER_BY_INDEX: [u8; 4] = [0x2f, 0x74, 0x5c, 0x59];

/// Selector of `tokenURI(uint256)`.
pub const TOKEN_URI: [u8; 4] = [0xc8, 0x7b, 0x56, 0xdd];

/// Errors decoding hex text or ABI return data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// The text is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The return data ended before the expected word.
    #[error("return data too short: needed {needed} bytes, got {actual}")]
    Truncated {
        /// Bytes required to decode.
        needed: usize,
        /// Bytes available.
        actual: usize,
    },

    /// An offset or length word does not fit in memory.
    #[error("return data offset or length out of range")]
    OutOfRange,

    /// The string payload is not UTF-8.
    #[error("return string is not valid UTF-8")]
    InvalidUtf8,
}

/// Encodes `balanceOf(owner)` call data.
#[must_use]
pub fn encode_balance_of(owner: &Address) -> Vec<u8> {
    encode_call(BALANCE_OF, &[address_word(owner)])
}

/// Encodes `tokenOfOwnerByIndex(owner, index)` call data.
#[must_use]
pub fn encode_token_of_owner_by_index(owner: &Address, index: Uint256) -> Vec<u8> {
    encode_call(TOKEN_OF_OWNER_BY_INDEX, &[address_word(owner), index.to_word()])
}

/// Encodes `tokenURI(token_id)` call data.
#[must_use]
pub fn encode_token_uri(token_id: Uint256) -> Vec<u8> {
    encode_call(TOKEN_URI, &[token_id.to_word()])
}

fn encode_call(selector: [u8; 4], words: &[[u8; WORD_LEN]]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + words.len() * WORD_LEN);
    data.extend_from_slice(&selector);
    for word in words {
        data.extend_from_slice(word);
    }
    data
}

fn address_word(address: &Address) -> [u8; WORD_LEN] {
    let mut word = [0_u8; WORD_LEN];
    for (slot, byte) in word.iter_mut().skip(12).zip(address.bytes()) {
        *slot = *byte;
    }
    word
}

/// Decodes a single `uint256` return value.
///
/// # Errors
///
/// Returns [`AbiError::Truncated`] when fewer than 32 bytes are present.
pub fn decode_uint256(data: &[u8]) -> Result<Uint256, AbiError> {
    read_word(data, 0).map(Uint256::from_word)
}

/// Decodes a single dynamic `string` return value.
///
/// # Errors
///
/// Returns an [`AbiError`] when the offset or length point outside the data
/// or the payload is not UTF-8.
pub fn decode_string(data: &[u8]) -> Result<String, AbiError> {
    let offset = word_as_usize(read_word(data, 0)?)?;
    let length = word_as_usize(read_word(data, offset)?)?;
    let start = offset.checked_add(WORD_LEN).ok_or(AbiError::OutOfRange)?;
    let end = start.checked_add(length).ok_or(AbiError::OutOfRange)?;
    let payload = data.get(start..end).ok_or(AbiError::Truncated {
        needed: end,
        actual: data.len(),
    })?;
    String::from_utf8(payload.to_vec()).map_err(|_| AbiError::InvalidUtf8)
}

fn read_word(data: &[u8], offset: usize) -> Result<[u8; WORD_LEN], AbiError> {
    let end = offset.checked_add(WORD_LEN).ok_or(AbiError::OutOfRange)?;
    data.get(offset..end)
        .and_then(|slice| <[u8; WORD_LEN]>::try_from(slice).ok())
        .ok_or(AbiError::Truncated {
            needed: end,
            actual: data.len(),
        })
}

fn word_as_usize(word: [u8; WORD_LEN]) -> Result<usize, AbiError> {
    Uint256::from_word(word)
        .to_u64()
        .and_then(|value| usize::try_from(value).ok())
        .ok_or(AbiError::OutOfRange)
}

/// Renders bytes as `0x`-prefixed lowercase hex.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    let digits: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
    format!("0x{digits}")
}

/// Parses hex text, with or without a `0x` prefix.
///
/// # Errors
///
/// Returns [`AbiError::InvalidHex`] for odd-length input or non-hex digits.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, AbiError> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    let invalid = || AbiError::InvalidHex(text.to_owned());
    if digits.len().rem_euclid(2) != 0 {
        return Err(invalid());
    }

    digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| match pair {
            [high, low] => Ok((hex_value(*high).ok_or_else(invalid)? << 4)
                | hex_value(*low).ok_or_else(invalid)?),
            _ => Err(invalid()),
        })
        .collect()
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
