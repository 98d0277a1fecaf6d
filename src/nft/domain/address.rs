//! Account and contract addresses.

use super::error::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const ADDRESS_HEX_LEN: usize = 40;

/// A 20-byte account address in `0x`-prefixed hex.
///
/// The original spelling is kept, so mixed-case checksummed input is echoed
/// back unchanged. The checksum itself is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    text: String,
    bytes: [u8; 20],
}

impl Address {
    /// Parses `0x` followed by exactly 40 hex digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] for any other input.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidAddress(raw.to_owned());
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or_else(invalid)?;
        if digits.len() != ADDRESS_HEX_LEN {
            return Err(invalid());
        }

        let decoded = crate::nft::abi::decode_hex(digits).map_err(|_| invalid())?;
        let bytes = <[u8; 20]>::try_from(decoded.as_slice()).map_err(|_| invalid())?;
        Ok(Self {
            text: raw.to_owned(),
            bytes,
        })
    }

    /// Returns the address as originally spelled.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the raw 20 bytes.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; 20] {
        &self.bytes
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
