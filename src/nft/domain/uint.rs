//! Unsigned 256-bit integers as carried by ABI words.

use serde::{Serialize, Serializer};
use std::fmt;

/// A 256-bit unsigned integer stored as 32 big-endian bytes.
///
/// Only what the holdings lookup needs is supported: construction from a
/// `u64`, narrowing back to a `u64` and decimal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// The value zero.
    pub const ZERO: Self = Self([0; 32]);

    /// Wraps 32 big-endian bytes.
    #[must_use]
    pub const fn from_word(word: [u8; 32]) -> Self {
        Self(word)
    }

    /// Returns the 32 big-endian bytes.
    #[must_use]
    pub const fn to_word(self) -> [u8; 32] {
        self.0
    }

    /// Widens a `u64`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "each value is masked to a single byte before the cast"
    )]
    pub fn from_u64(value: u64) -> Self {
        let mut word = [0_u8; 32];
        let mut remaining = value;
        for slot in word.iter_mut().rev().take(8) {
            *slot = (remaining & 0xff) as u8;
            remaining >>= 8;
        }
        Self(word)
    }

    /// Narrows to a `u64`, or `None` when the value does not fit.
    #[must_use]
    pub fn to_u64(self) -> Option<u64> {
        let (high, low) = self.0.split_at(24);
        if high.iter().any(|byte| *byte != 0) {
            return None;
        }
        Some(
            low.iter()
                .fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte)),
        )
    }

    /// Returns `true` when the value is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }

    /// Divides in place by ten and returns the remainder.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the running remainder is below ten, so each quotient byte fits a u8"
    )]
    fn div_rem_ten(&mut self) -> u8 {
        let mut remainder = 0_u16;
        for byte in &mut self.0 {
            let acc = (remainder << 8) | u16::from(*byte);
            *byte = acc.div_euclid(10) as u8;
            remainder = acc.rem_euclid(10);
        }
        remainder as u8
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut value = *self;
        let mut digits = Vec::with_capacity(78);
        while !value.is_zero() {
            digits.push(char::from(b'0' + value.div_rem_ten()));
        }
        let rendered: String = digits.iter().rev().collect();
        f.write_str(&rendered)
    }
}

impl Serialize for Uint256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
