//! Numeric literal parsing for asset attributes.
//!
//! Type identifiers in game data are written either as plain decimal
//! (`3073`) or hex with a lowercase `0x` prefix (`0x0c01`). Values wider
//! than 16 bits wrap to the low 16 bits, matching how the rest of the
//! toolchain has always read them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty numeric literal")]
    Empty,

    #[error("invalid numeric literal `{0}`")]
    Invalid(String),
}

/// Parse a decimal or `0x`-prefixed hex literal as a wide integer.
///
/// Surrounding whitespace is ignored. A sign is only accepted on decimal
/// literals (`-0x1` is invalid, `-1` is not).
pub fn parse_i64(s: &str) -> Result<i64, LiteralError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LiteralError::Empty);
    }

    let parsed = match s.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => s.parse::<i64>(),
    };

    parsed.map_err(|_| LiteralError::Invalid(s.to_string()))
}

/// Parse a literal as a 16-bit type identifier.
///
/// Out-of-range values wrap: `0x10c01` reads as `0x0c01` and `-1` as
/// `0xffff`.
pub fn parse_u16(s: &str) -> Result<u16, LiteralError> {
    parse_i64(s).map(|v| v as u16)
}
