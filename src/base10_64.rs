//! Decimal parsers for the 64-bit ranges
//!
//! Input is consumed in chunks of eight digits, then four, then one at a
//! time. Each chunk is fully validated before it is folded into the
//! accumulator, and the fold is guarded by
//!
//! ```text
//! n <= (max - chunk) / 10^len
//! ```
//!
//! which is checked before the update so the `u64` accumulator can never
//! wrap. The result is identical to consuming one digit at a time.

use crate::base10::split_sign;
use crate::error::{Error, Result};

/// Magnitude of `i64::MIN`
const NEG_MAX: u64 = 1 << 63;

/// Parse `s` as an unsigned decimal `u64`
///
/// Comparable to `s.parse::<u64>()` but faster, and a leading `+` is
/// rejected. Leading zeros are unlimited.
#[inline]
pub fn u64(s: &(impl AsRef<[u8]> + ?Sized)) -> Result<u64> {
    let s = s.as_ref();
    if s.is_empty() {
        return Err(Error::Syntax);
    }
    accumulate(s, u64::MAX)
}

/// Parse `s` as an optionally signed decimal `i64`
///
/// Comparable to `s.parse::<i64>()` but faster.
#[inline]
pub fn i64(s: &(impl AsRef<[u8]> + ?Sized)) -> Result<i64> {
    let (negative, digits) = split_sign(s.as_ref())?;
    if negative {
        let n = accumulate(digits, NEG_MAX)?;
        // 2^63 reinterprets as i64::MIN, which is its own negation
        Ok((n as i64).wrapping_neg())
    } else {
        let n = accumulate(digits, i64::MAX as u64)?;
        Ok(n as i64)
    }
}

#[inline(always)]
fn accumulate(mut s: &[u8], max: u64) -> Result<u64> {
    let mut n = 0u64;

    while let Some((chunk, rest)) = s.split_first_chunk::<8>() {
        n = fold(n, chunk, max)?;
        s = rest;
    }
    if let Some((chunk, rest)) = s.split_first_chunk::<4>() {
        n = fold(n, chunk, max)?;
        s = rest;
    }
    for &c in s {
        n = fold(n, &[c], max)?;
    }

    Ok(n)
}

/// Validate `chunk` as a whole, then append it to `n` if the result stays
/// within `max`.
#[inline(always)]
fn fold<const N: usize>(n: u64, chunk: &[u8; N], max: u64) -> Result<u64> {
    let d = chunk_value(chunk).ok_or(Error::Syntax)?;
    let weight = 10u64.pow(N as u32);
    if n > (max - d) / weight {
        return Err(Error::Overflow);
    }
    Ok(n * weight + d)
}

/// Decimal value of `N` digit bytes, or `None` if any byte is not a digit.
///
/// All bytes are combined before the single validity test. The sum stays
/// far below `u64::MAX` even for invalid bytes because `N <= 8`.
#[inline(always)]
fn chunk_value<const N: usize>(chunk: &[u8; N]) -> Option<u64> {
    let mut invalid = false;
    let mut v = 0u64;
    for &c in chunk {
        let d = c.wrapping_sub(b'0');
        invalid |= d > 9;
        v = v * 10 + d as u64;
    }
    (!invalid).then_some(v)
}
