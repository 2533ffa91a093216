//! Decimal parsers for the 32-bit ranges
//!
//! Digits are consumed one byte at a time into a `u64` accumulator and the
//! range check runs after every digit, so an out-of-range value fails as
//! soon as it is detected without reading the rest of the input.

use crate::error::{Error, Result};
use crate::output::{I32Output, U32Output};

/// Parse `s` as an unsigned decimal that fits a `u32`
///
/// Returns [`Error::Syntax`] for empty input or any non-digit byte, including
/// a sign. Returns [`Error::Overflow`] if the value exceeds `u32::MAX`.
/// Leading zeros are unlimited.
#[inline]
pub fn u32<T: U32Output>(s: &(impl AsRef<[u8]> + ?Sized)) -> Result<T> {
    let s = s.as_ref();
    if s.is_empty() {
        return Err(Error::Syntax);
    }
    let n = accumulate(s, u32::MAX as u64)?;
    Ok(T::from_u32(n as u32))
}

/// Parse `s` as an optionally signed decimal that fits an `i32`
///
/// A single leading `-` or `+` is accepted. The negative range reaches one
/// further than the positive one, so `-2147483648` parses while
/// `2147483648` is [`Error::Overflow`].
#[inline]
pub fn i32<T: I32Output>(s: &(impl AsRef<[u8]> + ?Sized)) -> Result<T> {
    let (negative, digits) = split_sign(s.as_ref())?;
    if negative {
        let n = accumulate(digits, 1 << 31)?;
        Ok(T::from_i32((-(n as i64)) as i32))
    } else {
        let n = accumulate(digits, i32::MAX as u64)?;
        Ok(T::from_i32(n as i32))
    }
}

/// Split an optional leading sign from the digits.
///
/// Fails on empty input and on a sign with nothing after it.
#[inline(always)]
pub(crate) fn split_sign(s: &[u8]) -> Result<(bool, &[u8])> {
    match s {
        [] | [b'-' | b'+'] => Err(Error::Syntax),
        [b'-', rest @ ..] => Ok((true, rest)),
        [b'+', rest @ ..] => Ok((false, rest)),
        _ => Ok((false, s)),
    }
}

/// Byte-at-a-time accumulation bounded by `max`.
///
/// `max` never exceeds `u32::MAX`, so `n * 10 + 9` cannot wrap the `u64`.
#[inline(always)]
fn accumulate(s: &[u8], max: u64) -> Result<u64> {
    let mut n = 0u64;
    for &c in s {
        let d = c.wrapping_sub(b'0');
        if d > 9 {
            return Err(Error::Syntax);
        }
        n = n * 10 + d as u64;
        if n > max {
            return Err(Error::Overflow);
        }
    }
    Ok(n)
}
