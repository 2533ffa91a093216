//! Fixed-width hexadecimal parsers
//!
//! Only [`Error::Syntax`] is ever returned. Too many significant digits is
//! reported as a syntax error as well, because telling overflow apart would
//! cost extra work that most callers throw away. Callers that need the
//! distinction must re-parse with a routine that makes it.
//!
//! No sign, separator or `0x` prefix is accepted. Leading zeros are
//! unlimited and never count towards the width.

use crate::error::{Error, Result};
use crate::lut::{hex_value, INVALID_HEX};
use crate::output::{U16Output, U32Output};

/// Parse `s` as a hexadecimal number of at most 4 significant digits
///
/// Comparable to `u16::from_str_radix(s, 16)` but faster. The result may be
/// widened into any [`U16Output`] type.
#[inline]
pub fn u16<T: U16Output>(s: &(impl AsRef<[u8]> + ?Sized)) -> Result<T> {
    let digits = significant(s.as_ref())?;
    let v = compose::<4>(digits)?;
    Ok(T::from_u16(v as u16))
}

/// Parse `s` as a hexadecimal number of at most 8 significant digits
///
/// Comparable to `u32::from_str_radix(s, 16)` but faster. The result may be
/// widened into any [`U32Output`] type.
#[inline]
pub fn u32<T: U32Output>(s: &(impl AsRef<[u8]> + ?Sized)) -> Result<T> {
    let digits = significant(s.as_ref())?;
    let v = compose::<8>(digits)?;
    Ok(T::from_u32(v))
}

/// Strip leading zeros. An all-zero input leaves an empty slice.
#[inline(always)]
fn significant(s: &[u8]) -> Result<&[u8]> {
    if s.is_empty() {
        return Err(Error::Syntax);
    }
    match s.iter().position(|&c| c != b'0') {
        Some(start) => Ok(&s[start..]),
        None => Ok(&[]),
    }
}

/// Combine up to `MAX` hex digits, most significant first.
///
/// Every byte is looked up before the single validity test, so an invalid
/// byte anywhere costs no extra branch.
#[inline(always)]
fn compose<const MAX: usize>(digits: &[u8]) -> Result<u32> {
    if digits.len() > MAX {
        return Err(Error::Syntax);
    }

    let mut seen = 0u8;
    let mut v = 0u32;
    for &c in digits {
        let nibble = hex_value(c);
        seen |= nibble;
        v = (v << 4) | nibble as u32;
    }

    if seen == INVALID_HEX {
        return Err(Error::Syntax);
    }
    Ok(v)
}
