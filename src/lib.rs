//! parseint: allocation-free integer parsers
//!
//! This crate parses runs of ASCII digits straight from a byte view into a
//! fixed-width integer, without allocating, copying or scanning the input
//! twice. It is a drop-in for `str::parse` / `from_str_radix` on the hot
//! path, with a deliberately small error surface.
//!
//! # Parsers
//!
//! | Function | Accepts | Significant digits | Errors |
//! |---|---|---|---|
//! | [`base16::u16`] | hex digits | 4 | Syntax |
//! | [`base16::u32`] | hex digits | 8 | Syntax |
//! | [`base10::u32`] | decimal digits | unbounded | Syntax, Overflow |
//! | [`base10::i32`] | optional `+`/`-`, decimal digits | unbounded | Syntax, Overflow |
//! | [`base10_64::u64`] | decimal digits | unbounded | Syntax, Overflow |
//! | [`base10_64::i64`] | optional `+`/`-`, decimal digits | unbounded | Syntax, Overflow |
//!
//! Every parser takes anything that is `AsRef<[u8]>`, so `&str`, `&[u8]`,
//! `String` and `Vec<u8>` give identical results. The 16 and 32-bit
//! parsers are generic over the output type and may widen into a larger
//! integer of the same signedness.
//!
//! Leading zeros are unlimited. Whitespace, separators and `0x` prefixes
//! are never accepted.
//!
//! # Errors
//!
//! There are two error kinds, [`Error::Syntax`] and [`Error::Overflow`].
//! The hex parsers report too many significant digits as `Syntax` and never
//! return `Overflow`. A failed parse produces no value, and
//! `unwrap_or_default()` yields zero.
//!
//! # Example
//!
//! ```rust
//! use parseint::{base10, base10_64, base16, Error};
//!
//! assert_eq!(base10::i32::<i32>("-2147483648"), Ok(i32::MIN));
//! assert_eq!(base10::u32::<u64>(b"0004294967295"), Ok(4_294_967_295));
//! assert_eq!(base10_64::u64("18446744073709551616"), Err(Error::Overflow));
//! assert_eq!(base16::u16::<u32>("BEEF"), Ok(0xbeef));
//! assert_eq!(base16::u32::<u32>("100000000"), Err(Error::Syntax));
//!
//! let fallback: i64 = base10_64::i64("12x").unwrap_or_default();
//! assert_eq!(fallback, 0);
//! # Ok::<(), parseint::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod base10;
pub mod base10_64;
pub mod base16;
pub mod error;
pub mod lut;
pub mod output;

#[cfg(all(feature = "std", test))]
pub mod bench;

// Re-export main types
pub use error::{Error, Result};
pub use output::{I32Output, U16Output, U32Output};

// Flat aliases for the parsers
pub use base10::{i32 as parse_i32, u32 as parse_u32};
pub use base10_64::{i64 as parse_i64, u64 as parse_u64};
pub use base16::{u16 as parse_hex_u16, u32 as parse_hex_u32};
