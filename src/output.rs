//! Output integer types accepted by the generic parsers
//!
//! A parser validates the magnitude against its nominal width and then
//! widens into whatever the caller asked for. These traits are sealed so
//! only integer types wide enough for that magnitude can be requested.

mod private {
    pub trait Sealed {}
}

/// Unsigned types that can hold every `u16`
pub trait U16Output: private::Sealed + Copy + Default {
    /// Widen a validated 16-bit value
    fn from_u16(v: u16) -> Self;
}

/// Unsigned types that can hold every `u32`
pub trait U32Output: U16Output {
    /// Widen a validated 32-bit value
    fn from_u32(v: u32) -> Self;
}

/// Signed types that can hold every `i32`
pub trait I32Output: private::Sealed + Copy + Default {
    /// Widen a validated 32-bit value
    fn from_i32(v: i32) -> Self;
}

macro_rules! impl_sealed {
    ($($t:ty)*) => ($(impl private::Sealed for $t {})*)
}

macro_rules! impl_u16_output {
    ($($t:ty)*) => ($(impl U16Output for $t {
        #[inline(always)]
        fn from_u16(v: u16) -> Self {
            v as Self
        }
    })*)
}

macro_rules! impl_u32_output {
    ($($t:ty)*) => ($(impl U32Output for $t {
        #[inline(always)]
        fn from_u32(v: u32) -> Self {
            v as Self
        }
    })*)
}

macro_rules! impl_i32_output {
    ($($t:ty)*) => ($(impl I32Output for $t {
        #[inline(always)]
        fn from_i32(v: i32) -> Self {
            v as Self
        }
    })*)
}

impl_sealed! { u16 u32 u64 i32 i64 }
impl_u16_output! { u16 u32 u64 }
impl_u32_output! { u32 u64 }
impl_i32_output! { i32 i64 }
