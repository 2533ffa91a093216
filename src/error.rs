//! Error types for the integer parsers

/// Errors that can occur while parsing an integer
///
/// A failed parse never yields a partial value. Callers that want the
/// "zero on error" convention can use `unwrap_or_default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Input is empty, contains a byte that is not a digit of the requested
    /// base, is a bare sign, or (hex only) has too many significant digits
    Syntax,
    /// All digits are valid but the value does not fit the target range
    Overflow,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::Syntax => "syntax error",
            Error::Overflow => "overflow",
        }
    }

    /// True for [`Error::Syntax`]
    #[inline]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax)
    }

    /// True for [`Error::Overflow`]
    #[inline]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for parser operations
pub type Result<T> = core::result::Result<T, Error>;
