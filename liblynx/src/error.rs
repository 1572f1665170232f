//! Error mapping for trap results.
//!
//! The protocol signals failure only by the sign of the result word; there
//! is no error-code table at this boundary, so [`SysError`] deliberately
//! carries nothing beyond the raw word. Callers that need to distinguish
//! an invalid handle from resource exhaustion cannot — that is a
//! documented limitation of the protocol, not of this crate.
//!
//! Empty/no-data conditions (no pending message, no input) are sentinels,
//! not errors; they surface as `Option::None` in the typed wrappers and
//! never pass through here.

use core::fmt;

/// A failed trap: the kernel returned a negative result word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysError(isize);

impl SysError {
    /// The raw negative word as the kernel returned it.
    pub fn code(&self) -> isize {
        self.0
    }
}

impl fmt::Display for SysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kernel reported failure ({})", self.0)
    }
}

/// Result type for typed trap wrappers.
pub type Result<T> = core::result::Result<T, SysError>;

/// Map a raw trap status to a `Result` carrying the non-negative value.
#[inline]
pub fn check(status: isize) -> Result<isize> {
    if status < 0 {
        Err(SysError(status))
    } else {
        Ok(status)
    }
}

/// Map a raw trap status to a `Result`, discarding the value.
#[inline]
pub fn check_unit(status: isize) -> Result<()> {
    check(status).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_is_error() {
        let err = check(-7).unwrap_err();
        assert_eq!(err.code(), -7);
        assert!(check_unit(-1).is_err());
    }

    #[test]
    fn zero_and_positive_succeed() {
        assert_eq!(check(0), Ok(0));
        assert_eq!(check(42), Ok(42));
        assert_eq!(check_unit(0), Ok(()));
    }
}
