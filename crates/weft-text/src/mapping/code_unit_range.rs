use core::ops::Range;

use crate::error::{ConversionError, Result};

/// The location host widgets report when a search or selection lookup finds
/// nothing. Matches the platform's signed "not found" value (`isize::MAX`).
pub const NOT_FOUND_LOCATION: usize = isize::MAX as usize;

/// A span of UTF-16 code units, `[location, location + length)`.
///
/// This is the addressing scheme host text widgets speak. The bounds are not
/// guaranteed to sit on grapheme cluster boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodeUnitRange {
    pub location: usize,
    pub length: usize,
}

impl CodeUnitRange {
    /// The host "not found" value. Distinct from an empty range at 0.
    pub const NOT_FOUND: Self = Self {
        location: NOT_FOUND_LOCATION,
        length: 0,
    };

    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// An empty range at `location`.
    pub const fn caret(location: usize) -> Self {
        Self {
            location,
            length: 0,
        }
    }

    /// Accepts a signed range as reported by a host API.
    ///
    /// The host "not found" location maps to [`CodeUnitRange::NOT_FOUND`]
    /// whatever its length; any negative component is rejected.
    pub fn from_host(location: i64, length: i64) -> Result<Self> {
        if location == NOT_FOUND_LOCATION as i64 {
            return Ok(Self::NOT_FOUND);
        }
        let location =
            usize::try_from(location).map_err(|_| ConversionError::NegativeOffset(location))?;
        let length =
            usize::try_from(length).map_err(|_| ConversionError::NegativeOffset(length))?;
        Ok(Self { location, length })
    }

    pub fn is_not_found(&self) -> bool {
        self.location == NOT_FOUND_LOCATION
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// `location + length`, or `None` if that overflows.
    pub fn end(&self) -> Option<usize> {
        self.location.checked_add(self.length)
    }

    /// The span as a `Range<usize>`; `None` for the sentinel.
    pub fn as_range(&self) -> Option<Range<usize>> {
        if self.is_not_found() {
            return None;
        }
        Some(self.location..self.end()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_an_empty_range_at_zero() {
        assert!(CodeUnitRange::NOT_FOUND.is_not_found());
        assert!(!CodeUnitRange::caret(0).is_not_found());
        assert_ne!(CodeUnitRange::NOT_FOUND, CodeUnitRange::caret(0));
        assert_eq!(CodeUnitRange::NOT_FOUND.as_range(), None);
        assert_eq!(CodeUnitRange::caret(0).as_range(), Some(0..0));
    }

    #[test]
    fn host_values() {
        assert_eq!(CodeUnitRange::from_host(6, 5), Ok(CodeUnitRange::new(6, 5)));
        assert_eq!(
            CodeUnitRange::from_host(isize::MAX as i64, 0),
            Ok(CodeUnitRange::NOT_FOUND)
        );
        assert_eq!(
            CodeUnitRange::from_host(-1, 2),
            Err(ConversionError::NegativeOffset(-1))
        );
        assert_eq!(
            CodeUnitRange::from_host(3, -2),
            Err(ConversionError::NegativeOffset(-2))
        );
    }

    #[test]
    fn end_does_not_overflow() {
        assert_eq!(CodeUnitRange::new(usize::MAX, 1).end(), None);
        assert_eq!(CodeUnitRange::new(6, 5).end(), Some(11));
    }
}
