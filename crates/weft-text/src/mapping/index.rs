use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Range;
use std::collections::hash_map::DefaultHasher;

use crate::error::{ConversionError, Result};

/// Fingerprint of the buffer contents a [`NativeIndex`] was derived from.
///
/// Two buffers with identical contents share a stamp, which is harmless:
/// their boundaries are identical too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferStamp(u64);

impl BufferStamp {
    pub fn of(text: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// A position on a grapheme cluster boundary of a specific buffer.
///
/// Internally this is a UTF-8 byte offset, so it can slice the `&str` it came
/// from directly. It is only produced by a [`CodeUnitMapping`] and is never
/// built from raw arithmetic.
///
/// Indices from different buffers are not comparable: `partial_cmp` returns
/// `None` for them.
///
/// [`CodeUnitMapping`]: crate::CodeUnitMapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeIndex<'a> {
    byte_offset: usize,
    stamp: BufferStamp,
    _text: PhantomData<&'a str>,
}

impl NativeIndex<'_> {
    pub(crate) fn new(byte_offset: usize, stamp: BufferStamp) -> Self {
        Self {
            byte_offset,
            stamp,
            _text: PhantomData,
        }
    }

    /// Byte offset of this boundary in the UTF-8 buffer.
    pub fn byte_offset(self) -> usize {
        self.byte_offset
    }

    pub fn stamp(self) -> BufferStamp {
        self.stamp
    }
}

impl PartialOrd for NativeIndex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.stamp != other.stamp {
            return None;
        }
        Some(self.byte_offset.cmp(&other.byte_offset))
    }
}

/// A half-open span of grapheme clusters, `lower..upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeRange<'a> {
    lower: NativeIndex<'a>,
    upper: NativeIndex<'a>,
}

impl<'a> NativeRange<'a> {
    /// Builds a range, rejecting bounds from different buffers or a lower
    /// bound past the upper one.
    pub fn new(lower: NativeIndex<'a>, upper: NativeIndex<'a>) -> Result<Self> {
        match lower.partial_cmp(&upper) {
            None => Err(ConversionError::ForeignIndex),
            Some(Ordering::Greater) => Err(ConversionError::ReversedRange),
            Some(_) => Ok(Self { lower, upper }),
        }
    }

    /// An empty range at `index`.
    pub fn caret(index: NativeIndex<'a>) -> Self {
        Self {
            lower: index,
            upper: index,
        }
    }

    pub fn lower(&self) -> NativeIndex<'a> {
        self.lower
    }

    pub fn upper(&self) -> NativeIndex<'a> {
        self.upper
    }

    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    pub fn stamp(&self) -> BufferStamp {
        self.lower.stamp
    }

    /// The UTF-8 byte range covered, suitable for slicing the source `&str`.
    pub fn byte_range(&self) -> Range<usize> {
        self.lower.byte_offset..self.upper.byte_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_from_different_buffers_do_not_compare() {
        let a = NativeIndex::new(0, BufferStamp::of("abc"));
        let b = NativeIndex::new(1, BufferStamp::of("xyz"));
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(NativeRange::new(a, b), Err(ConversionError::ForeignIndex));
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let stamp = BufferStamp::of("abc");
        let lo = NativeIndex::new(1, stamp);
        let hi = NativeIndex::new(2, stamp);
        assert!(lo < hi);
        assert_eq!(NativeRange::new(hi, lo), Err(ConversionError::ReversedRange));
        let range = NativeRange::new(lo, hi).unwrap();
        assert_eq!(range.byte_range(), 1..2);
        assert!(NativeRange::caret(lo).is_empty());
    }
}
