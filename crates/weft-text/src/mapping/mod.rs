//! Conversion between UTF-16 code-unit offsets and grapheme-aligned native
//! indices.
//!
//! [`CodeUnitMapping`] is the shared contract. Implementors supply the five
//! boundary primitives from the grapheme scanner; range conversion, stepping,
//! slicing and the `Option` front-ends are provided on top of them.

pub mod code_unit_range;
pub mod index;
pub mod table;
pub mod view;

pub use code_unit_range::{CodeUnitRange, NOT_FOUND_LOCATION};
pub use index::{BufferStamp, NativeIndex, NativeRange};
pub use table::BoundaryTable;
pub use view::TextView;

use tracing::trace;

use crate::error::{ConversionError, Result};

/// Maps between code-unit offsets and native indices over one buffer.
pub trait CodeUnitMapping<'a> {
    /// The buffer being addressed.
    fn text(&self) -> &'a str;

    fn stamp(&self) -> BufferStamp;

    /// Length of the buffer in UTF-16 code units.
    fn utf16_len(&self) -> usize;

    /// Maps `offset` to a native index if it lies exactly on a cluster
    /// boundary. The end-of-buffer offset is a boundary.
    fn try_index_from_location(&self, offset: usize) -> Result<NativeIndex<'a>>;

    /// Maps a native index back to its code-unit offset. Fails only for an
    /// index derived from another buffer.
    fn try_location_of(&self, index: NativeIndex<'a>) -> Result<usize>;

    /// The largest boundary at or below `offset`, after clamping `offset` to
    /// the buffer length.
    fn floor_boundary(&self, offset: usize) -> usize;

    /// Start of the cluster preceding the one at or containing `offset`.
    ///
    /// Mid-cluster and past-the-end offsets are first normalized down with
    /// [`floor_boundary`](Self::floor_boundary); the result is then the
    /// nearest boundary strictly below that.
    fn try_location_before(&self, offset: usize) -> Result<usize>;

    /// Start of the cluster following the one containing `offset` (the
    /// buffer length when that cluster is the last one).
    fn try_location_after(&self, offset: usize) -> Result<usize>;

    fn is_empty(&self) -> bool {
        self.utf16_len() == 0
    }

    fn is_boundary(&self, offset: usize) -> bool {
        self.try_index_from_location(offset).is_ok()
    }

    fn start_index(&self) -> NativeIndex<'a> {
        NativeIndex::new(0, self.stamp())
    }

    /// One past the last cluster.
    fn end_index(&self) -> NativeIndex<'a> {
        NativeIndex::new(self.text().len(), self.stamp())
    }

    fn index_from_location(&self, offset: usize) -> Option<NativeIndex<'a>> {
        absent(self.try_index_from_location(offset), offset)
    }

    fn location_of(&self, index: NativeIndex<'a>) -> Option<usize> {
        absent(self.try_location_of(index), index.byte_offset())
    }

    fn location_before(&self, offset: usize) -> Option<usize> {
        absent(self.try_location_before(offset), offset)
    }

    fn location_after(&self, offset: usize) -> Option<usize> {
        absent(self.try_location_after(offset), offset)
    }

    /// Converts both ends of a host range independently.
    fn try_range_from(&self, range: CodeUnitRange) -> Result<NativeRange<'a>> {
        if range.is_not_found() {
            return Err(ConversionError::NotFoundSentinel);
        }
        let end = range.end().ok_or(ConversionError::OutOfBounds {
            offset: range.location,
            len: self.utf16_len(),
        })?;
        let lower = self.try_index_from_location(range.location)?;
        let upper = self.try_index_from_location(end)?;
        NativeRange::new(lower, upper)
    }

    fn range_from(&self, range: CodeUnitRange) -> Option<NativeRange<'a>> {
        absent(self.try_range_from(range), range.location)
    }

    fn try_code_unit_range(&self, range: NativeRange<'a>) -> Result<CodeUnitRange> {
        let lower = self.try_location_of(range.lower())?;
        let upper = self.try_location_of(range.upper())?;
        Ok(CodeUnitRange::new(lower, upper - lower))
    }

    /// Total for any range derived from this buffer.
    fn code_unit_range(&self, range: NativeRange<'a>) -> Option<CodeUnitRange> {
        absent(self.try_code_unit_range(range), range.lower().byte_offset())
    }

    /// The index one cluster after `index`, or `None` at the end.
    fn index_after(&self, index: NativeIndex<'a>) -> Option<NativeIndex<'a>> {
        let next = self.location_after(self.location_of(index)?)?;
        self.index_from_location(next)
    }

    /// The index one cluster before `index`, or `None` at the start.
    fn index_before(&self, index: NativeIndex<'a>) -> Option<NativeIndex<'a>> {
        let prev = self.location_before(self.location_of(index)?)?;
        self.index_from_location(prev)
    }

    fn slice(&self, range: NativeRange<'a>) -> Option<&'a str> {
        if range.stamp() != self.stamp() {
            return None;
        }
        self.text().get(range.byte_range())
    }

    /// Everything before `index`.
    fn prefix(&self, index: NativeIndex<'a>) -> Option<&'a str> {
        self.slice(NativeRange::new(self.start_index(), index).ok()?)
    }

    /// Everything from `index` on.
    fn suffix(&self, index: NativeIndex<'a>) -> Option<&'a str> {
        self.slice(NativeRange::new(index, self.end_index()).ok()?)
    }

    /// Literal search in code-unit space, the way a host widget reports it.
    ///
    /// Returns [`CodeUnitRange::NOT_FOUND`] when `needle` is empty or absent.
    /// The match is not snapped to cluster boundaries.
    fn range_of(&self, needle: &str) -> CodeUnitRange {
        if needle.is_empty() {
            return CodeUnitRange::NOT_FOUND;
        }
        let text = self.text();
        match text.find(needle) {
            Some(byte) => CodeUnitRange::new(
                text[..byte].encode_utf16().count(),
                needle.encode_utf16().count(),
            ),
            None => CodeUnitRange::NOT_FOUND,
        }
    }
}

fn absent<T>(result: Result<T>, offset: usize) -> Option<T> {
    result
        .inspect_err(|err| trace!(offset, %err, "conversion resolved to absence"))
        .ok()
}
