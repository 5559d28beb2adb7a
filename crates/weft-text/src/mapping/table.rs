use tracing::debug;

use crate::error::{ConversionError, Result};
use crate::mapping::{BufferStamp, CodeUnitMapping, NativeIndex, TextView};

/// Precomputed cluster boundaries for O(log n) lookups.
///
/// Built once from the grapheme scanner; answers every query with a binary
/// search instead of a rescan. Results are identical to [`TextView`].
#[derive(Debug, Clone)]
pub struct BoundaryTable<'a> {
    text: &'a str,
    stamp: BufferStamp,
    /// Code-unit start of each cluster, followed by the total length.
    utf16_offsets: Vec<usize>,
    /// Byte start of each cluster, followed by `text.len()`.
    byte_offsets: Vec<usize>,
}

impl<'a> BoundaryTable<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::from_view(&TextView::new(text))
    }

    pub fn from_view(view: &TextView<'a>) -> Self {
        let text = view.text();
        let (lower, _) = view.clusters().size_hint();
        let mut utf16_offsets = Vec::with_capacity(lower + 1);
        let mut byte_offsets = Vec::with_capacity(lower + 1);

        for cluster in view.clusters() {
            utf16_offsets.push(cluster.utf16_start);
            byte_offsets.push(cluster.byte_start);
        }
        utf16_offsets.push(view.utf16_len());
        byte_offsets.push(text.len());

        debug!(
            clusters = utf16_offsets.len() - 1,
            utf16_len = view.utf16_len(),
            "built boundary table"
        );

        Self {
            text,
            stamp: view.stamp(),
            utf16_offsets,
            byte_offsets,
        }
    }

    /// Number of grapheme clusters in the buffer.
    pub fn cluster_count(&self) -> usize {
        self.utf16_offsets.len() - 1
    }

    /// Every boundary in code units, including 0 and the buffer length.
    pub fn boundaries(&self) -> &[usize] {
        &self.utf16_offsets
    }

    /// Position in `utf16_offsets` of the boundary at or below `offset`.
    fn anchor(&self, offset: usize) -> usize {
        match self.utf16_offsets.binary_search(&offset) {
            Ok(i) => i,
            // Index 0 always holds offset 0, so `i >= 1` here.
            Err(i) => i - 1,
        }
    }
}

impl<'a> CodeUnitMapping<'a> for BoundaryTable<'a> {
    fn text(&self) -> &'a str {
        self.text
    }

    fn stamp(&self) -> BufferStamp {
        self.stamp
    }

    fn utf16_len(&self) -> usize {
        self.utf16_offsets[self.utf16_offsets.len() - 1]
    }

    fn try_index_from_location(&self, offset: usize) -> Result<NativeIndex<'a>> {
        let len = self.utf16_len();
        if offset > len {
            return Err(ConversionError::OutOfBounds { offset, len });
        }
        match self.utf16_offsets.binary_search(&offset) {
            Ok(i) => Ok(NativeIndex::new(self.byte_offsets[i], self.stamp)),
            Err(i) => Err(ConversionError::MidCluster {
                offset,
                cluster_start: self.utf16_offsets[i - 1],
            }),
        }
    }

    fn try_location_of(&self, index: NativeIndex<'a>) -> Result<usize> {
        if index.stamp() != self.stamp {
            return Err(ConversionError::ForeignIndex);
        }
        self.byte_offsets
            .binary_search(&index.byte_offset())
            .map(|i| self.utf16_offsets[i])
            .map_err(|_| ConversionError::ForeignIndex)
    }

    fn floor_boundary(&self, offset: usize) -> usize {
        let offset = offset.min(self.utf16_len());
        self.utf16_offsets[self.anchor(offset)]
    }

    fn try_location_before(&self, offset: usize) -> Result<usize> {
        if offset == 0 || self.is_empty() {
            return Err(ConversionError::NoPredecessor(offset));
        }
        match self.anchor(offset.min(self.utf16_len())) {
            0 => Err(ConversionError::NoPredecessor(offset)),
            anchor => Ok(self.utf16_offsets[anchor - 1]),
        }
    }

    fn try_location_after(&self, offset: usize) -> Result<usize> {
        if offset >= self.utf16_len() {
            return Err(ConversionError::NoSuccessor(offset));
        }
        Ok(self.utf16_offsets[self.anchor(offset) + 1])
    }
}
