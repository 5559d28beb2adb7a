use core::ops::Range;

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

/// A Unicode extended grapheme cluster, addressed in both UTF-16 code units
/// and UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16Cluster {
    /// Offset of the first code unit of this cluster.
    pub utf16_start: usize,
    /// Number of UTF-16 code units in the cluster. Always at least 1.
    pub utf16_len: usize,
    /// Byte offset of the cluster in the UTF-8 source.
    pub byte_start: usize,
    /// Number of UTF-8 bytes in the cluster.
    pub byte_len: usize,
}

impl Utf16Cluster {
    /// Code-unit offset one past the last unit of this cluster.
    pub fn utf16_end(&self) -> usize {
        self.utf16_start + self.utf16_len
    }

    pub fn byte_end(&self) -> usize {
        self.byte_start + self.byte_len
    }

    pub fn utf16_range(&self) -> Range<usize> {
        self.utf16_start..self.utf16_end()
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_end()
    }

    /// Returns `true` if `offset` falls strictly inside this cluster.
    pub fn splits_at(&self, offset: usize) -> bool {
        offset > self.utf16_start && offset < self.utf16_end()
    }
}

/// Walks the extended grapheme clusters of a string in order, reporting the
/// UTF-16 start offset and width of each one.
///
/// Every other boundary query in this crate is built on top of this
/// iterator. Cloning it gives an independent traversal from the same
/// position; [`Utf16Clusters::new`] restarts from the beginning.
#[derive(Debug, Clone)]
pub struct Utf16Clusters<'a> {
    inner: GraphemeIndices<'a>,
    utf16_cursor: usize,
}

impl<'a> Utf16Clusters<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.grapheme_indices(true),
            utf16_cursor: 0,
        }
    }

    /// The code-unit offset of the next cluster to be reported, or the total
    /// length once the traversal is exhausted.
    pub fn utf16_position(&self) -> usize {
        self.utf16_cursor
    }
}

impl Iterator for Utf16Clusters<'_> {
    type Item = Utf16Cluster;

    fn next(&mut self) -> Option<Self::Item> {
        let (byte_start, grapheme) = self.inner.next()?;
        // len_utf16 is 2 for anything outside the BMP.
        let utf16_len = grapheme.chars().map(char::len_utf16).sum();
        let cluster = Utf16Cluster {
            utf16_start: self.utf16_cursor,
            utf16_len,
            byte_start,
            byte_len: grapheme.len(),
        };
        self.utf16_cursor += utf16_len;
        Some(cluster)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl core::iter::FusedIterator for Utf16Clusters<'_> {}

/// Total length of `text` in UTF-16 code units, as seen by the scanner.
pub fn utf16_len(text: &str) -> usize {
    Utf16Clusters::new(text).map(|c| c.utf16_len).sum()
}
