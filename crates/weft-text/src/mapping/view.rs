use crate::error::{ConversionError, Result};
use crate::mapping::{BufferStamp, CodeUnitMapping, NativeIndex};
use crate::unicode::{Utf16Clusters, utf16_len};

/// A borrowed, uncached view of a buffer.
///
/// Every query rescans clusters from the start, so each call is linear in
/// the buffer length and nothing is retained between calls. Use
/// [`BoundaryTable`](crate::BoundaryTable) when the same buffer is queried
/// repeatedly.
#[derive(Debug, Clone, Copy)]
pub struct TextView<'a> {
    text: &'a str,
    stamp: BufferStamp,
    utf16_len: usize,
}

impl<'a> TextView<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            stamp: BufferStamp::of(text),
            utf16_len: utf16_len(text),
        }
    }

    /// A fresh traversal of this buffer's clusters.
    pub fn clusters(&self) -> Utf16Clusters<'a> {
        Utf16Clusters::new(self.text)
    }
}

impl<'a> CodeUnitMapping<'a> for TextView<'a> {
    fn text(&self) -> &'a str {
        self.text
    }

    fn stamp(&self) -> BufferStamp {
        self.stamp
    }

    fn utf16_len(&self) -> usize {
        self.utf16_len
    }

    fn try_index_from_location(&self, offset: usize) -> Result<NativeIndex<'a>> {
        if offset > self.utf16_len {
            return Err(ConversionError::OutOfBounds {
                offset,
                len: self.utf16_len,
            });
        }
        if offset == self.utf16_len {
            return Ok(self.end_index());
        }
        for cluster in self.clusters() {
            if cluster.utf16_start == offset {
                return Ok(NativeIndex::new(cluster.byte_start, self.stamp));
            }
            if cluster.splits_at(offset) {
                return Err(ConversionError::MidCluster {
                    offset,
                    cluster_start: cluster.utf16_start,
                });
            }
        }
        Err(ConversionError::OutOfBounds {
            offset,
            len: self.utf16_len,
        })
    }

    fn try_location_of(&self, index: NativeIndex<'a>) -> Result<usize> {
        if index.stamp() != self.stamp {
            return Err(ConversionError::ForeignIndex);
        }
        let byte = index.byte_offset();
        if byte == self.text.len() {
            return Ok(self.utf16_len);
        }
        for cluster in self.clusters() {
            if cluster.byte_start == byte {
                return Ok(cluster.utf16_start);
            }
            if cluster.byte_start > byte {
                break;
            }
        }
        Err(ConversionError::ForeignIndex)
    }

    fn floor_boundary(&self, offset: usize) -> usize {
        if offset >= self.utf16_len {
            return self.utf16_len;
        }
        self.clusters()
            .find(|cluster| cluster.utf16_end() > offset)
            .map_or(self.utf16_len, |cluster| cluster.utf16_start)
    }

    fn try_location_before(&self, offset: usize) -> Result<usize> {
        if offset == 0 || self.utf16_len == 0 {
            return Err(ConversionError::NoPredecessor(offset));
        }

        let mut prev_start = None;
        for cluster in self.clusters() {
            // The cluster at or containing offset: answer is the one before it.
            if cluster.utf16_end() > offset {
                break;
            }
            prev_start = Some(cluster.utf16_start);
        }
        prev_start.ok_or(ConversionError::NoPredecessor(offset))
    }

    fn try_location_after(&self, offset: usize) -> Result<usize> {
        if offset >= self.utf16_len {
            return Err(ConversionError::NoSuccessor(offset));
        }
        self.clusters()
            .find(|cluster| cluster.utf16_end() > offset)
            .map(|cluster| cluster.utf16_end())
            .ok_or(ConversionError::NoSuccessor(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{CodeUnitRange, NativeRange};

    #[test]
    fn index_from_location_on_boundaries_only() {
        let view = TextView::new("Hello 🌍!");
        let index = view.index_from_location(6).unwrap();
        assert_eq!(view.prefix(index), Some("Hello "));
        assert_eq!(
            view.try_index_from_location(7),
            Err(ConversionError::MidCluster {
                offset: 7,
                cluster_start: 6
            })
        );
        assert_eq!(view.index_from_location(8).map(|i| i.byte_offset()), Some(10));
        assert_eq!(view.index_from_location(9), Some(view.end_index()));
        assert_eq!(
            view.try_index_from_location(10),
            Err(ConversionError::OutOfBounds { offset: 10, len: 9 })
        );
    }

    #[test]
    fn location_of_sums_widths() {
        let view = TextView::new("Hello 🇮🇳 🌍!");
        assert_eq!(view.location_of(view.start_index()), Some(0));
        assert_eq!(view.location_of(view.end_index()), Some(14));
        let globe = view.index_from_location(11).unwrap();
        assert_eq!(view.location_of(globe), Some(11));
    }

    #[test]
    fn foreign_index_is_rejected() {
        let a = TextView::new("Hello 🌍!");
        let b = TextView::new("Goodbye!");
        let index = a.index_from_location(6).unwrap();
        assert_eq!(b.try_location_of(index), Err(ConversionError::ForeignIndex));
        let range = NativeRange::caret(index);
        assert_eq!(b.slice(range), None);
        assert_eq!(b.code_unit_range(range), None);
    }

    #[test]
    fn before_steps_to_previous_boundary() {
        let view = TextView::new("Hello 🇮🇳 🌍!");
        assert_eq!(view.location_before(11), Some(10));
        assert_eq!(view.location_before(10), Some(6));
        assert_eq!(view.location_before(6), Some(5));
        assert_eq!(view.location_before(1), Some(0));
        assert_eq!(view.location_before(0), None);
    }

    #[test]
    fn before_normalizes_mid_cluster_and_past_end() {
        let view = TextView::new("Hello 🇮🇳 🌍!");
        // 8 is inside the flag; normalized to 6, then stepped back.
        assert_eq!(view.location_before(8), Some(5));
        assert_eq!(view.location_before(12), Some(10));
        assert_eq!(view.location_before(14), Some(13));
        assert_eq!(view.location_before(100), Some(13));
        // Inside the first cluster there is nothing before.
        assert_eq!(
            TextView::new("🌍").try_location_before(1),
            Err(ConversionError::NoPredecessor(1))
        );
    }

    #[test]
    fn after_steps_past_containing_cluster() {
        let view = TextView::new("Hello 🇮🇳 🌍!");
        assert_eq!(view.location_after(6), Some(10));
        assert_eq!(view.location_after(7), Some(10));
        assert_eq!(view.location_after(10), Some(11));
        assert_eq!(view.location_after(13), Some(14));
        assert_eq!(view.location_after(14), None);
        assert_eq!(view.location_after(50), None);
    }

    #[test]
    fn empty_buffer_has_no_neighbors() {
        let view = TextView::new("");
        assert_eq!(view.location_before(0), None);
        assert_eq!(view.location_after(0), None);
        assert_eq!(view.index_from_location(0), Some(view.start_index()));
        assert_eq!(view.start_index(), view.end_index());
    }

    #[test]
    fn floor_boundary_clamps() {
        let view = TextView::new("a🌍b");
        assert_eq!(view.floor_boundary(0), 0);
        assert_eq!(view.floor_boundary(2), 1);
        assert_eq!(view.floor_boundary(3), 3);
        assert_eq!(view.floor_boundary(9), 4);
    }

    #[test]
    fn sentinel_range_is_absent() {
        let view = TextView::new("Hello");
        assert_eq!(
            view.try_range_from(CodeUnitRange::NOT_FOUND),
            Err(ConversionError::NotFoundSentinel)
        );
        let empty = view.range_from(CodeUnitRange::caret(0)).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.lower(), view.start_index());
    }

    #[test]
    fn stepping_walks_clusters() {
        let view = TextView::new("e\u{0301}🌍");
        let first = view.index_after(view.start_index()).unwrap();
        assert_eq!(view.location_of(first), Some(2));
        let end = view.index_after(first).unwrap();
        assert_eq!(end, view.end_index());
        assert_eq!(view.index_after(end), None);
        assert_eq!(view.index_before(first), Some(view.start_index()));
        assert_eq!(view.index_before(view.start_index()), None);
    }
}
