use crate::mapping::{CodeUnitMapping, CodeUnitRange};

/// Direction for caret movement and selection extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Backward,
    Forward,
}

/// Caret and deletion helpers in code-unit space.
///
/// Built on the boundary neighbors of a [`CodeUnitMapping`], so a caret never
/// lands inside a surrogate pair or splits an emoji sequence. Unlike the raw
/// neighbor queries, movement clamps at the buffer edges.
pub struct CaretMovement;

impl CaretMovement {
    /// Move the caret back by one grapheme cluster.
    ///
    /// A caret left mid-cluster by the host snaps to the start of that
    /// cluster instead of skipping it.
    pub fn move_left<'a, M: CodeUnitMapping<'a>>(map: &M, offset: usize) -> usize {
        let snapped = map.floor_boundary(offset);
        if snapped != offset {
            return snapped;
        }
        map.location_before(offset).unwrap_or(0)
    }

    /// Move the caret forward by one grapheme cluster.
    pub fn move_right<'a, M: CodeUnitMapping<'a>>(map: &M, offset: usize) -> usize {
        map.location_after(offset).unwrap_or(map.utf16_len())
    }

    /// The nearest boundary at or before `offset`.
    pub fn snap_to_boundary<'a, M: CodeUnitMapping<'a>>(map: &M, offset: usize) -> usize {
        map.floor_boundary(offset)
    }

    /// Grow a selection by one cluster at the given edge.
    ///
    /// The sentinel range is returned unchanged.
    pub fn extend_selection<'a, M: CodeUnitMapping<'a>>(
        map: &M,
        range: CodeUnitRange,
        direction: MovementDirection,
    ) -> CodeUnitRange {
        let Some(end) = range.end().filter(|_| !range.is_not_found()) else {
            return range;
        };
        match direction {
            MovementDirection::Backward => {
                let start = Self::move_left(map, range.location);
                let end = Self::ceil_boundary(map, end).max(start);
                CodeUnitRange::new(start, end - start)
            }
            MovementDirection::Forward => {
                let start = map.floor_boundary(range.location);
                let end = Self::move_right(map, end).max(start);
                CodeUnitRange::new(start, end - start)
            }
        }
    }

    /// The nearest boundary at or after `offset`, clamped to the buffer
    /// length. Keeps a selection edge from shrinking into its cluster.
    fn ceil_boundary<'a, M: CodeUnitMapping<'a>>(map: &M, offset: usize) -> usize {
        let len = map.utf16_len();
        let floor = map.floor_boundary(offset);
        if floor == offset.min(len) {
            return floor;
        }
        map.location_after(floor).unwrap_or(len)
    }

    /// The span a backspace at `offset` removes: the whole cluster before it.
    ///
    /// A caret inside a cluster is first snapped down to that cluster's
    /// start, so the cluster removed is the one preceding it.
    pub fn delete_backward_range<'a, M: CodeUnitMapping<'a>>(
        map: &M,
        offset: usize,
    ) -> Option<CodeUnitRange> {
        let start = map.location_before(offset)?;
        let end = map.floor_boundary(offset);
        Some(CodeUnitRange::new(start, end - start))
    }

    /// The span a forward delete at `offset` removes.
    pub fn delete_forward_range<'a, M: CodeUnitMapping<'a>>(
        map: &M,
        offset: usize,
    ) -> Option<CodeUnitRange> {
        let start = map.floor_boundary(offset);
        let end = map.location_after(start)?;
        Some(CodeUnitRange::new(start, end - start))
    }
}
