use thiserror::Error;

/// Why a conversion between code-unit offsets and native indices produced
/// no result.
///
/// None of these are fatal. The `Option`-returning entry points discard the
/// reason; the `try_*` variants hand it back for callers that want to log or
/// branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("offset {offset} falls inside the cluster starting at {cluster_start}")]
    MidCluster { offset: usize, cluster_start: usize },
    #[error("offset {offset} is past the end of the buffer (length {len})")]
    OutOfBounds { offset: usize, len: usize },
    #[error("negative host offset {0}")]
    NegativeOffset(i64),
    #[error("no boundary before offset {0}")]
    NoPredecessor(usize),
    #[error("no boundary after offset {0}")]
    NoSuccessor(usize),
    #[error("range is the host \"not found\" sentinel")]
    NotFoundSentinel,
    #[error("index belongs to a different buffer")]
    ForeignIndex,
    #[error("range lower bound is after its upper bound")]
    ReversedRange,
}

/// Convenient result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
