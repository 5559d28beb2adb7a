//! weft-text: Unicode-safe conversion between host text offsets and native
//! string indices.
//!
//! Host text widgets address text in UTF-16 code units. Rust slices `&str`
//! by UTF-8 byte. Neither lines up with what a reader sees as one character,
//! so this crate only hands out native indices on extended grapheme cluster
//! boundaries:
//! - [`Utf16Clusters`]: the grapheme scanner every other query is built on
//! - [`CodeUnitMapping`]: offset/index/range conversion and boundary neighbors
//! - [`TextView`] (rescan per call) and [`BoundaryTable`] (precomputed)
//! - [`CaretMovement`]: caret, selection and deletion helpers

pub mod caret;
pub mod error;
pub mod mapping;
pub mod unicode;

pub use caret::{CaretMovement, MovementDirection};
pub use error::ConversionError;
pub use mapping::{
    BoundaryTable, BufferStamp, CodeUnitMapping, CodeUnitRange, NativeIndex, NativeRange,
    NOT_FOUND_LOCATION, TextView,
};
pub use unicode::{Utf16Cluster, Utf16Clusters};
