//! Unicode utilities for weft-text.
//!
//! Grapheme cluster segmentation reported in UTF-16 code units, the
//! addressing scheme used by host text widgets.

pub mod graphemes;

pub use graphemes::{utf16_len, Utf16Cluster, Utf16Clusters};
