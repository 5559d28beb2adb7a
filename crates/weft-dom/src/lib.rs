//! weft-dom: HTML attribute model.
//!
//! Attribute values as a tagged union (none, plain string, inline CSS) with
//! parsing from and rendering to their serialized string form.

pub mod attribute;
pub mod css;

pub use attribute::{Attribute, AttributeValue};
pub use css::CssProperty;
