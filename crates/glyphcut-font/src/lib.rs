//! Font loading and glyph outline extraction for glyphcut.
//!
//! This crate wraps `ttf-parser` behind a small provider API: map a
//! character to its glyph and hand back the outline as SVG path data plus
//! the control-point bounding box, all in font design units. It is
//! intentionally independent of the core crate: the boundary is plain
//! strings and `f64` values.

pub mod data;
pub mod error;
pub mod pen;

pub use data::{Glyph, GlyphFont};
pub use error::FontError;
pub use pen::PathPen;
