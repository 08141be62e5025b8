//! Carve components out of CJK glyph outlines.
//!
//! A glyph outline arrives as an SVG path-data string. Splitting it at an
//! x line is a pipeline of pure stages: tokenize the path into commands,
//! filter the commands spatially against a window derived from the cut,
//! repair the structural debris the filter leaves behind, then serialize
//! the survivors and recompute their bounding box. Curves are never split
//! at the boundary; a command is kept whole or dropped whole.

use pest_derive::Parser;

pub mod ast;
pub mod emit;
pub mod errors;
pub mod filter;
pub mod log;
pub mod parse;
pub mod repair;
pub mod types;

pub use ast::{Axis, CmdKind, PathCommand};
pub use errors::PathError;
pub use types::{BBox, CLEANUP_TOLERANCE, EXTRACT_TOLERANCE, Policy, SplitSpec};

use filter::{PerCommand, SplitFilter, WholeSubpath, Window};

#[derive(Parser)]
#[grammar = "path.pest"]
pub struct PathParser;

/// A component carved out of a glyph outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Path data of the surviving commands, absolute form.
    pub path: String,
    /// Bounding box recomputed from the surviving coordinates.
    pub bounds: BBox,
}

/// Extract one component of a glyph outline.
///
/// `bounds` is the glyph's original box and only shapes the window for the
/// `Left`/`Right` policies; the returned bounds are always recomputed from
/// the output commands. Returns `Ok(None)` when nothing structurally valid
/// survives the cut; that is a recoverable condition, usually fixed by
/// moving the cut line.
///
/// # Errors
///
/// Fails only on path data the tokenizer refuses, such as relative-form
/// commands.
pub fn extract_component(
    path: &str,
    bounds: BBox,
    split: SplitSpec,
    policy: Policy,
) -> Result<Option<Component>, PathError> {
    let commands = parse::tokenize(path)?;

    let window = match policy {
        Policy::Cleanup => Window::below(split.cut_x, split.tolerance),
        Policy::Left => Window::span(bounds.min.x, split.cut_x, split.tolerance),
        Policy::Right => Window::span(split.cut_x, bounds.max.x, split.tolerance),
    };
    let split_filter = match policy {
        Policy::Cleanup => SplitFilter::from(WholeSubpath),
        Policy::Left | Policy::Right => SplitFilter::from(PerCommand),
    };

    let kept = filter::filter_commands(&commands, &split_filter, window);
    let repaired = repair::repair(kept);

    let Some(component_bounds) = emit::recompute_bounds(&repaired) else {
        // empty sequence, or nothing coordinate-bearing left
        return Ok(None);
    };

    Ok(Some(Component {
        path: emit::serialize(&repaired),
        bounds: component_bounds,
    }))
}
