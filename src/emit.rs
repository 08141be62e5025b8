//! Serialize command sequences back to path data, and recompute bounds.

use glam::dvec2;

use crate::ast::{Axis, PathCommand};
use crate::types::BBox;

/// Serialize a command sequence to a path-data string.
///
/// Letters and arguments are single-space separated; a zero-argument
/// command emits only its letter. Integral coordinates print without a
/// fractional part.
pub fn serialize(seq: &[PathCommand]) -> String {
    let mut out = String::new();
    for cmd in seq {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(cmd.kind.letter());
        for arg in &cmd.args {
            out.push(' ');
            out.push_str(&arg.to_string());
        }
    }
    out
}

/// Recompute the bounding box of a command sequence from its own
/// coordinates.
///
/// Arguments contribute to the axis they are tagged with, so H and V
/// commands land on the correct side. Returns `None` when either axis saw
/// no values: bounds of nothing are undefined, which is distinct from a
/// zero-sized box.
pub fn recompute_bounds(seq: &[PathCommand]) -> Option<BBox> {
    let mut min = dvec2(f64::INFINITY, f64::INFINITY);
    let mut max = dvec2(f64::NEG_INFINITY, f64::NEG_INFINITY);

    for (axis, v) in seq.iter().flat_map(PathCommand::coords) {
        match axis {
            Axis::X => {
                min.x = min.x.min(v);
                max.x = max.x.max(v);
            }
            Axis::Y => {
                min.y = min.y.min(v);
                max.y = max.y.max(v);
            }
        }
    }

    if min.x > max.x || min.y > max.y {
        return None;
    }
    Some(BBox { min, max })
}
