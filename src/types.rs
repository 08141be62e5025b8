//! Domain types: bounding boxes, split specifications, extraction policies.

use glam::{DVec2, dvec2};

/// Default tolerance for left/right extraction, in font design units.
pub const EXTRACT_TOLERANCE: f64 = 10.0;

/// Default tolerance for one-sided cleanup, in font design units.
pub const CLEANUP_TOLERANCE: f64 = 20.0;

/// Axis-aligned bounding box in font design units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl BBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: dvec2(min_x, min_y),
            max: dvec2(max_x, max_y),
        }
    }

    /// Build from an `[x_min, y_min, x_max, y_max]` array, the layout the
    /// component store and the font provider use.
    pub fn from_array(b: [f64; 4]) -> Self {
        Self::new(b[0], b[1], b[2], b[3])
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// The cut line: an x threshold plus symmetric slack at each window edge,
/// so coordinates straddling the boundary are not spuriously excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSpec {
    pub cut_x: f64,
    pub tolerance: f64,
}

impl SplitSpec {
    pub fn new(cut_x: f64, tolerance: f64) -> Self {
        Self { cut_x, tolerance }
    }

    /// Split spec with the default extraction tolerance.
    pub fn extract(cut_x: f64) -> Self {
        Self::new(cut_x, EXTRACT_TOLERANCE)
    }

    /// Split spec with the default cleanup tolerance.
    pub fn cleanup(cut_x: f64) -> Self {
        Self::new(cut_x, CLEANUP_TOLERANCE)
    }
}

/// Which region of the outline an extraction keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// One-sided cleanup below a max-x line: whole-subpath filtering.
    /// The caller bounds are not consulted.
    Cleanup,
    /// Keep the region left of the cut line: per-command filtering over
    /// `[bounds.min_x, cut_x]`.
    Left,
    /// Keep the region right of the cut line: per-command filtering over
    /// `[cut_x, bounds.max_x]`.
    Right,
}

impl Policy {
    /// Suggested cut position for a glyph with the given bounds.
    ///
    /// Left radicals usually end around 40% of the width, right radicals
    /// start around 35%. Cleanup has no natural suggestion and reuses the
    /// left fraction.
    pub fn suggested_cut(self, bounds: BBox) -> f64 {
        let fraction = match self {
            Policy::Right => 0.35,
            Policy::Left | Policy::Cleanup => 0.4,
        };
        bounds.min.x + bounds.width() * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_round_trip() {
        let b = BBox::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.width(), 2.0);
        assert_eq!(b.height(), 2.0);
    }

    #[test]
    fn suggested_cut_fractions() {
        let b = BBox::new(100.0, 0.0, 1100.0, 1000.0);
        assert_eq!(Policy::Left.suggested_cut(b), 500.0);
        assert_eq!(Policy::Right.suggested_cut(b), 450.0);
    }
}
