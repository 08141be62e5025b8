//! Path command types
//!
//! These types represent the tokenized structure of an SVG path-data string.

/// The supported absolute path commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdKind {
    /// M x y - start a new subpath
    MoveTo,
    /// L x y
    LineTo,
    /// Q x1 y1 x y - quadratic Bezier (TrueType-style)
    QuadTo,
    /// C x1 y1 x2 y2 x y - cubic Bezier (CFF-style)
    CubicTo,
    /// H x
    HorizontalTo,
    /// V y
    VerticalTo,
    /// Z - close the current subpath
    ClosePath,
}

impl CmdKind {
    /// Map an uppercase command letter to its kind.
    pub fn from_letter(letter: char) -> Option<CmdKind> {
        match letter {
            'M' => Some(CmdKind::MoveTo),
            'L' => Some(CmdKind::LineTo),
            'Q' => Some(CmdKind::QuadTo),
            'C' => Some(CmdKind::CubicTo),
            'H' => Some(CmdKind::HorizontalTo),
            'V' => Some(CmdKind::VerticalTo),
            'Z' => Some(CmdKind::ClosePath),
            _ => None,
        }
    }

    /// The command letter used when serializing.
    pub fn letter(self) -> char {
        match self {
            CmdKind::MoveTo => 'M',
            CmdKind::LineTo => 'L',
            CmdKind::QuadTo => 'Q',
            CmdKind::CubicTo => 'C',
            CmdKind::HorizontalTo => 'H',
            CmdKind::VerticalTo => 'V',
            CmdKind::ClosePath => 'Z',
        }
    }

    /// Fixed argument count for this kind.
    pub const fn arity(self) -> usize {
        match self {
            CmdKind::MoveTo | CmdKind::LineTo => 2,
            CmdKind::QuadTo => 4,
            CmdKind::CubicTo => 6,
            CmdKind::HorizontalTo | CmdKind::VerticalTo => 1,
            CmdKind::ClosePath => 0,
        }
    }
}

/// Semantic role of a numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A single absolute path command with its numeric arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub kind: CmdKind,
    pub args: Vec<f64>,
}

impl PathCommand {
    pub fn new(kind: CmdKind, args: Vec<f64>) -> Self {
        Self { kind, args }
    }

    /// Whether the argument count matches the kind's fixed arity.
    /// Malformed commands are dropped whole rather than partially kept.
    pub fn well_formed(&self) -> bool {
        self.args.len() == self.kind.arity()
    }

    pub fn is_move(&self) -> bool {
        self.kind == CmdKind::MoveTo
    }

    pub fn is_close(&self) -> bool {
        self.kind == CmdKind::ClosePath
    }

    /// The axis carried by the argument at `index`.
    ///
    /// The pair-valued kinds alternate x,y; H carries a lone x and V a
    /// lone y. Tagging arguments at the source keeps H and V from
    /// misaligning positional x/y pairing downstream.
    fn axis_at(&self, index: usize) -> Axis {
        match self.kind {
            CmdKind::HorizontalTo => Axis::X,
            CmdKind::VerticalTo => Axis::Y,
            _ => {
                if index % 2 == 0 {
                    Axis::X
                } else {
                    Axis::Y
                }
            }
        }
    }

    /// Iterate the arguments tagged with their axis.
    pub fn coords(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        self.args
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.axis_at(i), v))
    }

    /// Iterate the x-axis arguments only.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords()
            .filter(|(axis, _)| *axis == Axis::X)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_per_kind() {
        assert_eq!(CmdKind::MoveTo.arity(), 2);
        assert_eq!(CmdKind::QuadTo.arity(), 4);
        assert_eq!(CmdKind::CubicTo.arity(), 6);
        assert_eq!(CmdKind::HorizontalTo.arity(), 1);
        assert_eq!(CmdKind::VerticalTo.arity(), 1);
        assert_eq!(CmdKind::ClosePath.arity(), 0);
    }

    #[test]
    fn letter_round_trip() {
        for letter in ['M', 'L', 'Q', 'C', 'H', 'V', 'Z'] {
            let kind = CmdKind::from_letter(letter).unwrap();
            assert_eq!(kind.letter(), letter);
        }
        assert_eq!(CmdKind::from_letter('A'), None);
        assert_eq!(CmdKind::from_letter('m'), None);
    }

    #[test]
    fn pair_kinds_alternate_axes() {
        let cmd = PathCommand::new(CmdKind::CubicTo, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let axes: Vec<Axis> = cmd.coords().map(|(a, _)| a).collect();
        assert_eq!(axes, [Axis::X, Axis::Y, Axis::X, Axis::Y, Axis::X, Axis::Y]);
        assert_eq!(cmd.xs().collect::<Vec<_>>(), [1.0, 3.0, 5.0]);
    }

    #[test]
    fn vertical_carries_only_y() {
        let v = PathCommand::new(CmdKind::VerticalTo, vec![7.0]);
        assert_eq!(v.xs().count(), 0);
        assert_eq!(v.coords().next(), Some((Axis::Y, 7.0)));

        let h = PathCommand::new(CmdKind::HorizontalTo, vec![7.0]);
        assert_eq!(h.xs().collect::<Vec<_>>(), [7.0]);
    }
}
