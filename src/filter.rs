//! Spatial filtering of command sequences against a cut window.
//!
//! Both policies walk the sequence with a two-state machine tracking whether
//! the subpath currently being read is retained:
//!
//! - **Carry**: `Included` or `Excluded`. Transitions happen only on MoveTo,
//!   where the window test on the anchor decides the state for the subpath
//!   that follows (the whole-subpath policy additionally demotes the state
//!   when a body command misses the window).
//!
//! - **WholeSubpath** is the cleanup policy: an out-of-window MoveTo takes
//!   its entire subpath with it, and a miss later in the subpath drops the
//!   remainder too. Used when everything past a max-x line is noise from the
//!   far side of the cut.
//!
//! - **PerCommand** is the left/right extraction policy: MoveTo anchors are
//!   always retained so subsequent geometry stays addressable, and every
//!   other command is judged on its own coordinates. Strokes that straddle
//!   the cut line keep their in-window parts.
//!
//! ClosePath carries no coordinates; its fate always follows the carry
//! state, never a window test.

use enum_dispatch::enum_dispatch;

use crate::ast::{CmdKind, PathCommand};
use crate::log::debug;

/// Inclusive x-interval with the tolerance folded into each edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    lo: f64,
    hi: f64,
}

impl Window {
    /// One-sided window: everything at or below `max_x`, plus tolerance.
    pub fn below(max_x: f64, tolerance: f64) -> Self {
        Self {
            lo: f64::NEG_INFINITY,
            hi: max_x + tolerance,
        }
    }

    /// Two-sided window over `[lo, hi]`, widened by the tolerance at both
    /// edges.
    pub fn span(lo: f64, hi: f64, tolerance: f64) -> Self {
        Self {
            lo: lo - tolerance,
            hi: hi + tolerance,
        }
    }

    pub fn admits(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
}

/// True iff any x-axis argument of `cmd` lands in the window.
///
/// Commands carrying no x arguments (V) are vacuously in range: an x test
/// has nothing to say about them.
fn in_window(cmd: &PathCommand, window: Window) -> bool {
    let mut xs = cmd.xs().peekable();
    xs.peek().is_none() || xs.any(|x| window.admits(x))
}

/// Retention state of the subpath currently being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carry {
    Excluded,
    Included,
}

impl Carry {
    fn of(included: bool) -> Self {
        if included {
            Carry::Included
        } else {
            Carry::Excluded
        }
    }

    fn included(self) -> bool {
        self == Carry::Included
    }
}

/// A split policy decides one command at a time: whether it survives, and
/// the carry state for the commands after it.
#[enum_dispatch]
pub trait SplitPolicy {
    fn step(&self, carry: Carry, cmd: &PathCommand, window: Window) -> (bool, Carry);
}

/// Whole-subpath cleanup policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeSubpath;

impl SplitPolicy for WholeSubpath {
    fn step(&self, carry: Carry, cmd: &PathCommand, window: Window) -> (bool, Carry) {
        match cmd.kind {
            CmdKind::MoveTo => {
                let hit = in_window(cmd, window);
                (hit, Carry::of(hit))
            }
            CmdKind::ClosePath => (carry.included(), carry),
            _ => {
                if !carry.included() {
                    // subpath already vetoed; the window is not consulted
                    return (false, carry);
                }
                let hit = in_window(cmd, window);
                // a miss drops the remainder of the subpath with it
                (hit, Carry::of(hit))
            }
        }
    }
}

/// Per-command extraction policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerCommand;

impl SplitPolicy for PerCommand {
    fn step(&self, carry: Carry, cmd: &PathCommand, window: Window) -> (bool, Carry) {
        match cmd.kind {
            // the anchor is kept unconditionally; its window test only
            // decides the carry for the subpath it opens
            CmdKind::MoveTo => (true, Carry::of(in_window(cmd, window))),
            CmdKind::ClosePath => (carry.included(), carry),
            _ => (in_window(cmd, window), carry),
        }
    }
}

#[enum_dispatch(SplitPolicy)]
pub enum SplitFilter {
    WholeSubpath,
    PerCommand,
}

/// Fold a policy over a command sequence.
///
/// Commands whose argument count does not match their kind's arity are
/// dropped as they enter the fold; the policies only ever see well-formed
/// commands.
pub fn filter_commands(
    seq: &[PathCommand],
    policy: &SplitFilter,
    window: Window,
) -> Vec<PathCommand> {
    let (kept, _) = seq.iter().fold(
        (Vec::with_capacity(seq.len()), Carry::Excluded),
        |(mut kept, carry), cmd| {
            if !cmd.well_formed() {
                debug!(
                    "dropping {:?} carrying {} of {} arguments",
                    cmd.kind,
                    cmd.args.len(),
                    cmd.kind.arity()
                );
                return (kept, carry);
            }
            let (keep, next) = policy.step(carry, cmd, window);
            if keep {
                kept.push(cmd.clone());
            }
            (kept, next)
        },
    );
    kept
}
