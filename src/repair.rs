//! Structural repair of filtered command sequences.
//!
//! Filtering leaves two kinds of debris: close-path terminators whose
//! subpath body was dropped, and commands stranded before the first
//! move-to. Both passes here are linear and order-preserving.

use crate::ast::{CmdKind, PathCommand};

/// Repair a filtered sequence into a structurally valid path.
///
/// Returns an empty vector when no valid subpath remains; callers treat
/// that as "no component extractable", not as an error.
pub fn repair(filtered: Vec<PathCommand>) -> Vec<PathCommand> {
    let mut out = Vec::with_capacity(filtered.len());

    // Pass 1: drop orphaned terminators. A ClosePath survives only when the
    // run since the last MoveTo kept at least one coordinate-bearing
    // command; a kept ClosePath resets the run, so doubled terminators
    // collapse.
    let mut has_body = false;
    for cmd in filtered {
        match cmd.kind {
            CmdKind::MoveTo => {
                has_body = false;
                out.push(cmd);
            }
            CmdKind::ClosePath => {
                if has_body {
                    out.push(cmd);
                    has_body = false;
                }
            }
            _ => {
                has_body = true;
                out.push(cmd);
            }
        }
    }

    // Pass 2: a path must start at a MoveTo. Discard anything before the
    // first one; no MoveTo at all means no subpath survived.
    match out.iter().position(PathCommand::is_move) {
        Some(0) => out,
        Some(first) => out.split_off(first),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tokenize;

    fn repaired(path: &str) -> String {
        crate::emit::serialize(&repair(tokenize(path).unwrap()))
    }

    #[test]
    fn valid_path_passes_through() {
        assert_eq!(repaired("M0 0 L10 0 Z"), "M 0 0 L 10 0 Z");
    }

    #[test]
    fn lone_move_to_is_a_valid_if_trivial_subpath() {
        assert_eq!(repaired("M0 0"), "M 0 0");
    }

    #[test]
    fn close_after_bare_move_to_is_dropped() {
        assert_eq!(repaired("M0 0 Z M1 1 L2 2 Z"), "M 0 0 M 1 1 L 2 2 Z");
    }

    #[test]
    fn close_at_start_is_dropped() {
        assert_eq!(repaired("Z M0 0 L1 1"), "M 0 0 L 1 1");
    }

    #[test]
    fn doubled_close_collapses() {
        assert_eq!(repaired("M0 0 L1 1 Z Z"), "M 0 0 L 1 1 Z");
    }

    #[test]
    fn leading_commands_before_first_move_are_dropped() {
        assert_eq!(repaired("L5 5 Q1 2 3 4 M0 0 L1 1"), "M 0 0 L 1 1");
    }

    #[test]
    fn no_move_to_means_empty() {
        assert!(repair(tokenize("L5 5 L6 6 Z").unwrap()).is_empty());
        assert!(repair(Vec::new()).is_empty());
    }
}
