//! Tokenize SVG path data into command sequences.
//!
//! The reader is permissive where the data merely degrades (unknown letters
//! and their numbers are skipped, stray numbers are dropped) and strict where
//! silence would corrupt geometry: a relative-form command aborts the call,
//! because treating its coordinates as absolute produces garbage outlines.

use crate::ast::{CmdKind, PathCommand};
use crate::errors::PathError;
use crate::log::debug;
use crate::{PathParser, Rule};
use pest::Parser;
use pest::iterators::Pair;

/// Lowercase letters of the supported set denote relative commands.
const RELATIVE_LETTERS: &str = "mlqczhv";

/// Tokenize a raw path-data string.
///
/// Output preserves command order and performs no filtering; commands with
/// the wrong argument count are emitted as-is and dropped later by the
/// filter stage.
pub fn tokenize(raw: &str) -> Result<Vec<PathCommand>, PathError> {
    let pairs =
        PathParser::parse(Rule::path, raw).map_err(|e| PathError::malformed(raw, &e))?;

    let mut commands = Vec::new();
    for pair in pairs {
        if pair.as_rule() != Rule::path {
            continue;
        }
        for node in pair.into_inner() {
            match node.as_rule() {
                Rule::command => {
                    if let Some(cmd) = read_command(raw, node)? {
                        commands.push(cmd);
                    }
                }
                // numbers before the first command letter carry nothing
                Rule::number => debug!("discarding leading number {:?}", node.as_str()),
                _ => {}
            }
        }
    }
    Ok(commands)
}

fn read_command(raw: &str, pair: Pair<Rule>) -> Result<Option<PathCommand>, PathError> {
    let offset = pair.as_span().start();
    let mut inner = pair.into_inner();
    let Some(letter_pair) = inner.next() else {
        return Ok(None);
    };
    let Some(letter) = letter_pair.as_str().chars().next() else {
        return Ok(None);
    };

    let Some(kind) = CmdKind::from_letter(letter) else {
        if RELATIVE_LETTERS.contains(letter) {
            return Err(PathError::relative(raw, letter, offset));
        }
        // Unknown letter: skip the run whole, numbers included.
        debug!("skipping unknown command letter {:?}", letter);
        return Ok(None);
    };

    let mut args = Vec::with_capacity(kind.arity());
    for num in inner {
        if num.as_rule() != Rule::number {
            continue;
        }
        match num.as_str().parse::<f64>() {
            Ok(v) => args.push(v),
            // skip the one token, keep the command
            Err(_) => debug!("skipping unparseable number {:?}", num.as_str()),
        }
    }

    if kind == CmdKind::ClosePath && !args.is_empty() {
        debug!("discarding {} stray arguments after Z", args.len());
        args.clear();
    }

    Ok(Some(PathCommand::new(kind, args)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(cmds: &[PathCommand]) -> Vec<CmdKind> {
        cmds.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn tokenize_simple_path() {
        let cmds = tokenize("M0 0 L100 0 L100 100 Z").unwrap();
        assert_eq!(
            kinds(&cmds),
            [
                CmdKind::MoveTo,
                CmdKind::LineTo,
                CmdKind::LineTo,
                CmdKind::ClosePath
            ]
        );
        assert_eq!(cmds[1].args, [100.0, 0.0]);
        assert_eq!(cmds[3].args, Vec::<f64>::new());
    }

    #[test]
    fn commas_and_whitespace_separate_numbers() {
        let cmds = tokenize("M 10,20\nL30,-40").unwrap();
        assert_eq!(cmds[0].args, [10.0, 20.0]);
        assert_eq!(cmds[1].args, [30.0, -40.0]);
    }

    #[test]
    fn glued_signs_split_numbers() {
        let cmds = tokenize("L-5-6").unwrap();
        assert_eq!(cmds[0].args, [-5.0, -6.0]);
    }

    #[test]
    fn curve_commands_keep_all_control_points() {
        let cmds = tokenize("M0 0 Q10 20 30 40 C1 2 3 4 5 6").unwrap();
        assert_eq!(cmds[1].args, [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(cmds[2].args, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn relative_command_is_rejected() {
        let err = tokenize("M0 0 l10 10").unwrap_err();
        match err {
            PathError::UnsupportedRelativeCommand { letter, .. } => assert_eq!(letter, 'l'),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_letters_are_skipped_with_their_numbers() {
        let cmds = tokenize("M0 0 A 1 2 3 L5 6").unwrap();
        assert_eq!(kinds(&cmds), [CmdKind::MoveTo, CmdKind::LineTo]);
        assert_eq!(cmds[1].args, [5.0, 6.0]);
    }

    #[test]
    fn leading_numbers_are_discarded() {
        let cmds = tokenize("42 7 M0 0").unwrap();
        assert_eq!(kinds(&cmds), [CmdKind::MoveTo]);
    }

    #[test]
    fn exponent_degrades_to_skipped_run() {
        // "1e5" is not a recognized number: M keeps the 1, the e-run is skipped
        let cmds = tokenize("M1e5 2 L3 4").unwrap();
        assert_eq!(kinds(&cmds), [CmdKind::MoveTo, CmdKind::LineTo]);
        assert_eq!(cmds[0].args, [1.0]);
        assert!(!cmds[0].well_formed());
    }

    #[test]
    fn close_path_sheds_stray_numbers() {
        let cmds = tokenize("M0 0 L1 1 Z 9 9").unwrap();
        let z = cmds.last().unwrap();
        assert!(z.is_close());
        assert!(z.args.is_empty());
    }

    #[test]
    fn empty_and_junk_inputs_yield_no_commands() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("  , , ").unwrap().is_empty());
        assert!(tokenize("#_*").unwrap().is_empty());
    }
}
