//! Error types with rich diagnostics using miette
//!
//! These errors carry source spans into the offending path data.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised while reading path data.
#[derive(Error, Diagnostic, Debug)]
pub enum PathError {
    #[error("relative path command '{letter}'")]
    #[diagnostic(
        code(glyphcut::path::relative_command),
        help("convert the path to absolute commands before splitting")
    )]
    UnsupportedRelativeCommand {
        letter: char,
        #[source_code]
        src: NamedSource<String>,
        #[label("relative form here")]
        span: SourceSpan,
    },

    #[error("unreadable path data")]
    #[diagnostic(code(glyphcut::path::malformed))]
    Malformed {
        #[source_code]
        src: NamedSource<String>,
        #[label("cannot tokenize from here")]
        span: SourceSpan,
    },
}

impl PathError {
    /// Relative-command rejection at the given byte range of `raw`.
    pub(crate) fn relative(raw: &str, letter: char, offset: usize) -> Self {
        PathError::UnsupportedRelativeCommand {
            letter,
            src: NamedSource::new("<path>", raw.to_string()),
            span: (offset, letter.len_utf8()).into(),
        }
    }

    /// Grammar-level failure reported by pest.
    pub(crate) fn malformed(raw: &str, err: &pest::error::Error<crate::Rule>) -> Self {
        let offset = match err.location {
            pest::error::InputLocation::Pos(p) => p,
            pest::error::InputLocation::Span((start, _)) => start,
        };
        PathError::Malformed {
            src: NamedSource::new("<path>", raw.to_string()),
            span: (offset.min(raw.len()), 0).into(),
        }
    }
}
