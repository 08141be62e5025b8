//! Font loading and parsing errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or querying fonts.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("cannot read font file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("font parse error: {0}")]
    Parse(String),
}
