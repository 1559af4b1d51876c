use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A template, properties file, or output destination could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A non-blank, non-comment properties line has no `=`.
    #[error("invalid property line {line}: {text}")]
    Parse { line: usize, text: String },
    /// Operator input ended before a required value was supplied.
    #[error("input aborted")]
    Aborted,
    /// A placeholder has no resolved value at render time.
    #[error("missing property: {0}")]
    MissingKey(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
