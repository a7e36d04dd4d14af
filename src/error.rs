use std::io;

use thiserror::Error;

/// Errors raised while emitting the countdown transcript.
#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("failed to write {line:?} to output: {source}")]
    Write {
        line: String,
        #[source]
        source: io::Error,
    },
}

impl CountdownError {
    pub(crate) fn write(line: impl Into<String>, source: io::Error) -> Self {
        Self::Write {
            line: line.into(),
            source,
        }
    }

    /// The I/O error kind behind this failure.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Write { source, .. } => source.kind(),
        }
    }
}
