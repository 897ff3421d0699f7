use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::common::ERROR_PREAMBLE;

pub type CorgyResult<T> = std::result::Result<T, CorgyError>;

#[derive(Debug, Error)]
pub enum CorgyError {
    #[error("Could not read file '{shown}': {source}", shown = .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A single diagnostic raised while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[Line {line}] Error{location}: {message}")]
pub struct LexError {
    pub line: usize,
    pub location: String,
    pub message: String,
}

/// Every diagnostic goes through here so the error flag cannot be bypassed.
pub struct Reporter<W: Write> {
    out: W,
    had_error: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            had_error: false,
        }
    }

    pub fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    pub fn report(&mut self, line: usize, location: &str, message: &str) {
        let error = LexError {
            line,
            location: location.to_owned(),
            message: message.to_owned(),
        };
        tracing::debug!(line, location, message, "lexical error");
        // a broken diagnostic stream must not stop the scan
        if let Err(err) = writeln!(self.out, "{ERROR_PREAMBLE} {error}") {
            tracing::warn!(%err, "failed to write diagnostic");
        }
        self.had_error = true;
    }

    #[cfg(test)]
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Returns whether anything was reported since the last call, and clears the flag.
    pub fn take_error(&mut self) -> bool {
        std::mem::take(&mut self.had_error)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
