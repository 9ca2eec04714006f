//! Error type shared by the distance routines and the fixture harness.

use std::io;

use thiserror::Error;

/// Everything that can go wrong while computing a distance or running fixtures.
#[derive(Error, Debug)]
pub enum Error {
    /// One of the input sequences was absent.
    #[error("invalid input: both sequences must be present")]
    InvalidInput,

    /// The `rows x cols` distance table could not be allocated.
    #[error("cannot allocate a {rows}x{cols} distance table")]
    Allocation { rows: usize, cols: usize },

    /// A fixture line could not be turned into a test case.
    #[error("fixture line {line}: {reason}")]
    Fixture { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn fixture<S: Into<String>>(line: usize, reason: S) -> Self {
        Error::Fixture {
            line,
            reason: reason.into(),
        }
    }

    /// True for the errors the legacy interface collapses into `-1`.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Error::InvalidInput | Error::Allocation { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
