//! Session I/O error types.
//!
//! Malformed input is a [`Verdict`](crate::model::Verdict), not an error.
//! These errors cover the streams themselves failing, and each one is
//! attributed to whichever side owns the broken stream.

use std::io;

use thiserror::Error;

use crate::model::JudgeExit;

/// An I/O failure on one of the session's streams.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The test data could not be read.
    #[error("failed to read test data")]
    TestData(#[source] io::Error),

    /// Reading the contestant's next line failed.
    #[error("failed to read from contestant")]
    ContestantRead(#[source] io::Error),

    /// Sending feedback failed, usually because the contestant closed its end.
    #[error("failed to send feedback to contestant")]
    ContestantWrite(#[source] io::Error),
}

impl SessionError {
    /// The exit status this failure maps to.
    pub fn exit(&self) -> JudgeExit {
        match self {
            SessionError::TestData(_) => JudgeExit::JudgeError,
            SessionError::ContestantRead(_) | SessionError::ContestantWrite(_) => {
                JudgeExit::WrongAnswer
            }
        }
    }
}
