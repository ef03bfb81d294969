//! guessjudge-core — Interaction loop, protocol, and verdicts.
//!
//! This crate holds everything the guess-the-number interactor does except
//! binding itself to the process's standard streams: the data model, the
//! line protocol, configuration, and the session loop that referees one
//! contestant against one hidden answer.

pub mod config;
pub mod error;
pub mod model;
pub mod number;
pub mod protocol;
pub mod session;

pub use config::JudgeConfig;
pub use error::SessionError;
pub use model::{Feedback, JudgeExit, Verdict};
pub use number::Integer;
pub use session::{run, Interactor};
