//! Core data model types for guessjudge.
//!
//! These types describe what the judge tells the contestant after each
//! guess, how a session ends, and which exit status that ending maps to.

use std::fmt;
use std::process::ExitCode;

use crate::number::Integer;

/// A feedback token written to the contestant, one per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The guess was larger than the answer.
    High,
    /// The guess was smaller than the answer.
    Low,
    /// The guess was the answer.
    Ok,
}

impl Feedback {
    /// The literal protocol token.
    pub fn token(self) -> &'static str {
        match self {
            Feedback::High => "HIGH",
            Feedback::Low => "LOW",
            Feedback::Ok => "OK",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The result of judging a single guess, or of a whole session.
///
/// `TooHigh` and `TooLow` keep the session going; every other variant ends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The contestant found the answer.
    Correct { answer: Integer, guesses: u32 },
    /// The guess was above the answer.
    TooHigh,
    /// The guess was below the answer.
    TooLow,
    /// The attempt budget ran out without a correct guess.
    Exhausted { answer: Integer, max_guesses: u32 },
    /// The answer line was missing (`None`) or could not be parsed.
    MalformedTestData { line: Option<String> },
    /// A non-blank guess line was not an integer.
    MalformedGuess { text: String },
    /// The contestant closed its output before guessing correctly.
    PrematureEnd { guesses: u32 },
}

impl Verdict {
    /// Compare a guess against the answer.
    ///
    /// `guesses` is the attempt count including this guess; it is only
    /// recorded when the guess is correct.
    pub fn compare(guess: &Integer, answer: &Integer, guesses: u32) -> Self {
        match guess.cmp(answer) {
            std::cmp::Ordering::Equal => Verdict::Correct {
                answer: answer.clone(),
                guesses,
            },
            std::cmp::Ordering::Greater => Verdict::TooHigh,
            std::cmp::Ordering::Less => Verdict::TooLow,
        }
    }

    /// The feedback token the contestant receives for this verdict, if any.
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            Verdict::Correct { .. } => Some(Feedback::Ok),
            Verdict::TooHigh => Some(Feedback::High),
            Verdict::TooLow => Some(Feedback::Low),
            _ => None,
        }
    }

    /// Returns `true` if this verdict ends the session.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::TooHigh | Verdict::TooLow)
    }

    /// The process exit status for this verdict.
    ///
    /// Non-terminal verdicts have no exit of their own; they report
    /// `WrongAnswer` since a session cannot legitimately stop on one.
    pub fn exit(&self) -> JudgeExit {
        match self {
            Verdict::Correct { .. } => JudgeExit::Accepted,
            Verdict::MalformedTestData { .. } => JudgeExit::JudgeError,
            _ => JudgeExit::WrongAnswer,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct { answer, guesses } => {
                write!(f, "Correct! Answer was {answer}, found in {guesses} guesses")
            }
            Verdict::TooHigh => write!(f, "guess too high"),
            Verdict::TooLow => write!(f, "guess too low"),
            Verdict::Exhausted {
                answer,
                max_guesses,
            } => write!(f, "Too many guesses ({max_guesses}). Answer was {answer}"),
            Verdict::MalformedTestData { line: Some(line) } => {
                write!(f, "Invalid test data: '{line}'")
            }
            Verdict::MalformedTestData { line: None } => {
                write!(f, "Invalid test data: missing answer line")
            }
            Verdict::MalformedGuess { text } => write!(f, "Invalid guess format: '{text}'"),
            Verdict::PrematureEnd { .. } => write!(f, "Unexpected EOF from contestant program"),
        }
    }
}

/// How the judge process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JudgeExit {
    /// The contestant guessed correctly within budget.
    Accepted,
    /// The contestant failed: malformed guess, early end of input, or budget exhausted.
    WrongAnswer,
    /// The test data or the judge itself is broken.
    JudgeError,
}

impl JudgeExit {
    /// Numeric process exit code.
    pub fn code(self) -> u8 {
        match self {
            JudgeExit::Accepted => 0,
            JudgeExit::WrongAnswer => 1,
            JudgeExit::JudgeError => 3,
        }
    }

    /// Submission status label the grading harness assigns to this exit.
    pub fn label(self) -> &'static str {
        match self {
            JudgeExit::Accepted => "AC",
            JudgeExit::WrongAnswer => "WA",
            JudgeExit::JudgeError => "JUDGE_ERROR",
        }
    }
}

impl fmt::Display for JudgeExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<JudgeExit> for ExitCode {
    fn from(exit: JudgeExit) -> Self {
        ExitCode::from(exit.code())
    }
}
