//! The interaction loop.
//!
//! An [`Interactor`] reads the hidden answer, then referees the contestant's
//! guesses one line at a time. Every feedback line is flushed before the next
//! read: the contestant blocks on our output, so anything left in a buffer
//! would deadlock both processes.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::JudgeConfig;
use crate::error::SessionError;
use crate::model::{Feedback, JudgeExit, Verdict};
use crate::number::Integer;
use crate::protocol::{self, GuessLine};

/// Referees one contestant against one answer.
///
/// Owns the contestant-output sink `W` and the diagnostic sink `D`. The input
/// streams are borrowed per call so the same reader can serve as both test
/// data and contestant input (see [`Interactor::judge_shared`]).
pub struct Interactor<W, D> {
    config: JudgeConfig,
    contestant_out: W,
    diagnostics: D,
    guesses: u32,
}

impl<W: Write, D: Write> Interactor<W, D> {
    pub fn new(config: JudgeConfig, contestant_out: W, diagnostics: D) -> Self {
        Self {
            config,
            contestant_out,
            diagnostics,
            guesses: 0,
        }
    }

    /// Valid guesses counted so far in the current session.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    /// Give back the sinks, e.g. to inspect in-memory buffers.
    pub fn into_parts(self) -> (W, D) {
        (self.contestant_out, self.diagnostics)
    }

    /// Read the answer from `test_data`, then play against `contestant_in`.
    pub fn judge<T, C>(
        &mut self,
        test_data: &mut T,
        contestant_in: &mut C,
    ) -> Result<Verdict, SessionError>
    where
        T: BufRead + ?Sized,
        C: BufRead + ?Sized,
    {
        match self.read_answer(test_data)? {
            Ok(answer) => self.play(answer, contestant_in),
            Err(verdict) => Ok(verdict),
        }
    }

    /// Like [`judge`](Self::judge), with the answer on the first line of
    /// `input` and the guesses following it.
    pub fn judge_shared<R>(&mut self, input: &mut R) -> Result<Verdict, SessionError>
    where
        R: BufRead + ?Sized,
    {
        match self.read_answer(input)? {
            Ok(answer) => self.play(answer, input),
            Err(verdict) => Ok(verdict),
        }
    }

    /// Run the guess loop against a known answer.
    pub fn play<C>(
        &mut self,
        answer: Integer,
        contestant_in: &mut C,
    ) -> Result<Verdict, SessionError>
    where
        C: BufRead + ?Sized,
    {
        self.guesses = 0;

        while self.guesses < self.config.max_guesses {
            let Some(line) =
                protocol::read_line(contestant_in).map_err(SessionError::ContestantRead)?
            else {
                return Ok(Verdict::PrematureEnd {
                    guesses: self.guesses,
                });
            };

            let guess = match protocol::classify_guess(&line) {
                GuessLine::Blank => {
                    debug!("skipping blank line");
                    continue;
                }
                GuessLine::Malformed(text) => return Ok(Verdict::MalformedGuess { text }),
                GuessLine::Guess(guess) => guess,
            };

            self.guesses += 1;
            let verdict = Verdict::compare(&guess, &answer, self.guesses);
            debug!(%guess, attempt = self.guesses, "judged guess: {verdict}");

            if let Some(feedback) = verdict.feedback() {
                self.send(feedback)?;
            }
            if verdict.is_terminal() {
                return Ok(verdict);
            }
        }

        Ok(Verdict::Exhausted {
            answer,
            max_guesses: self.config.max_guesses,
        })
    }

    /// Judge a session and report it: the diagnostic line goes to the
    /// diagnostic sink and the exit status is returned.
    pub fn run<T, C>(&mut self, test_data: &mut T, contestant_in: &mut C) -> JudgeExit
    where
        T: BufRead + ?Sized,
        C: BufRead + ?Sized,
    {
        let result = self.judge(test_data, contestant_in);
        self.conclude(result)
    }

    /// [`run`](Self::run) over a single shared input stream.
    pub fn run_shared<R>(&mut self, input: &mut R) -> JudgeExit
    where
        R: BufRead + ?Sized,
    {
        let result = self.judge_shared(input);
        self.conclude(result)
    }

    /// The parsed answer, or the verdict that ends the session before it starts.
    fn read_answer<T>(&self, test_data: &mut T) -> Result<Result<Integer, Verdict>, SessionError>
    where
        T: BufRead + ?Sized,
    {
        let line = protocol::read_line(test_data).map_err(SessionError::TestData)?;
        let Some(answer) = line.as_deref().and_then(protocol::parse_integer) else {
            return Ok(Err(Verdict::MalformedTestData {
                line: line.map(|l| l.trim().to_string()),
            }));
        };

        if !self.config.answer_in_range(&answer) {
            warn!(
                %answer,
                min = self.config.answer_min,
                max = self.config.answer_max,
                "answer is outside the expected range"
            );
        }
        Ok(Ok(answer))
    }

    fn send(&mut self, feedback: Feedback) -> Result<(), SessionError> {
        writeln!(self.contestant_out, "{feedback}")
            .and_then(|()| self.contestant_out.flush())
            .map_err(SessionError::ContestantWrite)
    }

    fn conclude(&mut self, result: Result<Verdict, SessionError>) -> JudgeExit {
        let (exit, message) = match result {
            Ok(verdict) => (verdict.exit(), verdict.to_string()),
            Err(e) => (e.exit(), format!("{:#}", anyhow::Error::new(e))),
        };

        info!(status = %exit, guesses = self.guesses, "session finished");

        if let Err(e) = writeln!(self.diagnostics, "{message}").and_then(|()| self.diagnostics.flush())
        {
            debug!("failed to write diagnostic: {e}");
        }
        exit
    }
}

/// Judge one session with the default configuration.
///
/// Reads the answer from `test_data`, guesses from `contestant_in`, writes
/// feedback to `contestant_out` and the closing diagnostic to
/// `diagnostic_out`.
pub fn run<T, C, W, D>(
    test_data: &mut T,
    contestant_in: &mut C,
    contestant_out: W,
    diagnostic_out: D,
) -> JudgeExit
where
    T: BufRead + ?Sized,
    C: BufRead + ?Sized,
    W: Write,
    D: Write,
{
    Interactor::new(JudgeConfig::default(), contestant_out, diagnostic_out)
        .run(test_data, contestant_in)
}
