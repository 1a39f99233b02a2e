//! Quiz session: present sampled words one at a time and record recall

use std::io::{BufRead, Write};

use tracing::debug;

use crate::db::VocabularyStore;
use crate::error::Result;

/// Number of words sampled for a quiz unless configured otherwise
pub const DEFAULT_QUIZ_SIZE: usize = 10;

/// A yes/no recall answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Only "yes" (any case) counts as knowing the word; every other reply,
    /// blank included, is a "no". The line ending is not part of the answer.
    pub fn parse(input: &str) -> Self {
        let reply = input.trim_end_matches(['\r', '\n']);
        if reply.to_lowercase() == "yes" {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    pub fn knew_it(self) -> bool {
        self == Answer::Yes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Idle,
    Presenting(usize),
    AwaitingAnswer(usize),
    Recording(usize, Answer),
    Done,
}

/// Outcome counts for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizSummary {
    pub asked: usize,
    pub known: usize,
    pub unknown: usize,
}

pub struct Quiz {
    words: Vec<String>,
    state: QuizState,
    summary: QuizSummary,
}

impl Quiz {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            state: QuizState::Idle,
            summary: QuizSummary::default(),
        }
    }

    /// Sample up to `size` random words from the store.
    pub fn sample(store: &VocabularyStore, size: usize) -> Result<Self> {
        Ok(Self::new(store.sample_random_words(size)?))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn summary(&self) -> QuizSummary {
        self.summary
    }

    /// Drive the session to `Done`.
    ///
    /// Each answer is written to the store before the next word is shown.
    /// End of input while waiting for an answer finishes the session early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        store: &VocabularyStore,
        input: &mut R,
        output: &mut W,
    ) -> Result<QuizSummary> {
        loop {
            self.state = match self.state {
                QuizState::Idle if self.words.is_empty() => QuizState::Done,
                QuizState::Idle => QuizState::Presenting(0),
                QuizState::Presenting(i) => {
                    write!(
                        output,
                        "{}. Do you know the meaning of \"{}\"? (yes/no): ",
                        i + 1,
                        self.words[i]
                    )?;
                    output.flush()?;
                    QuizState::AwaitingAnswer(i)
                }
                QuizState::AwaitingAnswer(i) => {
                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        writeln!(output)?;
                        debug!(answered = i, "quiz input ended early");
                        QuizState::Done
                    } else {
                        QuizState::Recording(i, Answer::parse(&line))
                    }
                }
                QuizState::Recording(i, answer) => {
                    store.record_result(&self.words[i], answer.knew_it())?;
                    self.summary.asked += 1;
                    if answer.knew_it() {
                        self.summary.known += 1;
                    } else {
                        self.summary.unknown += 1;
                    }
                    if i + 1 < self.words.len() {
                        QuizState::Presenting(i + 1)
                    } else {
                        QuizState::Done
                    }
                }
                QuizState::Done => return Ok(self.summary),
            };
        }
    }
}
