//! Wordbank - personal vocabulary quiz
//!
//! Provides the SQLite word store, random-sample quizzes, progress statistics,
//! and the interactive menu that ties them together.

pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod progress;
pub mod quiz;
pub mod report;

pub use config::Config;
pub use db::{VocabularyStore, WordRecord};
pub use error::{Result, StoreError};
pub use menu::{Menu, MenuChoice};
pub use progress::TestStats;
pub use quiz::{Answer, Quiz, QuizState, QuizSummary, DEFAULT_QUIZ_SIZE};
pub use report::{render_test_results, word_table, write_word_table};
