//! Environment-driven configuration

use std::env;
use std::path::PathBuf;

use crate::quiz::DEFAULT_QUIZ_SIZE;
use crate::report::DEFAULT_LISTING_FILE;

pub const DEFAULT_DB_FILE: &str = "words.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file, created on first run
    pub db_path: PathBuf,
    /// Where "Display Words" writes its table
    pub listing_path: PathBuf,
    /// Words sampled per quiz
    pub quiz_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            listing_path: PathBuf::from(DEFAULT_LISTING_FILE),
            quiz_size: DEFAULT_QUIZ_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let db_path = lookup("WORDBANK_DB")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let listing_path = lookup("WORDBANK_LISTING")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.listing_path);

        let quiz_size = lookup("WORDBANK_QUIZ_SIZE")
            .and_then(|v| v.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.quiz_size);

        Config {
            db_path,
            listing_path,
            quiz_size,
        }
    }
}
