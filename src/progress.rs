//! Progress tracking - aggregate quiz statistics

use rusqlite::params;

use crate::db::{row_to_record, VocabularyStore, WordRecord};
use crate::error::Result;

/// Summed quiz outcomes across the whole store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestStats {
    pub correct: i64,
    pub incorrect: i64,
}

impl TestStats {
    pub fn total(&self) -> i64 {
        self.correct + self.incorrect
    }

    pub fn accuracy_percent(&self) -> f64 {
        let total = self.total();
        if total > 0 {
            (self.correct as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl VocabularyStore {
    /// Words answered "no" at least once, most missed first.
    pub fn weakest_words(&self, limit: usize) -> Result<Vec<WordRecord>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, word, correct, incorrect FROM words
             WHERE incorrect > 0
             ORDER BY incorrect DESC, correct ASC, id ASC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], row_to_record)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
