//! Database operations for wordbank vocabulary storage

use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::progress::TestStats;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL UNIQUE,
    correct INTEGER NOT NULL DEFAULT 0,
    incorrect INTEGER NOT NULL DEFAULT 0
)";

/// Word entry with its learning statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub id: i64,
    pub word: String,
    pub correct: i64,
    pub incorrect: i64,
}

pub(crate) fn row_to_record(row: &Row<'_>) -> rusqlite::Result<WordRecord> {
    Ok(WordRecord {
        id: row.get(0)?,
        word: row.get(1)?,
        correct: row.get(2)?,
        incorrect: row.get(3)?,
    })
}

/// Persistent word collection backed by a single SQLite connection.
///
/// The connection lives exactly as long as the store: it is opened by
/// [`VocabularyStore::open`] and released on [`VocabularyStore::close`] or drop.
pub struct VocabularyStore {
    conn: Connection,
}

impl VocabularyStore {
    /// Open (creating if absent) the database file and ensure the schema exists.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let path = db_path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened word store");
        Self::init(conn)
    }

    /// Private in-memory store, discarded on drop.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| StoreError::from(e))?;
        info!("closed word store");
        Ok(())
    }

    /// Add a new word with zeroed counters, returning its id.
    pub fn add_word(&self, word: &str) -> Result<i64> {
        let existing: Option<i64> = self
            .conn
            .query_row("SELECT id FROM words WHERE word = ?1", params![word], |row| row.get(0))
            .optional()?;
        if existing.is_some() {
            return Err(StoreError::DuplicateWord(word.to_string()));
        }

        match self.conn.execute("INSERT INTO words (word) VALUES (?1)", params![word]) {
            Ok(_) => {}
            Err(e) if StoreError::is_unique_violation(&e) => {
                return Err(StoreError::DuplicateWord(word.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        let id = self.conn.last_insert_rowid();
        debug!(id, word, "added word");
        Ok(id)
    }

    /// All `(id, word)` pairs in insertion order.
    pub fn list_words(&self) -> Result<Vec<(i64, String)>> {
        let mut stmt = self.conn.prepare("SELECT id, word FROM words ORDER BY id")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Full records, including counters, in insertion order.
    pub fn all_records(&self) -> Result<Vec<WordRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, word, correct, incorrect FROM words ORDER BY id")?;
        let rows = stmt.query_map([], row_to_record)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Get single word by ID
    pub fn get_word(&self, id: i64) -> Result<WordRecord> {
        self.conn
            .query_row(
                "SELECT id, word, correct, incorrect FROM words WHERE id = ?1",
                params![id],
                row_to_record,
            )
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    pub fn word_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete a word by ID. Missing ids are not an error; returns rows removed.
    pub fn delete_word(&self, id: i64) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM words WHERE id = ?1", params![id])?;
        debug!(id, deleted, "delete word");
        Ok(deleted)
    }

    /// Replace the text of a word by ID; returns rows changed.
    ///
    /// Uniqueness of `new_word` is not checked up front. A collision with
    /// another record fails on the UNIQUE constraint as a storage error.
    pub fn edit_word(&self, id: i64, new_word: &str) -> Result<usize> {
        let updated = self.conn.execute(
            "UPDATE words SET word = ?1 WHERE id = ?2",
            params![new_word, id],
        )?;
        debug!(id, new_word, updated, "edit word");
        Ok(updated)
    }

    /// Up to `count` distinct words, uniformly sampled without replacement.
    pub fn sample_random_words(&self, count: usize) -> Result<Vec<String>> {
        self.sample_random_words_with(&mut rand::thread_rng(), count)
    }

    pub fn sample_random_words_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT word FROM words")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut words = rows.collect::<rusqlite::Result<Vec<_>>>()?;

        words.shuffle(rng);
        words.truncate(count);
        debug!(requested = count, sampled = words.len(), "sampled words");
        Ok(words)
    }

    /// Bump `correct` or `incorrect` for the word; unknown words are ignored.
    pub fn record_result(&self, word: &str, knew_it: bool) -> Result<usize> {
        let sql = if knew_it {
            "UPDATE words SET correct = correct + 1 WHERE word = ?1"
        } else {
            "UPDATE words SET incorrect = incorrect + 1 WHERE word = ?1"
        };
        let updated = self.conn.execute(sql, params![word])?;
        debug!(word, knew_it, updated, "recorded result");
        Ok(updated)
    }

    /// Summed counters across every record
    pub fn aggregate_stats(&self) -> Result<TestStats> {
        let stats = self.conn.query_row(
            "SELECT SUM(correct), SUM(incorrect) FROM words",
            [],
            |row| {
                Ok(TestStats {
                    correct: row.get::<_, Option<i64>>(0)?.unwrap_or(0),
                    incorrect: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                })
            },
        )?;
        Ok(stats)
    }
}
