//! Interactive numbered menu driving the vocabulary store

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::VocabularyStore;
use crate::error::{Result, StoreError};
use crate::quiz::Quiz;
use crate::report::{render_test_results, write_word_table, CHART_WIDTH};

const MENU_PROMPT: &str = "Please enter 1, 2, 3, 4, 5, 6, or 7: ";
const WEAKEST_SHOWN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddWord,
    DisplayWords,
    DeleteWord,
    EditWord,
    TakeTest,
    DisplayResults,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddWord),
            "2" => Some(MenuChoice::DisplayWords),
            "3" => Some(MenuChoice::DeleteWord),
            "4" => Some(MenuChoice::EditWord),
            "5" => Some(MenuChoice::TakeTest),
            "6" => Some(MenuChoice::DisplayResults),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop over arbitrary input and output streams.
///
/// Store failures are printed and the loop carries on; only errors on the
/// streams themselves end [`Menu::run`] early.
pub struct Menu<'a, R, W> {
    store: &'a VocabularyStore,
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a VocabularyStore, config: &'a Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    /// Run until "Exit" is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt(&MENU_PROMPT.yellow().to_string())? else {
                writeln!(self.output)?;
                info!("input closed, leaving menu");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddWord) => self.add_words()?,
                Some(MenuChoice::DisplayWords) => self.display_words()?,
                Some(MenuChoice::DeleteWord) => self.delete_word()?,
                Some(MenuChoice::EditWord) => self.edit_word()?,
                Some(MenuChoice::TakeTest) => self.take_test()?,
                Some(MenuChoice::DisplayResults) => self.display_results()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "{}", "Exiting the program.".yellow())?;
                    return Ok(());
                }
                None => writeln!(
                    self.output,
                    "{}",
                    "Invalid input. Please enter 1, 2, 3, 4, 5, 6, or 7.".red()
                )?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        let menu = [
            "1. Add Word",
            "2. Display Words",
            "3. Delete Word",
            "4. Edit Word",
            "5. Take Test",
            "6. Display Test Results",
            "7. Exit",
        ];
        for item in menu {
            writeln!(self.output, "{}", item.cyan())?;
        }
        Ok(())
    }

    /// Show `text` and read one line; `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_id(&mut self, text: &str) -> Result<Option<i64>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                let msg = format!("Invalid ID \"{}\". Please enter a number.", line.trim());
                writeln!(self.output, "{}", msg.red())?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, err: &StoreError) -> Result<()> {
        warn!(error = %err, "operation failed");
        match err {
            StoreError::DuplicateWord(_) => writeln!(self.output, "{}", err.to_string().yellow())?,
            _ => writeln!(self.output, "{}", format!("Error: {err}").red())?,
        }
        Ok(())
    }

    fn add_words(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt(
                "Please enter the word you want to add (or type \"done\" to exit): ",
            )?
            else {
                return Ok(());
            };
            if line.trim().eq_ignore_ascii_case("done") {
                return Ok(());
            }

            let word = line.as_str();
            match self.store.add_word(word) {
                Ok(_) => {
                    let msg = format!("The word \"{word}\" has been added to the database.");
                    writeln!(self.output, "{}", msg.green())?;
                }
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn display_words(&mut self) -> Result<()> {
        let config = self.config;
        let path = &config.listing_path;
        let outcome = self
            .store
            .list_words()
            .and_then(|rows| write_word_table(path, &rows));
        match outcome {
            Ok(()) => {
                let msg = format!("Create File ({})", path.display());
                writeln!(self.output, "{}", msg.green())?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn delete_word(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Please enter the ID of the word you want to delete: ")?
        else {
            return Ok(());
        };
        match self.store.delete_word(id) {
            Ok(_) => {
                let msg = format!("The word with ID {id} has been deleted.");
                writeln!(self.output, "{}", msg.green())?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn edit_word(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Please enter the ID of the word you want to edit: ")? else {
            return Ok(());
        };
        let Some(new_word) = self.prompt("Please enter the new word: ")? else {
            return Ok(());
        };
        match self.store.edit_word(id, &new_word) {
            Ok(_) => {
                let msg = format!("The word with ID {id} has been edited to \"{new_word}\".");
                writeln!(self.output, "{}", msg.green())?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn take_test(&mut self) -> Result<()> {
        let mut quiz = match Quiz::sample(self.store, self.config.quiz_size) {
            Ok(quiz) => quiz,
            Err(e) => return self.report(&e),
        };
        if quiz.words().is_empty() {
            let msg = "There are no words to test yet. Add some words first.";
            writeln!(self.output, "{}", msg.yellow())?;
            return Ok(());
        }

        writeln!(self.output, "Random words:")?;
        match quiz.run(self.store, &mut self.input, &mut self.output) {
            Ok(summary) => {
                info!(asked = summary.asked, known = summary.known, "quiz finished");
                let msg = format!("You knew {} of {} words.", summary.known, summary.asked);
                writeln!(self.output, "{}", msg.green())?;
            }
            Err(StoreError::Io(e)) => return Err(StoreError::Io(e)),
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn display_results(&mut self) -> Result<()> {
        let stats = match self.store.aggregate_stats() {
            Ok(stats) => stats,
            Err(e) => return self.report(&e),
        };
        write!(self.output, "{}", render_test_results(&stats, CHART_WIDTH))?;

        match self.store.weakest_words(WEAKEST_SHOWN) {
            Ok(weakest) if !weakest.is_empty() => {
                let listed: Vec<String> = weakest
                    .iter()
                    .map(|r| format!("{} ({})", r.word, r.incorrect))
                    .collect();
                writeln!(self.output, "Most missed: {}", listed.join(", "))?;
            }
            Ok(_) => {}
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }
}
