//! Menu integration tests driving the store through scripted input.

use std::fs;
use std::io::Cursor;

use tempfile::TempDir;
use wordbank::{Config, Menu, VocabularyStore};

struct Session {
    dir: TempDir,
    config: Config,
}

impl Session {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            db_path: dir.path().join("words.db"),
            listing_path: dir.path().join("display_words.txt"),
            ..Config::default()
        };
        Session { dir, config }
    }

    fn open(&self) -> VocabularyStore {
        VocabularyStore::open(&self.config.db_path).unwrap()
    }

    /// Run the menu over `script` against `store` and return everything printed.
    fn run(&self, store: &VocabularyStore, script: &str) -> String {
        let mut output = Vec::<u8>::new();
        Menu::new(store, &self.config, Cursor::new(script), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn listing(&self) -> String {
        fs::read_to_string(&self.config.listing_path).unwrap()
    }
}

#[test]
fn add_list_delete_end_to_end() {
    let session = Session::new();
    let store = session.open();

    let out = session.run(&store, "1\napple\nbanana\ndone\n2\n7\n");
    assert!(out.contains("The word \"apple\" has been added to the database."));
    assert!(out.contains("The word \"banana\" has been added to the database."));
    assert!(out.contains("Create File ("));
    assert!(out.contains("Exiting the program."));

    let listing = session.listing();
    assert!(listing.contains("apple"));
    assert!(listing.contains("banana"));
    let words = store.list_words().unwrap();
    assert_eq!(words.len(), 2);
    assert_ne!(words[0].0, words[1].0);

    let apple_id = words.iter().find(|(_, w)| w == "apple").unwrap().0;
    let out = session.run(&store, &format!("3\n{apple_id}\n2\n7\n"));
    assert!(out.contains(&format!("The word with ID {apple_id} has been deleted.")));

    let listing = session.listing();
    assert!(!listing.contains("apple"));
    assert!(listing.contains("banana"));
}

#[test]
fn duplicate_word_is_reported_and_loop_continues() {
    let session = Session::new();
    let store = session.open();

    let out = session.run(&store, "1\napple\napple\nDONE\n7\n");
    assert!(out.contains("The word \"apple\" already exists in the database."));
    assert!(out.contains("Exiting the program."));
    assert_eq!(store.word_count().unwrap(), 1);
}

#[test]
fn edit_then_list_shows_new_text_only() {
    let session = Session::new();
    let store = session.open();
    let id = store.add_word("colour").unwrap();

    let out = session.run(&store, &format!("4\n{id}\ncolor\n2\n7\n"));
    assert!(out.contains(&format!("The word with ID {id} has been edited to \"color\".")));

    let listing = session.listing();
    assert!(listing.contains("color"));
    assert!(!listing.contains("colour"));
}

#[test]
fn edit_into_existing_word_reports_error() {
    let session = Session::new();
    let store = session.open();
    store.add_word("apple").unwrap();
    let id = store.add_word("banana").unwrap();

    let out = session.run(&store, &format!("4\n{id}\napple\n7\n"));
    assert!(out.contains("Error: "));
    assert!(out.contains("Exiting the program."));
    assert_eq!(store.get_word(id).unwrap().word, "banana");
}

#[test]
fn deleting_unknown_id_leaves_store_unchanged() {
    let session = Session::new();
    let store = session.open();
    store.add_word("apple").unwrap();

    session.run(&store, "3\n404\n7\n");
    assert_eq!(store.list_words().unwrap(), vec![(1, "apple".to_string())]);
}

#[test]
fn invalid_choices_and_ids_reprompt() {
    let session = Session::new();
    let store = session.open();

    let out = session.run(&store, "9\nhello\n3\nabc\n7\n");
    assert_eq!(
        out.matches("Invalid input. Please enter 1, 2, 3, 4, 5, 6, or 7.")
            .count(),
        2
    );
    assert!(out.contains("Invalid ID \"abc\". Please enter a number."));
    assert!(out.contains("Exiting the program."));
}

#[test]
fn quiz_records_answers_and_results_chart_sums_them() {
    let session = Session::new();
    let store = session.open();
    store.add_word("apple").unwrap();

    // Three sessions of "yes", two of "no".
    let script = "5\nyes\n5\nno\n5\nYES\n5\nNO\n5\nYes\n6\n7\n";
    let out = session.run(&store, script);

    assert_eq!(out.matches("Random words:").count(), 5);
    let apple = store.get_word(1).unwrap();
    assert_eq!((apple.correct, apple.incorrect), (3, 2));

    assert!(out.contains("Test Results"));
    assert!(out.contains("Correct"));
    assert!(out.contains("Incorrect"));
    assert!(out.contains("Accuracy: 60.0%"));
    assert!(out.contains("Most missed: apple (2)"));
}

#[test]
fn quiz_samples_at_most_configured_size() {
    let mut session = Session::new();
    session.config.quiz_size = 3;
    let store = session.open();
    for i in 0..8 {
        store.add_word(&format!("word{i}")).unwrap();
    }

    let out = session.run(&store, "5\nyes\nyes\nyes\n7\n");
    assert!(out.contains("3. Do you know the meaning of"));
    assert!(!out.contains("4. Do you know the meaning of"));
    assert_eq!(store.aggregate_stats().unwrap().correct, 3);
}

#[test]
fn quiz_on_empty_store_asks_nothing() {
    let session = Session::new();
    let store = session.open();

    let out = session.run(&store, "5\n7\n");
    assert!(out.contains("There are no words to test yet."));
    assert!(!out.contains("Do you know the meaning of"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let session = Session::new();
    let store = session.open();

    let out = session.run(&store, "1\npear\n");
    assert!(out.contains("The word \"pear\" has been added to the database."));
    assert_eq!(store.word_count().unwrap(), 1);
}

#[test]
fn records_persist_across_reopen() {
    let session = Session::new();
    {
        let store = session.open();
        session.run(&store, "1\napple\ndone\n5\nyes\n7\n");
        store.close().unwrap();
    }

    let store = session.open();
    let apple = store.get_word(1).unwrap();
    assert_eq!(apple.word, "apple");
    assert_eq!(apple.correct, 1);
    assert!(session.dir.path().join("words.db").exists());
}

#[test]
fn words_are_stored_as_typed() {
    let session = Session::new();
    let store = session.open();

    session.run(&store, "1\napple\n apple\n\ndone\n7\n");
    let words: Vec<String> = store.list_words().unwrap().into_iter().map(|(_, w)| w).collect();
    assert_eq!(words, vec!["apple", " apple", ""]);
}

#[test]
fn edited_text_is_stored_as_typed() {
    let session = Session::new();
    let store = session.open();
    let id = store.add_word("apple").unwrap();

    session.run(&store, &format!("4\n{id}\n apricot \n7\n"));
    assert_eq!(store.get_word(id).unwrap().word, " apricot ");
}

#[test]
fn listing_write_failure_is_reported_and_loop_continues() {
    let mut session = Session::new();
    session.config.listing_path = session.dir.path().join("missing").join("display_words.txt");
    let store = session.open();
    store.add_word("apple").unwrap();

    let out = session.run(&store, "2\n7\n");
    assert!(out.contains("Error: IO error:"));
    assert!(!out.contains("Create File ("));
    assert!(out.contains("Exiting the program."));
}
