//! Display helpers: the word listing table and the test results chart

use std::fs;
use std::path::Path;

use colored::{Color, Colorize};
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::progress::TestStats;

/// Default file the word listing is written to
pub const DEFAULT_LISTING_FILE: &str = "display_words.txt";

/// Widest bar in the results chart, in cells
pub const CHART_WIDTH: usize = 40;

const BAR_CELL: &str = "█";

pub fn word_table(rows: &[(i64, String)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Word"]);
    for (id, word) in rows {
        table.add_row(vec![Cell::new(id), Cell::new(word)]);
    }
    table
}

/// Render the listing and overwrite `path` with it.
pub fn write_word_table(path: &Path, rows: &[(i64, String)]) -> Result<()> {
    fs::write(path, word_table(rows).to_string())?;
    Ok(())
}

struct Bar {
    label: &'static str,
    value: i64,
    color: Color,
}

fn bar_len(value: i64, max: i64, width: usize) -> usize {
    if value <= 0 || max <= 0 {
        return 0;
    }
    // Non-zero values always get at least one cell.
    ((value as u128 * width as u128 / max as u128) as usize).max(1)
}

/// Horizontal two-bar chart of correct vs incorrect answers.
pub fn render_test_results(stats: &TestStats, width: usize) -> String {
    let bars = [
        Bar { label: "Correct", value: stats.correct, color: Color::Green },
        Bar { label: "Incorrect", value: stats.incorrect, color: Color::Red },
    ];
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Test Results".bold()));
    out.push_str(&format!("{:>label_width$} | Number of Words\n", ""));
    for bar in &bars {
        let cells = BAR_CELL.repeat(bar_len(bar.value, max, width));
        out.push_str(&format!(
            "{:>label_width$} | {} {}\n",
            bar.label,
            cells.color(bar.color),
            bar.value
        ));
    }
    out.push_str(&format!("Accuracy: {:.1}%\n", stats.accuracy_percent()));
    out
}
