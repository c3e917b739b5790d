// Colored terminal output for ranked frequency tables.
//
// Over-represented words (log relative frequency > 0) are drawn with a green
// bar to the right, under-represented words with a blue bar to the left.
// Words with no background signal get a dimmed placeholder.

use colored::Colorize;

use crate::frequency::ranking::{RankedRow, RankedTable};

/// Half-width of the signed log-ratio bar.
const BAR_HALF_WIDTH: usize = 10;

/// Display a ranked table in the terminal.
pub fn display_ranked_table(title: &str, table: &RankedTable) {
    if table.is_empty() {
        println!("No words to show. Is the corpus empty, or are all candidates search terms?");
        return;
    }

    println!(
        "\n{}",
        format!("=== {} ({} words) ===", title, table.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<24} {:>8}  {:>9}  {:>9}  {:>7}  {:^width$}  {:>10}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "Occur".dimmed(),
        "Freq".dimmed(),
        "Rel".dimmed(),
        "LogRel".dimmed(),
        "".dimmed(),
        "Bg occur".dimmed(),
        width = BAR_HALF_WIDTH * 2 + 1,
    );
    println!("  {}", "-".repeat(98).dimmed());

    let scale = table
        .iter()
        .map(|r| r.log_relative_frequency.abs())
        .fold(0.0_f64, f64::max);

    for (i, row) in table.iter().enumerate() {
        println!(
            "  {:>4}. {:<24} {:>8}  {:>9.6}  {:>9.3}  {:>7.3}  {}  {:>10}",
            i + 1,
            super::truncate_chars(&row.word, 21),
            row.occurrences,
            row.frequency,
            row.relative_frequency,
            row.log_relative_frequency,
            signed_bar(row, scale),
            row.background_occurrences,
        );
    }
    println!();
}

/// Display the stop-word list, most recently added last.
pub fn display_stop_words<'a>(words: impl Iterator<Item = &'a str>) {
    let words: Vec<&str> = words.collect();
    println!("{}", format!("=== Stop words ({}) ===", words.len()).bold());
    for chunk in words.chunks(12) {
        println!("  {}", chunk.join("  "));
    }
}

fn signed_bar(row: &RankedRow, scale: f64) -> String {
    let blank = " ".repeat(BAR_HALF_WIDTH);
    // Rows without a background signal carry a zero ratio
    if row.relative_frequency == 0.0 || scale == 0.0 {
        let placeholder = format!("{blank}{}{blank}", "·");
        return placeholder.dimmed().to_string();
    }

    let len = ((row.log_relative_frequency.abs() / scale) * BAR_HALF_WIDTH as f64).round() as usize;
    let len = len.min(BAR_HALF_WIDTH);
    let bar = "=".repeat(len);
    let pad = " ".repeat(BAR_HALF_WIDTH - len);

    if row.log_relative_frequency >= 0.0 {
        format!("{blank}|{}{pad}", bar.bright_green())
    } else {
        format!("{pad}{}|{blank}", bar.bright_blue())
    }
}
