//! Colored rendering for the line-based commands

use crate::commands::AuditReport;
use crate::core::TileState;
use crate::game::{BoardStore, GuessEngine, KeyboardState};
use crate::output::share::Palette;
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter drawn as a tile in the given state
#[must_use]
pub fn tile(letter: char, state: Option<TileState>, palette: Palette) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        Some(TileState::Correct) if palette.high_contrast => {
            text.black().on_truecolor(245, 121, 58).bold()
        }
        Some(TileState::Correct) => text.black().on_green().bold(),
        Some(TileState::Present) if palette.high_contrast => {
            text.black().on_truecolor(133, 192, 249).bold()
        }
        Some(TileState::Present) => text.black().on_yellow().bold(),
        Some(TileState::Absent) if palette.dark_mode => text.white().on_black(),
        Some(TileState::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Print every scored row of the board
pub fn print_board<S: BoardStore>(engine: &GuessEngine<S>, palette: Palette) {
    let tiles = engine.tiles();
    for (row, text) in engine.board().rows().iter().enumerate() {
        if tiles[row].iter().all(Option::is_none) {
            continue;
        }
        let line: String = text
            .chars()
            .zip(tiles[row].iter())
            .map(|(letter, &state)| tile(letter, state, palette).to_string())
            .collect();
        println!("  {line}");
    }
}

/// Print the keyboard with each letter's best-known state
pub fn print_keyboard(keyboard: &KeyboardState, palette: Palette) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .bytes()
            .map(|letter| tile(char::from(letter), keyboard.get(letter), palette).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
}

/// Print the result of a word-list audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📅 Days checked:     {}", report.days);
    println!("   First day:        {}", report.first_day);
    println!("   Answer candidates: {}", report.candidates);
    println!(
        "   Distinct answers: {}",
        report.distinct_answers.to_string().bright_yellow()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.failures.is_empty() {
        println!(
            "\n{}",
            format!("✅ Every day resolves an answer ({} days)", report.resolved)
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!("❌ {} days have no answer", report.failures.len())
                .red()
                .bold()
        );
        for (day, index) in report.failures.iter().take(10) {
            println!("   day {day}: index {index}");
        }
        if report.failures.len() > 10 {
            println!("   … and {} more", report.failures.len() - 10);
        }
    }
}
