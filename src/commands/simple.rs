//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole guess per line.

use crate::game::{BoardStore, COLUMNS, GameState, GuessEngine, Messages};
use crate::output::display::{print_board, print_keyboard, tile};
use crate::output::share::{Palette, share_text};
use colored::Colorize;
use std::io::{self, Write};
use std::thread;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: BoardStore>(
    engine: &mut GuessEngine<S>,
    palette: Palette,
    messages: &Messages,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                         N O N W O R D L E                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess a non-existent word in 7 tries.");
    println!("Each guess must be a real 5-letter word; the answer is made up.\n");
    println!("Commands: 'share' to show your result, 'quit' to exit\n");

    if engine.guesses() > 0 {
        println!("Restored today's board:\n");
        print_board(engine, palette);
        println!();
    }

    while !engine.state().is_terminal() {
        let input = get_user_input(&format!("Guess {}", engine.guesses() + 1))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Come back tomorrow!\n");
                return Ok(());
            }
            "share" => {
                println!("\n{}\n", share_text(engine, palette));
                continue;
            }
            _ => {}
        }

        if input.chars().count() > COLUMNS {
            println!("❌ {}\n", "Too many letters".red());
            continue;
        }

        while engine.backspace() {}
        for letter in input.chars() {
            engine.append_letter(letter.to_ascii_uppercase());
        }

        match engine.commit() {
            Ok(Some(_)) => reveal(engine, palette)?,
            Ok(None) => break,
            Err(err) => {
                println!("❌ {}\n", messages.for_error(&err).red());
                continue;
            }
        }

        println!();
        print_keyboard(engine.keyboard(), palette);
        println!();
    }

    match engine.state() {
        GameState::Won => println!(
            "{}",
            format!(
                "🎉 {}! Solved in {}/7",
                messages.win_message(engine.guesses().saturating_sub(1)),
                engine.guesses()
            )
            .bright_green()
            .bold()
        ),
        GameState::Lost => println!(
            "The answer was {}",
            engine.answer().as_str().bright_yellow().bold()
        ),
        GameState::Ongoing => {}
    }

    println!("\n{}\n", share_text(engine, palette));
    Ok(())
}

/// Show the pending reveal one tile at a time
fn reveal<S: BoardStore>(engine: &mut GuessEngine<S>, palette: Palette) -> io::Result<()> {
    print!("  ");
    while let Some(interval) = engine.reveal_interval() {
        thread::sleep(interval);
        if let Some(revealed) = engine.advance().and_then(|step| step.tile) {
            print!("{}", tile(char::from(revealed.letter), Some(revealed.state), palette));
            io::stdout().flush()?;
        }
    }
    println!();
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
