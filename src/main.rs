//! Nonwordle - CLI
//!
//! Daily made-up-word guessing game with TUI and CLI modes, plus tools for
//! building and auditing the word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nonwordle::{
    commands::{compress_files, run_audit, run_simple},
    config::{DEFAULT_STORE_DIR, GameConfig},
    daily::DayNumber,
    game::Messages,
    logging::init_tracing,
    output::{Palette, print_audit_report, share_text},
    session,
    wordlists::{DEFAULT_WORDS_PATH, fetch},
};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "nonwordle",
    about = "Guess the day's made-up five-letter word in seven tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Compressed word list
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "NONWORDLE_WORDS",
        default_value = DEFAULT_WORDS_PATH
    )]
    words: PathBuf,

    /// Directory for saved boards
    #[arg(long, global = true, env = "NONWORDLE_STORE", default_value = DEFAULT_STORE_DIR)]
    store_dir: PathBuf,

    /// Play a random past day without saving
    #[arg(long, global = true)]
    practice: bool,

    /// Play this day number (days since 1970-01-01) instead of today
    #[arg(long, global = true, allow_negative_numbers = true)]
    day: Option<i64>,

    /// Orange/blue tiles instead of green/yellow
    #[arg(long, global = true)]
    high_contrast: bool,

    /// Dark squares for absent letters
    #[arg(long, global = true)]
    dark: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Print the share summary for the day's saved board
    Share,

    /// Build the compressed word list from plain lists
    Compress {
        /// Real words that may be guessed, one per line
        acceptable: PathBuf,

        /// Made-up words that may become answers, one per line
        candidates: PathBuf,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_WORDS_PATH)]
        output: PathBuf,
    },

    /// Check that every day in a range resolves an answer
    Audit {
        /// First day number (default: today)
        #[arg(long, allow_negative_numbers = true)]
        from: Option<i64>,

        /// Number of days to check
        #[arg(short = 'n', long, default_value = "365")]
        days: u32,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            words_path: self.words.clone(),
            store_dir: self.store_dir.clone(),
            day: self.day.map(DayNumber::new),
            practice: self.practice,
            palette: Palette {
                high_contrast: self.high_contrast,
                dark_mode: self.dark,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .as_ref()
        .map(|path| {
            File::create(path).with_context(|| format!("cannot open log file {}", path.display()))
        })
        .transpose()?;
    init_tracing(cli.verbose, log_file)?;

    let config = cli.config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Share => run_share_command(&config),
        Commands::Compress {
            acceptable,
            candidates,
            output,
        } => run_compress_command(&acceptable, &candidates, &output),
        Commands::Audit { from, days } => run_audit_command(&config, from, days),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use nonwordle::interactive::{App, run_tui};

    let engine = session::start(config)?;
    run_tui(App::new(engine, config.palette))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut engine = session::start(config)?;
    run_simple(&mut engine, config.palette, &Messages::default())?;
    Ok(())
}

fn run_share_command(config: &GameConfig) -> Result<()> {
    let engine = session::start(config)?;
    println!("{}", share_text(&engine, config.palette));
    Ok(())
}

fn run_compress_command(acceptable: &Path, candidates: &Path, output: &Path) -> Result<()> {
    let summary = compress_files(acceptable, candidates, output)
        .with_context(|| format!("failed to compress into {}", output.display()))?;

    println!(
        "Wrote {} ({} bytes): {} acceptable words, {} candidates",
        output.display(),
        summary.bytes,
        summary.acceptable,
        summary.candidates
    );
    if !summary.covers_every_day() {
        println!("Warning: too few candidates, some days will have no answer");
    }
    Ok(())
}

fn run_audit_command(config: &GameConfig, from: Option<i64>, days: u32) -> Result<()> {
    let bytes = fetch(&config.words_path)?;
    let first_day = from.map_or_else(DayNumber::today, DayNumber::new);

    println!("Auditing {days} days from day {first_day}...");
    let report = run_audit(&bytes, first_day, days, true);
    print_audit_report(&report);

    if report.failures.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} of {} days have no answer", report.failures.len(), report.days)
    }
}
