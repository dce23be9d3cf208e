//! Termle - CLI
//!
//! Terminal Wordle: guess the secret 5-letter word in six tries.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use std::io::{self, BufRead, Write};
use termle::game::{RoundOutcome, play_round};
use termle::output::display;
use termle::wordlists::{Lexicon, loader::load_from_file};

#[derive(Parser)]
#[command(
    name = "termle",
    about = "Wordle-style word guessing game for the terminal",
    version,
    author
)]
struct Cli {
    /// Path to a custom word list (one 5-letter word per line); every word
    /// in it becomes both a possible secret and a valid guess
    #[arg(short = 'w', long)]
    wordlist: Option<String>,
}

/// Build the lexicon from the embedded corpus or the -w file
fn build_lexicon(cli: &Cli) -> Result<Lexicon> {
    match &cli.wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list {path}"))?;
            ensure!(
                !words.is_empty(),
                "Word list {path} contains no valid 5-letter words"
            );
            Ok(Lexicon::from_words(words))
        }
        None => Ok(Lexicon::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let lexicon = build_lexicon(&cli)?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    display::print_banner();
    println!();

    loop {
        let secret = lexicon
            .random_secret()
            .context("The answer pool is empty")?;

        let report = play_round(&lexicon, &secret, &mut reader)?;

        if report.outcome == RoundOutcome::Aborted {
            break;
        }

        display::print_share_grid(report.outcome, &report.history);

        if !ask_play_again(&mut reader)? {
            break;
        }
        println!();
    }

    Ok(())
}

/// Ask whether to start another round; a closed stream counts as no
fn ask_play_again<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    print!("\nPlay again? (yes/no): ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(false);
    }

    Ok(matches!(
        input.trim().to_lowercase().as_str(),
        "yes" | "y"
    ))
}
