//! Terminal rendering for the game
//!
//! All printing lives here so the scoring and state-machine logic stays
//! pure. `colored` resets the terminal style after every segment, so no
//! color state leaks past a letter or message.

use crate::core::{Feedback, LetterScore, Word};
use crate::game::{MAX_ATTEMPTS, RoundOutcome, win_message};
use colored::Colorize;

/// Print the opening banner and instructions
pub fn print_banner() {
    println!("Guess the {} in {MAX_ATTEMPTS} tries.", "TERMLE".bold());
    println!("Each guess must be a valid 5-letter word. Hit the enter button to submit.");
}

/// Print the rejection line for an invalid guess
pub fn print_not_in_word_list() {
    println!("Not in word list!");
}

/// Print one scored guess as a colored letter row
///
/// Correct letters are green, misplaced letters yellow, absent letters
/// muted gray.
pub fn print_feedback_row(guess: &Word, feedback: &Feedback) {
    for (letter, score) in guess.text().chars().zip(feedback.scores()) {
        let segment = match score {
            LetterScore::Correct => letter.to_string().green().bold(),
            LetterScore::Present => letter.to_string().yellow().bold(),
            LetterScore::Absent => letter.to_string().bright_black().bold(),
        };
        print!("{segment}");
    }
    println!();
}

/// Reveal the secret uncolored (the cheat word's escape hatch)
pub fn print_reveal(secret: &Word) {
    println!("{secret}");
}

/// Print the win message for the given number of attempts left
pub fn print_win(remaining_attempts: u8) {
    println!("{}", win_message(remaining_attempts).blue().bold());
}

/// Reveal the secret after a lost round
pub fn print_loss(secret: &Word) {
    println!("{}", secret.text().red().bold());
}

/// Print the shareable result grid for a finished round
///
/// One emoji row per scored guess, headed by `TERMLE n/6` (or `X/6` for a
/// loss). Cheat reveals produce no feedback and therefore no row.
pub fn print_share_grid(outcome: RoundOutcome, history: &[(Word, Feedback)]) {
    let score = match outcome {
        RoundOutcome::Won { attempts } => attempts.to_string(),
        RoundOutcome::Lost => "X".to_string(),
        RoundOutcome::Aborted => return,
    };

    println!("\nTERMLE {score}/{MAX_ATTEMPTS}");
    for (_, feedback) in history {
        println!("{}", feedback.to_emoji());
    }
}
