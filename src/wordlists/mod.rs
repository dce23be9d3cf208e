//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary and the [`Lexicon`]
//! that draws secrets and validates guesses.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, EXTRA_GUESSES, EXTRA_GUESSES_COUNT};
pub use lexicon::{GuessError, Lexicon};
