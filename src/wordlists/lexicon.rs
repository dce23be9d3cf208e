//! The game's word source
//!
//! A [`Lexicon`] owns the answer pool (words a secret may be drawn from) and
//! the allowed-guess set (superset used to validate player input).

use super::loader::words_from_slice;
use super::{ANSWERS, EXTRA_GUESSES};
use crate::core::{Word, WordError};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// A rejected guess - the only recoverable error in a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input is not a well-formed 5-letter word
    Malformed(WordError),
    /// Well-formed, but not in the allowed-guess set
    Unknown,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "{err}"),
            Self::Unknown => write!(f, "Word is not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::Unknown => None,
        }
    }
}

/// Word source for a game: answer pool plus allowed-guess set
pub struct Lexicon {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl Lexicon {
    /// The reserved cheat word: guessing it reveals the secret instead of
    /// being scored. Kept in the allowed set so it passes normal validation.
    pub const CHEAT_WORD: &str = "CHEAT";

    /// Build the lexicon from the embedded word lists
    ///
    /// The allowed set is the union of the answer pool and the extra
    /// guessable words.
    #[must_use]
    pub fn embedded() -> Self {
        let answers = words_from_slice(ANSWERS);
        let mut allowed: FxHashSet<Word> = answers.iter().cloned().collect();
        allowed.extend(words_from_slice(EXTRA_GUESSES));

        Self { answers, allowed }
    }

    /// Build a lexicon from a custom word list
    ///
    /// Every word is both a possible answer and a valid guess.
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let allowed = words.iter().cloned().collect();
        Self {
            answers: words,
            allowed,
        }
    }

    /// Number of words in the answer pool
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Pick a secret word uniformly from the answer pool
    ///
    /// Returns `None` if the pool is empty. Selection is not
    /// cryptographically random; it does not need to be.
    #[must_use]
    pub fn random_secret(&self) -> Option<Word> {
        self.answers.choose(&mut rand::rng()).cloned()
    }

    /// Check whether an input string is an acceptable guess
    ///
    /// True iff the trimmed, case-normalized input is a 5-letter word in the
    /// allowed set.
    ///
    /// # Examples
    /// ```
    /// use termle::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::embedded();
    /// assert!(lexicon.is_valid("crane"));
    /// assert!(lexicon.is_valid("  CRANE  "));
    /// assert!(!lexicon.is_valid("zzzzz"));
    /// assert!(!lexicon.is_valid("cranes"));
    /// ```
    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        self.parse_guess(input).is_ok()
    }

    /// Parse and validate one line of player input into a guess
    ///
    /// # Errors
    /// Returns [`GuessError::Malformed`] for input that is not a 5-letter
    /// ASCII word, [`GuessError::Unknown`] for a well-formed word outside
    /// the allowed set.
    pub fn parse_guess(&self, input: &str) -> Result<Word, GuessError> {
        let word = Word::new(input).map_err(GuessError::Malformed)?;

        if self.allowed.contains(&word) {
            Ok(word)
        } else {
            Err(GuessError::Unknown)
        }
    }
}
