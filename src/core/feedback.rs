//! Guess feedback calculation and representation
//!
//! Feedback classifies every guessed letter against the secret:
//! - `Correct` - right letter in the right position
//! - `Present` - letter occurs in the secret, wrong position
//! - `Absent`  - letter does not occur (or all its occurrences are claimed)
//!
//! Duplicate letters are handled with multiset accounting: a letter is never
//! credited as `Correct`/`Present` more times than it occurs in the secret.

use super::Word;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Letter does not occur in the secret (or its occurrences are used up)
    Absent,
    /// Letter occurs in the secret at a different position
    Present,
    /// Letter matches the secret at this position
    Correct,
}

/// Feedback for one guess: an ordered score per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; 5]);

impl Feedback {
    /// All positions correct (winning guess)
    pub const WIN: Self = Self([LetterScore::Correct; 5]);

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact position matches `Correct` and remove
    ///    each from the secret's available letter pool
    /// 2. Second pass: mark `Present` only while the pool still holds an
    ///    unclaimed occurrence of the letter; everything else stays `Absent`
    ///
    /// The pass order matters: every `Correct` claims its letter before any
    /// `Present` is handed out, so a letter is never credited beyond its
    /// count in the secret.
    ///
    /// # Examples
    /// ```
    /// use termle::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("react").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // R(present) E(present) A(correct) C(present) T(absent)
    /// assert_eq!(feedback.scores()[2], LetterScore::Correct);
    /// assert_eq!(feedback.scores()[4], LetterScore::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut scores = [LetterScore::Absent; 5];
        let mut available = secret.char_counts();

        // First pass: exact position matches claim their letter
        // Allow: index needed to access guess[i], secret[i], and set scores[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                scores[i] = LetterScore::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters draw from the remaining pool
        // Allow: index needed to access guess[i] and check/set scores[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if scores[i] == LetterScore::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    scores[i] = LetterScore::Present;
                    *count -= 1;
                }
            }
        }

        Self(scores)
    }

    /// Get the per-position scores in guess order
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; 5] {
        &self.0
    }

    /// Check if every position is correct (the guess equals the secret)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Count positions marked `Correct`
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Correct)
            .count()
    }

    /// Count positions marked `Present`
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Present)
            .count()
    }

    /// Convert feedback to an emoji row for the post-round share grid
    ///
    /// # Examples
    /// ```
    /// use termle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&guess, &guess);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|score| match score {
                LetterScore::Correct => '🟩',
                LetterScore::Present => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}
