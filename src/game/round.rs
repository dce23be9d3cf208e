//! Round state and turn resolution
//!
//! `RoundState` is an explicit value passed through each turn step rather
//! than hidden mutable state, so the transition logic is testable without
//! any console attached.

use crate::core::Word;

/// Maximum number of accepted guesses per round
pub const MAX_ATTEMPTS: u8 = 6;

/// Attempt counter for one round
///
/// Invariant: `attempt` never exceeds [`MAX_ATTEMPTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundState {
    attempt: u8,
}

/// Result of resolving one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Guess equals the secret - terminal
    Won,
    /// Attempts exhausted without a match - terminal
    Lost,
    /// Round continues with the next guess
    Continue,
}

/// Terminal result of a whole round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Secret guessed within the attempt budget
    Won {
        /// Attempt number the winning guess landed on (1-6)
        attempts: u8,
    },
    /// Six guesses accepted without a match
    Lost,
    /// Input stream closed mid-round
    Aborted,
}

impl RoundState {
    /// Fresh state: no attempts taken yet
    #[must_use]
    pub const fn new() -> Self {
        Self { attempt: 0 }
    }

    /// Current attempt number (0 before the first guess)
    #[inline]
    #[must_use]
    pub const fn attempt(self) -> u8 {
        self.attempt
    }

    /// Attempts left after the current one
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(self) -> u8 {
        MAX_ATTEMPTS - self.attempt
    }

    /// Enter the next attempt
    ///
    /// Called once per accepted guess, before the guess is read, matching
    /// the numbering shown in the prompt.
    #[must_use]
    pub fn begin_attempt(self) -> Self {
        debug_assert!(self.attempt < MAX_ATTEMPTS, "attempt budget exhausted");
        Self {
            attempt: self.attempt + 1,
        }
    }

    /// Resolve the current attempt's accepted guess against the secret
    ///
    /// Pure function of the state and the two words: `Won` when they match,
    /// `Lost` when this was the last attempt, `Continue` otherwise.
    #[must_use]
    pub fn resolve(self, guess: &Word, secret: &Word) -> TurnOutcome {
        if guess == secret {
            TurnOutcome::Won
        } else if self.remaining_attempts() < 1 {
            TurnOutcome::Lost
        } else {
            TurnOutcome::Continue
        }
    }
}

/// Congratulation tier for a win, keyed by attempts left at that moment
#[must_use]
pub fn win_message(remaining_attempts: u8) -> &'static str {
    match remaining_attempts {
        0 => "Phew!",
        1 => "Great!",
        2 => "Splendid!",
        3 => "Impressive!",
        4 => "Magnificent!",
        _ => "Genius!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn fresh_state_has_full_budget() {
        let state = RoundState::new();
        assert_eq!(state.attempt(), 0);
        assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn begin_attempt_decrements_remaining_by_one() {
        let mut state = RoundState::new();

        for expected in 1..=MAX_ATTEMPTS {
            state = state.begin_attempt();
            assert_eq!(state.attempt(), expected);
            assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS - expected);
        }
    }

    #[test]
    fn matching_guess_wins_on_any_attempt() {
        let secret = word("crane");

        let first = RoundState::new().begin_attempt();
        assert_eq!(first.resolve(&secret, &secret), TurnOutcome::Won);

        let mut last = RoundState::new();
        for _ in 0..MAX_ATTEMPTS {
            last = last.begin_attempt();
        }
        assert_eq!(last.resolve(&secret, &secret), TurnOutcome::Won);
    }

    #[test]
    fn miss_with_attempts_left_continues() {
        let state = RoundState::new().begin_attempt();
        assert_eq!(
            state.resolve(&word("slate"), &word("crane")),
            TurnOutcome::Continue
        );
    }

    #[test]
    fn miss_on_last_attempt_loses() {
        let mut state = RoundState::new();
        for _ in 0..MAX_ATTEMPTS {
            state = state.begin_attempt();
        }

        assert_eq!(state.remaining_attempts(), 0);
        assert_eq!(
            state.resolve(&word("slate"), &word("crane")),
            TurnOutcome::Lost
        );
    }

    #[test]
    fn win_message_tiers() {
        assert_eq!(win_message(0), "Phew!");
        assert_eq!(win_message(1), "Great!");
        assert_eq!(win_message(2), "Splendid!");
        assert_eq!(win_message(3), "Impressive!");
        assert_eq!(win_message(4), "Magnificent!");
        assert_eq!(win_message(5), "Genius!");
        assert_eq!(win_message(6), "Genius!");
    }

    #[test]
    fn first_attempt_win_is_genius_tier() {
        // Attempt 1 leaves 5 remaining at the moment of the win
        let state = RoundState::new().begin_attempt();
        assert_eq!(win_message(state.remaining_attempts()), "Genius!");
    }
}
