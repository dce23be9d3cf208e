//! Interactive round engine
//!
//! Drives one round: prompt, validate, score, render, resolve, until the
//! round terminates. Generic over the input reader so whole rounds can be
//! driven from tests with an in-memory `Cursor`.

use crate::core::{Feedback, Word};
use crate::output::display;
use crate::wordlists::Lexicon;
use std::io::{self, BufRead, Write};

use super::round::{RoundOutcome, RoundState, TurnOutcome};

/// Everything a finished round produced
#[derive(Debug)]
pub struct RoundReport {
    /// How the round ended
    pub outcome: RoundOutcome,
    /// Scored guesses in order (cheat reveals are not scored)
    pub history: Vec<(Word, Feedback)>,
}

enum GuessInput {
    Guess(Word),
    Eof,
}

/// Read lines until the lexicon accepts one as a guess
///
/// Rejected input reports "Not in word list!" and re-prompts; it never
/// reaches scoring and never consumes an attempt. A closed input stream
/// yields `Eof`.
fn read_guess<R: BufRead>(
    reader: &mut R,
    lexicon: &Lexicon,
    attempt: u8,
) -> io::Result<GuessInput> {
    let mut prompt = format!("Enter guess {attempt}: ");

    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(GuessInput::Eof);
        }

        match lexicon.parse_guess(&line) {
            Ok(word) => return Ok(GuessInput::Guess(word)),
            Err(_) => {
                display::print_not_in_word_list();
                prompt = "Enter guess: ".to_string();
            }
        }
    }
}

/// Play one round against the given secret
///
/// Loops until the secret is guessed, six guesses are spent, or the input
/// stream closes ([`RoundOutcome::Aborted`]). Feedback and the final
/// message are printed as side effects; the returned report carries the
/// outcome and the scored guess history.
///
/// # Errors
/// Returns an error only when reading input or flushing the prompt fails.
pub fn play_round<R: BufRead>(
    lexicon: &Lexicon,
    secret: &Word,
    reader: &mut R,
) -> io::Result<RoundReport> {
    let mut state = RoundState::new();
    let mut history = Vec::new();

    loop {
        // The attempt is entered before the guess is read, matching the
        // numbering shown in the prompt.
        state = state.begin_attempt();

        let guess = match read_guess(reader, lexicon, state.attempt())? {
            GuessInput::Guess(word) => word,
            GuessInput::Eof => {
                return Ok(RoundReport {
                    outcome: RoundOutcome::Aborted,
                    history,
                });
            }
        };

        println!();

        // Escape hatch: the reserved cheat word reveals the secret instead
        // of being scored. It still costs its attempt. Intentional.
        if guess.text() == Lexicon::CHEAT_WORD && guess != *secret {
            display::print_reveal(secret);
        } else {
            let feedback = Feedback::score(&guess, secret);
            display::print_feedback_row(&guess, &feedback);
            history.push((guess.clone(), feedback));
        }

        println!();

        match state.resolve(&guess, secret) {
            TurnOutcome::Won => {
                display::print_win(state.remaining_attempts());
                return Ok(RoundReport {
                    outcome: RoundOutcome::Won {
                        attempts: state.attempt(),
                    },
                    history,
                });
            }
            TurnOutcome::Lost => {
                display::print_loss(secret);
                return Ok(RoundReport {
                    outcome: RoundOutcome::Lost,
                    history,
                });
            }
            TurnOutcome::Continue => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn run(secret: &str, input: &str) -> RoundReport {
        let lexicon = Lexicon::embedded();
        let mut reader = Cursor::new(input.to_string());
        play_round(&lexicon, &word(secret), &mut reader).unwrap()
    }

    #[test]
    fn round_won_on_first_attempt() {
        let report = run("crane", "crane\n");

        assert_eq!(report.outcome, RoundOutcome::Won { attempts: 1 });
        assert_eq!(report.history.len(), 1);
        assert!(report.history[0].1.is_win());
    }

    #[test]
    fn round_won_case_insensitive() {
        let report = run("crane", "CrAnE\n");
        assert_eq!(report.outcome, RoundOutcome::Won { attempts: 1 });
    }

    #[test]
    fn invalid_guesses_never_consume_attempts() {
        // Wrong length, non-word, then the winning guess: still attempt 1
        let report = run("crane", "crn\nqqqqq\ncranes\ncrane\n");

        assert_eq!(report.outcome, RoundOutcome::Won { attempts: 1 });
        assert_eq!(report.history.len(), 1);
    }

    #[test]
    fn round_lost_after_six_misses() {
        let report = run("crane", "slate\naudio\nbrick\nfrost\npoint\nmouse\n");

        assert_eq!(report.outcome, RoundOutcome::Lost);
        assert_eq!(report.history.len(), 6);
        assert!(report.history.iter().all(|(_, f)| !f.is_win()));
    }

    #[test]
    fn round_won_on_last_attempt() {
        let report = run("crane", "slate\naudio\nbrick\nfrost\npoint\ncrane\n");
        assert_eq!(report.outcome, RoundOutcome::Won { attempts: 6 });
    }

    #[test]
    fn cheat_consumes_attempt_without_scoring() {
        let report = run("crane", "cheat\ncrane\n");

        // The reveal costs attempt 1, so the win lands on attempt 2,
        // and only the winning guess was scored
        assert_eq!(report.outcome, RoundOutcome::Won { attempts: 2 });
        assert_eq!(report.history.len(), 1);
    }

    #[test]
    fn cheat_on_last_attempt_loses_the_round() {
        let report = run("crane", "slate\naudio\nbrick\nfrost\npoint\ncheat\n");

        assert_eq!(report.outcome, RoundOutcome::Lost);
        assert_eq!(report.history.len(), 5);
    }

    #[test]
    fn guessing_cheat_when_it_is_the_secret_wins() {
        let lexicon = Lexicon::from_words(vec![word("cheat"), word("crane")]);
        let mut reader = Cursor::new("cheat\n".to_string());
        let report = play_round(&lexicon, &word("cheat"), &mut reader).unwrap();

        assert_eq!(report.outcome, RoundOutcome::Won { attempts: 1 });
        assert!(report.history[0].1.is_win());
    }

    #[test]
    fn closed_input_aborts_immediately() {
        let report = run("crane", "");

        assert_eq!(report.outcome, RoundOutcome::Aborted);
        assert!(report.history.is_empty());
    }

    #[test]
    fn closed_input_aborts_mid_round() {
        let report = run("crane", "slate\n");

        assert_eq!(report.outcome, RoundOutcome::Aborted);
        assert_eq!(report.history.len(), 1);
    }

    #[test]
    fn closed_input_after_invalid_guess_aborts() {
        let report = run("crane", "zzzzz\n");

        assert_eq!(report.outcome, RoundOutcome::Aborted);
        assert!(report.history.is_empty());
    }
}
