//! Termle
//!
//! A Wordle-style word guessing game for the terminal: six tries to find a
//! secret 5-letter word, with color-coded per-letter feedback after every
//! guess.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use termle::game::play_round;
//! use termle::wordlists::Lexicon;
//!
//! let lexicon = Lexicon::embedded();
//! let secret = lexicon.random_secret().expect("answer pool is not empty");
//!
//! let mut input = Cursor::new("crane\nslate\n");
//! let report = play_round(&lexicon, &secret, &mut input).unwrap();
//! println!("Round ended: {:?}", report.outcome);
//! ```

// Core domain types
pub mod core;

// Round state machine and engine
pub mod game;

// Word lists and guess validation
pub mod wordlists;

// Terminal output formatting
pub mod output;
