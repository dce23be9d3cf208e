//! Turn state machine and round engine

mod engine;
mod round;

pub use engine::{RoundReport, play_round};
pub use round::{MAX_ATTEMPTS, RoundOutcome, RoundState, TurnOutcome, win_message};
