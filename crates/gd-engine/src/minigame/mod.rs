//! Self-contained mini-games from the lessons.
//!
//! Each game is plain state plus a scorer. None of them touch the session's
//! progress record; callers decide what a score is worth.

pub mod lie_detector;
pub mod loss;
pub mod matching;

pub use lie_detector::{LieDetector, Statement, Verdict};
pub use loss::{LossReport, LossScenario, calculate};
pub use matching::{MatchGame, MatchPair, MatchResult};
