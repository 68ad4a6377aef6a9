//! Progression engine for Golden Detector.
//!
//! The engine is a reducer: every player action is an [`Event`], and
//! [`reduce`] turns the current [`GameState`] plus an event into the next
//! state and an [`Outcome`]. Illegal or duplicate events (a locked level, a
//! second answer to the same question) come back as
//! [`Outcome::Ignored`] and leave the state untouched. [`Game`] wraps the
//! reducer together with the loaded content for callers that just want to
//! issue commands and read state.
//!
//! Nothing here depends on time. Reveal delays, typewriter text, and
//! countdowns belong to the presentation layer, which decides when to send
//! the next event.

/// Assessment scoring shared by quizzes, the scenario test, and the post-test.
pub mod assessment;
/// Text commands for line-based frontends.
pub mod command;
/// Engine configuration.
pub mod config;
/// The phase controller: state, events, and the reducer.
pub mod controller;
/// Resolving a dialogue choice into the next step.
pub mod dialogue;
/// Error types for the engine.
pub mod error;
/// Events and their outcomes.
pub mod event;
/// Self-contained mini-game scorers.
pub mod minigame;
/// The session facade.
pub mod session;

pub use assessment::{
    Answered, AssessmentKind, AssessmentRun, AssessmentSummary, Grade, ScenarioRank,
};
pub use command::{Command, HELP, parse_command};
pub use config::EngineConfig;
pub use controller::{GameState, Transition, reduce};
pub use error::{EngineError, EngineResult};
pub use event::{Event, Ignored, Outcome};
pub use session::{Game, LevelStatus};
