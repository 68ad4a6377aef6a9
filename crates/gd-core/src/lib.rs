//! Core types for Golden Detector: the content model, content validation,
//! and the progress record of a play session.
//!
//! This crate decides nothing about *what happens next*. It describes the
//! curriculum (levels, dialogue, questions) and keeps the numeric invariants
//! of the session record. The progression rules live in `gd-engine`.

/// Levels, dialogue nodes, choices, and assessment questions.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// The coarse-grained screen/mode of a session.
pub mod phase;
/// The mutable record of a play session.
pub mod progress;

/// Re-export content model types.
pub use content::{Choice, Content, DialogueNode, Level, LevelId, Question, Route};
/// Re-export error types.
pub use error::{ContentError, ContentIssue, ContentResult, IssueKind, Location};
/// Re-export the phase enum.
pub use phase::Phase;
/// Re-export progress types.
pub use progress::{Counters, ProgressState};
