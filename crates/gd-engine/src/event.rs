//! Events and their outcomes.

use std::fmt;

use gd_core::Phase;

/// A player action. Indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Leave the landing screen.
    Start,
    /// Enter a level from the chapter map.
    SelectLevel(usize),
    /// Pick a choice on the current dialogue node.
    Choose(usize),
    /// Answer the current assessment question.
    Answer(usize),
    /// Move past an answered question.
    Advance,
    /// Leave a finished assessment.
    Finish,
    /// Show or hide the materials panel.
    ToggleMaterialsPanel,
    /// Restore a fresh session.
    Reset,
}

impl Event {
    /// Short name used in logs and messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SelectLevel(_) => "select",
            Self::Choose(_) => "choose",
            Self::Answer(_) => "answer",
            Self::Advance => "next",
            Self::Finish => "finish",
            Self::ToggleMaterialsPanel => "panel",
            Self::Reset => "reset",
        }
    }
}

/// Why an event was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// The event has no meaning in the current phase.
    WrongPhase {
        /// The rejected event.
        event: Event,
        /// Phase at the time.
        phase: Phase,
    },
    /// The level lies beyond the unlocked frontier.
    LevelLocked {
        /// Requested level index.
        index: usize,
        /// Highest unlocked index.
        unlocked: usize,
    },
    /// No level exists at this index.
    UnknownLevel(usize),
    /// The current dialogue node has no choice at this index.
    UnknownChoice(usize),
    /// The current question has no option at this index.
    OptionOutOfRange(usize),
    /// The current question was already answered.
    AlreadyAnswered,
    /// The current question has not been answered yet.
    NotAnswered,
    /// Questions remain in the assessment.
    AssessmentRunning,
    /// Every question has been answered and the assessment has ended.
    AssessmentOver,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongPhase { event, phase } => {
                write!(f, "'{}' is not available during {phase}", event.name())
            }
            Self::LevelLocked { index, unlocked } => write!(
                f,
                "level {} is locked (levels 1-{} are open)",
                index + 1,
                unlocked + 1
            ),
            Self::UnknownLevel(index) => write!(f, "there is no level {}", index + 1),
            Self::UnknownChoice(index) => write!(f, "there is no choice {}", index + 1),
            Self::OptionOutOfRange(index) => write!(f, "there is no option {}", index + 1),
            Self::AlreadyAnswered => write!(f, "this question is already answered"),
            Self::NotAnswered => write!(f, "answer the question first"),
            Self::AssessmentRunning => write!(f, "there are questions left"),
            Self::AssessmentOver => write!(f, "all questions are answered"),
        }
    }
}

/// Result of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state changed.
    Applied,
    /// The event was rejected by a guard; the state is unchanged.
    Ignored(Ignored),
}

impl Outcome {
    /// Whether the event was applied.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    /// The rejection reason, if any.
    pub fn ignored(self) -> Option<Ignored> {
        match self {
            Self::Applied => None,
            Self::Ignored(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_one_based() {
        let locked = Ignored::LevelLocked {
            index: 3,
            unlocked: 1,
        };
        assert_eq!(locked.to_string(), "level 4 is locked (levels 1-2 are open)");
        assert_eq!(Ignored::UnknownChoice(0).to_string(), "there is no choice 1");
    }

    #[test]
    fn wrong_phase_message() {
        let reason = Ignored::WrongPhase {
            event: Event::Answer(0),
            phase: Phase::ChapterMap,
        };
        assert_eq!(reason.to_string(), "'answer' is not available during chapterMap");
    }

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::Applied.is_applied());
        assert_eq!(Outcome::Applied.ignored(), None);
        let o = Outcome::Ignored(Ignored::AlreadyAnswered);
        assert!(!o.is_applied());
        assert_eq!(o.ignored(), Some(Ignored::AlreadyAnswered));
    }
}
