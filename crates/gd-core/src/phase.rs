use std::fmt;

use serde::{Deserialize, Serialize};

/// The coarse-grained screen/mode a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Title screen before the session starts.
    #[default]
    Landing,
    /// Level selection.
    ChapterMap,
    /// Inside a level's dialogue.
    Dialogue,
    /// A level's own quiz.
    Quiz,
    /// The shared scenario test.
    ScenarioTest,
    /// The final test.
    PostTest,
    /// Results; left only through a reset.
    Ending,
}

impl Phase {
    /// All phases, in the order a straight play-through visits them.
    pub const ALL: [Phase; 7] = [
        Phase::Landing,
        Phase::ChapterMap,
        Phase::Dialogue,
        Phase::Quiz,
        Phase::ScenarioTest,
        Phase::PostTest,
        Phase::Ending,
    ];

    /// Whether the phase is driven by the assessment scorer.
    pub fn is_assessment(self) -> bool {
        matches!(self, Self::Quiz | Self::ScenarioTest | Self::PostTest)
    }

    /// Whether the phase can only be left through a reset.
    pub fn is_terminal(self) -> bool {
        self == Self::Ending
    }

    /// The camelCase name used in content and state dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::ChapterMap => "chapterMap",
            Self::Dialogue => "dialogue",
            Self::Quiz => "quiz",
            Self::ScenarioTest => "scenarioTest",
            Self::PostTest => "postTest",
            Self::Ending => "ending",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_landing() {
        assert_eq!(Phase::default(), Phase::Landing);
    }

    #[test]
    fn serde_names_match_display() {
        for phase in Phase::ALL {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{phase}\""));
        }
    }

    #[test]
    fn classification() {
        assert!(Phase::Quiz.is_assessment());
        assert!(Phase::PostTest.is_assessment());
        assert!(!Phase::Dialogue.is_assessment());
        assert!(Phase::Ending.is_terminal());
        assert!(!Phase::Landing.is_terminal());
    }
}
