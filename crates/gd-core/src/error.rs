use std::fmt;
use std::path::PathBuf;

use crate::content::LevelId;

/// Alias for `Result<T, ContentError>`.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content document is not well-formed.
    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),

    /// The content parsed but contains authoring errors.
    #[error(
        "content failed validation with {} issue{}",
        .0.len(),
        if .0.len() == 1 { "" } else { "s" }
    )]
    Invalid(Vec<ContentIssue>),
}

/// Where in the content an authoring error was found. Indices are 0-based,
/// matching the positions in the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The document as a whole.
    Content,
    /// A level.
    Level {
        /// Level index.
        level: usize,
    },
    /// A dialogue node inside a level.
    Dialogue {
        /// Level index.
        level: usize,
        /// Dialogue index within the level.
        dialogue: usize,
    },
    /// A choice on a dialogue node.
    Choice {
        /// Level index.
        level: usize,
        /// Dialogue index within the level.
        dialogue: usize,
        /// Choice index within the node.
        choice: usize,
    },
    /// A quiz question of a level.
    Quiz {
        /// Level index.
        level: usize,
        /// Question index within the quiz.
        question: usize,
    },
    /// An item of the shared scenario test.
    ScenarioTest {
        /// Item index.
        item: usize,
    },
    /// An item of the post-test.
    PostTest {
        /// Item index.
        item: usize,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content => write!(f, "content"),
            Self::Level { level } => write!(f, "level {level}"),
            Self::Dialogue { level, dialogue } => {
                write!(f, "level {level}, dialogue {dialogue}")
            }
            Self::Choice {
                level,
                dialogue,
                choice,
            } => write!(f, "level {level}, dialogue {dialogue}, choice {choice}"),
            Self::Quiz { level, question } => write!(f, "level {level}, quiz question {question}"),
            Self::ScenarioTest { item } => write!(f, "scenario test item {item}"),
            Self::PostTest { item } => write!(f, "post-test item {item}"),
        }
    }
}

/// The kind of authoring error found during validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueKind {
    /// The curriculum has no levels at all.
    #[error("no levels defined")]
    NoLevels,

    /// Two levels share an identifier.
    #[error("duplicate level id {0}")]
    DuplicateLevelId(LevelId),

    /// A dialogue node offers no way forward.
    #[error("dialogue node has no choices")]
    NoChoices,

    /// An explicit jump points outside the level's dialogue sequence.
    #[error("jump target {target} is out of range (level has {len} dialogues)")]
    JumpOutOfRange {
        /// The authored target index.
        target: usize,
        /// Number of dialogue nodes in the level.
        len: usize,
    },

    /// A question offers no answer options.
    #[error("question has no options")]
    NoOptions,

    /// The correct index matches none of the options.
    #[error("correct option {correct} is out of range ({options} options)")]
    CorrectOutOfRange {
        /// The authored correct index.
        correct: usize,
        /// Number of options.
        options: usize,
    },

    /// A question reward would take wisdom away.
    #[error("reward {0} is negative")]
    NegativeReward(i32),

    /// A level ends in the scenario test, but the scenario test is empty.
    #[error("level ends in the scenario test but it has no items")]
    EmptyScenarioTest,

    /// A level ends in the scenario test and also authors its own quiz,
    /// which would never be reached.
    #[error("level ends in the scenario test but also has {0} quiz question(s)")]
    ScenarioLevelHasQuiz(usize),

    /// A choice routes to the post-test, but the post-test is empty.
    #[error("choice routes to the post-test but it has no items")]
    EmptyPostTest,
}

/// A single authoring error with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    /// Where the problem is.
    pub location: Location,
    /// What the problem is.
    pub kind: IssueKind,
}

impl ContentIssue {
    /// Create an issue at the given location.
    pub fn new(location: Location, kind: IssueKind) -> Self {
        Self { location, kind }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}
