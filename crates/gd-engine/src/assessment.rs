//! Assessment scoring shared by quizzes, the scenario test, and the post-test.
//!
//! An [`AssessmentRun`] walks a question sequence one item at a time. Each
//! question takes exactly one answer; a second submission is ignored so a
//! double click cannot score twice. The caller moves on with
//! [`AssessmentRun::advance`] whenever its reveal delay is over, and the run
//! ends after the last question has been advanced past.

use std::fmt;

use gd_core::{Content, Phase, Question};

use crate::event::Ignored;

/// Which question sequence an assessment draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentKind {
    /// The quiz of the level at this index.
    Quiz {
        /// Level index.
        level: usize,
    },
    /// The shared scenario test, closing the level at this index.
    ScenarioTest {
        /// Level index.
        level: usize,
    },
    /// The final post-test.
    PostTest,
}

impl AssessmentKind {
    /// The phase in which this assessment runs.
    pub fn phase(self) -> Phase {
        match self {
            Self::Quiz { .. } => Phase::Quiz,
            Self::ScenarioTest { .. } => Phase::ScenarioTest,
            Self::PostTest => Phase::PostTest,
        }
    }

    /// The questions of this assessment.
    pub fn questions(self, content: &Content) -> &[Question] {
        match self {
            Self::Quiz { level } => content
                .level(level)
                .map(|l| l.quiz.as_slice())
                .unwrap_or(&[]),
            Self::ScenarioTest { .. } => &content.scenario_test,
            Self::PostTest => &content.post_test,
        }
    }

    /// The level this assessment closes, if any.
    pub fn level(self) -> Option<usize> {
        match self {
            Self::Quiz { level } | Self::ScenarioTest { level } => Some(level),
            Self::PostTest => None,
        }
    }

    /// Whether correct answers pay out their per-question reward as wisdom.
    pub fn grants_rewards(self) -> bool {
        !matches!(self, Self::PostTest)
    }
}

/// The answer given to the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answered {
    /// Selected option index.
    pub selected: usize,
    /// Whether it was correct.
    pub correct: bool,
}

/// A running assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRun {
    kind: AssessmentKind,
    position: usize,
    total: usize,
    answered: Option<Answered>,
    correct: u32,
    ended: bool,
}

impl AssessmentRun {
    /// Start an assessment over `total` questions. An empty sequence ends
    /// immediately.
    pub fn new(kind: AssessmentKind, total: usize) -> Self {
        Self {
            kind,
            position: 0,
            total,
            answered: None,
            correct: 0,
            ended: total == 0,
        }
    }

    /// Which assessment this is.
    pub fn kind(&self) -> AssessmentKind {
        self.kind
    }

    /// Index of the current question.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of questions.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Correct answers so far.
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// The answer to the current question, if given.
    pub fn answered(&self) -> Option<Answered> {
        self.answered
    }

    /// Whether every question has been answered and advanced past.
    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Answer the current question. Returns the reward the answer earns
    /// (`Some(0)` for a correct answer without a reward, `None` when wrong).
    pub fn submit(&mut self, question: &Question, selected: usize) -> Result<Option<i32>, Ignored> {
        if self.ended {
            return Err(Ignored::AssessmentOver);
        }
        if self.answered.is_some() {
            return Err(Ignored::AlreadyAnswered);
        }
        if !question.has_option(selected) {
            return Err(Ignored::OptionOutOfRange(selected));
        }

        let correct = question.is_correct(selected);
        self.answered = Some(Answered { selected, correct });
        if !correct {
            return Ok(None);
        }

        self.correct += 1;
        let reward = if self.kind.grants_rewards() {
            question.reward.unwrap_or(0)
        } else {
            0
        };
        Ok(Some(reward))
    }

    /// Move past the answered question. Returns `true` when that was the
    /// last one and the assessment has ended.
    pub fn advance(&mut self) -> Result<bool, Ignored> {
        if self.ended {
            return Err(Ignored::AssessmentOver);
        }
        if self.answered.is_none() {
            return Err(Ignored::NotAnswered);
        }

        self.answered = None;
        self.position += 1;
        if self.position >= self.total {
            self.ended = true;
        }
        Ok(self.ended)
    }

    /// Share of correct answers, rounded to a whole percent.
    pub fn percent(&self) -> u32 {
        percent(self.correct, self.total)
    }
}

/// `part / total` as a whole percent, rounding halves up.
pub(crate) fn percent(part: u32, total: usize) -> u32 {
    let total = u64::try_from(total).unwrap_or(u64::MAX);
    if total == 0 {
        return 0;
    }
    let rounded = (200 * u64::from(part) + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Feedback band for an assessment result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// 80% or better.
    Excellent,
    /// 60% or better.
    Good,
    /// Below 60%.
    KeepPracticing,
}

impl Grade {
    /// Grade a percentage.
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            Self::Excellent
        } else if percent >= 60 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent!"),
            Self::Good => write!(f, "Good!"),
            Self::KeepPracticing => write!(f, "Keep practicing!"),
        }
    }
}

/// Rank earned in the scenario test; each rank carries a wisdom bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioRank {
    /// Top tier.
    Expert,
    /// Middle tier.
    Experienced,
    /// Everyone else.
    Apprentice,
}

impl fmt::Display for ScenarioRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expert => write!(f, "Detector Expert"),
            Self::Experienced => write!(f, "Experienced Detective"),
            Self::Apprentice => write!(f, "Apprentice"),
        }
    }
}

/// Everything the presentation needs to draw an assessment screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSummary {
    /// Which assessment.
    pub kind: AssessmentKind,
    /// Current question index.
    pub position: usize,
    /// Number of questions.
    pub total: usize,
    /// Correct answers so far.
    pub correct: u32,
    /// Answer to the current question, if given.
    pub answered: Option<Answered>,
    /// Whether the result screen is due.
    pub ended: bool,
    /// Correct share in whole percent.
    pub percent: u32,
    /// Feedback band.
    pub grade: Grade,
    /// Scenario rank (scenario test only).
    pub rank: Option<ScenarioRank>,
}
