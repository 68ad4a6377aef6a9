//! The static content model: levels, dialogue, and assessments.
//!
//! Content is authored as a JSON document and validated once at load time.
//! A [`Content`] value that came out of [`Content::from_json`] or
//! [`Content::load`] is guaranteed free of authoring errors, so the engine
//! never has to guard against dangling jumps or unanswerable questions.

mod level;
mod question;
mod validate;

use std::path::Path;

use serde::Deserialize;

use crate::error::{ContentError, ContentResult};

pub use level::{Choice, DialogueNode, Level, LevelId, Route};
pub use question::Question;
pub use validate::validate;

/// Options offered for scenario items that do not author their own.
pub const SCENARIO_VERDICTS: [&str; 2] = ["Scam or pyramid scheme", "Legitimate offer"];

/// The complete, immutable curriculum of a game.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    /// Title of the game.
    #[serde(default)]
    pub title: String,
    /// Ordered levels.
    #[serde(default)]
    pub levels: Vec<Level>,
    /// Items of the shared scenario test.
    #[serde(default, alias = "scenarioTest")]
    pub scenario_test: Vec<Question>,
    /// Items of the final post-test.
    #[serde(default, alias = "postTest")]
    pub post_test: Vec<Question>,
    /// Advice shown in the materials panel and on the ending screen.
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Content {
    /// Create empty content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append a level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.levels.push(level);
        self
    }

    /// Append a scenario test item.
    pub fn with_scenario_item(mut self, item: Question) -> Self {
        self.scenario_test.push(item);
        self
    }

    /// Append a post-test item.
    pub fn with_post_test_item(mut self, item: Question) -> Self {
        self.post_test.push(item);
        self
    }

    /// Append a closing tip.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    /// Parse and validate a JSON content document.
    pub fn from_json(source: &str) -> ContentResult<Self> {
        let content: Self = serde_json::from_str(source)?;
        content.checked()
    }

    /// Read, parse, and validate a JSON content file.
    pub fn load(path: &Path) -> ContentResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Fill in defaults and validate, returning every authoring error at once.
    pub fn checked(mut self) -> ContentResult<Self> {
        for item in &mut self.scenario_test {
            if item.options.is_empty() {
                item.options = SCENARIO_VERDICTS.iter().map(|s| s.to_string()).collect();
            }
        }

        let issues = validate(&self);
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(ContentError::Invalid(issues))
        }
    }

    /// Get a level by index.
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Number of levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of dialogue nodes across all levels.
    pub fn dialogue_count(&self) -> usize {
        self.levels.iter().map(|l| l.dialogues.len()).sum()
    }

    /// Total number of questions across quizzes and both tests.
    pub fn question_count(&self) -> usize {
        self.levels.iter().map(|l| l.quiz.len()).sum::<usize>()
            + self.scenario_test.len()
            + self.post_test.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueKind;

    const SAMPLE: &str = r#"{
        "title": "Golden Detector",
        "levels": [
            {
                "id": 1,
                "title": "Field of Wonders",
                "dialogues": [
                    {
                        "character": "fox",
                        "text": "Bury your coins and they will grow!",
                        "redFlags": ["Guaranteed growth"],
                        "choices": [
                            { "text": "Sounds great", "coins": -5 },
                            { "text": "Prove it", "wisdom": 10, "next": 1 }
                        ]
                    },
                    {
                        "text": "Well... trust me.",
                        "choices": [ { "text": "Leave", "nextLevel": true } ]
                    }
                ],
                "quiz": [
                    { "text": "Red flag?", "options": ["Guarantees", "Licence"], "correct": 0, "reward": 5 }
                ]
            }
        ],
        "scenarioTest": [ { "text": "Earn 300% a month", "correct": 0, "reward": 3 } ],
        "postTest": [ { "text": "Who regulates?", "options": ["The bank", "Nobody"], "correct": 0 } ],
        "tips": ["Check the licence"]
    }"#;

    #[test]
    fn load_sample_document() {
        let content = Content::from_json(SAMPLE).unwrap();
        assert_eq!(content.title, "Golden Detector");
        assert_eq!(content.level_count(), 1);
        assert_eq!(content.dialogue_count(), 2);
        assert_eq!(content.question_count(), 3);

        let level = content.level(0).unwrap();
        assert_eq!(level.id, LevelId(1));
        assert_eq!(level.dialogues[0].speaker.as_deref(), Some("fox"));
        assert_eq!(level.dialogues[0].choices[1].route, Route::Jump(1));
        assert_eq!(level.dialogues[1].choices[0].route, Route::CompleteLevel);
    }

    #[test]
    fn scenario_items_get_default_verdicts() {
        let content = Content::from_json(SAMPLE).unwrap();
        assert_eq!(content.scenario_test[0].options, SCENARIO_VERDICTS);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = Content::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn invalid_content_reports_issues() {
        let source = SAMPLE.replace(r#""next": 1"#, r#""next": 9"#);
        let err = Content::from_json(&source).unwrap_err();
        match err {
            ContentError::Invalid(issues) => {
                assert_eq!(issues.len(), 1);
                assert_eq!(
                    issues[0].kind,
                    IssueKind::JumpOutOfRange { target: 9, len: 2 }
                );
            }
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Content::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("failed to read"));
    }
}
