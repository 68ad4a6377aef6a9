//! Levels, dialogue nodes, and choices.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::question::Question;

/// Stable identifier of a level, as authored in the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub u32);

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A curriculum unit: a dialogue sequence followed by an optional quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    /// Identifier recorded in the completed-levels list.
    pub id: LevelId,
    /// Title shown on the chapter map.
    #[serde(default)]
    pub title: String,
    /// Subtitle shown on the chapter map.
    #[serde(default)]
    pub subtitle: String,
    /// Ordered dialogue nodes.
    #[serde(default)]
    pub dialogues: Vec<DialogueNode>,
    /// Ordered quiz questions (possibly empty).
    #[serde(default)]
    pub quiz: Vec<Question>,
    /// When set, the level ends in the shared scenario test instead of its
    /// own quiz.
    #[serde(default, alias = "scenarioTest")]
    pub scenario_test: bool,
    /// Achievement granted when the level is completed.
    #[serde(default)]
    pub achievement: Option<String>,
}

impl Level {
    /// Create an empty level.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id: LevelId(id),
            title: title.into(),
            subtitle: String::new(),
            dialogues: Vec::new(),
            quiz: Vec::new(),
            scenario_test: false,
            achievement: None,
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Append a dialogue node.
    pub fn with_dialogue(mut self, node: DialogueNode) -> Self {
        self.dialogues.push(node);
        self
    }

    /// Append a quiz question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.quiz.push(question);
        self
    }

    /// End the level in the shared scenario test.
    pub fn with_scenario_test(mut self) -> Self {
        self.scenario_test = true;
        self
    }

    /// Grant an achievement on completion.
    pub fn with_achievement(mut self, achievement: impl Into<String>) -> Self {
        self.achievement = Some(achievement.into());
        self
    }

    /// Get a dialogue node by index.
    pub fn dialogue(&self, index: usize) -> Option<&DialogueNode> {
        self.dialogues.get(index)
    }

    /// Whether finishing the dialogue leads into the level's own quiz.
    pub fn has_quiz(&self) -> bool {
        !self.quiz.is_empty()
    }
}

/// One screen of dialogue: who speaks, what they say, and the answers the
/// player can give.
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueNode {
    /// The character who speaks (a key into the presentation's cast).
    #[serde(default, alias = "character")]
    pub speaker: Option<String>,
    /// The dialogue text.
    pub text: String,
    /// Warning signs highlighted once the text is shown.
    #[serde(default, alias = "redFlags")]
    pub red_flags: Vec<String>,
    /// Available choices.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl DialogueNode {
    /// Create a node with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            speaker: None,
            text: text.into(),
            red_flags: Vec::new(),
            choices: Vec::new(),
        }
    }

    /// Set the speaker.
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Add a red flag.
    pub fn with_red_flag(mut self, flag: impl Into<String>) -> Self {
        self.red_flags.push(flag.into());
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }
}

/// Which node or phase follows a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Advance to the next node, or finish the level after the last one.
    #[default]
    Fallthrough,
    /// Continue at a specific dialogue index within the level.
    Jump(usize),
    /// Finish the level immediately.
    CompleteLevel,
    /// Leave the level and start the post-test.
    PostTest,
}

impl Route {
    /// Collapse the authored routing directives into one route.
    ///
    /// Level completion beats the post-test, which beats an explicit jump.
    pub fn from_directives(complete_level: bool, post_test: bool, jump: Option<usize>) -> Self {
        if complete_level {
            Self::CompleteLevel
        } else if post_test {
            Self::PostTest
        } else if let Some(index) = jump {
            Self::Jump(index)
        } else {
            Self::Fallthrough
        }
    }
}

/// A single answer the player can give at a dialogue node.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "ChoiceDoc")]
pub struct Choice {
    /// The text shown to the player.
    pub text: String,
    /// Decorative icon.
    pub icon: Option<String>,
    /// Wisdom change applied when chosen.
    pub wisdom: Option<i32>,
    /// Coin change applied when chosen.
    pub coins: Option<i32>,
    /// Achievement granted when chosen.
    pub achievement: Option<String>,
    /// Routing directive.
    pub route: Route,
}

impl Choice {
    /// Create a fall-through choice with no effects.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            wisdom: None,
            coins: None,
            achievement: None,
            route: Route::Fallthrough,
        }
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the wisdom change.
    pub fn with_wisdom(mut self, delta: i32) -> Self {
        self.wisdom = Some(delta);
        self
    }

    /// Set the coin change.
    pub fn with_coins(mut self, delta: i32) -> Self {
        self.coins = Some(delta);
        self
    }

    /// Grant an achievement.
    pub fn with_achievement(mut self, achievement: impl Into<String>) -> Self {
        self.achievement = Some(achievement.into());
        self
    }

    /// Set the route.
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }
}

/// Phase names a choice may request through `next_phase`.
#[derive(Debug, Clone, Copy, Deserialize)]
enum NextPhase {
    #[serde(rename = "posttest", alias = "postTest")]
    PostTest,
}

/// A choice as authored: independent routing flags, normalized into a
/// single [`Route`] on load.
#[derive(Debug, Deserialize)]
struct ChoiceDoc {
    text: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    wisdom: Option<i32>,
    #[serde(default)]
    coins: Option<i32>,
    #[serde(default)]
    achievement: Option<String>,
    #[serde(default)]
    next: Option<usize>,
    #[serde(default, alias = "nextLevel")]
    next_level: bool,
    #[serde(default, alias = "nextPhase")]
    next_phase: Option<NextPhase>,
}

impl From<ChoiceDoc> for Choice {
    fn from(doc: ChoiceDoc) -> Self {
        let post_test = matches!(doc.next_phase, Some(NextPhase::PostTest));
        Self {
            text: doc.text,
            icon: doc.icon,
            wisdom: doc.wisdom,
            coins: doc.coins,
            achievement: doc.achievement,
            route: Route::from_directives(doc.next_level, post_test, doc.next),
        }
    }
}
