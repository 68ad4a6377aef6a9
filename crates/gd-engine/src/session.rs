//! The session facade.
//!
//! [`Game`] owns validated content, the engine configuration, and the
//! current [`GameState`]. Each command runs one event through [`reduce`] and
//! keeps the resulting state.

use std::path::Path;

use gd_core::{Content, Counters, DialogueNode, Level, LevelId, Phase, ProgressState, Question};

use crate::assessment::{AssessmentKind, AssessmentSummary, Grade};
use crate::config::EngineConfig;
use crate::controller::{GameState, reduce};
use crate::error::EngineResult;
use crate::event::{Event, Outcome};

/// How a level appears on the chapter map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    /// Beyond the unlocked frontier.
    Locked,
    /// Unlocked and not yet completed.
    Available,
    /// The frontier level, or the level whose quiz or scenario test is
    /// still running.
    Current,
    /// Completed at least once.
    Completed,
}

/// A play session over one piece of content.
#[derive(Debug, Clone)]
pub struct Game {
    content: Content,
    config: EngineConfig,
    state: GameState,
}

impl Game {
    /// Start a session. The content is validated first.
    pub fn new(content: Content, config: EngineConfig) -> EngineResult<Self> {
        let content = content.checked()?;
        let state = GameState::new(&config);
        Ok(Self {
            content,
            config,
            state,
        })
    }

    /// Parse, validate, and start a session from a JSON document.
    pub fn from_json(source: &str, config: EngineConfig) -> EngineResult<Self> {
        Self::new(Content::from_json(source)?, config)
    }

    /// Load, validate, and start a session from a JSON file.
    pub fn load(path: &Path, config: EngineConfig) -> EngineResult<Self> {
        Self::new(Content::load(path)?, config)
    }

    /// The loaded content.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The full engine state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one event through the reducer.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        let transition = reduce(&self.content, &self.config, &self.state, event);
        self.state = transition.state;
        transition.outcome
    }

    /// Leave the landing screen.
    pub fn start(&mut self) -> Outcome {
        self.dispatch(Event::Start)
    }

    /// Enter the level at `index` (0-based).
    pub fn select_level(&mut self, index: usize) -> Outcome {
        self.dispatch(Event::SelectLevel(index))
    }

    /// Pick the choice at `index` on the current dialogue node.
    pub fn choose_dialogue_option(&mut self, index: usize) -> Outcome {
        self.dispatch(Event::Choose(index))
    }

    /// Answer the current assessment question.
    pub fn submit_answer(&mut self, option: usize) -> Outcome {
        self.dispatch(Event::Answer(option))
    }

    /// Move past the answered question.
    pub fn advance(&mut self) -> Outcome {
        self.dispatch(Event::Advance)
    }

    /// Leave a finished assessment.
    pub fn finish(&mut self) -> Outcome {
        self.dispatch(Event::Finish)
    }

    /// Show or hide the materials panel.
    pub fn toggle_materials_panel(&mut self) -> Outcome {
        self.dispatch(Event::ToggleMaterialsPanel)
    }

    /// Restore a fresh session.
    pub fn reset(&mut self) -> Outcome {
        self.dispatch(Event::Reset)
    }

    fn progress(&self) -> &ProgressState {
        self.state.progress()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.progress().phase()
    }

    /// Coin balance.
    pub fn coins(&self) -> u32 {
        self.progress().coins()
    }

    /// Wisdom score (0-100).
    pub fn wisdom(&self) -> u32 {
        self.progress().wisdom()
    }

    /// Highest unlocked level index.
    pub fn current_level(&self) -> usize {
        self.progress().current_level()
    }

    /// Index of the level being played.
    pub fn active_level(&self) -> usize {
        self.progress().active_level()
    }

    /// Index of the dialogue node being shown.
    pub fn current_dialogue(&self) -> usize {
        self.progress().current_dialogue()
    }

    /// Ids of completed levels, in completion order.
    pub fn completed_levels(&self) -> &[LevelId] {
        self.progress().completed_levels()
    }

    /// Earned achievements.
    pub fn achievements(&self) -> &[String] {
        self.progress().achievements()
    }

    /// Post-test result (correct answers).
    pub fn post_test_score(&self) -> u32 {
        self.progress().post_test_score()
    }

    /// Session-spanning counters.
    pub fn counters(&self) -> Counters {
        self.state.counters()
    }

    /// Whether the materials panel is shown.
    pub fn materials_panel_open(&self) -> bool {
        self.state.materials_panel_open()
    }

    /// The level being played, outside the landing and map screens.
    pub fn current_level_content(&self) -> Option<&Level> {
        match self.phase() {
            Phase::Landing | Phase::ChapterMap => None,
            _ => self.content.level(self.active_level()),
        }
    }

    /// The dialogue node being shown, during the dialogue phase.
    pub fn current_node(&self) -> Option<&DialogueNode> {
        if self.phase() != Phase::Dialogue {
            return None;
        }
        self.current_level_content()?.dialogue(self.current_dialogue())
    }

    /// The question being asked, while an assessment has questions left.
    pub fn current_question(&self) -> Option<&Question> {
        let run = self.state.assessment()?;
        if run.has_ended() {
            return None;
        }
        run.kind().questions(&self.content).get(run.position())
    }

    /// Everything needed to draw the running assessment.
    pub fn assessment(&self) -> Option<AssessmentSummary> {
        let run = self.state.assessment()?;
        let percent = run.percent();
        let rank = matches!(run.kind(), AssessmentKind::ScenarioTest { .. })
            .then(|| self.config.scenario_rank(run.correct()));
        Some(AssessmentSummary {
            kind: run.kind(),
            position: run.position(),
            total: run.total(),
            correct: run.correct(),
            answered: run.answered(),
            ended: run.has_ended(),
            percent,
            grade: Grade::from_percent(percent),
            rank,
        })
    }

    /// Map status of the level at `index`, if it exists.
    pub fn level_status(&self, index: usize) -> Option<LevelStatus> {
        let level = self.content.level(index)?;
        let progress = self.progress();
        let closing = self.state.assessment().and_then(|run| run.kind().level());
        let status = if closing == Some(index) {
            LevelStatus::Current
        } else if progress.is_level_completed(level.id) {
            LevelStatus::Completed
        } else if index == progress.current_level() {
            LevelStatus::Current
        } else if progress.is_unlocked(index) {
            LevelStatus::Available
        } else {
            LevelStatus::Locked
        };
        Some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::ScenarioRank;
    use crate::error::EngineError;
    use crate::event::Ignored;

    const SAMPLE: &str = r#"{
        "title": "Sample",
        "levels": [
            {
                "id": 1,
                "title": "The Offer",
                "dialogues": [
                    {
                        "speaker": "Stranger",
                        "text": "Double your money in a week!",
                        "redFlags": ["guaranteed returns"],
                        "choices": [
                            { "text": "Ask for proof", "wisdom": 10 },
                            { "text": "Pay now", "coins": -3, "wisdom": -5 }
                        ]
                    },
                    {
                        "text": "Well?",
                        "choices": [{ "text": "No thanks", "wisdom": 5 }]
                    }
                ],
                "quiz": [
                    { "text": "Scam?", "options": ["Yes", "No"], "correct": 0, "reward": 5 }
                ],
                "achievement": "Sceptic"
            },
            {
                "id": 2,
                "title": "Final",
                "dialogues": [
                    { "text": "Ready?", "choices": [{ "text": "Exam", "nextPhase": "posttest" }] }
                ]
            }
        ],
        "postTest": [
            { "text": "Red flag?", "options": ["High returns", "Audited"], "correct": 0 }
        ]
    }"#;

    fn game() -> Game {
        Game::from_json(SAMPLE, EngineConfig::default()).unwrap()
    }

    #[test]
    fn invalid_content_is_rejected() {
        let err = Game::new(Content::new("empty"), EngineConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Content(gd_core::ContentError::Invalid(_))
        ));
    }

    #[test]
    fn full_playthrough() {
        let mut g = game();
        assert_eq!(g.phase(), Phase::Landing);
        assert!(g.current_node().is_none());

        assert!(g.start().is_applied());
        assert_eq!(g.level_status(0), Some(LevelStatus::Current));
        assert_eq!(g.level_status(1), Some(LevelStatus::Locked));

        g.select_level(0);
        assert_eq!(g.current_node().map(|n| n.text.as_str()), Some("Double your money in a week!"));
        g.choose_dialogue_option(0);
        assert_eq!(g.current_dialogue(), 1);
        g.choose_dialogue_option(0);
        assert_eq!(g.phase(), Phase::Quiz);
        assert_eq!(g.wisdom(), 15);
        // not done until the quiz is finished
        assert_eq!(g.level_status(0), Some(LevelStatus::Current));
        assert_eq!(g.current_question().map(|q| q.text.as_str()), Some("Scam?"));

        g.submit_answer(0);
        g.advance();
        let summary = g.assessment().unwrap();
        assert!(summary.ended);
        assert_eq!(summary.percent, 100);
        assert_eq!(summary.grade, Grade::Excellent);
        assert_eq!(summary.rank, None);
        assert!(g.current_question().is_none());

        g.finish();
        assert_eq!(g.phase(), Phase::ChapterMap);
        assert_eq!(g.wisdom(), 20);
        assert_eq!(g.achievements(), &["Sceptic"]);
        assert_eq!(g.level_status(0), Some(LevelStatus::Completed));
        assert_eq!(g.level_status(1), Some(LevelStatus::Current));

        g.select_level(1);
        g.choose_dialogue_option(0);
        assert_eq!(g.phase(), Phase::PostTest);
        assert_eq!(
            g.assessment().map(|a| a.kind),
            Some(AssessmentKind::PostTest)
        );
        g.submit_answer(0);
        g.advance();
        g.finish();
        assert_eq!(g.phase(), Phase::Ending);
        assert_eq!(g.post_test_score(), 1);
        assert_eq!(g.wisdom(), 20);
    }

    #[test]
    fn replaying_a_level_keeps_frontier() {
        let mut g = game();
        g.start();
        g.select_level(0);
        g.choose_dialogue_option(0);
        g.choose_dialogue_option(0);
        g.submit_answer(1);
        g.advance();
        g.finish();
        assert_eq!(g.current_level(), 1);

        assert!(g.select_level(0).is_applied());
        assert_eq!(g.active_level(), 0);
        assert_eq!(g.current_level(), 1);
        assert_eq!(g.level_status(1), Some(LevelStatus::Current));
    }

    #[test]
    fn ignored_commands_report_reason() {
        let mut g = game();
        g.start();
        assert_eq!(
            g.select_level(1),
            Outcome::Ignored(Ignored::LevelLocked {
                index: 1,
                unlocked: 0
            })
        );
        g.select_level(0);
        assert_eq!(
            g.choose_dialogue_option(5),
            Outcome::Ignored(Ignored::UnknownChoice(5))
        );
    }

    #[test]
    fn reset_keeps_counters() {
        let mut g = game();
        g.start();
        g.select_level(0);
        g.choose_dialogue_option(1);
        assert_eq!(g.coins(), 2);
        g.reset();
        assert_eq!(g.phase(), Phase::Landing);
        assert_eq!(g.coins(), 5);
        assert_eq!(g.wisdom(), 0);
        assert_eq!(g.counters().sessions_started, 1);
        g.start();
        assert_eq!(g.counters().sessions_started, 2);
    }

    #[test]
    fn scenario_summary_carries_rank() {
        let mut items = String::new();
        for i in 0..3 {
            if i > 0 {
                items.push(',');
            }
            items.push_str(r#"{ "text": "case", "correct": 0 }"#);
        }
        let json = format!(
            r#"{{
                "levels": [{{
                    "id": 1,
                    "title": "Exam",
                    "scenarioTest": true,
                    "dialogues": [{{ "text": "Go", "choices": [{{ "text": "ok" }}] }}]
                }}],
                "scenarioTest": [{items}]
            }}"#
        );
        let mut g = Game::from_json(&json, EngineConfig::default()).unwrap();
        g.start();
        g.select_level(0);
        g.choose_dialogue_option(0);
        assert_eq!(g.phase(), Phase::ScenarioTest);
        let q = g.current_question().unwrap();
        assert_eq!(q.options.len(), 2);

        g.submit_answer(0);
        let summary = g.assessment().unwrap();
        assert_eq!(summary.rank, Some(ScenarioRank::Apprentice));
        assert_eq!(summary.correct, 1);
    }

    #[test]
    fn panel_toggle() {
        let mut g = game();
        assert!(!g.materials_panel_open());
        g.toggle_materials_panel();
        assert!(g.materials_panel_open());
    }
}
