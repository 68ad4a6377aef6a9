//! The phase controller.
//!
//! [`reduce`] is the only place phases change. It clones the state, applies
//! the event to the clone, and hands back either the new state or the
//! untouched original together with the reason the event was ignored.
//!
//! Phase graph:
//!
//! ```text
//! landing --start--> chapterMap --select--> dialogue
//! dialogue --level done, quiz--------> quiz ---------finish--> chapterMap
//! dialogue --level done, scenario----> scenarioTest -finish--> chapterMap
//! dialogue --level done, no quiz-----> chapterMap
//! dialogue --post-test route---------> postTest -----finish--> ending
//! any --reset--> landing
//! ```

use gd_core::{Content, Counters, Level, Phase, ProgressState};
use tracing::{debug, info};

use crate::assessment::{AssessmentKind, AssessmentRun};
use crate::config::EngineConfig;
use crate::dialogue::{Step, resolve_choice};
use crate::event::{Event, Ignored, Outcome};

/// Full engine state: the progress record plus the bits of presentation
/// state the engine arbitrates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    progress: ProgressState,
    assessment: Option<AssessmentRun>,
    materials_panel_open: bool,
    counters: Counters,
}

impl GameState {
    /// A fresh session according to `config`.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            progress: ProgressState::new(config.starting_coins, config.starting_wisdom),
            assessment: None,
            materials_panel_open: false,
            counters: Counters::default(),
        }
    }

    /// The progress record.
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// The running assessment, if the phase is an assessment phase.
    pub fn assessment(&self) -> Option<&AssessmentRun> {
        self.assessment.as_ref()
    }

    /// Whether the materials panel is shown.
    pub fn materials_panel_open(&self) -> bool {
        self.materials_panel_open
    }

    /// Session-spanning counters.
    pub fn counters(&self) -> Counters {
        self.counters
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

/// The result of reducing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the event.
    pub state: GameState,
    /// Whether the event was applied.
    pub outcome: Outcome,
}

/// Compute the state that follows `event`.
///
/// `content` must have passed validation; jump targets and question indices
/// are trusted.
pub fn reduce(
    content: &Content,
    config: &EngineConfig,
    state: &GameState,
    event: Event,
) -> Transition {
    let mut next = state.clone();
    match apply(content, config, &mut next, event) {
        Ok(()) => {
            debug!(
                event = event.name(),
                from = %state.progress.phase(),
                to = %next.progress.phase(),
                "event applied"
            );
            Transition {
                state: next,
                outcome: Outcome::Applied,
            }
        }
        Err(reason) => {
            debug!(event = event.name(), %reason, "event ignored");
            Transition {
                state: state.clone(),
                outcome: Outcome::Ignored(reason),
            }
        }
    }
}

fn apply(
    content: &Content,
    config: &EngineConfig,
    state: &mut GameState,
    event: Event,
) -> Result<(), Ignored> {
    match event {
        Event::Start => {
            expect_phase(state, event, Phase::Landing)?;
            state.counters.sessions_started += 1;
            state.progress.set_phase(Phase::ChapterMap);
            Ok(())
        }
        Event::SelectLevel(index) => {
            expect_phase(state, event, Phase::ChapterMap)?;
            select_level(content, state, index)
        }
        Event::Choose(index) => {
            expect_phase(state, event, Phase::Dialogue)?;
            choose(content, state, index)
        }
        Event::Answer(option) => {
            let run = running_assessment(state, event)?;
            let kind = run.kind();
            let question = kind
                .questions(content)
                .get(run.position())
                .ok_or(Ignored::AssessmentOver)?;
            let phase = state.progress.phase();
            let reward = state
                .assessment
                .as_mut()
                .ok_or(Ignored::WrongPhase { event, phase })?
                .submit(question, option)?;
            if let Some(reward) = reward.filter(|r| *r != 0) {
                state.progress.add_wisdom(reward);
            }
            Ok(())
        }
        Event::Advance => {
            running_assessment(state, event)?;
            let phase = state.progress.phase();
            let run = state
                .assessment
                .as_mut()
                .ok_or(Ignored::WrongPhase { event, phase })?;
            if run.advance()? {
                info!(
                    phase = %phase,
                    correct = run.correct(),
                    total = run.total(),
                    "assessment ended"
                );
            }
            Ok(())
        }
        Event::Finish => finish_assessment(content, config, state, event),
        Event::ToggleMaterialsPanel => {
            state.materials_panel_open = !state.materials_panel_open;
            Ok(())
        }
        Event::Reset => {
            let counters = if config.keep_counters_on_reset {
                state.counters
            } else {
                Counters::default()
            };
            *state = GameState::new(config);
            state.counters = counters;
            info!(sessions_started = counters.sessions_started, "session reset");
            Ok(())
        }
    }
}

fn expect_phase(state: &GameState, event: Event, expected: Phase) -> Result<(), Ignored> {
    let phase = state.progress.phase();
    if phase == expected {
        Ok(())
    } else {
        Err(Ignored::WrongPhase { event, phase })
    }
}

/// The assessment run belonging to the current phase.
fn running_assessment(state: &GameState, event: Event) -> Result<&AssessmentRun, Ignored> {
    let phase = state.progress.phase();
    state
        .assessment
        .as_ref()
        .filter(|run| run.kind().phase() == phase)
        .ok_or(Ignored::WrongPhase { event, phase })
}

fn select_level(content: &Content, state: &mut GameState, index: usize) -> Result<(), Ignored> {
    let level = content.level(index).ok_or(Ignored::UnknownLevel(index))?;
    if !state.progress.enter_level(index) {
        return Err(Ignored::LevelLocked {
            index,
            unlocked: state.progress.current_level(),
        });
    }

    state.progress.set_phase(Phase::Dialogue);
    if level.dialogues.is_empty() {
        // Nothing to say; go straight to whatever closes the level.
        complete_dialogue(content, state, index, level);
    }
    Ok(())
}

fn choose(content: &Content, state: &mut GameState, index: usize) -> Result<(), Ignored> {
    let level_index = state.progress.active_level();
    let dialogue_index = state.progress.current_dialogue();
    let level = content
        .level(level_index)
        .ok_or(Ignored::UnknownLevel(level_index))?;
    let choice = level
        .dialogue(dialogue_index)
        .and_then(|node| node.choices.get(index))
        .ok_or(Ignored::UnknownChoice(index))?;

    match resolve_choice(level, dialogue_index, choice, &mut state.progress) {
        Step::Continue(next) => state.progress.set_dialogue(next),
        Step::CompleteLevel => complete_dialogue(content, state, level_index, level),
        Step::PostTest => {
            start_assessment(content, state, AssessmentKind::PostTest);
        }
    }
    Ok(())
}

/// The level's dialogue is over: record it, then route to its quiz, the
/// scenario test, or back to the map.
fn complete_dialogue(content: &Content, state: &mut GameState, index: usize, level: &Level) {
    state.progress.complete_level(level.id);

    if level.scenario_test && !content.scenario_test.is_empty() {
        start_assessment(content, state, AssessmentKind::ScenarioTest { level: index });
    } else if level.has_quiz() {
        start_assessment(content, state, AssessmentKind::Quiz { level: index });
    } else {
        close_level(state, index, level);
    }
}

fn start_assessment(content: &Content, state: &mut GameState, kind: AssessmentKind) {
    let total = kind.questions(content).len();
    state.assessment = Some(AssessmentRun::new(kind, total));
    state.progress.set_phase(kind.phase());
}

/// Unlock the next level and return to the map.
fn close_level(state: &mut GameState, index: usize, level: &Level) {
    if let Some(achievement) = &level.achievement {
        state.progress.grant_achievement(achievement);
    }
    state.progress.unlock_after(index);
    state.progress.set_phase(Phase::ChapterMap);
    info!(
        level = %level.id,
        unlocked = state.progress.current_level(),
        "level completed"
    );
}

fn finish_assessment(
    content: &Content,
    config: &EngineConfig,
    state: &mut GameState,
    event: Event,
) -> Result<(), Ignored> {
    let run = running_assessment(state, event)?;
    if !run.has_ended() {
        return Err(Ignored::AssessmentRunning);
    }
    let kind = run.kind();
    let correct = run.correct();

    match kind {
        AssessmentKind::Quiz { level: index } => {
            let level = content.level(index).ok_or(Ignored::UnknownLevel(index))?;
            state.progress.complete_level(level.id);
            close_level(state, index, level);
        }
        AssessmentKind::ScenarioTest { level: index } => {
            let level = content.level(index).ok_or(Ignored::UnknownLevel(index))?;
            let rank = config.scenario_rank(correct);
            state.progress.add_wisdom(config.scenario_bonus(rank));
            state.progress.complete_level(level.id);
            close_level(state, index, level);
        }
        AssessmentKind::PostTest => {
            state.progress.record_post_test_score(correct);
            state.progress.set_phase(Phase::Ending);
            info!(score = correct, "post-test recorded");
        }
    }

    state.assessment = None;
    Ok(())
}
