//! The mutable record of a play session.
//!
//! [`ProgressState`] owns the numeric invariants: wisdom stays within
//! `0..=WISDOM_MAX`, coins never go negative, and the unlocked-level
//! frontier never moves backwards. Every mutator clamps instead of failing.

use std::collections::HashSet;

use serde::Serialize;

use crate::content::LevelId;
use crate::phase::Phase;

/// Upper bound of the wisdom score.
pub const WISDOM_MAX: u32 = 100;

/// Coins a new session starts with.
pub const DEFAULT_STARTING_COINS: u32 = 5;

/// Progress of a single play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    coins: u32,
    wisdom: u32,
    /// Highest unlocked level index. Monotonic until a full reset.
    current_level: usize,
    /// Level being played. Equals `current_level` unless replaying.
    active_level: usize,
    current_dialogue: usize,
    completed_levels: Vec<LevelId>,
    achievements: Vec<String>,
    post_test_score: u32,
    phase: Phase,
}

impl ProgressState {
    /// Create a fresh session record.
    pub fn new(starting_coins: u32, starting_wisdom: u32) -> Self {
        Self {
            coins: starting_coins,
            wisdom: starting_wisdom.min(WISDOM_MAX),
            current_level: 0,
            active_level: 0,
            current_dialogue: 0,
            completed_levels: Vec::new(),
            achievements: Vec::new(),
            post_test_score: 0,
            phase: Phase::Landing,
        }
    }

    /// Current coin balance.
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Current wisdom, within `0..=WISDOM_MAX`.
    pub fn wisdom(&self) -> u32 {
        self.wisdom
    }

    /// Highest unlocked level index.
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Index of the level being played.
    pub fn active_level(&self) -> usize {
        self.active_level
    }

    /// Index of the dialogue node being shown in the active level.
    pub fn current_dialogue(&self) -> usize {
        self.current_dialogue
    }

    /// Completed level ids in completion order. Replays append again.
    pub fn completed_levels(&self) -> &[LevelId] {
        &self.completed_levels
    }

    /// Earned achievements in the order they were granted.
    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    /// Correct answers recorded for the post-test.
    pub fn post_test_score(&self) -> u32 {
        self.post_test_score
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Add (or subtract) coins, flooring at zero. Returns the new balance.
    pub fn add_coins(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.coins) + i64::from(delta);
        self.coins = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
        self.coins
    }

    /// Add (or subtract) wisdom, clamped to `0..=WISDOM_MAX`. Returns the
    /// new value.
    pub fn add_wisdom(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.wisdom) + i64::from(delta);
        self.wisdom = next.clamp(0, i64::from(WISDOM_MAX)) as u32;
        self.wisdom
    }

    /// Switch phase.
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Whether the level at `index` may be entered.
    pub fn is_unlocked(&self, index: usize) -> bool {
        index <= self.current_level
    }

    /// Make `index` the active level, starting at its first dialogue node.
    ///
    /// Refuses (returns `false`) for levels beyond the unlocked frontier.
    pub fn enter_level(&mut self, index: usize) -> bool {
        if !self.is_unlocked(index) {
            return false;
        }
        self.active_level = index;
        self.current_dialogue = 0;
        true
    }

    /// Move to a dialogue node of the active level.
    pub fn set_dialogue(&mut self, index: usize) {
        self.current_dialogue = index;
    }

    /// Unlock the level after `completed_index`. The frontier never moves
    /// backwards, so completing a replayed level leaves it where it is.
    pub fn unlock_after(&mut self, completed_index: usize) {
        self.current_level = self.current_level.max(completed_index + 1);
    }

    /// Append a level id to the completed list.
    pub fn complete_level(&mut self, id: LevelId) {
        self.completed_levels.push(id);
    }

    /// Whether a level has been completed at least once.
    pub fn is_level_completed(&self, id: LevelId) -> bool {
        self.completed_levels.contains(&id)
    }

    /// Number of distinct completed levels.
    pub fn completed_count(&self) -> usize {
        self.completed_levels.iter().collect::<HashSet<_>>().len()
    }

    /// Grant an achievement. Returns `false` if it was already earned.
    pub fn grant_achievement(&mut self, achievement: &str) -> bool {
        if self.achievements.iter().any(|a| a == achievement) {
            return false;
        }
        self.achievements.push(achievement.to_string());
        true
    }

    /// Store the post-test result.
    pub fn record_post_test_score(&mut self, score: u32) {
        self.post_test_score = score;
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_COINS, 0)
    }
}

/// Counters that describe more than one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    /// How many times a session has been started from the landing screen.
    pub sessions_started: u64,
}
