//! Configuration for a game session.

use gd_core::progress::{DEFAULT_STARTING_COINS, WISDOM_MAX};

use crate::assessment::ScenarioRank;

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Coins a fresh session starts with.
    pub starting_coins: u32,
    /// Wisdom a fresh session starts with (0-100).
    pub starting_wisdom: u32,
    /// Correct scenario answers needed for the expert bonus.
    pub expert_threshold: u32,
    /// Correct scenario answers needed for the experienced bonus.
    pub experienced_threshold: u32,
    /// Wisdom bonus for an expert scenario result.
    pub expert_bonus: i32,
    /// Wisdom bonus for an experienced scenario result.
    pub experienced_bonus: i32,
    /// Wisdom bonus for any other scenario result.
    pub apprentice_bonus: i32,
    /// Whether session-spanning counters survive a reset.
    pub keep_counters_on_reset: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_coins: DEFAULT_STARTING_COINS,
            starting_wisdom: 0,
            expert_threshold: 8,
            experienced_threshold: 6,
            expert_bonus: 60,
            experienced_bonus: 40,
            apprentice_bonus: 20,
            keep_counters_on_reset: true,
        }
    }
}

impl EngineConfig {
    /// Set the starting coins.
    pub fn with_starting_coins(mut self, coins: u32) -> Self {
        self.starting_coins = coins;
        self
    }

    /// Set the starting wisdom (clamped to 0-100).
    pub fn with_starting_wisdom(mut self, wisdom: u32) -> Self {
        self.starting_wisdom = wisdom.min(WISDOM_MAX);
        self
    }

    /// Set the scenario thresholds. The experienced threshold is clamped so
    /// it never exceeds the expert threshold.
    pub fn with_scenario_thresholds(mut self, expert: u32, experienced: u32) -> Self {
        self.expert_threshold = expert;
        self.experienced_threshold = experienced.min(expert);
        self
    }

    /// Set the scenario bonuses, from best to worst rank.
    pub fn with_scenario_bonuses(mut self, expert: i32, experienced: i32, apprentice: i32) -> Self {
        self.expert_bonus = expert;
        self.experienced_bonus = experienced;
        self.apprentice_bonus = apprentice;
        self
    }

    /// Choose whether counters survive a reset.
    pub fn with_keep_counters_on_reset(mut self, keep: bool) -> Self {
        self.keep_counters_on_reset = keep;
        self
    }

    /// Rank a scenario test result.
    pub fn scenario_rank(&self, correct: u32) -> ScenarioRank {
        if correct >= self.expert_threshold {
            ScenarioRank::Expert
        } else if correct >= self.experienced_threshold {
            ScenarioRank::Experienced
        } else {
            ScenarioRank::Apprentice
        }
    }

    /// Wisdom bonus granted for a scenario rank.
    pub fn scenario_bonus(&self, rank: ScenarioRank) -> i32 {
        match rank {
            ScenarioRank::Expert => self.expert_bonus,
            ScenarioRank::Experienced => self.experienced_bonus,
            ScenarioRank::Apprentice => self.apprentice_bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.starting_coins, 5);
        assert_eq!(cfg.starting_wisdom, 0);
        assert!(cfg.keep_counters_on_reset);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_starting_coins(12)
            .with_starting_wisdom(30)
            .with_keep_counters_on_reset(false);
        assert_eq!(cfg.starting_coins, 12);
        assert_eq!(cfg.starting_wisdom, 30);
        assert!(!cfg.keep_counters_on_reset);
    }

    #[test]
    fn wisdom_clamped() {
        let cfg = EngineConfig::default().with_starting_wisdom(400);
        assert_eq!(cfg.starting_wisdom, 100);
    }

    #[test]
    fn tier_boundaries() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.scenario_rank(10), ScenarioRank::Expert);
        assert_eq!(cfg.scenario_rank(8), ScenarioRank::Expert);
        assert_eq!(cfg.scenario_rank(7), ScenarioRank::Experienced);
        assert_eq!(cfg.scenario_rank(6), ScenarioRank::Experienced);
        assert_eq!(cfg.scenario_rank(5), ScenarioRank::Apprentice);
        assert_eq!(cfg.scenario_rank(0), ScenarioRank::Apprentice);

        assert_eq!(cfg.scenario_bonus(ScenarioRank::Expert), 60);
        assert_eq!(cfg.scenario_bonus(ScenarioRank::Experienced), 40);
        assert_eq!(cfg.scenario_bonus(ScenarioRank::Apprentice), 20);
    }

    #[test]
    fn experienced_threshold_clamped_to_expert() {
        let cfg = EngineConfig::default().with_scenario_thresholds(3, 9);
        assert_eq!(cfg.experienced_threshold, 3);
        assert_eq!(cfg.scenario_rank(3), ScenarioRank::Expert);
    }
}
