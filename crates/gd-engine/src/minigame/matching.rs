//! Pair every legitimate offer with its scam counterpart.

use std::collections::BTreeSet;

/// A legitimate offer and the scam that imitates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPair {
    /// Pair identifier; a match succeeds when both sides share it.
    pub id: u32,
    /// The legitimate offer.
    pub legitimate: String,
    /// The scam offer.
    pub scam: String,
    /// Shown once the pair is matched.
    pub explanation: String,
    /// Warning signs in the scam offer.
    pub red_flags: Vec<String>,
}

impl MatchPair {
    /// Create a pair.
    pub fn new(id: u32, legitimate: impl Into<String>, scam: impl Into<String>) -> Self {
        Self {
            id,
            legitimate: legitimate.into(),
            scam: scam.into(),
            explanation: String::new(),
            red_flags: Vec::new(),
        }
    }

    /// Set the explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Add a red flag.
    pub fn with_red_flag(mut self, flag: impl Into<String>) -> Self {
        self.red_flags.push(flag.into());
        self
    }
}

/// What a selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The selection was recorded; waiting for the other side.
    Selected,
    /// Both sides agreed; the pair with this id is matched.
    Matched(u32),
    /// The two sides belong to different pairs.
    Mismatch,
    /// Unknown or already matched id.
    Ignored,
}

/// A match game in progress.
#[derive(Debug, Clone, Default)]
pub struct MatchGame {
    pairs: Vec<MatchPair>,
    matched: BTreeSet<u32>,
    legitimate: Option<u32>,
    scam: Option<u32>,
    score: u32,
    attempts: u32,
}

impl MatchGame {
    /// Start a game over `pairs`.
    pub fn new(pairs: Vec<MatchPair>) -> Self {
        Self {
            pairs,
            ..Self::default()
        }
    }

    /// The pairs in play.
    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    /// Correct matches.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Attempts, successful or not.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the pair with `id` is matched.
    pub fn is_matched(&self, id: u32) -> bool {
        self.matched.contains(&id)
    }

    /// Whether every pair is matched.
    pub fn is_complete(&self) -> bool {
        self.matched.len() == self.pairs.len()
    }

    /// The current selection, as (legitimate, scam).
    pub fn selection(&self) -> (Option<u32>, Option<u32>) {
        (self.legitimate, self.scam)
    }

    /// Select a legitimate offer.
    pub fn select_legitimate(&mut self, id: u32) -> MatchResult {
        if !self.selectable(id) {
            return MatchResult::Ignored;
        }
        self.legitimate = Some(id);
        self.try_match()
    }

    /// Select a scam offer.
    pub fn select_scam(&mut self, id: u32) -> MatchResult {
        if !self.selectable(id) {
            return MatchResult::Ignored;
        }
        self.scam = Some(id);
        self.try_match()
    }

    fn selectable(&self, id: u32) -> bool {
        !self.matched.contains(&id) && self.pairs.iter().any(|p| p.id == id)
    }

    fn try_match(&mut self) -> MatchResult {
        let (Some(legitimate), Some(scam)) = (self.legitimate, self.scam) else {
            return MatchResult::Selected;
        };
        self.attempts += 1;
        self.legitimate = None;
        self.scam = None;

        if legitimate == scam {
            self.matched.insert(legitimate);
            self.score += 1;
            MatchResult::Matched(legitimate)
        } else {
            MatchResult::Mismatch
        }
    }
}
