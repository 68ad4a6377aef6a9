//! Mark the lies in a character's pitch.

use std::collections::BTreeSet;

use crate::assessment::percent;

/// One segment of the pitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The text of the segment.
    pub text: String,
    /// Whether the segment is a lie.
    pub is_lie: bool,
    /// Shown after checking.
    pub explanation: Option<String>,
}

impl Statement {
    /// A truthful segment.
    pub fn truth(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_lie: false,
            explanation: None,
        }
    }

    /// A lie.
    pub fn lie(text: impl Into<String>) -> Self {
        Self {
            is_lie: true,
            ..Self::truth(text)
        }
    }

    /// Set the explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// Result of checking the marked segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Lies that were marked.
    pub found: usize,
    /// Lies in the pitch.
    pub total: usize,
    /// Truthful segments that were marked anyway.
    pub false_alarms: usize,
    /// Share of lies found, 0-100.
    pub score: u32,
}

/// A lie detector round.
#[derive(Debug, Clone)]
pub struct LieDetector {
    speaker: String,
    statements: Vec<Statement>,
    marked: BTreeSet<usize>,
    verdict: Option<Verdict>,
}

impl LieDetector {
    /// Start a round over `statements`.
    pub fn new(speaker: impl Into<String>, statements: Vec<Statement>) -> Self {
        Self {
            speaker: speaker.into(),
            statements,
            marked: BTreeSet::new(),
            verdict: None,
        }
    }

    /// Who is speaking.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// The segments of the pitch.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Whether the segment at `index` is marked.
    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// The verdict, once checked.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Mark or unmark a segment. Returns `false` when the index is unknown
    /// or the round has already been checked.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.verdict.is_some() || index >= self.statements.len() {
            return false;
        }
        if !self.marked.remove(&index) {
            self.marked.insert(index);
        }
        true
    }

    /// Score the marked segments. Needs at least one mark; checking twice
    /// returns the first verdict.
    pub fn check(&mut self) -> Option<Verdict> {
        if let Some(verdict) = self.verdict {
            return Some(verdict);
        }
        if self.marked.is_empty() {
            return None;
        }

        let mut found = 0;
        let mut total = 0;
        let mut false_alarms = 0;
        for (i, statement) in self.statements.iter().enumerate() {
            let marked = self.marked.contains(&i);
            match (statement.is_lie, marked) {
                (true, true) => {
                    found += 1;
                    total += 1;
                }
                (true, false) => total += 1,
                (false, true) => false_alarms += 1,
                (false, false) => {}
            }
        }

        let score = if total == 0 {
            100
        } else {
            percent(u32::try_from(found).unwrap_or(u32::MAX), total)
        };
        let verdict = Verdict {
            found,
            total,
            false_alarms,
            score,
        };
        self.verdict = Some(verdict);
        Some(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> LieDetector {
        LieDetector::new(
            "Victor",
            vec![
                Statement::truth("We've been around since 2019."),
                Statement::lie("Licensed by the central bank.")
                    .with_explanation("The registry has no such licence."),
                Statement::lie("Returns are guaranteed."),
                Statement::lie("Withdraw any time."),
            ],
        )
    }

    #[test]
    fn scores_found_lies() {
        let mut d = round();
        assert!(d.toggle(1));
        assert!(d.toggle(2));
        assert!(d.toggle(0));
        let v = d.check().unwrap();
        assert_eq!(v.found, 2);
        assert_eq!(v.total, 3);
        assert_eq!(v.false_alarms, 1);
        assert_eq!(v.score, 67);
    }

    #[test]
    fn toggle_twice_unmarks() {
        let mut d = round();
        d.toggle(1);
        d.toggle(1);
        assert!(!d.is_marked(1));
        assert_eq!(d.check(), None);
    }

    #[test]
    fn frozen_after_check() {
        let mut d = round();
        d.toggle(3);
        let first = d.check().unwrap();
        assert!(!d.toggle(1));
        assert_eq!(d.check(), Some(first));
        assert_eq!(first.score, 33);
    }

    #[test]
    fn no_lies_scores_full() {
        let mut d = LieDetector::new("Bank", vec![Statement::truth("Deposits are insured.")]);
        d.toggle(0);
        let v = d.check().unwrap();
        assert_eq!(v.score, 100);
        assert_eq!(v.false_alarms, 1);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut d = round();
        assert!(!d.toggle(9));
    }
}
