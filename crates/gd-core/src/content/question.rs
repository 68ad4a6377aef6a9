//! Assessment questions shared by quizzes, the scenario test, and the
//! post-test.

use serde::Deserialize;

/// A question with a single correct option.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    /// The question or situation text.
    pub text: String,
    /// Ordered answer options.
    #[serde(default)]
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct: usize,
    /// Wisdom granted for a correct answer (quiz and scenario test only).
    #[serde(default)]
    pub reward: Option<i32>,
    /// Explanation revealed after answering.
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Question {
    /// Create a question.
    pub fn new<S: Into<String>>(
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: usize,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
            reward: None,
            explanation: None,
        }
    }

    /// Set the reward.
    pub fn with_reward(mut self, reward: i32) -> Self {
        self.reward = Some(reward);
        self
    }

    /// Set the explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Whether `selected` is the correct option.
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct
    }

    /// Whether `selected` names one of the options.
    pub fn has_option(&self, selected: usize) -> bool {
        selected < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correctness() {
        let q = Question::new("Is 50% a month realistic?", ["Yes", "No"], 1).with_reward(5);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert!(q.has_option(1));
        assert!(!q.has_option(2));
        assert_eq!(q.reward, Some(5));
    }

    #[test]
    fn options_default_to_empty() {
        let q: Question = serde_json::from_str(r#"{ "text": "A stranger calls", "correct": 0 }"#)
            .unwrap();
        assert!(q.options.is_empty());
        assert!(q.reward.is_none());
    }
}
