use std::collections::HashSet;

use super::{Content, Question, Route};
use crate::error::{ContentIssue, IssueKind, Location};

/// Check content for authoring errors.
///
/// Returns every issue found, in document order. An empty list means the
/// content can be played without the engine ever reading past a sequence.
pub fn validate(content: &Content) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if content.levels.is_empty() {
        issues.push(ContentIssue::new(Location::Content, IssueKind::NoLevels));
    }

    let mut seen_ids = HashSet::new();
    for (li, level) in content.levels.iter().enumerate() {
        if !seen_ids.insert(level.id) {
            issues.push(ContentIssue::new(
                Location::Level { level: li },
                IssueKind::DuplicateLevelId(level.id),
            ));
        }

        if level.scenario_test && content.scenario_test.is_empty() {
            issues.push(ContentIssue::new(
                Location::Level { level: li },
                IssueKind::EmptyScenarioTest,
            ));
        }
        if level.scenario_test && !level.quiz.is_empty() {
            issues.push(ContentIssue::new(
                Location::Level { level: li },
                IssueKind::ScenarioLevelHasQuiz(level.quiz.len()),
            ));
        }

        let len = level.dialogues.len();
        for (di, node) in level.dialogues.iter().enumerate() {
            if node.choices.is_empty() {
                issues.push(ContentIssue::new(
                    Location::Dialogue {
                        level: li,
                        dialogue: di,
                    },
                    IssueKind::NoChoices,
                ));
            }

            for (ci, choice) in node.choices.iter().enumerate() {
                let location = Location::Choice {
                    level: li,
                    dialogue: di,
                    choice: ci,
                };
                match choice.route {
                    Route::Jump(target) if target >= len => {
                        issues.push(ContentIssue::new(
                            location,
                            IssueKind::JumpOutOfRange { target, len },
                        ));
                    }
                    Route::PostTest if content.post_test.is_empty() => {
                        issues.push(ContentIssue::new(location, IssueKind::EmptyPostTest));
                    }
                    _ => {}
                }
            }
        }

        for (qi, question) in level.quiz.iter().enumerate() {
            check_question(
                question,
                Location::Quiz {
                    level: li,
                    question: qi,
                },
                &mut issues,
            );
        }
    }

    for (i, item) in content.scenario_test.iter().enumerate() {
        check_question(item, Location::ScenarioTest { item: i }, &mut issues);
    }
    for (i, item) in content.post_test.iter().enumerate() {
        check_question(item, Location::PostTest { item: i }, &mut issues);
    }

    issues
}

fn check_question(question: &Question, location: Location, issues: &mut Vec<ContentIssue>) {
    if question.options.is_empty() {
        issues.push(ContentIssue::new(location, IssueKind::NoOptions));
    } else if !question.has_option(question.correct) {
        issues.push(ContentIssue::new(
            location,
            IssueKind::CorrectOutOfRange {
                correct: question.correct,
                options: question.options.len(),
            },
        ));
    }

    if let Some(reward) = question.reward.filter(|r| *r < 0) {
        issues.push(ContentIssue::new(location, IssueKind::NegativeReward(reward)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Choice, DialogueNode, Level};

    fn node(choice: Choice) -> DialogueNode {
        DialogueNode::new("...").with_choice(choice)
    }

    fn rendered(issues: &[ContentIssue]) -> String {
        issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    #[test]
    fn valid_content_has_no_issues() {
        let content = Content::new("ok")
            .with_level(
                Level::new(1, "One")
                    .with_dialogue(node(Choice::new("next").with_route(Route::Jump(1))))
                    .with_dialogue(node(Choice::new("done")))
                    .with_question(Question::new("q", ["a", "b"], 1)),
            )
            .with_post_test_item(Question::new("p", ["a"], 0));
        assert!(validate(&content).is_empty());
    }

    #[test]
    fn empty_content_has_no_levels() {
        let issues = validate(&Content::new("empty"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::NoLevels);
    }

    #[test]
    fn level_without_dialogue_is_allowed() {
        let content = Content::new("quiz only")
            .with_level(Level::new(1, "Quiz").with_question(Question::new("q", ["a"], 0)));
        assert!(validate(&content).is_empty());
    }

    #[test]
    fn jump_out_of_range() {
        let content = Content::new("bad jump").with_level(
            Level::new(7, "Jumpy").with_dialogue(node(Choice::new("go").with_route(Route::Jump(3)))),
        );
        insta::assert_snapshot!(
            rendered(&validate(&content)),
            @"level 0, dialogue 0, choice 0: jump target 3 is out of range (level has 1 dialogues)"
        );
    }

    #[test]
    fn every_issue_is_reported() {
        let content = Content::new("broken")
            .with_level(
                Level::new(1, "A")
                    .with_dialogue(DialogueNode::new("dead end"))
                    .with_question(Question::new("q", ["a", "b"], 2).with_reward(-1)),
            )
            .with_level(
                Level::new(1, "B")
                    .with_scenario_test()
                    .with_dialogue(node(Choice::new("exam").with_route(Route::PostTest))),
            )
            .with_post_test_item(Question::new("p", Vec::<String>::new(), 0));

        let kinds: Vec<_> = validate(&content).into_iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::NoChoices,
                IssueKind::CorrectOutOfRange {
                    correct: 2,
                    options: 2
                },
                IssueKind::NegativeReward(-1),
                IssueKind::DuplicateLevelId(crate::LevelId(1)),
                IssueKind::EmptyScenarioTest,
                IssueKind::NoOptions,
            ]
        );
    }

    #[test]
    fn scenario_level_cannot_have_quiz() {
        let content = Content::new("both")
            .with_level(
                Level::new(1, "Mixed")
                    .with_scenario_test()
                    .with_dialogue(node(Choice::new("go")))
                    .with_question(Question::new("q", ["a", "b"], 0).with_reward(5)),
            )
            .with_scenario_item(Question::new("s", ["scam", "legit"], 0));
        insta::assert_snapshot!(
            rendered(&validate(&content)),
            @"level 0: level ends in the scenario test but also has 1 quiz question(s)"
        );
    }

    #[test]
    fn post_test_route_needs_items() {
        let content = Content::new("no exam").with_level(
            Level::new(1, "A").with_dialogue(node(Choice::new("exam").with_route(Route::PostTest))),
        );
        insta::assert_snapshot!(
            rendered(&validate(&content)),
            @"level 0, dialogue 0, choice 0: choice routes to the post-test but it has no items"
        );
    }
}
