//! Resolving a dialogue choice into the next step.

use gd_core::{Choice, Level, ProgressState, Route};

/// What follows a resolved choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Show the dialogue node at this index of the same level.
    Continue(usize),
    /// The level's dialogue is over.
    CompleteLevel,
    /// Leave the level for the post-test.
    PostTest,
}

/// Apply a choice's effects to `progress` and decide where the dialogue
/// goes next.
///
/// Effects are applied before routing, so a choice that ends the level still
/// pays out its wisdom and coins.
pub fn resolve_choice(
    level: &Level,
    dialogue_index: usize,
    choice: &Choice,
    progress: &mut ProgressState,
) -> Step {
    if let Some(delta) = choice.wisdom {
        progress.add_wisdom(delta);
    }
    if let Some(delta) = choice.coins {
        progress.add_coins(delta);
    }
    if let Some(achievement) = &choice.achievement {
        progress.grant_achievement(achievement);
    }

    next_step(level, dialogue_index, choice.route)
}

/// Route from `dialogue_index` without applying any effects.
pub fn next_step(level: &Level, dialogue_index: usize, route: Route) -> Step {
    match route {
        Route::CompleteLevel => Step::CompleteLevel,
        Route::PostTest => Step::PostTest,
        Route::Jump(target) => {
            debug_assert!(target < level.dialogues.len(), "unvalidated jump target");
            Step::Continue(target)
        }
        Route::Fallthrough => {
            let next = dialogue_index + 1;
            if next < level.dialogues.len() {
                Step::Continue(next)
            } else {
                Step::CompleteLevel
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gd_core::DialogueNode;

    fn three_nodes() -> Level {
        let node = || DialogueNode::new("...").with_choice(Choice::new("ok"));
        Level::new(1, "Three")
            .with_dialogue(node())
            .with_dialogue(node())
            .with_dialogue(node())
    }

    #[test]
    fn fallthrough_advances_then_completes() {
        let level = three_nodes();
        assert_eq!(next_step(&level, 0, Route::Fallthrough), Step::Continue(1));
        assert_eq!(next_step(&level, 1, Route::Fallthrough), Step::Continue(2));
        assert_eq!(next_step(&level, 2, Route::Fallthrough), Step::CompleteLevel);
    }

    #[test]
    fn explicit_routes() {
        let level = three_nodes();
        assert_eq!(next_step(&level, 2, Route::Jump(0)), Step::Continue(0));
        assert_eq!(next_step(&level, 0, Route::CompleteLevel), Step::CompleteLevel);
        assert_eq!(next_step(&level, 0, Route::PostTest), Step::PostTest);
    }

    #[test]
    fn effects_are_applied_and_clamped() {
        let level = three_nodes();
        let mut progress = ProgressState::default();
        let choice = Choice::new("Pay the fee")
            .with_wisdom(-10)
            .with_coins(-8)
            .with_achievement("lesson learned");

        let step = resolve_choice(&level, 0, &choice, &mut progress);
        assert_eq!(step, Step::Continue(1));
        assert_eq!(progress.wisdom(), 0);
        assert_eq!(progress.coins(), 0);
        assert_eq!(progress.achievements(), &["lesson learned"]);
    }

    #[test]
    fn effects_apply_even_when_level_ends() {
        let level = three_nodes();
        let mut progress = ProgressState::default();
        let choice = Choice::new("Report them")
            .with_wisdom(15)
            .with_route(Route::CompleteLevel);

        assert_eq!(
            resolve_choice(&level, 0, &choice, &mut progress),
            Step::CompleteLevel
        );
        assert_eq!(progress.wisdom(), 15);
    }
}
