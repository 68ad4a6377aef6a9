//! Text commands for line-based frontends.
//!
//! Numbers typed by the player are 1-based (`choose 1` is the first
//! choice); [`parse_command`] converts them to the 0-based indices events
//! carry.

use crate::error::{EngineError, EngineResult};
use crate::event::Event;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A gameplay event.
    Event(Event),
    /// Show a short status line.
    Status,
    /// Dump the full state.
    State,
    /// List the commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  start          leave the landing screen
  select <n>     enter level n from the chapter map
  choose <n>     pick choice n in the dialogue
  answer <n>     answer the current question with option n
  next           move past an answered question
  finish         leave a finished quiz or test
  panel          show or hide the materials panel
  reset          start over
  status         show coins, wisdom, and phase
  state          dump the full state as JSON
  help           show this list
  quit           leave the game";

/// Parse one line of input. Blank lines parse to `Ok(None)`.
pub fn parse_command(input: &str) -> EngineResult<Option<Command>> {
    let mut words = input.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let word = word.to_lowercase();
    let arg = words.next();

    let command = match word.as_str() {
        "start" => Command::Event(Event::Start),
        "select" | "level" => Command::Event(Event::SelectLevel(index(&word, arg)?)),
        "choose" | "c" => Command::Event(Event::Choose(index(&word, arg)?)),
        "answer" | "a" => Command::Event(Event::Answer(index(&word, arg)?)),
        "next" | "n" => Command::Event(Event::Advance),
        "finish" => Command::Event(Event::Finish),
        "panel" | "materials" => Command::Event(Event::ToggleMaterialsPanel),
        "reset" => Command::Event(Event::Reset),
        "status" => Command::Status,
        "state" => Command::State,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(EngineError::UnknownCommand(word)),
    };
    Ok(Some(command))
}

/// Parse a 1-based number into a 0-based index.
fn index(command: &str, arg: Option<&str>) -> EngineResult<usize> {
    let arg = arg.ok_or_else(|| EngineError::MissingArgument {
        command: command.to_string(),
    })?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(EngineError::InvalidNumber(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_commands() {
        assert_eq!(
            parse_command("select 2").unwrap(),
            Some(Command::Event(Event::SelectLevel(1)))
        );
        assert_eq!(
            parse_command("  CHOOSE 1 ").unwrap(),
            Some(Command::Event(Event::Choose(0)))
        );
        assert_eq!(
            parse_command("a 3").unwrap(),
            Some(Command::Event(Event::Answer(2)))
        );
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(
            parse_command("next").unwrap(),
            Some(Command::Event(Event::Advance))
        );
        assert_eq!(
            parse_command("panel").unwrap(),
            Some(Command::Event(Event::ToggleMaterialsPanel))
        );
        assert_eq!(parse_command("state").unwrap(), Some(Command::State));
        assert_eq!(parse_command("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_command("dance"),
            Err(EngineError::UnknownCommand(w)) if w == "dance"
        ));
        let err = parse_command("choose").unwrap_err();
        assert_eq!(err.to_string(), "usage: choose <number>");
        assert!(matches!(
            parse_command("answer 0"),
            Err(EngineError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_command("select two"),
            Err(EngineError::InvalidNumber(_))
        ));
    }
}
