//! Console command parsing.

use thiserror::Error;

use crate::prefs::ViewMode;
use crate::screen::{Action, ScreenKind};

pub const HELP: &str = "\
Navigation:  next | prev | first | last | page N | size N
Selection:   toggle N | all | clear
Sorting:     sort KEY | unsort
Records:     open N | filter [TEXT] | view table|cards
Screens:     screen NAME | screens
Other:       show | help | quit

N is a row number on the current page, or a page number for `page`.";

/// Console parse errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a positive number")]
    InvalidNumber(String),
    #[error("{0}")]
    InvalidArgument(String),
}

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply an action to the current screen.
    Act(Action),
    View(ViewMode),
    Screen(ScreenKind),
    Screens,
    Show,
    Help,
    Quit,
}

fn number(arg: Option<&str>, command: &'static str) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(command))?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidNumber(arg.to_string())),
    }
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then_some(rest);

        let command = match word.to_ascii_lowercase().as_str() {
            "" | "show" | "ls" => Command::Show,
            "next" | "n" => Command::Act(Action::Next),
            "prev" | "p" => Command::Act(Action::Previous),
            "first" => Command::Act(Action::First),
            "last" => Command::Act(Action::Last),
            "page" => Command::Act(Action::GoTo(number(arg, "page")?)),
            "size" => Command::Act(Action::PageSize(number(arg, "size")?)),
            "toggle" | "t" => Command::Act(Action::Toggle(number(arg, "toggle")?)),
            "all" => Command::Act(Action::ToggleAll),
            "clear" => Command::Act(Action::ClearSelection),
            "sort" => Command::Act(Action::Sort(
                arg.ok_or(CommandError::MissingArgument("sort"))?.to_string(),
            )),
            "unsort" => Command::Act(Action::ClearSort),
            "open" | "o" => Command::Act(Action::Open(number(arg, "open")?)),
            "filter" | "f" | "/" => Command::Act(Action::Filter(arg.map(str::to_string))),
            "view" => Command::View(
                arg.ok_or(CommandError::MissingArgument("view"))?
                    .parse()
                    .map_err(CommandError::InvalidArgument)?,
            ),
            "screen" | "go" => Command::Screen(
                arg.ok_or(CommandError::MissingArgument("screen"))?
                    .parse()
                    .map_err(CommandError::InvalidArgument)?,
            ),
            "screens" => Command::Screens,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse("next"), Ok(Command::Act(Action::Next)));
        assert_eq!(parse("  PAGE 7 "), Ok(Command::Act(Action::GoTo(7))));
        assert_eq!(parse("size 25"), Ok(Command::Act(Action::PageSize(25))));
        assert_eq!(parse(""), Ok(Command::Show));
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert_eq!(parse("page"), Err(CommandError::MissingArgument("page")));
        assert_eq!(
            parse("page 0"),
            Err(CommandError::InvalidNumber("0".to_string()))
        );
        assert_eq!(
            parse("toggle x"),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
    }

    #[test]
    fn test_parse_filter_keeps_spaces() {
        assert_eq!(
            parse("filter elm court"),
            Ok(Command::Act(Action::Filter(Some("elm court".to_string()))))
        );
        assert_eq!(parse("filter"), Ok(Command::Act(Action::Filter(None))));
    }

    #[test]
    fn test_parse_screen_and_view() {
        assert_eq!(parse("screen leases"), Ok(Command::Screen(ScreenKind::Leases)));
        assert_eq!(parse("view cards"), Ok(Command::View(ViewMode::Cards)));
        assert!(matches!(parse("view list"), Err(CommandError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
