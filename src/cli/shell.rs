use std::str::FromStr;

/// One line of `minirag shell` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Ask(String),
    Status,
    Quit,
    Blank,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ShellCommand::Blank);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb.to_lowercase().as_str() {
            "add" if !rest.is_empty() => Ok(ShellCommand::Add(rest.to_string())),
            "ask" if !rest.is_empty() => Ok(ShellCommand::Ask(rest.to_string())),
            "add" | "ask" => Err(format!("'{verb}' needs text")),
            "status" => Ok(ShellCommand::Status),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            _ => Err(format!("Unknown command: {verb} (expected add, ask, status, quit)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verbs() {
        assert_eq!("add hello world".parse::<ShellCommand>(), Ok(ShellCommand::Add("hello world".into())));
        assert_eq!("ASK  why?  ".parse::<ShellCommand>(), Ok(ShellCommand::Ask("why?".into())));
        assert_eq!("status".parse::<ShellCommand>(), Ok(ShellCommand::Status));
        assert_eq!("exit".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
        assert_eq!("   ".parse::<ShellCommand>(), Ok(ShellCommand::Blank));
    }

    #[test]
    fn add_without_text_is_an_error() {
        assert!("add".parse::<ShellCommand>().is_err());
        assert!("ask   ".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn unknown_verb_is_an_error() {
        let err = "delete 3".parse::<ShellCommand>().unwrap_err();
        assert!(err.starts_with("Unknown command: delete"));
    }
}
