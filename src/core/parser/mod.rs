//! Input parser.
//!
//! Splits a raw input line into a command name and its argument words.

mod lexer;

pub use lexer::Lexer;

/// A command name with its argument words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Parse a raw input line. Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = Lexer::new(input);
    let name = words.next()?;
    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        let parsed = parse_input("mkdir notes").unwrap();
        assert_eq!(parsed.name, "mkdir");
        assert_eq!(parsed.args, vec!["notes"]);
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse_input("pwd").unwrap();
        assert_eq!(parsed.name, "pwd");
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   "), None);
    }

    #[test]
    fn test_parse_keeps_empty_argument() {
        let parsed = parse_input("cd \"\"").unwrap();
        assert_eq!(parsed.args, vec![String::new()]);
    }
}
