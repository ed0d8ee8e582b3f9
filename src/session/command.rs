//! Interactive command parsing

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty or whitespace-only line
    Blank,
    /// A note to log (already trimmed)
    Append(String),
    /// `/edit`
    Edit,
    /// `/delete`
    Delete,
    /// `/list [N]`; `None` means use the default count
    List(Option<usize>),
    /// `/help`
    Help,
    /// `/q`
    Quit,
}

impl Command {
    /// Parse a raw input line
    ///
    /// A `/list` argument that is not all ASCII digits (a negative number,
    /// a word) is ignored and the default count applies.
    pub fn parse(line: &str) -> Self {
        let cmd = line.trim();
        if cmd.is_empty() {
            return Command::Blank;
        }

        let mut parts = cmd.split_whitespace();
        match parts.next() {
            Some("/edit") if cmd == "/edit" => Command::Edit,
            Some("/delete") if cmd == "/delete" => Command::Delete,
            Some("/help") if cmd == "/help" => Command::Help,
            Some("/q") if cmd == "/q" => Command::Quit,
            Some("/list") => Command::List(parts.next().and_then(parse_count)),
            _ => Command::Append(cmd.to_string()),
        }
    }
}

fn parse_count(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Command::Blank);
        assert_eq!(Command::parse("   \t"), Command::Blank);
        assert_eq!(Command::parse("/edit"), Command::Edit);
        assert_eq!(Command::parse("  /delete  "), Command::Delete);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/q"), Command::Quit);
    }

    #[test]
    fn test_parse_list_counts() {
        assert_eq!(Command::parse("/list"), Command::List(None));
        assert_eq!(Command::parse("/list 3"), Command::List(Some(3)));
        assert_eq!(Command::parse("/list 0"), Command::List(Some(0)));
        assert_eq!(Command::parse("/list -3"), Command::List(None));
        assert_eq!(Command::parse("/list three"), Command::List(None));
        assert_eq!(Command::parse("/list 3 4"), Command::List(Some(3)));
        assert_eq!(
            Command::parse("/list 99999999999999999999999999"),
            Command::List(None)
        );
    }

    #[test]
    fn test_everything_else_is_a_note() {
        assert_eq!(
            Command::parse("  Deployed service #deploy "),
            Command::Append("Deployed service #deploy".to_string())
        );
        assert_eq!(Command::parse("/edit later"), Command::Append("/edit later".to_string()));
        assert_eq!(Command::parse("/quit"), Command::Append("/quit".to_string()));
        assert_eq!(Command::parse("/listing"), Command::Append("/listing".to_string()));
    }
}
