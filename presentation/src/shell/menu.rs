//! Main menu entries

use council_domain::SessionMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Mode(SessionMode),
    TestConnection,
    Exit,
}

impl MenuChoice {
    pub const ENTRIES: [MenuChoice; 5] = [
        MenuChoice::Mode(SessionMode::Debate),
        MenuChoice::Mode(SessionMode::Teach),
        MenuChoice::Mode(SessionMode::AskOne),
        MenuChoice::TestConnection,
        MenuChoice::Exit,
    ];

    /// Accepts the entry number or its name
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ENTRIES.get(i).copied());
        }
        match input.as_str() {
            "test" | "test-connection" | "connection" => Some(MenuChoice::TestConnection),
            "exit" | "quit" | "q" => Some(MenuChoice::Exit),
            other => other.parse::<SessionMode>().ok().map(MenuChoice::Mode),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Mode(SessionMode::Debate) => "Debate",
            MenuChoice::Mode(SessionMode::Teach) => "Teach",
            MenuChoice::Mode(SessionMode::AskOne) => "Ask One",
            MenuChoice::TestConnection => "Test Connection",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Prompt for the topic, for modes that take one up front
    pub fn topic_prompt(mode: SessionMode) -> Option<&'static str> {
        match mode {
            SessionMode::Debate => Some("Topic to debate: "),
            SessionMode::Teach => Some("Topic to learn: "),
            SessionMode::AskOne => None,
        }
    }

    pub fn render() -> String {
        let mut out = String::from("\nMenu:\n");
        for (i, entry) in Self::ENTRIES.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, entry.label()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Mode(SessionMode::Debate)));
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::Mode(SessionMode::AskOne)));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::TestConnection));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("6"), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(MenuChoice::parse("Teach"), Some(MenuChoice::Mode(SessionMode::Teach)));
        assert_eq!(MenuChoice::parse("ask-one"), Some(MenuChoice::Mode(SessionMode::AskOne)));
        assert_eq!(MenuChoice::parse("test"), Some(MenuChoice::TestConnection));
        assert_eq!(MenuChoice::parse("quit"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("dance"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_render_lists_all_entries() {
        let menu = MenuChoice::render();
        assert!(menu.contains("1. Debate"));
        assert!(menu.contains("4. Test Connection"));
        assert!(menu.contains("5. Exit"));
    }
}
