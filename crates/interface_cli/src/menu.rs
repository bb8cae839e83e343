//! Menu command types
//!
//! The front end speaks a two-level numeric menu. Each level is a
//! tagged-variant command type with a parser from the raw selection; the
//! engine never sees menu codes, only the dispatched calls.

/// Top-level menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    /// Open a new client account
    OpenAccount,
    /// Close an account and drop its history
    CloseAccount,
    /// Show the account roster
    ListClients,
    /// Show the account count
    CountClients,
    /// Enter the per-client session menu
    ClientSession,
    /// Leave the program
    Exit,
}

impl MainMenuChoice {
    /// Parses a menu selection, `None` for anything unrecognized
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MainMenuChoice::OpenAccount),
            "2" => Some(MainMenuChoice::CloseAccount),
            "3" => Some(MainMenuChoice::ListClients),
            "4" => Some(MainMenuChoice::CountClients),
            "5" => Some(MainMenuChoice::ClientSession),
            "6" => Some(MainMenuChoice::Exit),
            _ => None,
        }
    }
}

/// Per-client session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChoice {
    Withdraw,
    Deposit,
    Transfer,
    CheckBalance,
    ShowMovements,
    EndSession,
}

impl SessionChoice {
    /// Parses a session selection, `None` for anything unrecognized
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(SessionChoice::Withdraw),
            "2" => Some(SessionChoice::Deposit),
            "3" => Some(SessionChoice::Transfer),
            "4" => Some(SessionChoice::CheckBalance),
            "5" => Some(SessionChoice::ShowMovements),
            "6" => Some(SessionChoice::EndSession),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_codes() {
        assert_eq!(MainMenuChoice::parse("1"), Some(MainMenuChoice::OpenAccount));
        assert_eq!(MainMenuChoice::parse("5"), Some(MainMenuChoice::ClientSession));
        assert_eq!(MainMenuChoice::parse("6"), Some(MainMenuChoice::Exit));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MainMenuChoice::parse(" 3 \n"), Some(MainMenuChoice::ListClients));
        assert_eq!(SessionChoice::parse("\t2"), Some(SessionChoice::Deposit));
    }

    #[test]
    fn test_unrecognized_input_is_none() {
        assert_eq!(MainMenuChoice::parse("7"), None);
        assert_eq!(MainMenuChoice::parse("abc"), None);
        assert_eq!(MainMenuChoice::parse(""), None);
        assert_eq!(SessionChoice::parse("0"), None);
        assert_eq!(SessionChoice::parse("deposit"), None);
    }
}
