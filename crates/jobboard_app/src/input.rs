use jobboard_core::Country;

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Country(Country),
    /// `None` selects all categories.
    Category(Option<String>),
    /// List categories, optionally filtered by label.
    Categories(String),
    Page(u32),
    Next,
    Previous,
    Refresh,
    Open(String),
    Login(String),
    Logout,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command {0:?}; type `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Country(#[from] jobboard_core::UnknownCountry),
}

pub const HELP: &str = "\
commands:
  country <gb|us|ca|au>     switch country
  category <tag>|none       filter by category tag
  categories [text]         list categories, optionally filtered
  page <n> | next | prev    navigate pages
  refresh                   run the current search again
  open <job-id>             show job details (requires login)
  login <name> | logout     manage the local session
  help | quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "country" => Command::Country(rest.parse()?),
        "category" => match rest {
            "" => return Err(ParseError::Usage("category <tag>|none")),
            "none" | "all" => Command::Category(None),
            tag => Command::Category(Some(tag.to_string())),
        },
        "categories" => Command::Categories(rest.to_string()),
        "page" => Command::Page(
            rest.parse()
                .map_err(|_| ParseError::Usage("page <number>"))?,
        ),
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Previous,
        "refresh" => Command::Refresh,
        "open" if !rest.is_empty() => Command::Open(rest.to_string()),
        "open" => return Err(ParseError::Usage("open <job-id>")),
        "login" if !rest.is_empty() => Command::Login(rest.to_string()),
        "login" => return Err(ParseError::Usage("login <name>")),
        "logout" => Command::Logout,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
