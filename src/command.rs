//! Parsing of the line-oriented commands typed at the prompt.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a city
    Search(String),
    /// Save the displayed city
    Save,
    /// Remove a saved city by name
    Remove(String),
    /// Look up a saved city by list position (1-based) or name
    Open(String),
    List,
    Help,
    Quit,
    Empty,
    Invalid(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "quit" | "exit" | ":q" => Command::Quit,
            "help" | "?" => Command::Help,
            "list" => Command::List,
            "save" if rest.is_empty() => Command::Save,
            "remove" if rest.is_empty() => Command::Invalid("usage: remove <city>"),
            "remove" => Command::Remove(rest.to_string()),
            "open" if rest.is_empty() => Command::Invalid("usage: open <number|city>"),
            "open" => Command::Open(rest.to_string()),
            _ => Command::Search(line.to_string()),
        }
    }
}

/// Resolve an `open` target against the saved list: a 1-based position or
/// the exact name of a saved city.
pub fn resolve_saved<'a>(target: &str, saved: &'a [String]) -> Option<&'a str> {
    match target.parse::<usize>() {
        Ok(n) if n >= 1 => saved.get(n - 1).map(String::as_str),
        Ok(_) => None,
        Err(_) => saved.iter().find(|name| *name == target).map(String::as_str),
    }
}

pub const HELP: &str = "\
Commands:
  <city>             look up current weather and forecast
  save               save the displayed city
  remove <city>      remove a saved city
  open <n|city>      look up a saved city by number or exact name
  list               show saved cities
  help               show this help
  quit               exit";
