//! Input line parsing.

use std::fmt;
use std::str::FromStr;

/// Commands understood by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Every named command, in help order.
    pub const ALL: [Command; 11] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    /// Argument synopsis shown by `help`.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Add => "<name> <phone>",
            Command::Change => "<name> <old phone> <new phone>",
            Command::Phone | Command::ShowBirthday | Command::Delete => "<name>",
            Command::AddBirthday => "<name> <DD.MM.YYYY>",
            _ => "",
        }
    }
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    /// Match an already lower-cased command word.
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        Ok(match word {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Unknown(word) => word,
        };
        f.write_str(word)
    }
}

/// Split a line into a command and its arguments.
///
/// Tokens are separated by any whitespace and the command word is
/// lower-cased; arguments keep their case. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?.to_lowercase();
    let command = match word.parse::<Command>() {
        Ok(command) => command,
        Err(never) => match never {},
    };
    Some((command, tokens.map(str::to_string).collect()))
}
