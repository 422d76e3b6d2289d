//! Parsing of interactive shell commands.

use std::str::FromStr;

use crate::cli::split_names;

pub const HELP: &str = "\
commands:
  add NAME       add someone to the pool
  remove NAME    take someone out of the pool
  spin           run one round
  spin all       run rounds until nobody can be paired
  list           show the pool and round state
  queue          show the upcoming pairs
  lock A B       announce A and B before anyone else
  unlock         clear the locked pair
  reset          abandon the current round and reshuffle
  help           show this text
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    Spin,
    SpinAll,
    List,
    Queue,
    Lock(String, String),
    Unlock,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "add" if rest.is_empty() => Err(CommandError::Usage("add NAME")),
            "add" => Ok(Command::Add(rest.to_string())),
            "remove" | "rm" if rest.is_empty() => Err(CommandError::Usage("remove NAME")),
            "remove" | "rm" => Ok(Command::Remove(rest.to_string())),
            "spin" => match rest.to_lowercase().as_str() {
                "" => Ok(Command::Spin),
                "all" => Ok(Command::SpinAll),
                _ => Err(CommandError::Usage("spin [all]")),
            },
            "list" | "ls" => Ok(Command::List),
            "queue" => Ok(Command::Queue),
            "lock" => {
                // Names containing spaces can be given comma-separated.
                let names: Vec<String> = if rest.contains(',') {
                    split_names(rest)
                } else {
                    rest.split_whitespace().map(String::from).collect()
                };
                match <[String; 2]>::try_from(names) {
                    Ok([a, b]) => Ok(Command::Lock(a, b)),
                    Err(_) => Err(CommandError::Usage("lock A B")),
                }
            }
            "unlock" => Ok(Command::Unlock),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}
