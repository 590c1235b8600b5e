// file: src/shell/command.rs
// description: parsing of shell input lines into commands

use crate::error::{ClientError, Result};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  title <text>    set the document title
  text <text>     append a line to the document text
  clear           reset the document form
  upload          add the document to the index
  query <text>    set the query
  search [text]   semantic search (optionally setting the query first)
  ask [text]      ask with retrieved context (optionally setting the query first)
  show            print the current results
  help            show this message
  quit            leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Title(String),
    Text(String),
    Clear,
    Upload,
    Query(String),
    Search(Option<String>),
    Ask(Option<String>),
    Show,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ClientError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };
        let optional = || (!rest.is_empty()).then(|| rest.to_string());

        match word.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title(rest.to_string())),
            // keep the line's own content intact apart from the separator
            "text" => Ok(Self::Text(
                trimmed[word.len()..]
                    .strip_prefix(char::is_whitespace)
                    .unwrap_or("")
                    .to_string(),
            )),
            "clear" => Ok(Self::Clear),
            "upload" => Ok(Self::Upload),
            "query" => Ok(Self::Query(rest.to_string())),
            "search" => Ok(Self::Search(optional())),
            "ask" => Ok(Self::Ask(optional())),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err(ClientError::Validation("Empty command".to_string())),
            other => Err(ClientError::Validation(format!(
                "Unknown command: {} (try `help`)",
                other
            ))),
        }
    }
}
