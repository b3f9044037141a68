//! Command line parsing.
//!
//! Converts the command text (the line with its leading ':' stripped) into a
//! `ParsedCommand`. Only exact matches are recognized: `w` and `q`. Anything
//! else, including `wq` or an empty line, is `Unknown` and carries the text so
//! the dispatcher can echo it back. Pure classification; no side-effects.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Quit,
    Write,
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        let body = raw.trim();
        match body {
            "q" => ParsedCommand::Quit,
            "w" => ParsedCommand::Write,
            _ => ParsedCommand::Unknown(body.to_string()),
        }
    }
}
