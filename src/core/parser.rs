//! Jsh Parser
//!
//! Splits one raw command line into an argument vector, honoring
//! double-quoted regions, and detects a trailing `&` background marker.

use std::mem;

use errors::{Error, Result};

/// Token separators outside a quoted region.
const SEPARATORS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// One parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    /// Original line with surrounding whitespace removed, used for messages.
    pub input: String,
    /// Argument vector; `argv[0]` names the program or builtin. Never empty.
    pub argv: Vec<String>,
    /// Launch without waiting for completion.
    pub background: bool,
}

impl Command {
    /// Parses `input` into a `Command`.
    ///
    /// Returns `Ok(None)` when the line holds no tokens at all (empty, all
    /// whitespace, or a lone `&`), so callers can re-prompt without ever
    /// inspecting a missing `argv[0]`. A quoted region opened but not closed
    /// by end of line is a syntax error.
    ///
    /// # Examples
    /// ```rust
    /// use jsh_rs::Command;
    ///
    /// let command = Command::parse("sleep 5 &").unwrap().unwrap();
    /// assert_eq!(command.argv, vec!["sleep", "5"]);
    /// assert!(command.background);
    /// ```
    pub fn parse(input: &str) -> Result<Option<Command>> {
        // Each token remembers whether it came from a quoted region; only an
        // unquoted trailing `&` counts as the background marker.
        let mut tokens: Vec<(String, bool)> = Vec::new();
        let mut current = String::new();
        let mut building = false;
        let mut in_quotes = false;

        for c in input.chars() {
            if in_quotes {
                if c == '"' {
                    // The closing quote ends the token immediately; any
                    // characters before the next separator start a new one.
                    tokens.push((mem::replace(&mut current, String::new()), true));
                    in_quotes = false;
                } else {
                    current.push(c);
                }
            } else if c == '"' {
                if building {
                    tokens.push((mem::replace(&mut current, String::new()), false));
                    building = false;
                }
                in_quotes = true;
            } else if SEPARATORS.contains(&c) {
                if building {
                    tokens.push((mem::replace(&mut current, String::new()), false));
                    building = false;
                }
            } else {
                current.push(c);
                building = true;
            }
        }

        if in_quotes {
            return Err(Error::syntax(input.trim()));
        }
        if building {
            tokens.push((current, false));
        }

        let background = match tokens.last() {
            Some(&(ref text, quoted)) => text == "&" && !quoted,
            None => false,
        };
        if background {
            tokens.pop();
        }

        if tokens.is_empty() {
            return Ok(None);
        }

        Ok(Some(Command {
            input: input.trim().to_string(),
            argv: tokens.into_iter().map(|(text, _)| text).collect(),
            background,
        }))
    }

    /// Argument vector re-joined with single spaces, used as a job's
    /// displayed command text.
    pub fn flattened(&self) -> String {
        self.argv.join(" ")
    }
}
