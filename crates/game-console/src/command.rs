//! Command line decomposition
//!
//! A submitted line is split into a message and an argument list:
//!
//! ```text
//! spawn @orc,12,,blue
//! ^^^^^ ^^^^^^^^^^^^^
//! |     argument tail, split on ','  -> ["orc", "12", "", "blue"]
//! message
//! ```
//!
//! Only the first `" @"` counts. Empty arguments are kept so positional
//! arguments stay positional.

/// Marker separating the message from its argument list
pub const ARG_PREFIX: &str = " @";

/// Separator between arguments
pub const ARG_SEPARATOR: char = ',';

/// Prefix of the log line echoing the arguments
const ARGUMENT_ECHO_PREFIX: &str = "    >";

/// Prefix of the log line echoing the message
const MESSAGE_ECHO_PREFIX: &str = ">> ";

/// A submitted command, ready for an external handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// Lowercased message
    pub message: String,
    /// Arguments in typed order, case preserved
    pub arguments: Vec<String>,
}

impl Command {
    /// Create a command without arguments.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            arguments: Vec::new(),
        }
    }
}

/// A line split into its message and arguments, borrowing from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Text before the first argument marker, as typed
    pub message: &'a str,
    /// Arguments after the marker, empty when there is no marker
    pub arguments: Vec<&'a str>,
}

/// Split a line into message and arguments.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    match line.split_once(ARG_PREFIX) {
        Some((message, tail)) => ParsedLine {
            message,
            arguments: tail.split(ARG_SEPARATOR).collect(),
        },
        None => ParsedLine {
            message: line,
            arguments: Vec::new(),
        },
    }
}

impl ParsedLine<'_> {
    /// Log lines echoing this submission, oldest first.
    ///
    /// The message is echoed as typed. The argument echo skips empty
    /// arguments and is only produced when the line had an argument tail.
    pub fn echo_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{}{}", MESSAGE_ECHO_PREFIX, self.message)];

        if !self.arguments.is_empty() {
            let mut echo = String::from(ARGUMENT_ECHO_PREFIX);
            for argument in self.arguments.iter().filter(|a| !a.is_empty()) {
                echo.push_str(argument);
                echo.push_str("  ");
            }
            lines.push(echo);
        }

        lines
    }

    /// Convert into an owned command with a lowercased message.
    pub fn to_command(&self) -> Command {
        Command {
            message: self.message.to_lowercase(),
            arguments: self.arguments.iter().map(|a| a.to_string()).collect(),
        }
    }
}
