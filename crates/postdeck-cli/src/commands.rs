//! Interactive command parsing

use postdeck_core::PageTarget;

/// A command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the category filter; empty clears it
    Filter(String),
    /// Navigate pages
    Page(PageTarget),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }

        // Filter text is kept verbatim after the separator.
        if let Some(rest) = line.strip_prefix('/') {
            return Ok(Some(Command::Filter(strip_separator(rest).to_string())));
        }
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("filter") {
            if rest.is_empty() || rest.starts_with(' ') {
                return Ok(Some(Command::Filter(strip_separator(rest).to_string())));
            }
        }

        let command = match trimmed.trim_end() {
            "first" | "<<" => Command::Page(PageTarget::First),
            "prev" | "previous" | "<" => Command::Page(PageTarget::Previous),
            "next" | ">" => Command::Page(PageTarget::Next),
            "last" | ">>" => Command::Page(PageTarget::Last),
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(format!("Unknown command: {other} (type `help`)")),
        };
        Ok(Some(command))
    }
}

fn strip_separator(rest: &str) -> &str {
    rest.strip_prefix(' ').unwrap_or(rest)
}

/// Help text shown at the prompt
pub const HELP: &str = "\
Commands:
  filter <text>   filter by category (`filter` alone clears); also `/ <text>`
  first, <<       go to the first page
  prev, <         go to the previous page
  next, >         go to the next page
  last, >>        go to the last page
  help            show this help
  quit, q         exit";
