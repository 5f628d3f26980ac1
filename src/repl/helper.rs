//! Rustyline helper integration
//!
//! Completes planet names and menu keywords, and hints from earlier entries.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;

use super::menu::menu_keywords;

/// Planet REPL helper
pub struct PlanetHelper {
    completions: Vec<String>,
    command_history: Vec<String>,
}

impl PlanetHelper {
    /// Create a helper completing the given planet names and all menu keywords.
    pub fn new<I, S>(planet_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut completions: Vec<String> = planet_names
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .chain(menu_keywords().map(String::from))
            .collect();
        completions.sort();
        completions.dedup();

        Self {
            completions,
            command_history: Vec::new(),
        }
    }

    /// Add command to history for hints
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.trim().is_empty() {
            self.command_history.push(cmd);
        }
    }
}

impl Completer for PlanetHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_before_cursor = &line[..pos];

        let word_start = line_before_cursor
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);

        let partial = line_before_cursor[word_start..].to_lowercase();
        if partial.is_empty() {
            return Ok((pos, vec![]));
        }

        // Matching ignores case; replacements keep the catalogue's casing.
        let matches: Vec<Pair> = self
            .completions
            .iter()
            .filter(|comp| comp.to_lowercase().starts_with(&partial))
            .map(|comp| Pair {
                display: comp.clone(),
                replacement: comp.clone(),
            })
            .collect();

        Ok((word_start, matches))
    }
}

impl Hinter for PlanetHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if line.is_empty() || pos < line.len() {
            return None;
        }

        // Most recent matching entry first
        self.command_history
            .iter()
            .rev()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for PlanetHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        // Dim the hint
        Cow::Owned(format!("\x1b[90m{}\x1b[0m", hint))
    }
}

impl Validator for PlanetHelper {}

impl Helper for PlanetHelper {}
