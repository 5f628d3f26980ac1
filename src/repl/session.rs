//! Menu-driven interaction loop.
//!
//! The loop reads from a [`LineSource`]: the rustyline editor on a terminal,
//! or any buffered reader for pipes and tests. Per-question failures are
//! rendered as messages and never end the session; only end of input or the
//! exit choice does.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use itertools::Itertools;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::{debug, warn};

use super::config::ReplConfig;
use super::helper::PlanetHelper;
use super::menu::{menu_text, parse_menu_input, MenuChoice, MenuInput, INVALID_OPTION_MESSAGE, MENU_PROMPT};
use crate::backend::formatter::{
    format_membership_result, format_planet_details, format_planet_distance, format_planet_mass,
    format_planet_moon_count,
};
use crate::backend::{Catalogue, PlanetError, PlanetResult, QueryEngine};

/// Where the session reads its lines from.
pub trait LineSource {
    /// Read one line after showing `prompt`. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Whether the source displays the prompt itself.
    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Plain buffered reader; the session prints prompts for it.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Rustyline editor with completion and a history file.
pub struct EditorSource {
    editor: Editor<PlanetHelper, DefaultHistory>,
    history_path: Option<PathBuf>,
}

impl EditorSource {
    pub fn new(config: &ReplConfig, catalogue: &Catalogue) -> io::Result<Self> {
        let editor_config = rustyline::Config::builder()
            .max_history_size(config.history_size)
            .map_err(readline_to_io)?
            .auto_add_history(false)
            .build();
        let mut editor: Editor<PlanetHelper, DefaultHistory> =
            Editor::with_config(editor_config).map_err(readline_to_io)?;
        editor.set_helper(Some(PlanetHelper::new(catalogue.names())));

        let history_path = config.history_path();
        if let Some(path) = &history_path {
            if let Err(e) = editor.load_history(path) {
                debug!(path = %path.display(), error = %e, "no history loaded");
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Write history back to disk. Failures are logged, not returned.
    pub fn save_history(&mut self) {
        let Some(path) = &self.history_path else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "cannot create history directory");
                return;
            }
        }
        if let Err(e) = self.editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "cannot save history");
        }
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!(error = %e, "history entry skipped");
                    }
                    if let Some(helper) = self.editor.helper_mut() {
                        helper.add_to_history(line.clone());
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(readline_to_io(e)),
        }
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}

fn readline_to_io(e: ReadlineError) -> io::Error {
    match e {
        ReadlineError::Io(err) => err,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}

/// One console session over a catalogue.
pub struct Session<'a, W: Write> {
    catalogue: &'a Catalogue,
    engine: QueryEngine,
    out: W,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(catalogue: &'a Catalogue, engine: QueryEngine, out: W) -> Self {
        Self {
            catalogue,
            engine,
            out,
        }
    }

    /// Run the menu loop until exit or end of input.
    pub fn run(&mut self, source: &mut dyn LineSource) -> io::Result<()> {
        loop {
            write!(self.out, "{}", menu_text())?;
            writeln!(self.out)?;

            let Some(raw) = self.prompt(source, MENU_PROMPT)? else {
                break;
            };

            let choice = match parse_menu_input(&raw) {
                MenuInput::Empty => continue,
                MenuInput::Invalid => {
                    writeln!(self.out, "{}", INVALID_OPTION_MESSAGE)?;
                    continue;
                }
                MenuInput::Choice(MenuChoice::Exit) => {
                    writeln!(self.out, "Goodbye.")?;
                    writeln!(self.out)?;
                    break;
                }
                MenuInput::Choice(choice) => choice,
            };
            debug!(choice = choice.number(), "menu choice");

            let input = match choice.prompt() {
                Some(prompt) => match self.prompt_non_empty(source, prompt)? {
                    Some(value) => value,
                    None => break,
                },
                None => String::new(),
            };

            let message = match self.perform(choice, &input) {
                Ok(message) => message,
                Err(e) => self.render_error(&e),
            };
            writeln!(self.out, "{}", message)?;
        }

        self.out.flush()
    }

    /// Carry out one menu choice with its follow-up input.
    pub fn perform(&self, choice: MenuChoice, input: &str) -> PlanetResult<String> {
        match choice {
            MenuChoice::List => Ok(format!("Planets: {}", self.catalogue.names().iter().join(", "))),
            MenuChoice::Details => self.catalogue.get(input).map(format_planet_details),
            MenuChoice::Mass => self.catalogue.get(input).map(format_planet_mass),
            MenuChoice::Distance => self.catalogue.get(input).map(format_planet_distance),
            MenuChoice::MoonCount => self.catalogue.get(input).map(format_planet_moon_count),
            MenuChoice::Membership => Ok(format_membership_result(
                input,
                self.catalogue.exists(input),
            )),
            MenuChoice::Ask => Ok(self.engine.answer(input, self.catalogue)),
            MenuChoice::Exit => Ok("Goodbye.".to_string()),
        }
    }

    /// Message shown for a failed menu action.
    pub fn render_error(&self, error: &PlanetError) -> String {
        if error.is_not_found() {
            format!(
                "{}. Try one of: {}",
                error,
                self.catalogue.names().iter().join(", ")
            )
        } else {
            format!("Error: {}", error)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn prompt(&mut self, source: &mut dyn LineSource, prompt: &str) -> io::Result<Option<String>> {
        if !source.shows_prompt() {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
        }
        let line = source.read_line(prompt)?;
        if line.is_some() {
            writeln!(self.out)?;
        }
        Ok(line.map(|l| l.trim().to_string()))
    }

    fn prompt_non_empty(
        &mut self,
        source: &mut dyn LineSource,
        prompt: &str,
    ) -> io::Result<Option<String>> {
        loop {
            match self.prompt(source, prompt)? {
                Some(value) if !value.is_empty() => return Ok(Some(value)),
                Some(_) => writeln!(self.out, "Please enter a value.")?,
                None => return Ok(None),
            }
        }
    }
}
