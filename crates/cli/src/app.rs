use anyhow::Result;
use rustyline::{error::ReadlineError, DefaultEditor};
use thiserror::Error;
use tracing::{error, info};
use trains_core::{AppConfig, StoreError, TrainRecord, TrainStore};

use crate::table;

const PROMPT: &str = ">>> ";

/// Failures surfaced by a single command dispatch.
///
/// The run loop is the only consumer: every variant is logged, reported
/// on stderr, and the loop keeps accepting commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The entered text matches no known command.
    #[error("unknown command: '{command}'")]
    Unknown { command: String },

    /// The store rejected a load or save.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reading interactive input failed mid-command.
    #[error("input error: {0}")]
    Input(#[from] ReadlineError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add,
    List,
    Select(String),
    Load(String),
    Save(String),
    Help,
    Exit,
}

/// Split a line into a case-insensitive keyword and a verbatim argument.
///
/// `select`, `load` and `save` require an argument; without one the line
/// is an unknown command, as is any trailing argument on the bare
/// commands.
fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let keyword = parts.next().unwrap_or("").to_lowercase();
    let argument = parts.next().map(str::trim).unwrap_or("");

    match (keyword.as_str(), argument) {
        ("add", "") => Ok(Command::Add),
        ("list", "") => Ok(Command::List),
        ("help", "") => Ok(Command::Help),
        ("exit", "") => Ok(Command::Exit),
        ("select", arg) if !arg.is_empty() => Ok(Command::Select(arg.to_string())),
        ("load", arg) if !arg.is_empty() => Ok(Command::Load(arg.to_string())),
        ("save", arg) if !arg.is_empty() => Ok(Command::Save(arg.to_string())),
        _ => Err(CommandError::Unknown {
            command: trimmed.to_string(),
        }),
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive command loop over a [`TrainStore`].
pub struct TrainsApp {
    store: TrainStore,
    config: AppConfig,
}

impl TrainsApp {
    pub fn new(store: TrainStore, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Run the prompt loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        // First run has no history yet.
        let _ = editor.load_history(&self.config.history_file);

        info!("Program started");
        println!("Train timetable manager. Type 'help' for the command list.");

        loop {
            let line = match editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    info!("Input closed; exiting");
                    break;
                }
                Err(err) => return Err(err.into()),
            };

            if line.trim().is_empty() {
                continue;
            }
            editor.add_history_entry(&line)?;
            info!(command = %line.trim(), "Command entered");

            match self.dispatch(&mut editor, &line) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => {
                    error!("{err}");
                    eprintln!("Error: {err}");
                }
            }
        }

        if let Some(parent) = self.config.history_file.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = editor.save_history(&self.config.history_file) {
            error!("Failed to save prompt history: {err}");
        }
        Ok(())
    }

    fn dispatch(&mut self, editor: &mut DefaultEditor, line: &str) -> Result<Flow, CommandError> {
        match parse_command(line)? {
            Command::Add => self.run_add(editor)?,
            Command::List => self.run_list(),
            Command::Select(destination) => self.run_select(&destination),
            Command::Load(filename) => self.run_load(&filename)?,
            Command::Save(filename) => self.run_save(&filename)?,
            Command::Help => print_help(),
            Command::Exit => {
                info!("Program finished by 'exit'");
                println!("Bye.");
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn run_add(&mut self, editor: &mut DefaultEditor) -> Result<(), CommandError> {
        let departure_point = editor.readline("Departure point? ")?;
        let number = editor.readline("Train number? ")?;
        let departure_time = editor.readline("Departure time? ")?;
        let destination = editor.readline("Destination? ")?;

        self.store.add(TrainRecord::new(
            departure_point,
            number,
            departure_time,
            destination,
        ));
        println!("Train added.");
        Ok(())
    }

    fn run_list(&self) {
        let trains = self.store.trains();
        print!("{}", table::render(trains));
        info!(count = trains.len(), "Train list displayed");
    }

    fn run_select(&self, destination: &str) {
        let selected = self.store.select(destination);
        print!("{}", table::render(&selected));
    }

    fn run_load(&mut self, filename: &str) -> Result<(), CommandError> {
        self.store.load(filename)?;
        println!("Data loaded from {filename}.");
        Ok(())
    }

    fn run_save(&mut self, filename: &str) -> Result<(), CommandError> {
        let path = self.store.save(filename)?;
        println!("Data saved to {}.", path.display());
        Ok(())
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  add                  - add a train");
    println!("  list                 - show all trains");
    println!("  select <destination> - show trains for a destination");
    println!("  load <file>          - load trains from a JSON file");
    println!("  save <file>          - save trains to a JSON file");
    println!("  help                 - show this message");
    println!("  exit                 - quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("add").unwrap(), Command::Add);
        assert_eq!(parse_command("  LIST  ").unwrap(), Command::List);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("select Kazan").unwrap(),
            Command::Select("Kazan".to_string())
        );
        assert_eq!(
            parse_command("load trains.json").unwrap(),
            Command::Load("trains.json".to_string())
        );
        assert_eq!(
            parse_command("save data").unwrap(),
            Command::Save("data".to_string())
        );
    }

    #[test]
    fn keyword_is_case_insensitive_but_argument_is_verbatim() {
        assert_eq!(
            parse_command("SELECT Kazan").unwrap(),
            Command::Select("Kazan".to_string())
        );
        assert_eq!(
            parse_command("Save MyTrains").unwrap(),
            Command::Save("MyTrains".to_string())
        );
    }

    #[test]
    fn multi_word_arguments_stay_intact() {
        assert_eq!(
            parse_command("select Nizhny Novgorod").unwrap(),
            Command::Select("Nizhny Novgorod".to_string())
        );
    }

    #[test]
    fn unknown_command_carries_the_offending_text() {
        let err = parse_command("launch rocket").unwrap_err();
        match err {
            CommandError::Unknown { command } => assert_eq!(command, "launch rocket"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn argument_commands_require_an_argument() {
        assert!(matches!(
            parse_command("select"),
            Err(CommandError::Unknown { .. })
        ));
        assert!(matches!(
            parse_command("load"),
            Err(CommandError::Unknown { .. })
        ));
        assert!(matches!(
            parse_command("save"),
            Err(CommandError::Unknown { .. })
        ));
    }

    #[test]
    fn bare_commands_reject_trailing_arguments() {
        assert!(matches!(
            parse_command("add now"),
            Err(CommandError::Unknown { .. })
        ));
        assert!(matches!(
            parse_command("exit please"),
            Err(CommandError::Unknown { .. })
        ));
    }

    #[test]
    fn unknown_error_display_names_the_command() {
        let err = CommandError::Unknown {
            command: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "unknown command: 'foo'");
    }
}
