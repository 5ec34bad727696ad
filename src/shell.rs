//! An interactive, line-oriented front-end
//!
//! The shell owns a [`TaskList`] and calls the [`commands`](crate::commands) handlers on it, one line of input at a time.
//! It works on any reader and writer, so that a whole session can be scripted.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::commands;
use crate::config::{app_title, DUE_DATE_PATTERN};
use crate::error::TaskError;
use crate::task_list::TaskList;
use crate::traits::ScheduleInput;
use crate::utils::{prompt, write_task_list, write_task_list_json};

const HELP: &str = "\
Commands:
  add <description>   add a task
  list [json]         show the tasks
  remove <index>      remove a task
  clear               remove every task
  schedule <index>    set the due date and/or recurrence of a task
  help                show this help
  quit                leave";

/// A line of user input
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add(String),
    List { json: bool },
    Remove(Option<usize>),
    Clear,
    Schedule(Option<usize>),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "add" | "a" => Ok(Command::Add(argument.to_string())),
            "list" | "ls" => Ok(Command::List { json: argument.eq_ignore_ascii_case("json") }),
            "remove" | "rm" => Ok(Command::Remove(parse_selection(argument))),
            "clear" => Ok(Command::Clear),
            "schedule" | "s" => Ok(Command::Schedule(parse_selection(argument))),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command {:?}. Type 'help' for the list of commands.", other)),
        }
    }
}

/// Anything that is not an index means nothing has been selected
fn parse_selection(argument: &str) -> Option<usize> {
    argument.parse().ok()
}


/// Feeds the scheduling flow from interactive prompts
struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> ScheduleInput for Prompter<'a, R, W> {
    fn due_date(&mut self) -> std::io::Result<Option<String>> {
        prompt(&format!("Enter due date ({}):", DUE_DATE_PATTERN), &mut *self.input, &mut *self.output)
    }

    fn recurrence(&mut self) -> std::io::Result<Option<String>> {
        prompt("Enter recurrence (DAILY, WEEKLY, MONTHLY) or leave blank for no recurrence:", &mut *self.input, &mut *self.output)
    }
}


/// An interactive session
pub struct Shell<R, W> {
    list: TaskList,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session on an empty list
    pub fn new(input: R, output: W) -> Self {
        Self::with_list(TaskList::new(), input, output)
    }

    pub fn with_list(list: TaskList, input: R, output: W) -> Self {
        Self { list, input, output }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Process commands until `quit` or the end of the input
    pub fn run(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "{}", app_title())?;
        writeln!(self.output, "Type 'help' for the list of commands.")?;

        loop {
            let line = match prompt(">", &mut self.input, &mut self.output)? {
                None => {
                    writeln!(self.output)?;
                    break;
                },
                Some(line) => line,
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Err(message) => writeln!(self.output, "{}", message)?,
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
            }
        }

        log::debug!("Session ends with {} tasks", self.list.len());
        Ok(())
    }

    /// Run a single command. User errors are reported on the output, only I/O errors are returned
    pub fn execute(&mut self, command: Command) -> std::io::Result<()> {
        match command {
            Command::Add(description) => {
                match commands::add_task(&mut self.list, &description) {
                    Ok(index) => self.show_task(index)?,
                    Err(err) => self.report(err, "Please enter a task.")?,
                }
            },
            Command::List { json: false } => write_task_list(&self.list, &mut self.output)?,
            Command::List { json: true } => write_task_list_json(&self.list, &mut self.output)?,
            Command::Remove(selection) => {
                match commands::remove_task(&mut self.list, selection) {
                    Ok(task) => writeln!(self.output, "Removed: {}", task)?,
                    Err(err) => self.report(err, "Please select a task to remove.")?,
                }
            },
            Command::Clear => {
                let answer = prompt("Are you sure you want to clear all tasks? [y/N]", &mut self.input, &mut self.output)?;
                let confirmed = match answer {
                    Some(a) => a.trim().eq_ignore_ascii_case("y") || a.trim().eq_ignore_ascii_case("yes"),
                    None => false,
                };
                let n_removed = commands::clear_tasks(&mut self.list, confirmed);
                if confirmed {
                    writeln!(self.output, "{} tasks removed.", n_removed)?;
                }
            },
            Command::Schedule(selection) => {
                let mut prompter = Prompter { input: &mut self.input, output: &mut self.output };
                let result = commands::schedule_task_with(&mut self.list, selection, &mut prompter);
                match result {
                    Ok(rendered) => writeln!(self.output, "[{}] {}", selection.unwrap_or_default(), rendered)?,
                    Err(err @ TaskError::Input{ .. }) => {
                        log::error!("Scheduling aborted: {}", err);
                        return Err(err.into());
                    },
                    Err(err) => self.report(err, "Please select a task to schedule.")?,
                }
            },
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => (),
        }
        Ok(())
    }

    fn show_task(&mut self, index: usize) -> std::io::Result<()> {
        match self.list.get(index) {
            Some(task) => writeln!(self.output, "[{}] {}", index, task),
            None => Ok(()),
        }
    }

    /// Turns an error into a message for the user. `selection_hint` is used for index errors
    fn report(&mut self, err: TaskError, selection_hint: &str) -> std::io::Result<()> {
        log::warn!("{}", err);
        match err {
            TaskError::InvalidInput => writeln!(self.output, "Warning: Please enter a task."),
            TaskError::IndexOutOfRange{ .. } => writeln!(self.output, "Warning: {}", selection_hint),
            TaskError::DateFormat{ .. } => writeln!(self.output, "Error: Invalid date format. Use {}.", DUE_DATE_PATTERN),
            TaskError::Input{ .. } => writeln!(self.output, "Error: {}", err),
        }
    }
}
