//! This crate provides an in-memory to-do list.
//!
//! Tasks have a description, and optionally a due date and a recurrence label (see the [`task`] module).
//! They are kept in a [`TaskList`], in the order they have been added.
//!
//! Front-ends do not mutate the list directly: they call the handlers of the [`commands`] module, then re-render the list. \
//! This crate ships one such front-end, an interactive [`shell`](shell::Shell), which is used by the `todo` binary.
//!
//! Recurrence labels are informative only: nothing ever creates new occurrences of a recurring task.
//! Tasks are not persisted either, they only live as long as the process.

pub mod config;
pub mod error;
pub use error::TaskError;
pub mod task;
pub use task::{Recurrence, Task};
mod task_list;
pub use task_list::TaskList;
pub mod traits;

pub mod commands;
pub mod shell;
pub mod utils;
