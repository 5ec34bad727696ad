//! Errors that the task list may return

use thiserror::Error;

use crate::config::DUE_DATE_PATTERN;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    /// The description is empty once trimmed
    #[error("a task description cannot be empty")]
    InvalidInput,

    /// No task is selected (`index` is `None`), or the selected index does not exist (anymore)
    #[error("{}", describe_out_of_range(.index, .len))]
    IndexOutOfRange { index: Option<usize>, len: usize },

    /// A due date does not match the expected pattern
    #[error("invalid due date {input:?} (expected {pattern}): {reason}", pattern = DUE_DATE_PATTERN)]
    DateFormat { input: String, reason: String },

    /// An answer could not be read at all
    #[error("unable to read an answer: {reason}")]
    Input { kind: std::io::ErrorKind, reason: String },
}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::Input { kind: err.kind(), reason: err.to_string() }
    }
}

impl From<TaskError> for std::io::Error {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::Input { kind, reason } => std::io::Error::new(kind, reason),
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}

fn describe_out_of_range(index: &Option<usize>, len: &usize) -> String {
    match index {
        None => "no task is selected".to_string(),
        Some(i) => format!("there is no task at index {} (the list has {} tasks)", i, len),
    }
}

impl TaskError {
    pub(crate) fn no_selection(len: usize) -> Self {
        TaskError::IndexOutOfRange { index: None, len }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        TaskError::IndexOutOfRange { index: Some(index), len }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(TaskError::no_selection(3).to_string(), "no task is selected");
        assert_eq!(TaskError::out_of_range(5, 2).to_string(), "there is no task at index 5 (the list has 2 tasks)");

        let err = TaskError::DateFormat { input: "tomorrow".to_string(), reason: "premature end of input".to_string() };
        assert_eq!(err.to_string(), "invalid due date \"tomorrow\" (expected yyyy-MM-dd HH:mm): premature end of input");
    }

    #[test]
    fn io_errors_keep_their_kind() {
        let err = TaskError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err, TaskError::Input { kind: std::io::ErrorKind::BrokenPipe, reason: "pipe closed".to_string() });

        let back = std::io::Error::from(err);
        assert_eq!(back.kind(), std::io::ErrorKind::BrokenPipe);
        assert_eq!(back.to_string(), "pipe closed");
    }
}
