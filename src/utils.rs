//! Some utility functions for front-ends

use std::io::{BufRead, Write};

use crate::task_list::TaskList;

/// Writes the display lines of a list, prefixed with their indices
pub fn write_task_list<W: Write>(list: &TaskList, output: &mut W) -> std::io::Result<()> {
    if list.is_empty() {
        return writeln!(output, "(no tasks)");
    }
    for (index, task) in list.into_iter().enumerate() {
        writeln!(output, "[{}] {}", index, task)?;
    }
    Ok(())
}

/// Writes the tasks of a list as pretty-printed JSON
pub fn write_task_list_json<W: Write>(list: &TaskList, output: &mut W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *output, list.tasks())?;
    writeln!(output)
}

/// Asks a question and waits for a line of answer.
///
/// Returns `None` when there is nothing left to read (this acts as a "cancel" button). \
/// The line ending is removed, but the answer is not trimmed otherwise.
pub fn prompt<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> std::io::Result<Option<String>> {
    write!(output, "{} ", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }
    while answer.ends_with('\n') || answer.ends_with('\r') {
        answer.pop();
    }
    Ok(Some(answer))
}
