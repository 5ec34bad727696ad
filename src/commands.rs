//! The operations a front-end can perform on a [`TaskList`]
//!
//! Every handler takes the list explicitly. A front-end is expected to call [`render_all`] again after each change,
//! and to turn errors into messages for the user: none of them is fatal.

use crate::error::TaskError;
use crate::task::{parse_due_date, Task};
use crate::task_list::TaskList;
use crate::traits::{ScheduleAnswers, ScheduleInput};

/// Add a new task at the end of the list, and return its index
pub fn add_task(list: &mut TaskList, description: &str) -> Result<usize, TaskError> {
    let task = Task::new(description)?;
    Ok(list.add(task))
}

/// Remove the selected task
pub fn remove_task(list: &mut TaskList, selection: Option<usize>) -> Result<Task, TaskError> {
    let index = selection.ok_or_else(|| TaskError::no_selection(list.len()))?;
    list.remove_at(index)
}

/// Remove every task, but only if the user has `confirmed` it. Returns how many tasks have been removed
pub fn clear_tasks(list: &mut TaskList, confirmed: bool) -> usize {
    if confirmed == false {
        log::debug!("Clearing the list has not been confirmed");
        return 0;
    }
    let n_tasks = list.len();
    list.clear();
    n_tasks
}

/// Set the due date and/or the recurrence of the selected task, and return how it is now displayed.
///
/// See [`schedule_task_with`]
pub fn schedule_task(list: &mut TaskList, selection: Option<usize>, due_date_text: Option<&str>, recurrence_text: Option<&str>) -> Result<String, TaskError> {
    let mut answers = ScheduleAnswers::new(due_date_text, recurrence_text);
    schedule_task_with(list, selection, &mut answers)
}

/// Set the due date and/or the recurrence of the selected task, and return how it is now displayed.
///
/// 1. Nothing is asked to `input` unless the selection is valid.
/// 2. A non-blank due date must follow `yyyy-MM-dd HH:mm`. Otherwise, the whole operation stops there:
///    the task is left unchanged, and the recurrence is not even asked.
/// 3. A non-blank recurrence is upper-cased and stored as is.
///
/// The task is only modified once every input has been obtained: if `input` fails, the task is left unchanged
/// and a [`TaskError::Input`] is returned.
pub fn schedule_task_with<I>(list: &mut TaskList, selection: Option<usize>, input: &mut I) -> Result<String, TaskError>
where
    I: ScheduleInput + ?Sized,
{
    let index = selection.ok_or_else(|| TaskError::no_selection(list.len()))?;

    list.update_at(index, |task| {
        let due_date = match input.due_date()? {
            Some(text) if text.trim().is_empty() == false => Some(parse_due_date(&text)?),
            _ => None,
        };
        let recurrence = input.recurrence()?;

        if let Some(due_date) = due_date {
            task.set_due_date(due_date);
        }
        if let Some(label) = recurrence {
            if label.trim().is_empty() == false {
                task.set_recurrence(&label);
            }
        }
        Ok(())
    })
}

/// The display lines of the whole list
pub fn render_all(list: &TaskList) -> Vec<String> {
    list.render_all()
}
