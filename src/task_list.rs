//! An ordered list of tasks

use crate::error::TaskError;
use crate::task::Task;

/// A list of tasks, displayed in the order they have been added.
///
/// There is only one backing sequence: the display lines are rendered on demand (see [`TaskList::render_all`]),
/// so that index `i` of the display always is the task at index `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task at the end of the list, and return its index
    pub fn add(&mut self, task: Task) -> usize {
        log::debug!("Adding task {:?}", task.description());
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Remove the task at `index`. Tasks after it are shifted down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Task, TaskError> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        log::debug!("Removed task #{} {:?}", index, removed.description());
        Ok(removed)
    }

    /// Remove every task
    pub fn clear(&mut self) {
        log::info!("Clearing {} tasks", self.tasks.len());
        self.tasks.clear();
    }

    /// Apply a (fallible) change to the task at `index`, and return how this task is now displayed.
    ///
    /// `mutation` is not called at all if `index` is invalid.
    pub fn update_at<F>(&mut self, index: usize, mutation: F) -> Result<String, TaskError>
    where
        F: FnOnce(&mut Task) -> Result<(), TaskError>,
    {
        self.check_index(index)?;
        mutation(&mut self.tasks[index])?;
        let task = &self.tasks[index];
        log::debug!("Updated task #{}: {}", index, task);
        Ok(task.render())
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The display lines of this list, in order
    pub fn render_all(&self) -> Vec<String> {
        self.tasks
            .iter()
            .map(|task| task.render())
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        if index >= self.tasks.len() {
            log::debug!("Index {} is out of range ({} tasks)", index, self.tasks.len());
            return Err(TaskError::out_of_range(index, self.tasks.len()));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
