//! Traits used by the command handlers

/// Where the scheduling flow gets its (optional) inputs from.
///
/// Inputs are requested lazily and in order, so that a front-end may prompt the user for each of them only when it is needed:
/// the recurrence is not requested when the due date turned out to be invalid. \
/// An `Err` means the answer could not be obtained at all, and aborts the whole scheduling operation.
pub trait ScheduleInput {
    /// The due date text, in `yyyy-MM-dd HH:mm` format. `None` or blank text leaves the due date unchanged
    fn due_date(&mut self) -> std::io::Result<Option<String>>;

    /// The recurrence label. `None` or blank text leaves the recurrence unchanged
    fn recurrence(&mut self) -> std::io::Result<Option<String>>;
}

/// Inputs that are known in advance
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleAnswers {
    pub due_date: Option<String>,
    pub recurrence: Option<String>,
}

impl ScheduleAnswers {
    pub fn new(due_date: Option<&str>, recurrence: Option<&str>) -> Self {
        Self {
            due_date: due_date.map(|s| s.to_string()),
            recurrence: recurrence.map(|s| s.to_string()),
        }
    }
}

impl ScheduleInput for ScheduleAnswers {
    fn due_date(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.due_date.take())
    }

    fn recurrence(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.recurrence.take())
    }
}
