//! To-do tasks

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::config::{DUE_DATE_FORMAT, NO_DUE_DATE};
use crate::error::TaskError;

/// Due dates must look exactly like `2024-06-01 09:30`, no padding, no missing leading zero
static DUE_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2}) (?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})$").expect("this is a valid regex")
});

/// How often a task is supposed to repeat.
///
/// This is only a label: nothing ever creates new occurrences of a recurring task. \
/// Any text is accepted (it is upper-cased first), but only `DAILY`, `WEEKLY` and `MONTHLY` are recognized.
/// Other labels are kept in [`Recurrence::Custom`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Custom(String),
}

impl Recurrence {
    /// Normalizes (upper-cases) a user-supplied label
    pub fn from_label(label: &str) -> Self {
        let label = label.to_uppercase();
        match label.as_str() {
            "DAILY" => Recurrence::Daily,
            "WEEKLY" => Recurrence::Weekly,
            "MONTHLY" => Recurrence::Monthly,
            _ => Recurrence::Custom(label),
        }
    }

    /// The upper-case label of this recurrence
    pub fn label(&self) -> &str {
        match self {
            Recurrence::Daily => "DAILY",
            Recurrence::Weekly => "WEEKLY",
            Recurrence::Monthly => "MONTHLY",
            Recurrence::Custom(label) => label,
        }
    }

    /// Whether this is one of the labels front-ends suggest
    pub fn is_known(&self) -> bool {
        match self {
            Recurrence::Custom(_) => false,
            _ => true,
        }
    }
}

impl Display for Recurrence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Used to support serde
impl Serialize for Recurrence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}


/// Parse a due date typed by a user.
///
/// The text must strictly follow `yyyy-MM-dd HH:mm` (surrounding whitespace is not accepted either).
/// Every field must be in its range (month 1-12, day 1-31, hour 0-23, minute 0-59), but a day that does not exist
/// in its month is moved back to the last day of this month: `2024-02-30` is `2024-02-29`, `2024-04-31` is `2024-04-30`.
pub fn parse_due_date(text: &str) -> Result<NaiveDateTime, TaskError> {
    let date_format_error = |reason: &str| TaskError::DateFormat {
        input: text.to_string(),
        reason: reason.to_string(),
    };

    let captures = match DUE_DATE_SHAPE.captures(text) {
        None => return Err(date_format_error("text does not follow the expected pattern")),
        Some(c) => c,
    };
    let field = |name: &str| -> Result<u32, TaskError> {
        captures[name].parse().map_err(|_| date_format_error("text does not follow the expected pattern"))
    };
    let (year, month, day) = (field("year")?, field("month")?, field("day")?);
    let (hour, minute) = (field("hour")?, field("minute")?);

    if day < 1 || day > 31 {
        return Err(date_format_error("day of month is out of range"));
    }
    let last_day = last_day_of_month(year as i32, month)
        .ok_or_else(|| date_format_error("month is out of range"))?;
    if day > last_day {
        log::debug!("Day {} does not exist in {}-{:02}, using day {} instead", day, year, month, last_day);
    }

    NaiveDate::from_ymd_opt(year as i32, month, day.min(last_day))
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| date_format_error("time is out of range"))
}

/// The number of days in a month, or `None` if `month` is not a valid month
fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = match month {
        1..=11 => (year, month + 1),
        12 => (year + 1, 1),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

/// Formats a due date the way it is displayed (and the way it is expected when typed)
pub fn format_due_date(dt: &NaiveDateTime) -> String {
    dt.format(DUE_DATE_FORMAT).to_string()
}

fn validate_description(description: &str) -> Result<String, TaskError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TaskError::InvalidInput);
    }
    Ok(trimmed.to_string())
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Task {
    /// What has to be done. Never empty, and never surrounded by whitespace
    description: String,

    /// When it should be done. Seconds are kept if they are provided, but never displayed
    due_date: Option<NaiveDateTime>,

    /// How often it repeats (informative only)
    recurrence: Option<Recurrence>,
}

impl Task {
    /// Create a brand new task, with neither a due date nor a recurrence.
    ///
    /// The description is trimmed, and must not be empty.
    pub fn new(description: &str) -> Result<Self, TaskError> {
        Self::new_with_parameters(description, None, None)
    }

    /// Create a new task with every field at once
    pub fn new_with_parameters(description: &str, due_date: Option<NaiveDateTime>, recurrence: Option<Recurrence>) -> Result<Self, TaskError> {
        let description = validate_description(description)?;
        Ok(Self {
            description,
            due_date,
            recurrence,
        })
    }

    pub fn description(&self) -> &str                   { &self.description }
    pub fn due_date(&self) -> Option<&NaiveDateTime>    { self.due_date.as_ref() }
    pub fn recurrence(&self) -> Option<&Recurrence>     { self.recurrence.as_ref() }

    /// Change the description. The task is left untouched in case the new description is invalid
    pub fn set_description(&mut self, new_description: &str) -> Result<(), TaskError> {
        self.description = validate_description(new_description)?;
        Ok(())
    }

    pub fn set_due_date(&mut self, new_due_date: NaiveDateTime) {
        self.due_date = Some(new_due_date);
    }

    /// Set the recurrence label. It is upper-cased, but not checked against the known labels.
    pub fn set_recurrence(&mut self, label: &str) {
        let recurrence = Recurrence::from_label(label);
        if recurrence.is_known() == false {
            log::warn!("Task {:?} gets an unusual recurrence label: {:?}", self.description, recurrence.label());
        }
        self.recurrence = Some(recurrence);
    }

    /// The way this task is displayed in a list, e.g. `Buy milk | Due: 2024-06-01 09:30 (WEEKLY)`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | Due: ", self.description)?;
        match &self.due_date {
            None => write!(f, "{}", NO_DUE_DATE)?,
            Some(dt) => write!(f, "{}", format_due_date(dt))?,
        }
        match &self.recurrence {
            Some(r) if r.label().is_empty() == false => write!(f, " ({})", r),
            _ => Ok(()),
        }
    }
}
