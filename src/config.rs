//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The `chrono` format of due dates, both when parsing user input and when rendering a task
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The same format, as it is spelled out to users
pub const DUE_DATE_PATTERN: &str = "yyyy-MM-dd HH:mm";

/// What a task without a due date displays instead of a date
pub const NO_DUE_DATE: &str = "No Due Date";

/// The title that front-ends display (e.g. the banner of the interactive shell).
/// Feel free to override it before starting a front-end.
pub static APP_TITLE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("TODO Application".to_string())));

/// Returns the current value of [`APP_TITLE`]
pub fn app_title() -> String {
    match APP_TITLE.lock() {
        Ok(title) => title.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
