//! Exercises the command handlers the way a front-end does

use chrono::NaiveDate;

use todo_list::commands::{add_task, clear_tasks, remove_task, render_all, schedule_task};
use todo_list::{Recurrence, Task, TaskError, TaskList};

fn populated_list(descriptions: &[&str]) -> TaskList {
    let mut list = TaskList::new();
    for d in descriptions {
        add_task(&mut list, d).unwrap();
    }
    list
}

#[test]
fn add_grows_the_list_by_one() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut list = TaskList::new();
    for (n, input) in ["Buy milk", "  Call mum", "Read\ta book  ", "Buy milk"].iter().enumerate() {
        let index = add_task(&mut list, input).unwrap();
        assert_eq!(index, n);
        assert_eq!(list.len(), n + 1);
        assert_eq!(list.get(index).unwrap().description(), input.trim());
    }
}

#[test]
fn empty_descriptions_leave_the_list_unchanged() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut list = populated_list(&["Buy milk"]);
    for input in &["", " ", "\t\n"] {
        assert_eq!(add_task(&mut list, input), Err(TaskError::InvalidInput));
        assert_eq!(list.len(), 1);
    }
}

#[test]
fn remove_keeps_display_aligned() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut list = populated_list(&["a", "b", "c"]);
    schedule_task(&mut list, Some(2), Some("2024-06-01 09:30"), None).unwrap();

    remove_task(&mut list, Some(0)).unwrap();
    assert_eq!(render_all(&list), vec![
        "b | Due: No Due Date",
        "c | Due: 2024-06-01 09:30",
    ]);
    for (index, line) in render_all(&list).iter().enumerate() {
        assert_eq!(&list.get(index).unwrap().render(), line);
    }

    let before = list.clone();
    assert!(matches!(remove_task(&mut list, Some(2)), Err(TaskError::IndexOutOfRange{ index: Some(2), len: 2 })));
    assert!(matches!(remove_task(&mut list, None), Err(TaskError::IndexOutOfRange{ index: None, .. })));
    assert_eq!(list, before);
}

#[test]
fn clear_only_when_confirmed() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut list = populated_list(&["a", "b", "c"]);
    clear_tasks(&mut list, false);
    assert_eq!(list.len(), 3);
    clear_tasks(&mut list, true);
    assert!(list.is_empty());

    let mut empty = TaskList::new();
    clear_tasks(&mut empty, true);
    assert!(empty.is_empty());
}

#[test]
fn render_with_everything() {
    let due = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
    let mut task = Task::new("Buy milk").unwrap();
    task.set_due_date(due);
    task.set_recurrence("weekly");
    assert_eq!(task.render(), "Buy milk | Due: 2024-06-01 09:30 (WEEKLY)");

    let same = Task::new_with_parameters("Buy milk", Some(due), Some(Recurrence::from_label("weekly"))).unwrap();
    assert_eq!(task, same);

    assert_eq!(Task::new("Buy milk").unwrap().render(), "Buy milk | Due: No Due Date");
}

#[test]
fn invalid_date_keeps_previous_due_date() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut list = populated_list(&["Pay rent", "Buy milk"]);
    schedule_task(&mut list, Some(0), Some("2024-07-01 18:00"), None).unwrap();

    let result = schedule_task(&mut list, Some(0), Some("not-a-date"), Some(""));
    assert!(matches!(result, Err(TaskError::DateFormat{ .. })));
    assert_eq!(list.get(0).unwrap().render(), "Pay rent | Due: 2024-07-01 18:00");

    let result = schedule_task(&mut list, Some(1), Some("not-a-date"), Some("daily"));
    assert!(matches!(result, Err(TaskError::DateFormat{ .. })));
    assert_eq!(list.get(1).unwrap().due_date(), None);
    assert_eq!(list.get(1).unwrap().recurrence(), None);
}

#[test]
fn schedule_scenario() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut list = TaskList::new();
    let index = add_task(&mut list, "Pay rent").unwrap();
    let rendered = schedule_task(&mut list, Some(index), Some("2024-07-01 18:00"), Some("daily")).unwrap();

    assert_eq!(rendered, "Pay rent | Due: 2024-07-01 18:00 (DAILY)");
    assert_eq!(render_all(&list), vec!["Pay rent | Due: 2024-07-01 18:00 (DAILY)"]);
}

#[test]
fn unknown_recurrences_are_accepted() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut list = populated_list(&["Water the plants"]);
    let rendered = schedule_task(&mut list, Some(0), None, Some("every other day")).unwrap();
    assert_eq!(rendered, "Water the plants | Due: No Due Date (EVERY OTHER DAY)");
    assert!(list.get(0).unwrap().recurrence().unwrap().is_known() == false);
}

#[test]
fn schedule_clamps_days_past_the_end_of_the_month() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut list = populated_list(&["Pay rent", "Water the plants"]);
    let rendered = schedule_task(&mut list, Some(0), Some("2024-02-30 09:30"), Some("daily")).unwrap();
    assert_eq!(rendered, "Pay rent | Due: 2024-02-29 09:30 (DAILY)");
    let rendered = schedule_task(&mut list, Some(1), Some("2024-04-31 09:30"), None).unwrap();
    assert_eq!(rendered, "Water the plants | Due: 2024-04-30 09:30");

    let result = schedule_task(&mut list, Some(1), Some("2024-04-32 09:30"), Some("weekly"));
    assert!(matches!(result, Err(TaskError::DateFormat{ .. })));
    assert_eq!(list.get(1).unwrap().render(), "Water the plants | Due: 2024-04-30 09:30");
}
