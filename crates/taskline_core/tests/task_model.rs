use chrono::{NaiveDate, NaiveDateTime};
use taskline_core::{Task, TaskKind, TaskValidationError};

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn todo_renders_with_tag_and_status() {
    let mut task = Task::todo("eat");
    assert_eq!(task.render(), "[T][ ] eat");
    assert_eq!(task.encode(), "[T][ ]eat");

    task.mark_done();
    assert_eq!(task.render(), "[T][X] eat");
    assert_eq!(task.encode(), "[T][X]eat");
}

#[test]
fn mark_done_and_undone_are_idempotent() {
    let mut task = Task::todo("eat");
    task.mark_done();
    task.mark_done();
    assert!(task.done);
    task.mark_undone();
    task.mark_undone();
    assert!(!task.done);
}

#[test]
fn deadline_renders_canonical_date_format() {
    let task = Task::deadline("Submit CS2103 Assignment", dt(2025, 12, 12, 12, 0));
    assert_eq!(
        task.render(),
        "[D][ ] Submit CS2103 Assignment by: Dec-12-2025 12:00"
    );
    assert_eq!(
        task.encode(),
        "[D][ ]Submit CS2103 Assignment /by Dec-12-2025 12:00"
    );
}

#[test]
fn event_renders_start_and_end() {
    let task = Task::event("standup", dt(2025, 1, 5, 9, 0), dt(2025, 1, 5, 9, 30)).unwrap();
    assert_eq!(
        task.render(),
        "[E][ ] standup from: Jan-05-2025 09:00 to: Jan-05-2025 09:30"
    );
    assert_eq!(
        task.encode(),
        "[E][ ]standup /from Jan-05-2025 09:00 /to Jan-05-2025 09:30"
    );
}

#[test]
fn event_rejects_reversed_or_empty_window() {
    let start = dt(2025, 1, 5, 10, 0);
    let end = dt(2025, 1, 5, 9, 0);
    assert_eq!(
        Task::event("standup", start, end).unwrap_err(),
        TaskValidationError::InvalidEventWindow { start, end }
    );
    assert!(Task::event("standup", start, start).is_err());
}

#[test]
fn occurs_on_compares_date_component_only() {
    let deadline = Task::deadline("rent", dt(2025, 1, 6, 23, 59));
    let event = Task::event("trip", dt(2025, 1, 5, 8, 0), dt(2025, 1, 7, 18, 0)).unwrap();
    let todo = Task::todo("eat");

    let jan5 = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    let jan6 = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let jan7 = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();

    assert!(deadline.occurs_on(jan6));
    assert!(!deadline.occurs_on(jan5));
    assert!(event.occurs_on(jan5));
    // Only the start day counts for events, even when the window spans it.
    assert!(!event.occurs_on(jan7));
    assert!(!todo.occurs_on(jan5));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::deadline("rent", dt(2025, 12, 1, 9, 0));
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["description"], "rent");
    assert_eq!(json["done"], false);
    assert_eq!(json["kind"]["deadline"]["due"], "2025-12-01T09:00:00");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);

    let todo_json = serde_json::to_value(Task::todo("eat")).unwrap();
    assert_eq!(todo_json["kind"], "todo");
    assert_eq!(
        serde_json::from_value::<Task>(todo_json).unwrap().kind,
        TaskKind::Todo
    );
}
