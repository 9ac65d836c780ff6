use chrono::{NaiveDate, NaiveDateTime};
use taskline_core::{ListError, Storage, Task, TaskList};
use tempfile::TempDir;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn list_in(dir: &TempDir) -> TaskList {
    TaskList::new(Storage::new(dir.path().join("tasks.txt")))
}

fn file_contents(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join("tasks.txt")).unwrap()
}

#[test]
fn add_preserves_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = list_in(&dir);

    list.add(Task::todo("eat"));
    list.add(Task::todo("sleep"));

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).unwrap().description, "eat");
    assert_eq!(list.get(1).unwrap().description, "sleep");
}

#[test]
fn delete_shifts_subsequent_indices_down() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = list_in(&dir);
    list.add(Task::todo("eat"));
    list.add(Task::todo("sleep"));

    let removed = list.delete(0).unwrap();
    assert_eq!(removed.description, "eat");
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap().description, "sleep");
}

#[test]
fn out_of_range_indices_fail_and_leave_the_list_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = list_in(&dir);
    list.add(Task::todo("eat"));

    assert_eq!(
        list.mark_done(1).unwrap_err(),
        ListError::OutOfRange { index: 1, len: 1 }
    );
    assert_eq!(
        list.mark_undone(5).unwrap_err(),
        ListError::OutOfRange { index: 5, len: 1 }
    );
    assert_eq!(
        list.delete(1).unwrap_err(),
        ListError::OutOfRange { index: 1, len: 1 }
    );
    assert!(list.get(1).is_err());

    assert_eq!(list.len(), 1);
    assert!(!list.get(0).unwrap().done);
}

#[test]
fn every_mutation_flushes_synchronously() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = list_in(&dir);

    list.add(Task::todo("eat"));
    assert_eq!(file_contents(&dir), "[T][ ]eat\n");

    list.mark_done(0).unwrap();
    assert_eq!(file_contents(&dir), "[T][X]eat\n");

    list.mark_undone(0).unwrap();
    assert_eq!(file_contents(&dir), "[T][ ]eat\n");

    list.delete(0).unwrap();
    assert_eq!(file_contents(&dir), "");
}

#[test]
fn load_repopulates_from_storage() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut list = list_in(&dir);
        list.add(Task::todo("eat"));
        list.add(Task::deadline("rent", dt(2025, 12, 1, 9, 0)));
        list.mark_done(0).unwrap();
    }

    let reloaded = TaskList::load(Storage::new(dir.path().join("tasks.txt")));
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.get(0).unwrap().done);
    assert_eq!(reloaded.get(1).unwrap().description, "rent");
}

#[test]
fn find_by_keyword_is_case_insensitive_substring_match() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = list_in(&dir);
    list.add(Task::todo("Read book"));
    list.add(Task::todo("return Book to library"));
    list.add(Task::todo("eat"));

    let matches = list.find_by_keyword("book");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].description, "Read book");
    assert_eq!(matches[1].description, "return Book to library");

    assert!(list.find_by_keyword("gym").is_empty());
}

#[test]
fn filter_by_date_matches_deadline_due_and_event_start() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = list_in(&dir);
    list.add(Task::event("trip", dt(2025, 1, 5, 8, 0), dt(2025, 1, 6, 18, 0)).unwrap());
    list.add(Task::deadline("rent", dt(2025, 1, 6, 9, 0)));
    list.add(Task::todo("eat"));

    let jan5 = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    let matches = list.filter_by_date(jan5);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].description, "trip");
}

#[test]
fn mutations_survive_a_failed_flush() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the parent directory should be makes every
    // save fail at the filesystem level.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let mut list = TaskList::new(Storage::new(blocker.join("tasks.txt")));

    list.add(Task::todo("eat"));
    assert_eq!(list.len(), 1);

    list.mark_done(0).unwrap();
    assert!(list.get(0).unwrap().done);

    let removed = list.delete(0).unwrap();
    assert_eq!(removed.description, "eat");
    assert!(list.is_empty());

    // The mirror really is unwritable; only the explicit flush reports it.
    assert!(list.flush().is_err());
}

#[test]
fn load_over_unreadable_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the task-file path exists but cannot be read as a file.
    let path = dir.path().join("tasks.txt");
    std::fs::create_dir(&path).unwrap();

    assert!(Storage::new(&path).load().is_err());
    let list = TaskList::load(Storage::new(&path));
    assert!(list.is_empty());
}

#[test]
fn duplicate_detection_is_by_description_only_and_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = list_in(&dir);
    list.add(Task::todo("eat"));

    // Same description, different kind: still a duplicate.
    assert!(list.is_duplicate(&Task::deadline("eat", dt(2025, 1, 1, 9, 0))));
    // Case differs: not a duplicate.
    assert!(!list.is_duplicate(&Task::todo("Eat")));
}
