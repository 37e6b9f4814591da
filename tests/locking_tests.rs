
use jotter::store::{EntryStore, FileSlot};
use predicates::prelude::*;
use tempfile::tempdir;
use test_helpers::{add_entry, jotter_command, stored_ids};

#[test]
fn test_second_writer_is_refused_while_store_is_held() {
    let dir = tempdir().unwrap();
    add_entry(dir.path(), "before the lock");

    let held = FileSlot::open(dir.path()).unwrap();

    jotter_command(dir.path())
        .args(["new", "-m", "should not land"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Store locking error"))
        .stderr(predicate::str::contains("in use"));

    drop(held);
    assert_eq!(stored_ids(dir.path()).len(), 1);
}

#[test]
fn test_lock_is_released_after_each_command() {
    let dir = tempdir().unwrap();
    add_entry(dir.path(), "one");
    add_entry(dir.path(), "two");

    let slot = FileSlot::open(dir.path()).unwrap();
    let store = EntryStore::load(slot);
    assert_eq!(store.len(), 2);
}
