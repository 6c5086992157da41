use fileDen::fs_op::{EntryKind, FileStore, StoreError};
use std::fs;
use tempfile::tempdir;

#[test]
fn enter_then_go_up_restores_the_previous_cursor() {
    let td = tempdir().expect("tempdir");
    let mut store = FileStore::open(td.path()).expect("open");
    store.create_dir("docs").expect("create docs");
    store.enter(store.root().join("docs")).expect("enter docs");
    store.create_dir("drafts").expect("create drafts");

    let before = store.cwd().to_path_buf();
    store.enter(store.cwd().join("drafts")).expect("enter drafts");
    assert!(store.cwd().ends_with("drafts"));
    assert!(store.go_up());
    assert_eq!(store.cwd(), before);
}

#[test]
fn go_up_at_root_is_a_no_op() {
    let td = tempdir().expect("tempdir");
    let mut store = FileStore::open(td.path()).expect("open");
    assert_eq!(store.cwd(), store.root());
    assert!(!store.go_up());
    assert_eq!(store.cwd(), store.root());
}

#[test]
fn enter_rejects_files_and_missing_paths() {
    let td = tempdir().expect("tempdir");
    let mut store = FileStore::open(td.path()).expect("open");
    store.create_file("plain.txt", "x").expect("create");

    let err = store.enter(store.root().join("plain.txt")).unwrap_err();
    assert!(matches!(err, StoreError::NotADirectory(_)));

    let err = store.enter(store.root().join("missing")).unwrap_err();
    assert!(matches!(err, StoreError::NotADirectory(_)));
    assert_eq!(store.cwd(), store.root(), "failed enter must not move the cursor");
}

#[test]
fn enter_cannot_leave_the_root() {
    let td = tempdir().expect("tempdir");
    let inner = td.path().join("inner");
    fs::create_dir_all(&inner).expect("mkdir");
    let mut store = FileStore::open(&inner).expect("open");

    let err = store.enter(store.root().join("..")).unwrap_err();
    assert!(matches!(err, StoreError::OutsideRoot(_)));
}

#[test]
fn listing_orders_directories_first_then_case_insensitive() {
    let td = tempdir().expect("tempdir");
    let store = FileStore::open(td.path()).expect("open");
    fs::write(store.root().join("zeta"), "z").expect("write");
    fs::create_dir(store.root().join("Alpha")).expect("mkdir");
    fs::write(store.root().join("beta"), "b").expect("write");

    let names: Vec<String> = store
        .list()
        .expect("list")
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["Alpha", "beta", "zeta"]);
}

// The end-to-end browsing walk: create a folder, work inside it, come back
// out, and check each listing along the way.
#[test]
fn create_navigate_and_list_walkthrough() {
    let td = tempdir().expect("tempdir");
    let mut store = FileStore::open(td.path()).expect("open");
    assert!(store.list().expect("list").is_empty());

    store.create_dir("docs").expect("create docs");
    store.enter(store.root().join("docs")).expect("enter");
    store.create_file("note.txt", "hello").expect("create note");
    assert!(store.go_up());

    let entries = store.list().expect("list at root");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "docs");
    assert_eq!(entries[0].kind, EntryKind::Directory);
    assert_eq!(entries[0].display_name(), "docs/");

    store.enter(store.root().join("docs")).expect("re-enter");
    let entries = store.list().expect("list in docs");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "note.txt");
    assert_eq!(entries[0].kind, EntryKind::File);
    assert_eq!(store.read_file(&entries[0].path).expect("read"), "hello");
}
