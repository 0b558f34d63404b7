//! 状态存储集成测试

use ctx::store::{codec, Context, FileStore, StateStore};
use ctx::StoreError;
use std::fs;
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> FileStore {
    FileStore::new(temp.path().join(".ctx"))
}

#[test]
fn test_initialize_then_load_is_empty() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.initialize().unwrap();
    assert!(store.path().exists());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    let cases: Vec<Context> = vec![
        Context::new(),
        ["a.txt", "b.txt"].into_iter().collect(),
        ["dup.md", "dup.md", "", "notes/深度.md"].into_iter().collect(),
    ];

    for context in cases {
        store.save(&context).unwrap();
        assert_eq!(store.load().unwrap(), context);
    }
}

#[test]
fn test_initialize_twice_discards_entries() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.initialize().unwrap();
    store
        .update(&mut |c: &mut Context| c.add(["a.txt", "b.txt"]))
        .unwrap();
    assert_eq!(store.load().unwrap().len(), 2);

    store.initialize().unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_initialize_overwrites_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    fs::write(store.path(), b"definitely not a context").unwrap();

    assert!(matches!(store.load(), Err(StoreError::Decode(_))));
    store.initialize().unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_load_missing_state() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert!(err.to_string().contains("ctx init"));
}

#[test]
fn test_update_appends_in_order() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.initialize().unwrap();

    store.update(&mut |c: &mut Context| c.add(["a.txt"])).unwrap();
    let context = store
        .update(&mut |c: &mut Context| c.add(["b.txt", "a.txt"]))
        .unwrap();

    assert_eq!(context.files(), ["a.txt", "b.txt", "a.txt"]);
    assert_eq!(store.load().unwrap(), context);
}

#[test]
fn test_file_contents_use_codec() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let context: Context = ["x"].into_iter().collect();
    store.save(&context).unwrap();

    let bytes = fs::read(store.path()).unwrap();
    assert_eq!(&bytes[..4], codec::MAGIC);
    assert_eq!(codec::decode(&bytes).unwrap(), context);
}
