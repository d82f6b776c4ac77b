#![allow(missing_docs)]
use cipherpad_core::{Pad, PadCache};

#[test]
fn test_insert_stores_independent_snapshot() {
    let mut cache = PadCache::new();
    let pad = Pad::new(vec![1, 2, 3]);
    cache.insert("a", &pad);

    // The entry is a copy, not a view of the caller's pad.
    drop(pad);
    assert_eq!(cache.get("a").map(Pad::values), Some([1, 2, 3].as_slice()));
}

#[test]
fn test_insert_overwrites_same_name() {
    let mut cache = PadCache::new();
    cache.insert("slot", &Pad::new(vec![1]));
    cache.insert("slot", &Pad::new(vec![2]));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("slot").map(Pad::values), Some([2].as_slice()));
}

#[test]
fn test_remove_returns_the_entry() {
    let mut cache = PadCache::new();
    cache.insert("gone", &Pad::new(vec![5, 6]));

    let removed = cache.remove("gone").expect("entry was present");
    assert_eq!(removed.values(), &[5, 6]);
    assert!(cache.get("gone").is_none());
    assert!(cache.remove("gone").is_none());
}

#[test]
fn test_names_lists_every_entry() {
    let mut cache = PadCache::new();
    assert!(cache.is_empty());
    cache.insert("a", &Pad::new(vec![1]));
    cache.insert("b", &Pad::new(vec![2]));

    let mut names = cache.names().collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);
}
