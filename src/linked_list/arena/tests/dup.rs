extern crate std;

use alloc::{rc::Rc, vec::Vec};
use core::cell::RefCell;
use std::{thread_local, vec};

use super::assert_chain;
use crate::linked_list::arena::{Hooks, List, ListError};

thread_local! {
    static RELEASED: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
}

fn record_release(value: u32) {
    RELEASED.with(|released| released.borrow_mut().push(value));
}

fn released() -> Vec<u32> {
    RELEASED.with(|released| core::mem::take(&mut *released.borrow_mut()))
}

fn times_ten(value: &u32) -> Option<u32> {
    Some(value * 10)
}

fn even_only(value: &u32) -> Option<u32> {
    (value % 2 == 0).then(|| value * 10)
}

fn same_number(value: &u32, key: &u32) -> bool {
    value == key
}

#[test]
fn test_duplicate_without_hook_shares_values() {
    let values: Vec<Rc<u32>> = (1..=3).map(Rc::new).collect();
    let mut original = List::new();
    for value in &values {
        original.push_back(value.clone()).unwrap();
    }

    let mut copy = original.duplicate().unwrap();
    assert_eq!(copy.len(), 3);
    for (a, b) in original.iter().zip(copy.iter()) {
        assert!(Rc::ptr_eq(a, b));
    }

    let middle = copy.index(1).unwrap();
    copy.delete_node(middle);
    assert_eq!(copy.len(), 2);
    assert_eq!(original.len(), 3);
    let original_values: Vec<u32> = original.iter().map(|value| **value).collect();
    assert_eq!(original_values, vec![1, 2, 3]);
    assert_eq!(assert_chain(&original).len(), 3);
}

#[test]
fn test_duplicate_with_hook_copies_values_and_hooks() {
    released();
    let hooks = Hooks::new()
        .with_duplicate(times_ten)
        .with_release(record_release)
        .with_equals(same_number);
    let mut original = List::with_hooks(hooks);
    for value in [1, 2, 3] {
        original.push_back(value).unwrap();
    }

    let copy = original.duplicate().unwrap();
    assert_eq!(assert_chain(&copy), vec![10, 20, 30]);
    assert_eq!(assert_chain(&original), vec![1, 2, 3]);
    assert!(copy.hooks().duplicate().is_some());
    assert!(copy.hooks().release().is_some());
    assert!(copy.hooks().equals().is_some());
    assert!(released().is_empty());

    drop(copy);
    assert_eq!(released(), vec![10, 20, 30]);
}

#[test]
fn test_duplicate_hook_failure_releases_partial_copy() {
    released();
    let hooks = Hooks::new()
        .with_duplicate(even_only)
        .with_release(record_release);
    let mut original = List::with_hooks(hooks);
    for value in [2, 4, 5, 6] {
        original.push_back(value).unwrap();
    }

    let result = original.duplicate();
    assert_eq!(
        result.err(),
        Some(ListError::DuplicateCallbackFailure { position: 2 })
    );
    assert_eq!(released(), vec![20, 40]);
    assert_eq!(assert_chain(&original), vec![2, 4, 5, 6]);
}

#[test]
fn test_duplicate_empty() {
    let original = List::<u32>::new();
    let copy = original.duplicate().unwrap();
    assert!(copy.is_empty());
}
