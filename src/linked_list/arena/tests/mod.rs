use alloc::vec::Vec;
use core::fmt::Debug;

use crate::linked_list::arena::{Direction, List};

mod dup;

/// Walks the chain both ways, checks that the links agree with each other
/// and with `len`, and returns the values head to tail.
fn assert_chain<T: Clone + PartialEq + Debug>(list: &List<T>) -> Vec<T> {
    let mut forward = Vec::new();
    let mut iter = list.get_iterator(Direction::Forward);
    let mut prev = None;
    while let Some(node) = iter.next(list) {
        assert_eq!(list.prev_node(node), prev);
        if let Some(prev) = prev {
            assert_eq!(list.next_node(prev), Some(node));
        }
        forward.push(list.value(node).clone());
        prev = Some(node);
    }
    assert_eq!(list.last(), prev);

    let mut backward = Vec::new();
    list.rewind_tail(&mut iter);
    while let Some(node) = iter.next(list) {
        backward.push(list.value(node).clone());
    }
    backward.reverse();

    assert_eq!(forward, backward);
    assert_eq!(forward.len(), list.len());
    assert_eq!(list.is_empty(), list.first().is_none());
    assert_eq!(list.is_empty(), list.last().is_none());
    forward
}
