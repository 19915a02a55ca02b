//! Linked list implementations.
//!
//! [`arena`] owns its nodes in a slot arena and hands out [`arena::NodeId`]
//! handles, with optional hooks that decide how values are copied, released
//! and matched.
//!
//! # Examples
//!
//! ```
//! use adlist::linked_list::arena::{Direction, List};
//!
//! let mut list = List::new();
//! list.push_back(10).unwrap();
//! let twenty = list.push_back(20).unwrap();
//! list.push_back(30).unwrap();
//!
//! list.delete_node(twenty);
//!
//! let mut iter = list.get_iterator(Direction::Forward);
//! let mut values = vec![];
//! while let Some(node) = iter.next(&list) {
//!     values.push(*list.value(node));
//! }
//! assert_eq!(values, vec![10, 30]);
//!
//! list.rotate();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![30, 10]);
//! ```
pub mod arena;
