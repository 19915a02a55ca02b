//! Low-level collections.
//!
//! The main export is [`List`], a doubly linked list of opaque values with
//! O(1) insertion and removal at any node the caller holds a [`NodeId`] for.

#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::arena::{
    Direction, Hooks, Iter, List, ListError, ListIter, NodeId, ValueRef,
};
