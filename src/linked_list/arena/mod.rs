//! # Arena-backed Doubly Linked List
//!
//! This module provides a doubly linked list whose nodes live in a slot
//! arena owned by the list and are addressed by [`NodeId`] handles.
//!
//! ## Core Components
//!
//! - [`traits`]: The `Link` and `LinkWithPrev` traits shared by node links and
//!   the list boundary.
//! - [`double::DoubleLink`] and [`double::Boundary`]: The links of a node and
//!   the head/tail pair of a list.
//! - [`list::List`]: The list itself, with insertion, deletion, duplication,
//!   search, indexing and rotation.
//! - [`hooks::Hooks`]: The optional duplicate, release and equals behaviours
//!   a list applies to its values.
//! - [`iter::ListIter`]: A detached cursor that tolerates deleting the node
//!   it just returned, and [`iter::Iter`], a plain borrowing iterator.
//!
//! ## Handles
//!
//! A [`NodeId`] stays valid until its node is deleted. Passing a handle that
//! belongs to another list, or one whose node was deleted, is a caller error:
//! it cannot corrupt memory, but it may panic or act on an unrelated node
//! that reused the slot.

pub mod traits;
pub mod double;
pub mod slab;
pub mod hooks;
pub mod error;
pub mod list;
pub mod iter;
mod dup;
mod search;

pub use error::ListError;
pub use hooks::{Hooks, ValueRef};
pub use iter::{Direction, Iter, ListIter};
pub use list::List;
pub use slab::NodeId;

#[cfg(test)]
mod tests;
