use core::fmt;

use super::{
    double::{Boundary, DoubleLink},
    error::ListError,
    hooks::{DuplicateFn, EqualsFn, Hooks, ReleaseFn},
    iter::Direction,
    slab::{Arena, NodeId},
    traits::{Link, LinkWithPrev},
};

/// A doubly linked list of opaque values.
///
/// Nodes live in a slot arena owned by the list and are addressed by
/// [`NodeId`] handles, which give O(1) insertion and deletion at any known
/// position. What the list does with its values when they are copied,
/// destroyed or searched for is decided by its [`Hooks`].
pub struct List<T> {
    arena: Arena<T>,
    ends: Boundary,
    len: usize,
    hooks: Hooks<T>,
}

impl<T> List<T> {
    /// Creates an empty list with no hooks set. Allocates nothing.
    pub const fn new() -> Self {
        Self::with_hooks(Hooks::new())
    }

    /// Creates an empty list using the given hooks.
    pub const fn with_hooks(hooks: Hooks<T>) -> Self {
        List {
            arena: Arena::new(),
            ends: Boundary::new(),
            len: 0,
            hooks,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ListError> {
        let mut list = Self::new();
        list.try_reserve(capacity)?;
        Ok(list)
    }

    /// Makes room for `additional` more nodes.
    ///
    /// On failure the list is left as it was.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ListError> {
        self.arena.try_reserve(additional)
    }

    /// Number of nodes the list can hold before it has to allocate again.
    pub fn capacity(&self) -> usize {
        self.len + self.arena.spare_capacity()
    }

    /// Destroys the list, handing every value to the release hook from head
    /// to tail. Same as dropping it.
    pub fn release(self) {}

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The head node.
    pub fn first(&self) -> Option<NodeId> {
        self.ends.head()
    }

    /// The tail node.
    pub fn last(&self) -> Option<NodeId> {
        self.ends.tail()
    }

    /// The node after `node`, or `None` at the tail.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not refer to a live node.
    pub fn next_node(&self, node: NodeId) -> Option<NodeId> {
        self.arena.link(node).next()
    }

    /// The node before `node`, or `None` at the head.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not refer to a live node.
    pub fn prev_node(&self, node: NodeId) -> Option<NodeId> {
        self.arena.link(node).prev()
    }

    /// The value held by `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not refer to a live node.
    pub fn value(&self, node: NodeId) -> &T {
        self.arena.value(node)
    }

    /// Mutable access to the value held by `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not refer to a live node.
    pub fn value_mut(&mut self, node: NodeId) -> &mut T {
        self.arena.value_mut(node)
    }

    /// The value held by `node`, or `None` if its slot is vacant.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.arena.get(node)
    }

    /// The hooks applied to values of this list.
    pub fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    /// Sets or clears the duplicate hook.
    pub fn set_duplicate(&mut self, duplicate: Option<DuplicateFn<T>>) {
        self.hooks.set_duplicate(duplicate);
    }

    /// Sets or clears the release hook.
    pub fn set_release(&mut self, release: Option<ReleaseFn<T>>) {
        self.hooks.set_release(release);
    }

    /// Sets or clears the equals hook.
    pub fn set_equals(&mut self, equals: Option<EqualsFn<T>>) {
        self.hooks.set_equals(equals);
    }

    /// Adds `value` at the head.
    ///
    /// On failure the list is left as it was and `value` is dropped.
    pub fn push_front(&mut self, value: T) -> Result<NodeId, ListError> {
        let head = self.ends.head();
        self.splice(value, None, head)
    }

    /// Adds `value` at the tail.
    ///
    /// On failure the list is left as it was and `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<NodeId, ListError> {
        let tail = self.ends.tail();
        self.splice(value, tail, None)
    }

    /// Adds `value` right after `anchor` when `after` is set, otherwise right
    /// before it.
    ///
    /// `anchor` must be a node of this list. On failure the list is left as
    /// it was.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` does not refer to a live node.
    pub fn insert_relative(
        &mut self,
        anchor: NodeId,
        value: T,
        after: bool,
    ) -> Result<NodeId, ListError> {
        let link = *self.arena.link(anchor);
        if after {
            self.splice(value, Some(anchor), link.next())
        } else {
            self.splice(value, link.prev(), Some(anchor))
        }
    }

    /// Adds `value` right after `anchor`. See [`List::insert_relative`].
    pub fn insert_after(&mut self, anchor: NodeId, value: T) -> Result<NodeId, ListError> {
        self.insert_relative(anchor, value, true)
    }

    /// Adds `value` right before `anchor`. See [`List::insert_relative`].
    pub fn insert_before(&mut self, anchor: NodeId, value: T) -> Result<NodeId, ListError> {
        self.insert_relative(anchor, value, false)
    }

    /// Removes `node` and hands its value to the release hook.
    ///
    /// `node` must be a node of this list.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not refer to a live node.
    pub fn delete_node(&mut self, node: NodeId) {
        let value = self.unlink(node);
        self.hooks.release_value(value);
    }

    /// Removes `node` and returns its value without calling the release hook.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not refer to a live node.
    pub fn unlink(&mut self, node: NodeId) -> T {
        self.detach(node);
        self.len -= 1;
        self.arena.remove(node)
    }

    /// Releases every node from head to tail, leaving an empty list that
    /// keeps its hooks.
    pub fn clear(&mut self) {
        let mut iter = self.get_iterator(Direction::Forward);
        while let Some(node) = iter.next(self) {
            let value = self.arena.remove(node);
            self.hooks.release_value(value);
        }
        self.arena.clear();
        self.ends = Boundary::new();
        self.len = 0;
    }

    /// Moves every value of `other` to the tail of this list, in order.
    ///
    /// `other` ends up empty but keeps its hooks. No hook runs. On failure
    /// both lists are left as they were.
    pub fn join(&mut self, other: &mut List<T>) -> Result<(), ListError> {
        self.arena.try_reserve(other.len)?;
        while let Some(head) = other.ends.head() {
            let value = other.unlink(head);
            self.push_back(value)?;
        }
        other.arena.clear();
        Ok(())
    }

    pub(super) fn link(&self, node: NodeId) -> &DoubleLink {
        self.arena.link(node)
    }

    /// Takes `node` out of the chain. Its own links and the length are left
    /// for the caller to fix.
    pub(super) fn detach(&mut self, node: NodeId) {
        let link = *self.arena.link(node);
        self.links_mut(link.prev()).set_next(link.next());
        self.links_mut(link.next()).set_prev(link.prev());
    }

    /// Links a detached `node` between `prev` and `next`, which must be
    /// adjacent.
    pub(super) fn attach(&mut self, node: NodeId, prev: Option<NodeId>, next: Option<NodeId>) {
        *self.arena.link_mut(node) = DoubleLink::new(prev, next);
        self.links_mut(prev).set_next(Some(node));
        self.links_mut(next).set_prev(Some(node));
    }

    fn splice(
        &mut self,
        value: T,
        prev: Option<NodeId>,
        next: Option<NodeId>,
    ) -> Result<NodeId, ListError> {
        self.arena.try_reserve(1)?;
        let node = self.arena.insert(value, DoubleLink::default());
        self.attach(node, prev, next);
        self.len += 1;
        Ok(node)
    }

    /// The links of `at`, or the list boundary when `at` is past either end.
    fn links_mut(&mut self, at: Option<NodeId>) -> &mut dyn LinkWithPrev {
        match at {
            Some(node) => self.arena.link_mut(node),
            None => &mut self.ends,
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
