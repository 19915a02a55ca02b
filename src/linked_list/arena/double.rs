use super::{
    slab::NodeId,
    traits::{Link, LinkWithPrev},
};

/// The links of a single node in a doubly linked list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleLink {
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

impl DoubleLink {
    /// Creates a link pointing at the given neighbours.
    pub const fn new(prev: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self { next, prev }
    }
}

impl Link for DoubleLink {
    #[inline]
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

impl LinkWithPrev for DoubleLink {
    #[inline]
    fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NodeId>) {
        self.prev = prev;
    }
}

/// The head and tail of a list.
///
/// A `Boundary` stands in for the missing neighbour at either end of the
/// chain: its `next` is the head (the node after "nothing") and its `prev`
/// is the tail (the node before "nothing"). Splicing code can then treat the
/// list itself as a link and never special-case the ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boundary {
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl Boundary {
    /// An empty boundary.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    /// The first node of the chain.
    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// The last node of the chain.
    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }
}

impl Link for Boundary {
    #[inline]
    fn next(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeId>) {
        self.head = next;
    }
}

impl LinkWithPrev for Boundary {
    #[inline]
    fn prev(&self) -> Option<NodeId> {
        self.tail
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NodeId>) {
        self.tail = prev;
    }
}
