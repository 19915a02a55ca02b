use super::slab::NodeId;

/// A trait for a link in a linked list.
pub trait Link {
    /// Get the next node in the linked list
    fn next(&self) -> Option<NodeId>;

    /// Set the next node in the linked list
    fn set_next(&mut self, next: Option<NodeId>);
}

/// A trait for a link with a previous pointer.
pub trait LinkWithPrev: Link {
    /// Get the previous node in the linked list
    fn prev(&self) -> Option<NodeId>;

    /// Set the previous node in the linked list
    fn set_prev(&mut self, prev: Option<NodeId>);
}
