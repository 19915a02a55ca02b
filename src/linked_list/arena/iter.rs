use core::iter::FusedIterator;

use super::{
    list::List,
    slab::NodeId,
    traits::{Link, LinkWithPrev},
};

/// The order in which a [`ListIter`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Head to tail.
    Forward,
    /// Tail to head.
    Backward,
}

/// A reusable cursor over the nodes of a [`List`].
///
/// The cursor does not borrow the list: every step takes the list as an
/// argument. It already points past the node it last returned, so that node
/// may be deleted with [`List::delete_node`] before the next step. Deleting
/// any other node while a traversal is under way leaves the cursor pointing
/// at whatever reuses the slot, and what it yields afterwards is
/// unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIter {
    next: Option<NodeId>,
    direction: Direction,
}

impl ListIter {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the traversal has run off the end of the list.
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Returns the current node and moves on to its neighbour in the
    /// iteration direction, or `None` once exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the cursor points at a node that was deleted.
    pub fn next<T>(&mut self, list: &List<T>) -> Option<NodeId> {
        let current = self.next?;
        let link = list.link(current);
        self.next = match self.direction {
            Direction::Forward => link.next(),
            Direction::Backward => link.prev(),
        };
        Some(current)
    }

    /// Discards the cursor. The list is not touched.
    pub fn release(self) {}
}

impl<T> List<T> {
    /// Returns a cursor starting at the head for [`Direction::Forward`] or at
    /// the tail for [`Direction::Backward`].
    pub fn get_iterator(&self, direction: Direction) -> ListIter {
        let next = match direction {
            Direction::Forward => self.first(),
            Direction::Backward => self.last(),
        };
        ListIter { next, direction }
    }

    /// Restarts `iter` as a forward traversal of this list.
    pub fn rewind(&self, iter: &mut ListIter) {
        iter.next = self.first();
        iter.direction = Direction::Forward;
    }

    /// Restarts `iter` as a backward traversal of this list.
    pub fn rewind_tail(&self, iter: &mut ListIter) {
        iter.next = self.last();
        iter.direction = Direction::Backward;
    }

    /// Returns a borrowing iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.first(),
            back: self.last(),
            remaining: self.len(),
        }
    }
}

/// A borrowing iterator over the values of a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front?;
        self.front = self.list.next_node(current);
        self.remaining -= 1;
        Some(self.list.value(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back?;
        self.back = self.list.prev_node(current);
        self.remaining -= 1;
        Some(self.list.value(current))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
