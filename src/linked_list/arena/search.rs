use super::{hooks::ValueRef, iter::Direction, list::List, slab::NodeId};

impl<T: ValueRef> List<T> {
    /// Returns the first node, from the head, whose value matches `key`.
    ///
    /// Matching uses the equals hook. Without one a node matches only when
    /// its value and `key` refer to the same thing (see [`ValueRef`]); equal
    /// but distinct referents do not match.
    pub fn search_key(&self, key: &T) -> Option<NodeId> {
        let mut iter = self.get_iterator(Direction::Forward);
        while let Some(node) = iter.next(self) {
            if self.hooks().matches(self.value(node), key) {
                return Some(node);
            }
        }
        None
    }
}

impl<T> List<T> {
    /// Returns the node at `index`.
    ///
    /// Non-negative indices count from the head, starting at 0. Negative
    /// indices count from the tail, -1 being the last node. Out of range
    /// indices give `None`. The walk starts from whichever end is nearer.
    pub fn index(&self, index: isize) -> Option<NodeId> {
        let distance = index.unsigned_abs();
        let position = if index < 0 {
            self.len().checked_sub(distance)?
        } else {
            distance
        };
        if position >= self.len() {
            return None;
        }

        let from_tail = self.len() - 1 - position;
        let (direction, steps) = if position <= from_tail {
            (Direction::Forward, position)
        } else {
            (Direction::Backward, from_tail)
        };
        let mut iter = self.get_iterator(direction);
        for _ in 0..steps {
            iter.next(self)?;
        }
        iter.next(self)
    }

    /// Moves the tail node to the head.
    pub fn rotate(&mut self) {
        if self.len() <= 1 {
            return;
        }
        let (Some(head), Some(tail)) = (self.first(), self.last()) else {
            unreachable!("list of {} nodes without both ends", self.len());
        };
        self.detach(tail);
        self.attach(tail, None, Some(head));
    }

    /// Moves the head node to the tail.
    pub fn rotate_head_to_tail(&mut self) {
        if self.len() <= 1 {
            return;
        }
        let (Some(head), Some(tail)) = (self.first(), self.last()) else {
            unreachable!("list of {} nodes without both ends", self.len());
        };
        self.detach(head);
        self.attach(head, Some(tail), None);
    }
}
