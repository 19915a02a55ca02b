use alloc::vec::Vec;
use core::{fmt, num::NonZeroU32};

use super::{
    double::DoubleLink,
    error::ListError,
    traits::Link,
};

/// A handle to a node of a [`List`](super::list::List).
///
/// Handles are plain indices into the list's slot arena. They are
/// **non-generational**: once a node is deleted its slot may be handed to a
/// later insertion, and an old handle then refers to the new node. Using a
/// handle after its node was deleted, or with a list it does not belong to,
/// is a caller error. It never reads freed memory; at worst it panics or
/// acts on whichever node now occupies the slot.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl NodeId {
    /// Largest number of slots an arena can hold.
    pub(crate) const MAX_SLOTS: usize = (u32::MAX - 1) as usize;

    fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|index| index.checked_add(1))
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    /// Zero-based slot index of this handle.
    #[inline]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[cold]
#[inline(never)]
fn vacant_slot(id: NodeId) -> ! {
    panic!("{id:?} does not refer to a live node");
}

#[cold]
#[inline(never)]
fn slots_exhausted() -> ! {
    panic!("arena slot indices exhausted without a reservation");
}

enum Entry<T> {
    Vacant,
    Occupied(T),
}

struct Slot<T> {
    link: DoubleLink,
    entry: Entry<T>,
}

/// Slot storage for list nodes.
///
/// Vacant slots form a free list threaded through their `next` link, so a
/// deleted node's slot is reused before the backing vector grows.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    vacant: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
            vacant: 0,
        }
    }

    /// Makes room for `additional` more nodes without touching existing ones.
    ///
    /// After a successful call the next `additional` insertions cannot fail.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), ListError> {
        let needed = additional.saturating_sub(self.vacant);
        if needed == 0 {
            return Ok(());
        }

        let total = self
            .slots
            .len()
            .checked_add(needed)
            .filter(|&total| total <= NodeId::MAX_SLOTS)
            .ok_or_else(|| {
                tracing::debug!(needed, slots = self.slots.len(), "node index space exhausted");
                ListError::AllocationFailure
            })?;

        if total > self.slots.capacity() {
            tracing::trace!(needed, capacity = self.slots.capacity(), "growing node arena");
        }
        self.slots.try_reserve(needed).map_err(|error| {
            tracing::debug!(needed, %error, "node arena allocation failed");
            ListError::AllocationFailure
        })
    }

    /// Stores `value` in a free slot.
    ///
    /// The caller must have reserved room with [`Arena::try_reserve`].
    pub(crate) fn insert(&mut self, value: T, link: DoubleLink) -> NodeId {
        if let Some(id) = self.free_head {
            let slot = &mut self.slots[id.index()];
            self.free_head = slot.link.next();
            self.vacant -= 1;
            *slot = Slot {
                link,
                entry: Entry::Occupied(value),
            };
            return id;
        }

        let id = NodeId::from_index(self.slots.len()).unwrap_or_else(|| slots_exhausted());
        self.slots.push(Slot {
            link,
            entry: Entry::Occupied(value),
        });
        id
    }

    /// Vacates the slot of `id` and hands back its value.
    pub(crate) fn remove(&mut self, id: NodeId) -> T {
        let free_head = self.free_head;
        let slot = match self.slots.get_mut(id.index()) {
            Some(slot) => slot,
            None => vacant_slot(id),
        };
        match core::mem::replace(&mut slot.entry, Entry::Vacant) {
            Entry::Occupied(value) => {
                slot.link = DoubleLink::new(None, free_head);
                self.free_head = Some(id);
                self.vacant += 1;
                value
            }
            Entry::Vacant => vacant_slot(id),
        }
    }

    /// Drops every slot. Values are dropped in slot order.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.vacant = 0;
    }

    pub(crate) fn link(&self, id: NodeId) -> &DoubleLink {
        match self.slots.get(id.index()) {
            Some(Slot {
                link,
                entry: Entry::Occupied(_),
            }) => link,
            _ => vacant_slot(id),
        }
    }

    pub(crate) fn link_mut(&mut self, id: NodeId) -> &mut DoubleLink {
        match self.slots.get_mut(id.index()) {
            Some(Slot {
                link,
                entry: Entry::Occupied(_),
            }) => link,
            _ => vacant_slot(id),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.index()) {
            Some(Slot {
                entry: Entry::Occupied(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.index()) {
            Some(Slot {
                entry: Entry::Occupied(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn value(&self, id: NodeId) -> &T {
        self.get(id).unwrap_or_else(|| vacant_slot(id))
    }

    pub(crate) fn value_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => vacant_slot(id),
        }
    }

    /// Number of further nodes the arena can hold without reallocating.
    pub(crate) fn spare_capacity(&self) -> usize {
        self.slots.capacity() - self.slots.len() + self.vacant
    }
}
