//! Index-based arena for tree node storage.
//!
//! Nodes are stored in a single `Vec` and referenced by `u32` index, which
//! halves the link size compared to boxed pointers and keeps the tree in
//! one allocation. Freed slots go on a free list and are reused by later
//! allocations, so ids are only stable for the lifetime of one node.

/// Index of a node in the arena.
pub type NodeId = u32;

/// Sentinel id for "no node". Never a valid slot index.
pub const NULL_NODE: NodeId = u32::MAX;

/// Slot-based storage with free-list reuse.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
}

/// Allocation statistics, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_slots: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Store an item, reusing a freed slot when one is available.
    pub fn allocate(&mut self, item: T) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            self.slots[index] = Some(item);
            return index as NodeId;
        }
        let index = self.slots.len();
        self.slots.push(Some(item));
        NodeId::try_from(index).expect("arena index should fit in NodeId")
    }

    /// Remove and return an item, leaving its slot for reuse.
    ///
    /// Returns `None` if the id is `NULL_NODE` or the slot is already free.
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.slot_index(id)?;
        let item = self.slots.get_mut(index)?.take()?;
        self.free_list.push(index);
        Some(item)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.slot_index(id)?;
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.slot_index(id)?;
        self.slots.get_mut(index)?.as_mut()
    }

    /// Mutable references to two distinct allocated slots at once.
    ///
    /// Returns `None` when the ids are equal, or either slot is absent.
    pub fn get_pair_mut(&mut self, a: NodeId, b: NodeId) -> Option<(&mut T, &mut T)> {
        let a = self.slot_index(a)?;
        let b = self.slot_index(b)?;
        if a == b || a >= self.slots.len() || b >= self.slots.len() {
            return None;
        }

        if a < b {
            let (low, high) = self.slots.split_at_mut(b);
            Some((low[a].as_mut()?, high[0].as_mut()?))
        } else {
            let (low, high) = self.slots.split_at_mut(a);
            let (first, second) = (high[0].as_mut()?, low[b].as_mut()?);
            Some((first, second))
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live items.
    pub fn allocated_count(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Number of freed slots awaiting reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocated_count() == 0
    }

    /// Drop every item and all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }

    pub fn stats(&self) -> ArenaStats {
        let total_slots = self.slots.len();
        let allocated_count = self.allocated_count();
        let utilization = if total_slots == 0 {
            0.0
        } else {
            allocated_count as f64 / total_slots as f64
        };
        ArenaStats {
            total_slots,
            allocated_count,
            free_count: self.free_list.len(),
            utilization,
        }
    }

    fn slot_index(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        Some(id as usize)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
