use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage addressed by [`Handle`], with a free list for reuse.
///
/// Tree nodes and values live in separate arenas so a value can be replaced
/// without touching the node that refers to it.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.index()] = Some(element);
            return handle;
        }
        // slots.len() < Handle::MAX before the push keeps every handle encodable.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(Some(element));
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn free(&mut self, handle: Handle) {
        drop(self.take(handle));
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reserves_requested_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert!(arena.capacity() >= 10);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc('a');
        let _b = arena.alloc('b');
        arena.free(a);
        let c = arena.alloc('c');
        assert_eq!(c, a);
        assert_eq!(*arena.get(c), 'c');
        assert_eq!(arena.len(), 2);
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is invalid!")]
    fn get_after_take_panics() {
        let mut arena = Arena::new();
        let handle = arena.alloc(1u8);
        let _ = arena.take(handle);
        let _ = arena.get(handle);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Alloc(u32),
        Replace(usize, u32),
        Take(usize),
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            20 => any::<u32>().prop_map(Op::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Op::Replace(which, value)),
            8 => any::<usize>().prop_map(Op::Take),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn tracks_a_vec_of_live_handles(ops in prop::collection::vec(op_strategy(), 0..256)) {
            let mut live: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for op in ops {
                match op {
                    Op::Alloc(value) => live.push((arena.alloc(value), value)),
                    Op::Replace(which, value) if !live.is_empty() => {
                        let index = which % live.len();
                        *arena.get_mut(live[index].0) = value;
                        live[index].1 = value;
                    }
                    Op::Take(which) if !live.is_empty() => {
                        let (handle, expected) = live.swap_remove(which % live.len());
                        prop_assert_eq!(arena.take(handle), expected);
                    }
                    Op::Clear => {
                        arena.clear();
                        live.clear();
                    }
                    Op::Replace(..) | Op::Take(_) => {}
                }

                prop_assert_eq!(arena.len(), live.len());
                for &(handle, value) in &live {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }
}
