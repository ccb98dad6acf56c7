use crate::container::Container;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Id(u32);

impl Id {
    pub(crate) const NIL: Self = Self(u32::MAX);

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

#[inline(always)]
fn id(v: usize) -> Id {
    debug_assert!(v < u32::MAX as usize);
    Id(v as u32)
}

/// Bump allocator for [`Container`] records.
///
/// Containers are carved sequentially from one backing vector, referenced
/// by index and never freed individually; `reset` drops them all while
/// keeping the reserved block, so one arena can serve repeated sorts.
#[derive(Clone, Debug)]
pub struct Arena {
    containers: Vec<Container>,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            containers: Vec::new(),
        }
    }

    /// Arena sized for a sort of `len` values. Every container is wired
    /// with at least one value by the insertion that allocates it and never
    /// drops below one afterward, so `len` containers always suffice.
    pub fn for_input_len(len: usize) -> Self {
        Self {
            containers: Vec::with_capacity(len),
        }
    }

    /// Containers handed out since the last reset.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Discards all containers; the reserved block is kept for reuse.
    pub fn reset(&mut self) {
        self.containers.clear();
    }

    #[inline]
    pub(crate) fn alloc(&mut self) -> Id {
        let next = id(self.containers.len());
        self.containers.push(Container::new());
        next
    }

    #[inline(always)]
    pub(crate) fn get(&self, x: Id) -> &Container {
        debug_assert!(!x.is_nil());
        debug_assert!(x.idx() < self.containers.len());
        if cfg!(debug_assertions) {
            &self.containers[x.idx()]
        } else {
            // SAFETY: `Id` values are only created from valid indices and `NIL` is checked.
            unsafe { self.containers.get_unchecked(x.idx()) }
        }
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, x: Id) -> &mut Container {
        debug_assert!(!x.is_nil());
        debug_assert!(x.idx() < self.containers.len());
        if cfg!(debug_assertions) {
            &mut self.containers[x.idx()]
        } else {
            // SAFETY: `Id` values are only created from valid indices and `NIL` is checked.
            unsafe { self.containers.get_unchecked_mut(x.idx()) }
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_hands_out_fresh_zeroed_containers() {
        let mut arena = Arena::for_input_len(4);
        let a = arena.alloc();
        let b = arena.alloc();
        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);

        arena.get_mut(a).vals[0] = 7;
        arena.get_mut(a).len = 1;
        assert_eq!(arena.get(a).vals[0], 7);
        assert_eq!(arena.get(b).len, 0);
        assert!(arena.get(b).parent.is_nil());
    }

    #[test]
    fn reset_clears_but_keeps_working() {
        let mut arena = Arena::for_input_len(2);
        let a = arena.alloc();
        arena.get_mut(a).vals[0] = 99;
        arena.get_mut(a).len = 1;

        arena.reset();
        assert!(arena.is_empty());

        let b = arena.alloc();
        assert_eq!(arena.get(b).len, 0);
        assert!(arena.get(b).below.is_nil());
    }

    #[test]
    fn nil_is_nil() {
        assert!(Id::NIL.is_nil());
        assert!(!id(0).is_nil());
    }
}
