use crate::arena::Id;

/// Tree node holding one or two sorted values.
///
/// `below` leads to values under `vals[0]`; `kids[i]` leads to values
/// between `vals[i]` and the next separator above it. A container with no
/// `below` child is a bottom container and its `kids` are unused. With one
/// value held, `kids[1]` may hold a stale id left over from a split; only
/// `kids[..len]` are ever followed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Container {
    pub(crate) parent: Id,
    pub(crate) below: Id,
    pub(crate) kids: [Id; 2],
    pub(crate) vals: [i64; 2],
    pub(crate) len: u8,
}

impl Container {
    pub(crate) fn new() -> Self {
        Self {
            parent: Id::NIL,
            below: Id::NIL,
            kids: [Id::NIL; 2],
            vals: [0; 2],
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn is_bottom(&self) -> bool {
        self.below.is_nil()
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.len == 2
    }
}
