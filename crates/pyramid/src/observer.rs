/// Receives structural events while a sort runs.
///
/// Every method defaults to a no-op and `()` is the silent observer, so the
/// plain entry points monomorphize to zero instrumentation cost. Observers
/// see notifications only; they cannot influence the sort.
pub trait SortObserver {
    /// An edge followed while locating the bottom container for a value.
    fn descent_step(&mut self) {}

    /// A value placed into a bottom container.
    fn bottom_insert(&mut self) {}

    /// A value handed one level up; fires once per level of a cascade.
    fn promotion(&mut self) {}

    /// A cascade outgrew the root and a new root was created above it.
    fn root_raised(&mut self) {}
}

impl SortObserver for () {}

/// Event tallies across the sorts it observes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    pub descent_steps: u64,
    pub bottom_inserts: u64,
    pub promotions: u64,
    pub root_raises: u64,
}

impl SortObserver for SortStats {
    fn descent_step(&mut self) {
        self.descent_steps += 1;
    }

    fn bottom_insert(&mut self) {
        self.bottom_inserts += 1;
    }

    fn promotion(&mut self) {
        self.promotions += 1;
    }

    fn root_raised(&mut self) {
        self.root_raises += 1;
    }
}
