//! Refetch counter for views that reload after a mutation

use std::rc::Rc;

use yew::prelude::*;

/// Monotonic counter. Each dispatch bumps the latest value, so several
/// bumps before a re-render are all counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(pub u32);

impl Generation {
    /// True before any bump, i.e. on the initial load
    pub fn is_initial(self) -> bool {
        self.0 == 0
    }
}

impl Reducible for Generation {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[hook]
pub fn use_generation() -> UseReducerHandle<Generation> {
    use_reducer(Generation::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bump_counts() {
        let start = Rc::new(Generation::default());
        assert!(start.is_initial());

        let once = start.reduce(());
        let twice = once.clone().reduce(());
        assert_eq!(*once, Generation(1));
        assert_eq!(*twice, Generation(2));
        assert!(!twice.is_initial());
    }
}
