use std::cell::Cell;

use crate::search::{contains, Variant};

/// Shared counter bumped by every equality test routed through [`Counted`].
#[derive(Debug, Default)]
pub struct Tally {
    comparisons: Cell<usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons.get()
    }

    fn bump(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }
}

/// Element wrapper whose equality operator records each test in a [`Tally`].
/// Lets the scans stay uninstrumented while their comparison costs are
/// measured from the outside.
#[derive(Debug)]
pub struct Counted<'a, T> {
    value: &'a T,
    tally: &'a Tally,
}

impl<'a, T> Counted<'a, T> {
    pub fn new(value: &'a T, tally: &'a Tally) -> Self {
        Self { value, tally }
    }
}

impl<T: PartialEq> PartialEq for Counted<'_, T> {
    // `!=` goes through here as well, so both the `==` scans and the
    // compound-while guard are counted the same way.
    fn eq(&self, other: &Self) -> bool {
        self.tally.bump();
        self.value == other.value
    }
}

/// Wraps every element of a slice so a scan over it can be metered.
pub fn counted_seq<'a, T>(seq: &'a [T], tally: &'a Tally) -> Vec<Counted<'a, T>> {
    seq.iter().map(|value| Counted::new(value, tally)).collect()
}

/// Runs one scan variant over an instrumented view of `seq`, returning the
/// verdict together with the number of equality comparisons performed.
pub fn metered_contains<T: PartialEq>(variant: Variant, seq: &[T], target: &T) -> (bool, usize) {
    let tally = Tally::new();
    let wrapped = counted_seq(seq, &tally);
    let wrapped_target = Counted::new(target, &tally);
    let outcome = contains(variant, &wrapped, &wrapped_target);
    (outcome, tally.comparisons())
}
