use log::trace;
use serde::Serialize;

/// The four renditions of the membership test. They agree on every input and
/// differ only in iteration discipline, which is why each gets its own name.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Flag,
    EarlyExit,
    While,
    ForEach,
}

impl Variant {
    /// Stable presentation order used by drivers and reports.
    pub const ALL: [Variant; 4] = [
        Variant::Flag,
        Variant::EarlyExit,
        Variant::While,
        Variant::ForEach,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Variant::Flag => "V1 flag + exhaustive for",
            Variant::EarlyExit => "V2 early exit + for",
            Variant::While => "V3 compound while",
            Variant::ForEach => "V4 for-each",
        }
    }
}

/// Dispatches to the requested rendition of the scan.
pub fn contains<T: PartialEq>(variant: Variant, seq: &[T], target: &T) -> bool {
    trace!(
        "running {} over a sequence of {} elements",
        variant.label(),
        seq.len()
    );
    match variant {
        Variant::Flag => contains_flag(seq, target),
        Variant::EarlyExit => contains_early_exit(seq, target),
        Variant::While => contains_while(seq, target),
        Variant::ForEach => contains_for_each(seq, target),
    }
}

/// Flag-variable scan: visits every index and never exits early, so it
/// performs exactly `seq.len()` equality comparisons on every input.
#[allow(clippy::needless_range_loop)]
pub fn contains_flag<T: PartialEq>(seq: &[T], target: &T) -> bool {
    let mut found = false;
    for i in 0..seq.len() {
        if seq[i] == *target {
            found = true;
        }
    }
    found
}

/// Indexed scan that returns on the first match.
#[allow(clippy::needless_range_loop)]
pub fn contains_early_exit<T: PartialEq>(seq: &[T], target: &T) -> bool {
    for i in 0..seq.len() {
        if seq[i] == *target {
            return true;
        }
    }
    false
}

/// While-loop scan with a compound guard. The bounds check comes before the
/// element read and `&&` short-circuits, so `seq[seq.len()]` is never touched.
pub fn contains_while<T: PartialEq>(seq: &[T], target: &T) -> bool {
    let mut i = 0;
    while i < seq.len() && seq[i] != *target {
        i += 1;
    }
    // The loop stopped either on the bounds check or on a matching element.
    i < seq.len()
}

/// Element iteration without an index variable; exits on the first match.
pub fn contains_for_each<T: PartialEq>(seq: &[T], target: &T) -> bool {
    for element in seq {
        if element == target {
            return true;
        }
    }
    false
}
