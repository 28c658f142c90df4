mod probe;
mod search;

pub use probe::{counted_seq, metered_contains, Counted, Tally};
pub use search::{
    contains, contains_early_exit, contains_flag, contains_for_each, contains_while, Variant,
};
