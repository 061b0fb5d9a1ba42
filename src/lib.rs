//! Races one thread sorting a whole array against two threads sorting
//! disjoint halves with a dependent merge, and reports the wall-clock
//! time of each strategy.
//!
//! The interesting part is the ownership layout: each sorter thread
//! owns its half outright, so the two run with no locking at all, and
//! the merger only ever receives halves whose sorter has already been
//! joined. The join is the sole synchronization primitive in the
//! crate.

use std::fmt;
use std::time::Duration;

use argh::FromArgs;

pub mod buffer;
pub mod fill;
pub mod merge;
pub mod race;
pub mod select_sort;
pub mod split;
pub mod worker;

/// Race one sorting thread against two sorting threads plus a merge.
#[derive(FromArgs)]
pub struct Args {
    /// number of elements to sort
    #[argh(positional)]
    pub size: String,

    /// fixed seed for the input fill; omitted means fresh entropy per run
    #[argh(option)]
    pub seed: Option<u64>,

    /// print the sorted array after both runs
    #[argh(switch)]
    pub dump: bool,
}

#[macro_export]
macro_rules! scope {
    ($name:expr) => {
        #[cfg(feature = "profile")]
        profiling::scope!($name);
    };
}

/// A wrapper struct for `std::time::Duration` to print elapsed time as
/// fractional milliseconds.
#[doc(hidden)]
pub struct Millis(pub Duration);

impl fmt::Display for Millis {
    /// Durations are always formatted in milliseconds with six decimal
    /// places, so sub-millisecond runs still carry visible digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0.as_secs_f64() * 1000.0)
    }
}
