//! Scenario orchestration and timing.
//!
//! Both strategies sort the same source; the timed region covers
//! worker dispatch through final join, while input copies, the
//! partition, and the merge destination are all allocated before the
//! clock starts.

use std::time::{Duration, Instant};

use crate::buffer::{AllocError, SeqBuffer};
use crate::merge::merge;
use crate::select_sort::selection_sort;
use crate::split::halve;
use crate::worker::Worker;

/// An execution strategy for sorting one source sequence.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Strategy {
    /// One worker sorts the whole array.
    Single,
    /// Two workers sort disjoint halves; a third merges them.
    Forked,
}

/// What one strategy run produced: monotonic elapsed time and the
/// sorted sequence.
pub struct RaceOutcome {
    pub elapsed: Duration,
    pub sorted: SeqBuffer,
}

impl Strategy {
    /// Run this strategy over a copy of `source` and time it.
    ///
    /// The source itself is never mutated, so the same buffer can race
    /// every strategy in turn.
    pub fn race(self, source: &SeqBuffer) -> Result<RaceOutcome, AllocError> {
        match self {
            Strategy::Single => single_race(source),
            Strategy::Forked => forked_race(source),
        }
    }
}

fn single_race(source: &SeqBuffer) -> Result<RaceOutcome, AllocError> {
    crate::scope!("single_race");
    let mut work = source.try_clone()?;

    let start = Instant::now();
    let sorter = Worker::spawn(move || {
        selection_sort(work.as_mut_slice());
        work
    });
    let sorted = sorter.join();
    let elapsed = start.elapsed();

    Ok(RaceOutcome { elapsed, sorted })
}

fn forked_race(source: &SeqBuffer) -> Result<RaceOutcome, AllocError> {
    crate::scope!("forked_race");
    let (mut first, mut second) = halve(source.as_slice())?;
    let mut dest = SeqBuffer::try_alloc(source.len())?;

    let start = Instant::now();
    let a = Worker::spawn(move || {
        selection_sort(first.as_mut_slice());
        first
    });
    let b = Worker::spawn(move || {
        selection_sort(second.as_mut_slice());
        second
    });

    // Join barrier: the merger must not be dispatched until both
    // halves are fully sorted.
    let first = a.join();
    let second = b.join();

    let merger = Worker::spawn(move || {
        merge(first.as_slice(), second.as_slice(), dest.as_mut_slice());
        dest
    });
    let sorted = merger.join();
    let elapsed = start.elapsed();

    Ok(RaceOutcome { elapsed, sorted })
}
