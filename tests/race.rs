//! End-to-end runs over seeded random inputs.

use sort_racing::buffer::SeqBuffer;
use sort_racing::fill::{fill, SeedPolicy};
use sort_racing::race::Strategy;

fn seeded_source(n: usize, seed: u64) -> SeqBuffer {
    let mut source = SeqBuffer::try_alloc(n).unwrap();
    fill(source.as_mut_slice(), SeedPolicy::Fixed(seed));
    source
}

#[test]
fn both_strategies_match_a_reference_sort() {
    // Odd size exercises the uneven partition.
    let source = seeded_source(257, 0xDECAF);

    let mut expect = source.as_slice().to_vec();
    expect.sort_unstable_by(f64::total_cmp);

    let single = Strategy::Single.race(&source).unwrap();
    let forked = Strategy::Forked.race(&source).unwrap();

    assert_eq!(single.sorted.as_slice(), expect.as_slice());
    assert_eq!(forked.sorted.as_slice(), expect.as_slice());
}

#[test]
fn same_seed_races_the_same_input() {
    let a = seeded_source(64, 9);
    let b = seeded_source(64, 9);
    assert_eq!(a.as_slice(), b.as_slice());

    let sorted_a = Strategy::Forked.race(&a).unwrap();
    let sorted_b = Strategy::Forked.race(&b).unwrap();
    assert_eq!(sorted_a.sorted.as_slice(), sorted_b.sorted.as_slice());
}
