//! In-place ascending selection sort.
//!
//! Each pass scans the unsorted suffix for its minimum and swaps it
//! into place. Quadratic comparisons, linear swaps.
//!
//! ## Characteristics
//!
//!  * in-place
//!  * unstable
//!  * single-threaded
//!  * allocation-free
//!
//! The point of this crate is to race execution strategies, not sorts,
//! so the deliberately slow kernel stays: a cheap sort would bury the
//! thread dispatch and join costs under measurement noise.

/// Sort `vals` ascending in place.
///
/// Comparison is strict less-than on the suffix minimum, so equal
/// elements may be reordered. Inputs are expected to be finite reals;
/// the fill stage never produces NaN.
pub fn selection_sort(vals: &mut [f64]) {
    crate::scope!("selection_sort");
    if vals.len() < 2 {
        return;
    }
    // The final element is already in place once the rest are.
    for i in 0..vals.len() - 1 {
        let mut min = i;
        for j in i + 1..vals.len() {
            if vals[j] < vals[min] {
                min = j;
            }
        }
        vals.swap(min, i);
    }
}
