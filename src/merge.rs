//! Linear two-way merge of sorted runs.

/// Merge the sorted runs `first` and `second` into `dest`.
///
/// `dest.len()` must equal `first.len() + second.len()`; a mismatch is
/// a caller bug, not a runtime condition. On equal leading elements
/// the one from `first` is written first, so elements of the first
/// half precede equal elements of the second in the output.
pub fn merge(first: &[f64], second: &[f64], dest: &mut [f64]) {
    crate::scope!("merge");
    debug_assert_eq!(first.len() + second.len(), dest.len());

    let mut i = 0;
    let mut j = 0;
    for slot in dest.iter_mut() {
        // Take from `first` while it leads or ties, or once `second`
        // has drained.
        let from_first = j == second.len() || (i < first.len() && first[i] <= second[j]);
        if from_first {
            *slot = first[i];
            i += 1;
        } else {
            *slot = second[j];
            j += 1;
        }
    }
}
