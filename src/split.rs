//! Two-way partitioning into freshly-owned halves.

use crate::buffer::{AllocError, SeqBuffer};

/// Split `source` into two owned buffers of `first_len` and
/// `source.len() - first_len` elements, preserving element order.
///
/// `first_len` must not exceed `source.len()`. The source is only
/// read; each half is a fresh allocation so the two can be handed to
/// independent workers.
pub fn split(source: &[f64], first_len: usize) -> Result<(SeqBuffer, SeqBuffer), AllocError> {
    debug_assert!(first_len <= source.len());
    let (first, second) = source.split_at(first_len);
    Ok((
        SeqBuffer::try_from_slice(first)?,
        SeqBuffer::try_from_slice(second)?,
    ))
}

/// The harness partition policy: the first half gets `len / 2`
/// elements, the second half absorbs the odd remainder.
pub fn halve(source: &[f64]) -> Result<(SeqBuffer, SeqBuffer), AllocError> {
    split(source, source.len() / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn explicit_first_size() {
        let source = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let (first, second) = split(&source, 3).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 4);
        assert_eq!(first.as_slice(), [1.0, 2.0, 3.0]);
        assert_eq!(second.as_slice(), [4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn odd_remainder_goes_to_the_second_half() {
        let odd = [0.0; 7];
        let (first, second) = halve(&odd).unwrap();
        assert_eq!((first.len(), second.len()), (3, 4));

        let even = [0.0; 6];
        let (first, second) = halve(&even).unwrap();
        assert_eq!((first.len(), second.len()), (3, 3));
    }

    #[test]
    fn one_element_source() {
        let (first, second) = halve(&[4.2]).unwrap();
        assert!(first.is_empty());
        assert_eq!(second.as_slice(), [4.2]);
    }

    #[test]
    fn empty_source() {
        let (first, second) = halve(&[]).unwrap();
        assert!(first.is_empty());
        assert!(second.is_empty());
    }

    proptest! {
        #[test]
        fn halves_reassemble_the_source(
            source in proptest::collection::vec(1.0f64..1000.0, 0..128),
        ) {
            let (first, second) = halve(&source).unwrap();
            prop_assert_eq!(first.len() + second.len(), source.len());

            let mut rejoined = first.as_slice().to_vec();
            rejoined.extend_from_slice(second.as_slice());
            prop_assert_eq!(rejoined, source);
        }
    }
}
