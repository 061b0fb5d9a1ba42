//! Owned sequence buffers with fallible allocation.
//!
//! Every buffer has exactly one owner at any time. The harness creates
//! buffers before dispatch, each worker mutates only the buffer moved
//! into it, and ownership travels back through [`crate::worker::Worker::join`].

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// An owned, contiguous, mutable sequence of doubles.
///
/// Construction goes through the `try_*` methods so an out-of-memory
/// condition surfaces as [`AllocError`] instead of an abort. There is
/// deliberately no `Clone` impl; copying a buffer allocates and must
/// stay fallible.
#[derive(Debug)]
pub struct SeqBuffer {
    vals: Vec<f64>,
}

impl SeqBuffer {
    /// Allocate a zero-filled buffer of `len` elements.
    pub fn try_alloc(len: usize) -> Result<Self, AllocError> {
        let mut vals = Vec::new();
        vals.try_reserve_exact(len)
            .map_err(|source| AllocError { len, source })?;
        vals.resize(len, 0.0);
        Ok(Self { vals })
    }

    /// Allocate a buffer holding a copy of `src`.
    pub fn try_from_slice(src: &[f64]) -> Result<Self, AllocError> {
        let mut vals = Vec::new();
        vals.try_reserve_exact(src.len())
            .map_err(|source| AllocError {
                len: src.len(),
                source,
            })?;
        vals.extend_from_slice(src);
        Ok(Self { vals })
    }

    /// Fallible copy of this buffer.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        Self::try_from_slice(&self.vals)
    }

    /// Logical size of the sequence.
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.vals
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.vals
    }
}

/// Reserving backing storage for a buffer failed.
#[derive(Debug)]
pub struct AllocError {
    len: usize,
    source: TryReserveError,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate a {}-element buffer", self.len)
    }
}

impl Error for AllocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
