//! Contiguous scalar storage with exact and doubling reallocation.
//!
//! [`Storage`] owns a `Vec<T>` whose length is always a whole number of
//! tuples. It never grows in place: every capacity change builds a fresh
//! region, copies the kept prefix, swaps it in, and bumps the generation.
//! The `Vec` is never pushed to, so its pointer is stable between
//! reallocations.

use tessera_core::{Scalar, StorageGeneration};
use tracing::debug;

#[derive(Clone, Debug)]
pub(crate) struct Storage<T> {
    /// Backing scalars. `data.len() == capacity * components`.
    data: Vec<T>,
    components: usize,
    generation: StorageGeneration,
}

impl<T: Scalar> Storage<T> {
    /// Zero-filled storage for `capacity` tuples.
    pub(crate) fn new(components: usize, capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity * components],
            components,
            generation: StorageGeneration::default(),
        }
    }

    /// Adopt an existing vector. `data.len()` must be a multiple of `components`.
    pub(crate) fn from_vec(components: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len() % components, 0);
        Self {
            data,
            components,
            generation: StorageGeneration::default(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len() / self.components
    }

    pub(crate) fn generation(&self) -> StorageGeneration {
        self.generation
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Replace the storage with exactly `capacity` tuples, keeping the
    /// first `min(keep, capacity)` tuples. New slots are zero.
    pub(crate) fn reallocate(&mut self, capacity: usize, keep: usize) {
        let kept = keep.min(capacity) * self.components;
        let mut data = vec![T::default(); capacity * self.components];
        data[..kept].copy_from_slice(&self.data[..kept]);

        let old_capacity = self.capacity();
        let kind = T::KIND;
        self.data = data;
        self.generation = self.generation.next();
        debug!(
            %kind,
            old_capacity,
            new_capacity = capacity,
            generation = %self.generation,
            "tuple storage reallocated"
        );
    }

    /// Reallocate to exactly `capacity` tuples if the current storage is
    /// smaller. Returns `true` if a reallocation happened.
    pub(crate) fn reserve_exact(&mut self, capacity: usize, keep: usize) -> bool {
        if capacity <= self.capacity() {
            return false;
        }
        self.reallocate(capacity, keep);
        true
    }

    /// Make room for `required` tuples using doubling growth.
    ///
    /// The new capacity is `max(required, 2 * capacity)`, so a run of
    /// single-tuple appends reallocates O(log n) times.
    pub(crate) fn grow_for(&mut self, required: usize, keep: usize) -> bool {
        let capacity = self.capacity();
        if required <= capacity {
            return false;
        }
        let target = required.max(capacity.saturating_mul(2));
        self.reallocate(target, keep);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_storage_is_zeroed() {
        let s = Storage::<f32>::new(3, 4);
        assert_eq!(s.as_slice().len(), 12);
        assert!(s.as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(s.capacity(), 4);
    }

    #[test]
    fn reserve_within_capacity_is_noop() {
        let mut s = Storage::<u8>::new(2, 8);
        let ptr = s.as_slice().as_ptr();
        assert!(!s.reserve_exact(8, 0));
        assert!(!s.reserve_exact(3, 0));
        assert_eq!(s.as_slice().as_ptr(), ptr);
        assert_eq!(s.generation(), StorageGeneration(0));
    }

    #[test]
    fn reserve_exact_sizes_precisely() {
        let mut s = Storage::<i32>::new(3, 2);
        assert!(s.reserve_exact(5, 2));
        assert_eq!(s.capacity(), 5);
        assert_eq!(s.as_slice().len(), 15);
        assert_eq!(s.generation(), StorageGeneration(1));
    }

    #[test]
    fn reallocate_keeps_prefix() {
        let mut s = Storage::<f64>::new(2, 3);
        s.as_mut_slice()
            .copy_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        s.reallocate(5, 2);
        assert_eq!(&s.as_slice()[..6], &[1.0, 2.0, 3.0, 4.0, 0.0, 0.0]);
        assert_eq!(&s.as_slice()[6..], &[0.0; 4]);
    }

    #[test]
    fn reallocate_smaller_truncates_kept_tuples() {
        let mut s = Storage::<u16>::new(1, 4);
        s.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);
        s.reallocate(2, 4);
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn grow_for_doubles() {
        let mut s = Storage::<f32>::new(1, 4);
        assert!(s.grow_for(5, 4));
        assert_eq!(s.capacity(), 8);
        assert!(!s.grow_for(8, 8));
        assert!(s.grow_for(20, 8));
        assert_eq!(s.capacity(), 20);
    }

    #[test]
    fn grow_from_empty_takes_required() {
        let mut s = Storage::<f32>::new(3, 0);
        assert!(s.grow_for(1, 0));
        assert_eq!(s.capacity(), 1);
        assert!(s.grow_for(2, 1));
        assert_eq!(s.capacity(), 2);
    }
}
