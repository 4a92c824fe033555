//! The [`TupleBuffer`] type: storage management and tuple accessors.
//!
//! Range queries live in [`crate::range`].

use std::ops::Range;

use smallvec::SmallVec;
use tessera_core::{ArrayError, ConfigError, Scalar, ScalarKind, StorageGeneration};

use crate::cache::RangeCache;
use crate::config::BufferConfig;
use crate::storage::Storage;

/// One tuple copied out of a buffer.
///
/// Uses `SmallVec<[T; 4]>` to avoid heap allocation for tuples of up to
/// 4 components, covering scalars, vectors, and RGBA colors.
pub type Tuple<T> = SmallVec<[T; 4]>;

/// A growable buffer of `len` tuples with `components` scalars each.
///
/// Scalars are stored interleaved: tuple `i` occupies
/// `data()[i * components..(i + 1) * components]`.
///
/// # Storage identity
///
/// The backing region is replaced only by [`allocate`](Self::allocate)
/// past capacity, [`resize`](Self::resize) past capacity, an insertion
/// that runs out of capacity, [`set_values`](Self::set_values) past
/// capacity, and [`shrink_to_fit`](Self::shrink_to_fit). Each replacement
/// bumps [`generation`](Self::generation). Borrowed views such as
/// [`data`](Self::data) cannot outlive any of these calls.
///
/// # Examples
///
/// ```
/// use tessera_array::TupleBuffer;
///
/// let mut points = TupleBuffer::<f32>::new(3).unwrap();
/// points.insert_next_tuple(&[1.0f32, 2.0, 3.0]);
/// points.insert_next_tuple(&[4u8, 5]); // zero-padded
///
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.tuple(1).unwrap().as_slice(), &[4.0, 5.0, 0.0]);
/// ```
#[derive(Clone, Debug)]
pub struct TupleBuffer<T: Scalar> {
    pub(crate) storage: Storage<T>,
    pub(crate) components: usize,
    pub(crate) len: usize,
    pub(crate) ranges: RangeCache,
    name: Option<String>,
}

impl<T: Scalar> TupleBuffer<T> {
    /// Create an empty buffer with no capacity.
    pub fn new(components: usize) -> Result<Self, ConfigError> {
        Self::with_capacity(components, 0)
    }

    /// Create an empty buffer with room for `capacity` tuples.
    pub fn with_capacity(components: usize, capacity: usize) -> Result<Self, ConfigError> {
        if components == 0 {
            return Err(ConfigError::ZeroComponents);
        }
        Ok(Self::from_storage(
            Storage::new(components, capacity),
            components,
            0,
        ))
    }

    /// Create a buffer of `tuples` zero tuples.
    pub fn zeroed(components: usize, tuples: usize) -> Result<Self, ConfigError> {
        let mut buffer = Self::with_capacity(components, tuples)?;
        buffer.len = tuples;
        Ok(buffer)
    }

    /// Adopt flat interleaved values. `values.len()` must be a multiple of
    /// `components`.
    pub fn from_values(components: usize, values: Vec<T>) -> Result<Self, ConfigError> {
        if components == 0 {
            return Err(ConfigError::ZeroComponents);
        }
        if values.len() % components != 0 {
            return Err(ConfigError::RaggedValues {
                values: values.len(),
                components,
            });
        }
        let len = values.len() / components;
        Ok(Self::from_storage(
            Storage::from_vec(components, values),
            components,
            len,
        ))
    }

    /// Build from a config. The scalar kind is `T`'s; `config.kind` is
    /// only consulted by [`DynTupleBuffer`](crate::DynTupleBuffer).
    pub fn from_config(config: &BufferConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.initial_capacity();
        let mut buffer = Self::with_capacity(config.components, capacity)?;
        if let Some(values) = &config.values {
            for (d, &v) in buffer.storage.as_mut_slice().iter_mut().zip(values) {
                *d = T::from_f64(v);
            }
        }
        buffer.len = if config.empty { 0 } else { capacity };
        buffer.name = config.name.clone();
        Ok(buffer)
    }

    fn from_storage(storage: Storage<T>, components: usize, len: usize) -> Self {
        Self {
            storage,
            components,
            len,
            ranges: RangeCache::new(components),
            name: None,
        }
    }

    /// Attach a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The buffer's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rename the buffer.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The scalar kind of the backing storage.
    pub fn kind(&self) -> ScalarKind {
        T::KIND
    }

    /// Scalars per tuple.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Number of populated tuples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in tuples.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Number of populated scalars, `len * components`.
    pub fn value_count(&self) -> usize {
        self.len * self.components
    }

    /// Reallocation counter of the backing storage.
    pub fn generation(&self) -> StorageGeneration {
        self.storage.generation()
    }

    /// Scalar offset of tuple `index` within [`data`](Self::data).
    pub fn tuple_location(&self, index: usize) -> usize {
        index * self.components
    }

    /// The populated scalars, `len * components` long.
    ///
    /// Spare capacity is never exposed; bound iteration by this slice,
    /// not by the storage size.
    pub fn data(&self) -> &[T] {
        &self.storage.as_slice()[..self.value_count()]
    }

    /// Mutable view of the populated scalars.
    ///
    /// Clears the range cache, since the caller may change any value.
    pub fn data_mut(&mut self) -> &mut [T] {
        self.ranges.invalidate();
        let end = self.value_count();
        &mut self.storage.as_mut_slice()[..end]
    }

    /// The populated scalars as raw bytes, for upload layers.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.data())
    }

    /// Iterate over populated tuples as slices.
    pub fn iter_tuples(&self) -> std::slice::ChunksExact<'_, T> {
        self.data().chunks_exact(self.components)
    }

    // ── Storage & growth ─────────────────────────────────────────

    /// Ensure room for at least `capacity` tuples.
    ///
    /// Grow-only: a request that already fits leaves the storage (and
    /// its identity) untouched, so `len` is never affected. Otherwise the
    /// storage is replaced by exactly `capacity` tuples. Returns `true`
    /// if a reallocation happened. The range cache is kept.
    pub fn allocate(&mut self, capacity: usize) -> bool {
        self.storage.reserve_exact(capacity, self.len)
    }

    /// Set the populated length to exactly `new_len`, padding new tuples
    /// with zero.
    pub fn resize(&mut self, new_len: usize) {
        self.resize_filled(new_len, T::default());
    }

    /// Set the populated length to exactly `new_len`, padding new tuples
    /// with `fill`.
    ///
    /// Growing past capacity reallocates to exactly `new_len` tuples.
    /// Shrinking only moves the length marker; capacity and storage
    /// identity are kept.
    pub fn resize_filled(&mut self, new_len: usize, fill: T) {
        let old_len = self.len;
        self.storage.reserve_exact(new_len, old_len);
        if new_len > old_len {
            let c = self.components;
            self.storage.as_mut_slice()[old_len * c..new_len * c].fill(fill);
        }
        self.len = new_len;
        self.ranges.invalidate();
    }

    /// Release spare capacity so that `capacity() == len()`.
    ///
    /// Returns `true` if a reallocation happened. Never drops tuples.
    pub fn shrink_to_fit(&mut self) -> bool {
        if self.capacity() == self.len {
            return false;
        }
        self.storage.reallocate(self.len, self.len);
        true
    }

    /// Drop every tuple, keeping the storage as capacity.
    pub fn initialize(&mut self) {
        self.len = 0;
        self.ranges.invalidate();
    }

    /// Append one tuple and return its index.
    ///
    /// `values` shorter than `components` are zero-padded; longer ones are
    /// truncated. Values are converted into `T`. Capacity doubles only
    /// when full, so appends are amortized O(components).
    pub fn insert_next_tuple<S: Scalar>(&mut self, values: &[S]) -> usize {
        let index = self.len;
        self.storage.grow_for(index + 1, self.len);
        self.write_tuple(index, values);
        self.len += 1;
        self.ranges.invalidate();
        index
    }

    /// Append `values.len() / components` tuples from flat interleaved
    /// values. Returns the index range of the new tuples.
    ///
    /// A trailing partial tuple is ignored. Grows at most once.
    pub fn insert_next_tuples<S: Scalar>(&mut self, values: &[S]) -> Range<usize> {
        let start = self.len;
        let count = values.len() / self.components;
        if count == 0 {
            return start..start;
        }
        let end = start + count;
        self.storage.grow_for(end, self.len);

        let c = self.components;
        let dst = &mut self.storage.as_mut_slice()[start * c..end * c];
        for (d, &v) in dst.iter_mut().zip(values) {
            *d = T::convert(v);
        }
        self.len = end;
        self.ranges.invalidate();
        start..end
    }

    /// Copy `values` into tuple slot `index`, which must lie within capacity.
    fn write_tuple<S: Scalar>(&mut self, index: usize, values: &[S]) {
        let c = self.components;
        let dst = &mut self.storage.as_mut_slice()[index * c..(index + 1) * c];
        let written = values.len().min(c);
        for (d, &v) in dst.iter_mut().zip(values) {
            *d = T::convert(v);
        }
        dst[written..].fill(T::default());
    }

    // ── Tuple accessors ──────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_component(&self, component: usize) -> Result<(), ArrayError> {
        if component >= self.components {
            return Err(ArrayError::ComponentOutOfRange {
                component,
                components: self.components,
            });
        }
        Ok(())
    }

    /// Borrow tuple `index` without copying.
    pub fn tuple_slice(&self, index: usize) -> Result<&[T], ArrayError> {
        self.check_index(index)?;
        let at = self.tuple_location(index);
        Ok(&self.storage.as_slice()[at..at + self.components])
    }

    /// Copy tuple `index` out.
    pub fn tuple(&self, index: usize) -> Result<Tuple<T>, ArrayError> {
        self.tuple_slice(index).map(Tuple::from_slice)
    }

    /// Copy tuple `index` into the front of `out` and return the written
    /// prefix. `out` must hold at least `components` scalars.
    pub fn tuple_into<'a>(&self, index: usize, out: &'a mut [T]) -> Result<&'a [T], ArrayError> {
        let tuple = self.tuple_slice(index)?;
        if out.len() < self.components {
            return Err(ArrayError::OutputTooSmall {
                needed: self.components,
                got: out.len(),
            });
        }
        let out = &mut out[..self.components];
        out.copy_from_slice(tuple);
        Ok(out)
    }

    /// Flat view of tuples `from..=to`.
    ///
    /// Negative indices count from the end (`-1` is the last tuple).
    /// `None` for `from` means the first tuple, `None` for `to` the last.
    /// `to` past the end is clamped to the last tuple. Returns `None`
    /// when the resolved `from` exceeds `to`, including on an empty
    /// buffer.
    pub fn tuples(&self, from: Option<isize>, to: Option<isize>) -> Option<&[T]> {
        let n = isize::try_from(self.len).unwrap_or(isize::MAX);
        let resolve = |i: isize| if i < 0 { i.saturating_add(n) } else { i };

        let from = resolve(from.unwrap_or(0)).max(0);
        let to = resolve(to.unwrap_or(-1)).min(n - 1);
        if from > to {
            return None;
        }
        let c = self.components;
        Some(&self.data()[from as usize * c..(to as usize + 1) * c])
    }

    /// Index of the first tuple at or after `start` equal to `candidate`.
    ///
    /// Comparison is numeric after widening both sides to `f64`, so a
    /// candidate of a different scalar kind matches equal values. A candidate
    /// whose length differs from `components` never matches.
    pub fn find_tuple<S: Scalar>(&self, candidate: &[S], start: usize) -> Option<usize> {
        if candidate.len() != self.components {
            return None;
        }
        self.iter_tuples()
            .enumerate()
            .skip(start)
            .find(|(_, tuple)| {
                tuple
                    .iter()
                    .zip(candidate)
                    .all(|(a, b)| a.to_f64() == b.to_f64())
            })
            .map(|(index, _)| index)
    }

    /// Overwrite tuple `index` with padding/truncation rules.
    pub fn set_tuple<S: Scalar>(&mut self, index: usize, values: &[S]) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.write_tuple(index, values);
        self.ranges.invalidate();
        Ok(())
    }

    /// Read one scalar.
    pub fn component(&self, index: usize, component: usize) -> Result<T, ArrayError> {
        self.check_component(component)?;
        Ok(self.tuple_slice(index)?[component])
    }

    /// Write one scalar.
    pub fn set_component(
        &mut self,
        index: usize,
        component: usize,
        value: T,
    ) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.check_component(component)?;
        let at = self.tuple_location(index) + component;
        self.storage.as_mut_slice()[at] = value;
        self.ranges.invalidate();
        Ok(())
    }

    /// Replace the whole contents with flat interleaved values.
    ///
    /// Reallocates only if the values need more than the current capacity.
    pub fn set_values<S: Scalar>(&mut self, values: &[S]) -> Result<(), ArrayError> {
        if values.len() % self.components != 0 {
            return Err(ArrayError::RaggedValues {
                values: values.len(),
                components: self.components,
            });
        }
        let len = values.len() / self.components;
        self.storage.reserve_exact(len, 0);
        for (d, &v) in self.storage.as_mut_slice().iter_mut().zip(values) {
            *d = T::convert(v);
        }
        self.len = len;
        self.ranges.invalidate();
        Ok(())
    }

    /// Set every populated scalar to `value`.
    pub fn fill(&mut self, value: T) {
        self.data_mut().fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential(components: usize, tuples: usize) -> TupleBuffer<f32> {
        let values = (0..components * tuples).map(|v| v as f32).collect();
        TupleBuffer::from_values(components, values).unwrap()
    }

    #[test]
    fn zero_components_rejected() {
        assert_eq!(
            TupleBuffer::<f32>::new(0).unwrap_err(),
            ConfigError::ZeroComponents
        );
    }

    #[test]
    fn ragged_initial_values_rejected() {
        let err = TupleBuffer::from_values(2, vec![1u8, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RaggedValues {
                values: 3,
                components: 2
            }
        );
    }

    #[test]
    fn insert_pads_and_truncates() {
        let mut buf = TupleBuffer::<i32>::new(3).unwrap();
        assert_eq!(buf.insert_next_tuple(&[1i32]), 0);
        assert_eq!(buf.insert_next_tuple(&[1i32, 2, 3, 4, 5]), 1);
        assert_eq!(buf.data(), &[1, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn insert_converts_source_kind() {
        let mut buf = TupleBuffer::<u8>::new(2).unwrap();
        buf.insert_next_tuple(&[2.7f64, 300.0]);
        assert_eq!(buf.tuple(0).unwrap().as_slice(), &[2, 255]);
    }

    #[test]
    fn insert_within_capacity_keeps_storage() {
        let mut buf = TupleBuffer::<f32>::with_capacity(2, 4).unwrap();
        let ptr = buf.storage.as_slice().as_ptr();
        for i in 0..4 {
            buf.insert_next_tuple(&[i as f32, 0.0]);
        }
        assert_eq!(buf.storage.as_slice().as_ptr(), ptr);
        assert_eq!(buf.generation(), StorageGeneration(0));

        buf.insert_next_tuple(&[9.0f32, 9.0]);
        assert_eq!(buf.generation(), StorageGeneration(1));
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn insert_next_tuples_ignores_partial_tail() {
        let mut buf = TupleBuffer::<f64>::new(2).unwrap();
        let range = buf.insert_next_tuples(&[1.0f64, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(range, 0..2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn insert_next_tuples_grows_once() {
        let mut buf = TupleBuffer::<f32>::with_capacity(1, 2).unwrap();
        buf.insert_next_tuples(&[0.0f32; 7]);
        assert_eq!(buf.generation(), StorageGeneration(1));
        assert_eq!(buf.capacity(), 7);
    }

    #[test]
    fn allocate_is_grow_only() {
        let mut buf = sequential(2, 5);
        assert!(!buf.allocate(3));
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.capacity(), 5);

        assert!(buf.allocate(10));
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.data(), sequential(2, 5).data());
    }

    #[test]
    fn resize_grow_pads_with_zero() {
        let mut buf = sequential(2, 2);
        buf.resize(4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.data(), &[0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn resize_shrink_keeps_capacity_and_identity() {
        let mut buf = sequential(3, 6);
        let gen = buf.generation();
        buf.resize(2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), 6);
        assert_eq!(buf.generation(), gen);
    }

    #[test]
    fn resize_regrow_within_capacity_clears_stale_tuples() {
        let mut buf = sequential(1, 4);
        buf.resize(1);
        buf.resize(3);
        assert_eq!(buf.data(), &[0.0, 0.0, 0.0]);
        assert_eq!(buf.generation(), StorageGeneration(0));
    }

    #[test]
    fn resize_filled_uses_fill_value() {
        let mut buf = TupleBuffer::<u8>::new(2).unwrap();
        buf.resize_filled(2, 7);
        assert_eq!(buf.data(), &[7, 7, 7, 7]);
    }

    #[test]
    fn shrink_to_fit_stops_at_len() {
        let mut buf = TupleBuffer::<i16>::with_capacity(2, 16).unwrap();
        buf.insert_next_tuple(&[1i16, 2]);
        assert!(buf.shrink_to_fit());
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.data(), &[1, 2]);
        assert!(!buf.shrink_to_fit());
    }

    #[test]
    fn initialize_keeps_capacity() {
        let mut buf = sequential(2, 3);
        buf.initialize();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 3);
        assert!(buf.data().is_empty());
    }

    #[test]
    fn tuple_out_of_range() {
        let buf = sequential(2, 3);
        assert_eq!(
            buf.tuple(3).unwrap_err(),
            ArrayError::OutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn tuple_past_len_but_within_capacity_is_out_of_range() {
        let mut buf = TupleBuffer::<f32>::with_capacity(1, 8).unwrap();
        buf.insert_next_tuple(&[1.0f32]);
        assert!(buf.tuple(1).is_err());
    }

    #[test]
    fn tuple_into_writes_prefix() {
        let buf = sequential(3, 2);
        let mut out = [9.0f32; 5];
        let written = buf.tuple_into(1, &mut out).unwrap();
        assert_eq!(written, &[3.0, 4.0, 5.0]);
        assert_eq!(out, [3.0, 4.0, 5.0, 9.0, 9.0]);
    }

    #[test]
    fn tuple_into_rejects_short_output() {
        let buf = sequential(3, 2);
        let mut out = [0.0f32; 2];
        assert_eq!(
            buf.tuple_into(0, &mut out).unwrap_err(),
            ArrayError::OutputTooSmall { needed: 3, got: 2 }
        );
    }

    #[test]
    fn tuples_default_covers_everything() {
        let buf = sequential(2, 3);
        assert_eq!(buf.tuples(None, None), Some(buf.data()));
    }

    #[test]
    fn tuples_negative_indices() {
        let buf = sequential(1, 5);
        assert_eq!(buf.tuples(Some(-2), None), Some(&[3.0f32, 4.0][..]));
        assert_eq!(buf.tuples(Some(1), Some(-2)), Some(&[1.0f32, 2.0, 3.0][..]));
        assert_eq!(buf.tuples(Some(-100), Some(0)), Some(&[0.0f32][..]));
    }

    #[test]
    fn tuples_clamps_to() {
        let buf = sequential(1, 3);
        assert_eq!(buf.tuples(Some(1), Some(99)), Some(&[1.0f32, 2.0][..]));
    }

    #[test]
    fn tuples_inverted_is_none() {
        let buf = sequential(1, 5);
        assert_eq!(buf.tuples(Some(3), Some(1)), None);
        assert_eq!(buf.tuples(Some(5), None), None);
        assert_eq!(TupleBuffer::<f32>::new(1).unwrap().tuples(None, None), None);
    }

    #[test]
    fn find_tuple_rejects_wrong_width() {
        let buf = sequential(3, 3);
        assert_eq!(buf.find_tuple(&[0.0f32, 1.0], 0), None);
    }

    #[test]
    fn find_tuple_respects_start() {
        let mut buf = TupleBuffer::<i32>::new(2).unwrap();
        buf.insert_next_tuples(&[1i32, 1, 2, 2, 1, 1]);
        assert_eq!(buf.find_tuple(&[1i32, 1], 0), Some(0));
        assert_eq!(buf.find_tuple(&[1i32, 1], 1), Some(2));
        assert_eq!(buf.find_tuple(&[1i32, 1], 3), None);
    }

    #[test]
    fn set_tuple_and_component() {
        let mut buf = sequential(2, 2);
        buf.set_tuple(1, &[7.0f64]).unwrap();
        assert_eq!(buf.data(), &[0.0, 1.0, 7.0, 0.0]);
        buf.set_component(0, 1, 5.0).unwrap();
        assert_eq!(buf.component(0, 1).unwrap(), 5.0);
        assert!(buf.set_component(0, 2, 1.0).is_err());
        assert!(buf.set_tuple(2, &[1.0f32]).is_err());
    }

    #[test]
    fn set_values_replaces_contents() {
        let mut buf = sequential(2, 4);
        buf.set_values(&[1u8, 2]).unwrap();
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.data(), &[1.0, 2.0]);
        assert_eq!(
            buf.set_values(&[1u8, 2, 3]).unwrap_err(),
            ArrayError::RaggedValues {
                values: 3,
                components: 2
            }
        );
    }

    #[test]
    fn from_config_initially_empty_keeps_capacity() {
        let config = BufferConfig::new(ScalarKind::Float32, 2)
            .with_tuples(2)
            .initially_empty()
            .with_name("points");
        let buf = TupleBuffer::<f32>::from_config(&config).unwrap();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.name(), Some("points"));
    }

    #[test]
    fn from_config_values_fill_exactly() {
        let config = BufferConfig::new(ScalarKind::Float32, 2)
            .with_tuples(10)
            .with_values(vec![1.0, 2.0, 3.0, 4.0]);
        let buf = TupleBuffer::<i16>::from_config(&config).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn from_config_rejects_values_for_empty_buffer() {
        let config = BufferConfig::new(ScalarKind::Float32, 2)
            .with_values(vec![1.0, 2.0, 3.0, 4.0])
            .initially_empty();
        assert_eq!(
            TupleBuffer::<f32>::from_config(&config).unwrap_err(),
            ConfigError::ValuesForEmptyBuffer
        );
    }

    #[test]
    fn as_bytes_covers_logical_length() {
        let mut buf = TupleBuffer::<u16>::with_capacity(1, 8).unwrap();
        buf.insert_next_tuple(&[1u16]);
        buf.insert_next_tuple(&[2u16]);
        assert_eq!(buf.as_bytes().len(), 4);
    }
}
