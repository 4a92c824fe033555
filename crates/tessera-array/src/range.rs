//! Component range computation and the cached range API.
//!
//! Reduction skips NaN: a NaN neither wins nor blocks a comparison. A
//! component with no tuples, or only NaN values, reduces to
//! [`ValueRange::EMPTY`]. The magnitude of a tuple is its Euclidean norm
//! over all components; a NaN component makes that tuple's magnitude NaN,
//! so it is skipped as well.

use tessera_core::{ArrayError, ComponentQuery, Scalar, ValueRange};
use tracing::trace;

use crate::buffer::TupleBuffer;

/// Min/max of one component over interleaved `data`.
pub fn component_range<T: Scalar>(data: &[T], components: usize, component: usize) -> ValueRange {
    data.iter()
        .skip(component)
        .step_by(components)
        .fold(ValueRange::EMPTY, |range, &v| range.including(v.to_f64()))
}

/// Euclidean norm of one tuple.
///
/// Sums squares directly. If that overflows, the tuple is rescaled by its
/// largest component, so only a tuple holding an infinity has an
/// infinite norm.
#[inline]
pub fn magnitude<T: Scalar>(tuple: &[T]) -> f64 {
    let squares: f64 = tuple.iter().map(|&v| v.to_f64().powi(2)).sum();
    if squares.is_finite() || squares.is_nan() {
        return squares.sqrt();
    }
    let scale = tuple
        .iter()
        .map(|&v| v.to_f64().abs())
        .fold(0.0, f64::max);
    if scale.is_infinite() {
        return f64::INFINITY;
    }
    let scaled: f64 = tuple.iter().map(|&v| (v.to_f64() / scale).powi(2)).sum();
    scale * scaled.sqrt()
}

/// Min/max of the per-tuple magnitude over interleaved `data`.
pub fn magnitude_range<T: Scalar>(data: &[T], components: usize) -> ValueRange {
    ValueRange::from_values(data.chunks_exact(components).map(magnitude))
}

impl<T: Scalar> TupleBuffer<T> {
    /// Scan the populated tuples for `query` without touching the cache.
    pub fn compute_range(&self, query: ComponentQuery) -> Result<ValueRange, ArrayError> {
        let slot = self.ranges.slot(query)?;
        Ok(self.scan_slot(slot))
    }

    fn scan_slot(&self, slot: usize) -> ValueRange {
        let range = if slot == self.components {
            magnitude_range(self.data(), self.components)
        } else {
            component_range(self.data(), self.components, slot)
        };
        trace!(slot, tuples = self.len, %range, "range computed");
        range
    }

    fn cached_or_scan(&mut self, slot: usize) -> ValueRange {
        if let Some(range) = self.ranges.get(slot) {
            return range;
        }
        let range = self.scan_slot(slot);
        self.ranges.insert(slot, range);
        range
    }

    /// Range of a component or of the magnitude, cached until the next
    /// mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_array::{ComponentQuery, TupleBuffer, ValueRange};
    ///
    /// let mut buf = TupleBuffer::from_values(2, vec![3.0f32, 4.0, f32::NAN, 1.0]).unwrap();
    /// assert_eq!(buf.range(ComponentQuery::Component(0)).unwrap(), ValueRange::new(3.0, 3.0));
    /// assert_eq!(buf.range(ComponentQuery::Magnitude).unwrap(), ValueRange::new(5.0, 5.0));
    /// ```
    pub fn range(&mut self, query: ComponentQuery) -> Result<ValueRange, ArrayError> {
        let slot = self.ranges.slot(query)?;
        Ok(self.cached_or_scan(slot))
    }

    /// `max - min` of [`range`](Self::range), `0.0` for an empty range.
    pub fn range_size(&mut self, query: ComponentQuery) -> Result<f64, ArrayError> {
        self.range(query).map(|range| range.size())
    }

    /// Every component range followed by the magnitude range, computing
    /// and caching whatever is missing. Always `components + 1` long.
    pub fn ranges(&mut self) -> Vec<ValueRange> {
        (0..=self.components)
            .map(|slot| self.cached_or_scan(slot))
            .collect()
    }

    /// The cached ranges without computing anything.
    ///
    /// Returns `None` if no range has been computed since the last
    /// mutation. Otherwise returns `components + 1` entries in
    /// [`ranges`](Self::ranges) order, with `None` for entries that were
    /// never computed.
    pub fn cached_ranges(&self) -> Option<Vec<Option<ValueRange>>> {
        self.ranges.snapshot()
    }

    /// Install a known range for `query`. Cleared by the next mutation
    /// like a computed one.
    pub fn set_range(
        &mut self,
        query: ComponentQuery,
        range: ValueRange,
    ) -> Result<(), ArrayError> {
        let slot = self.ranges.slot(query)?;
        self.ranges.insert(slot, range);
        Ok(())
    }
}
