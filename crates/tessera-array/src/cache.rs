//! Per-buffer range cache with all-or-nothing invalidation.
//!
//! [`RangeCache`] holds one optional [`ValueRange`] per component plus a
//! final slot for the magnitude. Entries move `Absent -> Computed` when a
//! range is first queried and back to `Absent` when the owning buffer is
//! mutated. There is no per-component dirty tracking: any mutation of
//! values or length clears every slot.

use tessera_core::{ArrayError, ComponentQuery, ValueRange};
use tracing::trace;

/// Cached ranges for a buffer with a fixed component count.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RangeCache {
    /// `components` entries, then the magnitude entry.
    entries: Vec<Option<ValueRange>>,
}

impl RangeCache {
    /// Create an all-absent cache for `components` components.
    pub(crate) fn new(components: usize) -> Self {
        Self {
            entries: vec![None; components + 1],
        }
    }

    /// Number of real components covered (excludes the magnitude slot).
    pub(crate) fn components(&self) -> usize {
        self.entries.len() - 1
    }

    /// Map a query to its slot index.
    pub(crate) fn slot(&self, query: ComponentQuery) -> Result<usize, ArrayError> {
        let components = self.components();
        match query {
            ComponentQuery::Component(n) if n < components => Ok(n),
            ComponentQuery::Component(n) => Err(ArrayError::ComponentOutOfRange {
                component: n,
                components,
            }),
            ComponentQuery::Magnitude => Ok(components),
        }
    }

    /// The cached range in `slot`, if computed.
    pub(crate) fn get(&self, slot: usize) -> Option<ValueRange> {
        self.entries.get(slot).copied().flatten()
    }

    /// Store a range in `slot`. Slots past the magnitude slot are ignored;
    /// callers get their slot from [`slot`](Self::slot).
    pub(crate) fn insert(&mut self, slot: usize, range: ValueRange) {
        if let Some(entry) = self.entries.get_mut(slot) {
            *entry = Some(range);
        }
    }

    /// Returns `true` if no slot has been computed.
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// Clear every slot.
    pub(crate) fn invalidate(&mut self) {
        if self.is_empty() {
            return;
        }
        trace!(slots = self.entries.len(), "range cache invalidated");
        self.entries.fill(None);
    }

    /// Copy of all slots, or `None` if nothing has been computed yet.
    pub(crate) fn snapshot(&self) -> Option<Vec<Option<ValueRange>>> {
        if self.is_empty() {
            None
        } else {
            Some(self.entries.clone())
        }
    }
}
