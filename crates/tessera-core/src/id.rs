//! Component queries and the storage generation counter.

use std::fmt;

/// Selects which range a query targets.
///
/// `Magnitude` is the virtual extra component holding the Euclidean norm
/// of each tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentQuery {
    /// A real component, addressed by its index within the tuple.
    Component(usize),
    /// The per-tuple Euclidean norm across all components.
    Magnitude,
}

impl fmt::Display for ComponentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component(n) => write!(f, "component {n}"),
            Self::Magnitude => write!(f, "magnitude"),
        }
    }
}

impl From<usize> for ComponentQuery {
    fn from(n: usize) -> Self {
        Self::Component(n)
    }
}

/// Counts reallocations of a buffer's backing storage.
///
/// Two reads of the same buffer that report the same generation saw the
/// same storage region. Incremented each time the storage is replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StorageGeneration(pub u64);

impl StorageGeneration {
    /// The generation following this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for StorageGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StorageGeneration {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
