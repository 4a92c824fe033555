//! Growable, component-interleaved numeric buffers for Tessera.
//!
//! A [`TupleBuffer`] stores `len` tuples of `components` scalars each in a
//! single contiguous region, grows by doubling on insertion, and caches
//! per-component value ranges until the next mutation.
//!
//! # Architecture
//!
//! ```text
//! TupleBuffer<T: Scalar>
//! ├── Storage<T>      (Vec<T>, len == capacity * components, generation counter)
//! ├── len             (logical tuple count, <= capacity)
//! └── RangeCache      (components + 1 slots: per component, then magnitude)
//!
//! DynTupleBuffer      (one variant per ScalarKind, built from BufferConfig)
//! ```
//!
//! # Capacity vs. length
//!
//! Capacity is the allocated size in tuples; `len` is the populated
//! prefix. [`TupleBuffer::data`] always returns the populated prefix,
//! never the spare capacity behind it.
//!
//! # Range cache
//!
//! Ranges are computed on first query and cached. Every operation that
//! can change values or `len` clears the whole cache. `allocate` and
//! `shrink_to_fit` do neither, so they keep it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
mod cache;
pub mod config;
pub mod dynamic;
pub mod range;
mod storage;

// Public re-exports for the primary API surface.
pub use buffer::{Tuple, TupleBuffer};
pub use config::BufferConfig;
pub use dynamic::DynTupleBuffer;
pub use tessera_core::{
    ArrayError, ComponentQuery, ConfigError, Scalar, ScalarKind, StorageGeneration, ValueRange,
};
