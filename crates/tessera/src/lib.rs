//! Tessera: growable, component-interleaved numeric buffers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // A buffer of 2D vectors, grown one tuple at a time.
//! let mut vectors = TupleBuffer::<f32>::new(2).unwrap();
//! vectors.insert_next_tuple(&[3.0f32, 4.0]);
//! vectors.insert_next_tuple(&[f32::NAN, 1.0]);
//! vectors.insert_next_tuple(&[-6.0f32, 8.0]);
//!
//! // Ranges skip NaN and are cached until the next mutation.
//! assert_eq!(vectors.range(ComponentQuery::Component(0)).unwrap(), ValueRange::new(-6.0, 3.0));
//! assert_eq!(vectors.range(ComponentQuery::Magnitude).unwrap(), ValueRange::new(5.0, 10.0));
//!
//! // Hand the populated scalars to an upload layer.
//! assert_eq!(vectors.data().len(), 6);
//! assert_eq!(vectors.as_bytes().len(), 24);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Scalar kinds, ranges, component queries, errors |
//! | [`array`] | `tessera-array` | `TupleBuffer`, `DynTupleBuffer`, `BufferConfig`, range scans |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core scalar, range, and error types (`tessera-core`).
pub use tessera_core as types;

/// Tuple buffers and range computation (`tessera-array`).
///
/// [`array::TupleBuffer`] for a statically typed buffer,
/// [`array::DynTupleBuffer`] when the scalar kind is only known at runtime.
pub use tessera_array as array;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    pub use tessera_array::{BufferConfig, DynTupleBuffer, Tuple, TupleBuffer};
    pub use tessera_core::{
        ArrayError, ComponentQuery, ConfigError, Scalar, ScalarKind, StorageGeneration, ValueRange,
    };
}
