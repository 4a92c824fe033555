//! Core types and traits for Tessera tuple buffers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tessera workspace:
//! scalar kinds, value ranges, component queries, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod range;
pub mod scalar;

pub use error::{ArrayError, ConfigError};
pub use id::{ComponentQuery, StorageGeneration};
pub use range::ValueRange;
pub use scalar::{Scalar, ScalarKind};
