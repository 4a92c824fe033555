//! Test utilities and fixtures for Tessera development.
//!
//! Provides deterministic buffer builders for unit tests, integration
//! tests, and benches. See [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{nan_column, ramp, random_buffer, sequential, stepped_triples};
