//! Benchmark profiles for Tessera tuple buffers.
//!
//! - [`point_cloud`]: 100K three-component `f32` tuples
//! - [`color_table`]: 64K four-component `u8` tuples
//! - [`BENCH_SEED`]: shared seed so every bench sees the same data

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_array::TupleBuffer;
use tessera_test_utils::random_buffer;

/// Seed used by every profile.
pub const BENCH_SEED: u64 = 42;

/// Number of tuples in [`point_cloud`].
pub const POINT_COUNT: usize = 100_000;

/// 100K random xyz points.
pub fn point_cloud() -> TupleBuffer<f32> {
    random_buffer(3, POINT_COUNT, BENCH_SEED)
}

/// 64K random RGBA colors (negative samples saturate to 0).
pub fn color_table() -> TupleBuffer<u8> {
    random_buffer(4, 65_536, BENCH_SEED)
}
