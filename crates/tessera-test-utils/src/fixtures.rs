//! Reusable buffer fixtures.
//!
//! - [`sequential`]: tuple `i`, component `k` holds `i * components + k`.
//! - [`ramp`]: single-component `0..n`.
//! - [`stepped_triples`]: `[(0,1,2),(3,4,4),(6,7,8),...]`, the lookup fixture.
//! - [`nan_column`]: one finite value among NaNs.
//! - [`random_buffer`]: seeded ChaCha8 values, identical for identical seeds.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessera_array::TupleBuffer;
use tessera_core::Scalar;

/// Buffer whose flat contents are `0, 1, 2, ...`.
pub fn sequential<T: Scalar>(components: usize, tuples: usize) -> TupleBuffer<T> {
    let values = (0..components * tuples)
        .map(|v| T::from_f64(v as f64))
        .collect();
    TupleBuffer::from_values(components, values).expect("components must be non-zero")
}

/// Single-component buffer holding `0..n`.
pub fn ramp<T: Scalar>(n: usize) -> TupleBuffer<T> {
    sequential(1, n)
}

/// Three-component sequential buffer with tuple 1 set to `(3, 4, 4)`.
///
/// Used by lookup tests: a search for `(3, 4, 4)` must stop at index 1
/// and a search for the sequential `(3, 4, 5)` must fail.
pub fn stepped_triples<T: Scalar>(tuples: usize) -> TupleBuffer<T> {
    let mut buffer = sequential::<T>(3, tuples);
    if tuples > 1 {
        buffer
            .set_component(1, 2, T::from_f64(4.0))
            .expect("tuple 1 exists");
    }
    buffer
}

/// Single-component `f32` buffer of `len` NaNs with `value` at `finite_at`.
pub fn nan_column(len: usize, finite_at: usize, value: f32) -> TupleBuffer<f32> {
    let mut values = vec![f32::NAN; len];
    if let Some(slot) = values.get_mut(finite_at) {
        *slot = value;
    }
    TupleBuffer::from_values(1, values).expect("one component")
}

/// Buffer of uniformly random values in `[-1000, 1000)`, converted to `T`.
pub fn random_buffer<T: Scalar>(components: usize, tuples: usize, seed: u64) -> TupleBuffer<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..components * tuples)
        .map(|_| T::from_f64(rng.random_range(-1000.0..1000.0)))
        .collect();
    TupleBuffer::from_values(components, values).expect("components must be non-zero")
}
