//! Runtime-typed tuple buffers.
//!
//! [`DynTupleBuffer`] wraps a [`TupleBuffer`] of any supported scalar kind
//! so that upload layers can work with a buffer whose kind is only known
//! at runtime. Built from a [`BufferConfig`].

use std::ops::Range;

use tessera_core::{
    ArrayError, ComponentQuery, ConfigError, Scalar, ScalarKind, StorageGeneration, ValueRange,
};

use crate::buffer::TupleBuffer;
use crate::config::BufferConfig;

/// A [`TupleBuffer`] whose scalar kind is chosen at runtime.
#[derive(Clone, Debug)]
pub enum DynTupleBuffer {
    /// `i8` storage.
    Int8(TupleBuffer<i8>),
    /// `u8` storage.
    Uint8(TupleBuffer<u8>),
    /// `i16` storage.
    Int16(TupleBuffer<i16>),
    /// `u16` storage.
    Uint16(TupleBuffer<u16>),
    /// `i32` storage.
    Int32(TupleBuffer<i32>),
    /// `u32` storage.
    Uint32(TupleBuffer<u32>),
    /// `f32` storage.
    Float32(TupleBuffer<f32>),
    /// `f64` storage.
    Float64(TupleBuffer<f64>),
}

macro_rules! dispatch {
    ($self:expr, $buf:ident => $body:expr) => {
        match $self {
            DynTupleBuffer::Int8($buf) => $body,
            DynTupleBuffer::Uint8($buf) => $body,
            DynTupleBuffer::Int16($buf) => $body,
            DynTupleBuffer::Uint16($buf) => $body,
            DynTupleBuffer::Int32($buf) => $body,
            DynTupleBuffer::Uint32($buf) => $body,
            DynTupleBuffer::Float32($buf) => $body,
            DynTupleBuffer::Float64($buf) => $body,
        }
    };
}

impl DynTupleBuffer {
    /// Build a buffer of `config.kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_array::{BufferConfig, ComponentQuery, DynTupleBuffer, ScalarKind};
    ///
    /// let config =
    ///     BufferConfig::new(ScalarKind::Uint8, 4).with_values(vec![255.0, 0.0, 0.0, 255.0]);
    /// let mut colors = DynTupleBuffer::from_config(&config).unwrap();
    /// assert_eq!(colors.kind(), ScalarKind::Uint8);
    /// assert_eq!(colors.len(), 1);
    /// assert_eq!(colors.range(ComponentQuery::Component(0)).unwrap().as_pair(), (255.0, 255.0));
    /// ```
    pub fn from_config(config: &BufferConfig) -> Result<Self, ConfigError> {
        Ok(match config.kind {
            ScalarKind::Int8 => Self::Int8(TupleBuffer::from_config(config)?),
            ScalarKind::Uint8 => Self::Uint8(TupleBuffer::from_config(config)?),
            ScalarKind::Int16 => Self::Int16(TupleBuffer::from_config(config)?),
            ScalarKind::Uint16 => Self::Uint16(TupleBuffer::from_config(config)?),
            ScalarKind::Int32 => Self::Int32(TupleBuffer::from_config(config)?),
            ScalarKind::Uint32 => Self::Uint32(TupleBuffer::from_config(config)?),
            ScalarKind::Float32 => Self::Float32(TupleBuffer::from_config(config)?),
            ScalarKind::Float64 => Self::Float64(TupleBuffer::from_config(config)?),
        })
    }

    /// The scalar kind of the wrapped buffer.
    pub fn kind(&self) -> ScalarKind {
        dispatch!(self, b => b.kind())
    }

    /// The buffer's name, if any.
    pub fn name(&self) -> Option<&str> {
        dispatch!(self, b => b.name())
    }

    /// Scalars per tuple.
    pub fn components(&self) -> usize {
        dispatch!(self, b => b.components())
    }

    /// Number of populated tuples.
    pub fn len(&self) -> usize {
        dispatch!(self, b => b.len())
    }

    /// Returns `true` if the buffer holds no tuples.
    pub fn is_empty(&self) -> bool {
        dispatch!(self, b => b.is_empty())
    }

    /// Allocated size in tuples.
    pub fn capacity(&self) -> usize {
        dispatch!(self, b => b.capacity())
    }

    /// Reallocation counter of the backing storage.
    pub fn generation(&self) -> StorageGeneration {
        dispatch!(self, b => b.generation())
    }

    /// The populated scalars as raw native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        dispatch!(self, b => b.as_bytes())
    }

    /// Tuple `index` widened to `f64`.
    pub fn tuple_f64(&self, index: usize) -> Result<Vec<f64>, ArrayError> {
        dispatch!(self, b => Ok(b.tuple_slice(index)?.iter().map(|v| v.to_f64()).collect()))
    }

    /// See [`TupleBuffer::find_tuple`].
    pub fn find_tuple<S: Scalar>(&self, candidate: &[S], start: usize) -> Option<usize> {
        dispatch!(self, b => b.find_tuple(candidate, start))
    }

    /// See [`TupleBuffer::allocate`].
    pub fn allocate(&mut self, capacity: usize) -> bool {
        dispatch!(self, b => b.allocate(capacity))
    }

    /// See [`TupleBuffer::resize`].
    pub fn resize(&mut self, new_len: usize) {
        dispatch!(self, b => b.resize(new_len))
    }

    /// See [`TupleBuffer::insert_next_tuple`].
    pub fn insert_next_tuple<S: Scalar>(&mut self, values: &[S]) -> usize {
        dispatch!(self, b => b.insert_next_tuple(values))
    }

    /// See [`TupleBuffer::insert_next_tuples`].
    pub fn insert_next_tuples<S: Scalar>(&mut self, values: &[S]) -> Range<usize> {
        dispatch!(self, b => b.insert_next_tuples(values))
    }

    /// See [`TupleBuffer::range`].
    pub fn range(&mut self, query: ComponentQuery) -> Result<ValueRange, ArrayError> {
        dispatch!(self, b => b.range(query))
    }

    /// See [`TupleBuffer::ranges`].
    pub fn ranges(&mut self) -> Vec<ValueRange> {
        dispatch!(self, b => b.ranges())
    }

    /// See [`TupleBuffer::cached_ranges`].
    pub fn cached_ranges(&self) -> Option<Vec<Option<ValueRange>>> {
        dispatch!(self, b => b.cached_ranges())
    }
}

macro_rules! impl_from_typed {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<TupleBuffer<$t>> for DynTupleBuffer {
                fn from(buffer: TupleBuffer<$t>) -> Self {
                    Self::$variant(buffer)
                }
            }
        )*
    };
}

impl_from_typed! {
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
}
