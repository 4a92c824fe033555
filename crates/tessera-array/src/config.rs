//! Buffer construction parameters.

use tessera_core::{ConfigError, ScalarKind};

/// Configuration for building a [`DynTupleBuffer`](crate::DynTupleBuffer)
/// or a typed [`TupleBuffer`](crate::TupleBuffer).
///
/// Controls the scalar kind, tuple width, and initial contents.
/// Validated at construction; the component count is immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct BufferConfig {
    /// Scalars per tuple. Must be at least 1.
    ///
    /// Default: 1.
    pub components: usize,

    /// Scalar storage kind.
    ///
    /// Default: [`ScalarKind::Float32`].
    pub kind: ScalarKind,

    /// Initial flat contents, converted into `kind` with saturating and
    /// truncating rules. Length must be a multiple of `components`.
    ///
    /// When set, `tuples` is ignored.
    pub values: Option<Vec<f64>>,

    /// Number of zero-filled tuples to pre-size when `values` is `None`.
    ///
    /// Default: 0.
    pub tuples: usize,

    /// Start with zero tuples, keeping the `tuples` pre-size as spare
    /// capacity. Cannot be combined with `values`.
    ///
    /// Default: `false`.
    pub empty: bool,

    /// Optional human-readable array name.
    pub name: Option<String>,
}

impl BufferConfig {
    /// Default components per tuple.
    pub const DEFAULT_COMPONENTS: usize = 1;

    /// Default scalar kind.
    pub const DEFAULT_KIND: ScalarKind = ScalarKind::Float32;

    /// Create a config for an empty buffer of the given kind and width.
    pub fn new(kind: ScalarKind, components: usize) -> Self {
        Self {
            components,
            kind,
            values: None,
            tuples: 0,
            empty: false,
            name: None,
        }
    }

    /// Seed the buffer with flat initial values.
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(values);
        self
    }

    /// Pre-size the buffer with `tuples` zero tuples.
    pub fn with_tuples(mut self, tuples: usize) -> Self {
        self.tuples = tuples;
        self
    }

    /// Keep the pre-sized tuples as capacity only.
    pub fn initially_empty(mut self) -> Self {
        self.empty = true;
        self
    }

    /// Attach a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check the component count and the shape of `values`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.components == 0 {
            return Err(ConfigError::ZeroComponents);
        }
        if let Some(values) = &self.values {
            if self.empty {
                return Err(ConfigError::ValuesForEmptyBuffer);
            }
            if values.len() % self.components != 0 {
                return Err(ConfigError::RaggedValues {
                    values: values.len(),
                    components: self.components,
                });
            }
        }
        Ok(())
    }

    /// Number of tuples the initial storage will hold.
    ///
    /// Also the initial length, unless `empty` is set.
    pub fn initial_capacity(&self) -> usize {
        match &self.values {
            Some(values) if self.components > 0 => values.len() / self.components,
            Some(_) => 0,
            None => self.tuples,
        }
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KIND, Self::DEFAULT_COMPONENTS)
    }
}
