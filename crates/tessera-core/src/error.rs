//! Error types for Tessera tuple buffers.
//!
//! Split by subsystem: [`ArrayError`] for operations on a live buffer,
//! [`ConfigError`] for construction.

use std::error::Error;
use std::fmt;

/// Errors from reading or writing a tuple buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Tuple index outside `[0, len)`.
    OutOfRange {
        /// The requested tuple index.
        index: usize,
        /// Number of tuples in the buffer.
        len: usize,
    },
    /// Component index outside `[0, components)`.
    ComponentOutOfRange {
        /// The requested component index.
        component: usize,
        /// Components per tuple.
        components: usize,
    },
    /// A flat value sequence whose length is not a whole number of tuples.
    RaggedValues {
        /// Number of scalars supplied.
        values: usize,
        /// Components per tuple.
        components: usize,
    },
    /// Caller-supplied output slice cannot hold one tuple.
    OutputTooSmall {
        /// Scalars required.
        needed: usize,
        /// Scalars available.
        got: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "tuple index {index} out of range for {len} tuples")
            }
            Self::ComponentOutOfRange {
                component,
                components,
            } => {
                write!(
                    f,
                    "component {component} out of range for {components} components per tuple"
                )
            }
            Self::RaggedValues { values, components } => {
                write!(
                    f,
                    "{values} values is not a multiple of {components} components per tuple"
                )
            }
            Self::OutputTooSmall { needed, got } => {
                write!(f, "output holds {got} scalars, need {needed}")
            }
        }
    }
}

impl Error for ArrayError {}

/// Errors from building a tuple buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `components` must be at least 1.
    ZeroComponents,
    /// Initial values are not a whole number of tuples.
    RaggedValues {
        /// Number of initial scalars supplied.
        values: usize,
        /// Components per tuple.
        components: usize,
    },
    /// Initial values were supplied for a buffer that starts empty.
    ValuesForEmptyBuffer,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroComponents => write!(f, "components per tuple must be at least 1"),
            Self::RaggedValues { values, components } => {
                write!(
                    f,
                    "{values} initial values is not a multiple of {components} components"
                )
            }
            Self::ValuesForEmptyBuffer => {
                write!(
                    f,
                    "initial values cannot be supplied for an initially empty buffer"
                )
            }
        }
    }
}

impl Error for ConfigError {}
