use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// An error returned when inputs are rejected.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An input is empty or not rectangular.
    #[error("{0}")]
    InvalidArgument(String),

    /// The inputs are valid on their own but cannot be multiplied.
    #[error("Inner dimensions do not match for multiplication (A columns: {a_cols}, B rows: {b_rows})")]
    DimensionMismatch {
        /// Columns of the left operand.
        a_cols: usize,
        /// Rows of the right operand.
        b_rows: usize,
    },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Returns true for empty or non-rectangular inputs.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns true for incompatible multiplication shapes.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Error::DimensionMismatch { .. })
    }
}

/// Which side of a multiplication an input is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("A"),
            Operand::B => f.write_str("B"),
        }
    }
}
