//!
//! Runtime error types.
//!
//! Faults the runtime can detect. Rust callers get them as `Result`s; the
//! C ABI in ember-runtime turns every one of them into a fatal abort.
//! Allocation failure is not represented here: it aborts immediately.
//!

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Array index {index} is out of bounds, array size is {size}.")]
    IndexOutOfBounds { index: u32, size: u32 },

    /// An index that has no unsigned 32-bit representation after truncation
    #[error("Array index {index} is out of bounds, array size is {size}.")]
    InvalidIndex { index: f64, size: u32 },

    #[error("Array capacity {capacity} cannot grow any further")]
    CapacityOverflow { capacity: u32 },

    #[error("String length {left} + {right} exceeds the maximum string length")]
    LengthOverflow { left: u32, right: u32 },

    #[error("String of {length} bytes exceeds the maximum string length")]
    StringTooLong { length: usize },

    #[error("A collector is already installed")]
    CollectorAlreadyInstalled,

    #[error("Cannot push onto a null array")]
    NullArray,
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
