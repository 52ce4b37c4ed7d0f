//! Dynamic array module.
//!
//! This module contains the `DynamicArray` container together with its
//! resize policy and error type.

pub mod dynamic_array;
pub mod error;
pub mod policy;

// Re-export the main public API
pub use dynamic_array::DynamicArray;
pub use error::{ArrayError, Result};
pub use policy::Resize;
