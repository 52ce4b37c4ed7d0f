//! # dynarray - Growable Indexed Sequence
//!
//! A dynamic array supporting insertion and removal at both ends and at
//! arbitrary positions, with amortized capacity management.
//!
//! ## Features
//!
//! - **Amortized growth**: capacity doubles when full and halves at quarter usage
//! - **Any element type**: unset slots are tracked with `Option`, so `T` needs no default or null value
//! - **Typed errors**: out-of-range reads, bad insert positions and removals from an empty array are all `Err`
//!
//! ## Example
//!
//! ```rust
//! use dynarray::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.append_vals(["a", "b", "c"]);
//! array.insert_val("x", 1).unwrap();
//!
//! assert_eq!(array.get(1), Ok(&"x"));
//! assert_eq!(array.remove_left(), Ok("a"));
//! assert_eq!(array.len(), 3);
//! ```

pub mod array;

// Re-export the main public API from the array module
pub use array::policy::{GROWTH_FACTOR, SHRINK_THRESHOLD_DIVISOR};
pub use array::{ArrayError, DynamicArray, Resize, Result};
