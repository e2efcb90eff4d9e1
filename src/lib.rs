//! A growable list over a single contiguous buffer, with checked indexing
//! and a comparator-driven in-place quicksort.

pub mod array;
pub mod cli;
pub mod error;
pub mod sort;

pub use array::{DynamicArray, DEFAULT_CAPACITY};
pub use error::{ListError, Result};
