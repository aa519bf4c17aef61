//! Arrow data handling utilities
//!
//! This module contains helpers for locating columns in record batches and
//! reading them as plain Rust values.

pub mod array_utils;

pub use array_utils::{column_as_strings, downcast_array, get_column};
