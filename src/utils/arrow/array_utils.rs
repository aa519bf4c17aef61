//! Utilities for working with Arrow arrays.
//!
//! Columns are looked up by name and cast to strings before parsing, so a
//! column arrow inferred as `Date32` or `Timestamp` is read the same way as
//! one it left as `Utf8`.

use arrow::array::{Array, ArrayRef, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::{ReportError, Result};

/// Get a column from a record batch by name
///
/// # Arguments
/// * `batch` - The record batch containing the column
/// * `table` - Table name used in the error message
/// * `column_name` - The name of the column to extract
pub fn get_column(batch: &RecordBatch, table: &str, column_name: &str) -> Result<ArrayRef> {
    let idx = batch
        .schema()
        .index_of(column_name)
        .map_err(|_| ReportError::column_not_found(table, column_name))?;
    Ok(batch.column(idx).clone())
}

/// Downcast an array reference to a concrete array type
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    table: &str,
    column_name: &str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| ReportError::column_not_found(table, column_name))
}

/// Read a column as optional strings
///
/// Nulls and empty strings both come back as `None`.
pub fn column_as_strings(
    batch: &RecordBatch,
    table: &str,
    column_name: &str,
) -> Result<Vec<Option<String>>> {
    let column = get_column(batch, table, column_name)?;
    let as_utf8 = cast(&column, &DataType::Utf8)?;
    let strings = downcast_array::<StringArray>(&as_utf8, table, column_name)?;

    Ok(strings
        .iter()
        .map(|value| {
            value
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .collect())
}
