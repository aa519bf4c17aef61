//! Module for reading CSV exports into Arrow tables.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use crate::error::{ReportError, Result};
use crate::utils::arrow::column_as_strings;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Default batch size for CSV decoding
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// An in-memory table loaded from one CSV file
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    path: PathBuf,
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl Table {
    #[must_use]
    pub fn new(name: &str, path: &Path, schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            schema,
            batches,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    /// Whether the table has a column with this name
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.schema.index_of(column).is_ok()
    }

    /// Null count of a column across all batches
    ///
    /// Counts logical nulls, so a column inferred as `Null` because every
    /// value was empty reports all of its rows.
    pub fn null_count(&self, column: &str) -> Result<usize> {
        let idx = self
            .schema
            .index_of(column)
            .map_err(|_| ReportError::column_not_found(&self.name, column))?;
        Ok(self
            .batches
            .iter()
            .map(|batch| batch.column(idx).logical_null_count())
            .sum())
    }

    /// Read a whole column as optional strings, in row order
    pub fn string_column(&self, column: &str) -> Result<Vec<Option<String>>> {
        if !self.has_column(column) {
            return Err(ReportError::column_not_found(&self.name, column));
        }

        let mut values = Vec::with_capacity(self.num_rows());
        for batch in &self.batches {
            values.extend(column_as_strings(batch, &self.name, column)?);
        }
        Ok(values)
    }
}

/// Fail if any of the given input files does not exist
pub fn ensure_inputs_exist<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ReportError::MissingInput {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Replace the inferred type of the named columns with `Utf8`
///
/// Columns absent from the schema are ignored.
#[must_use]
pub fn with_text_columns(schema: &Schema, text_columns: &[&str]) -> Schema {
    let fields: Vec<_> = schema
        .fields()
        .iter()
        .map(|field| {
            if text_columns.contains(&field.name().as_str()) {
                field.as_ref().clone().with_data_type(DataType::Utf8)
            } else {
                field.as_ref().clone()
            }
        })
        .collect();
    Schema::new_with_metadata(fields, schema.metadata().clone())
}

/// Read a CSV file with a header row into a [`Table`]
///
/// The schema is inferred from every record in the file, except for
/// `text_columns`, which are decoded verbatim so malformed dates and
/// zero-padded identifiers reach the models unchanged.
///
/// # Arguments
/// * `name` - Table name used in summaries and error messages
/// * `path` - Path to the CSV file
/// * `text_columns` - Columns to decode as `Utf8` whatever their inferred type
pub fn read_csv_table(name: &str, path: &Path, text_columns: &[&str]) -> Result<Table> {
    let start = Instant::now();
    log_operation_start("Reading CSV file", path);

    if !path.is_file() {
        return Err(ReportError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::open(path).map_err(|e| ReportError::io(path, e))?;

    let format = Format::default().with_header(true);
    let (schema, records) = format.infer_schema(&mut file, None)?;
    log::debug!(
        "Inferred {} columns from {} records of {}",
        schema.fields().len(),
        records,
        path.display()
    );

    file.seek(SeekFrom::Start(0))
        .map_err(|e| ReportError::io(path, e))?;

    let schema = Arc::new(with_text_columns(&schema, text_columns));
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_format(format)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    let table = Table::new(name, path, schema, batches);
    log_operation_complete("read", path, table.num_rows(), Some(start.elapsed()));
    Ok(table)
}
