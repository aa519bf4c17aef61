//! Console output utilities
//!
//! Dataset summaries printed to standard output before any chart is drawn.

use std::fmt::Write as _;

use crate::error::Result;
use crate::reader::Table;

/// Summary line for one column of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
    pub nulls: usize,
}

/// Shape, column types and null counts of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub title: String,
    pub file_name: String,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

impl TableSummary {
    /// Collect the summary of a loaded table
    pub fn from_table(title: &str, table: &Table) -> Result<Self> {
        let rows = table.num_rows();
        let columns = table
            .schema()
            .fields()
            .iter()
            .map(|field| {
                let nulls = table.null_count(field.name())?;
                Ok(ColumnSummary {
                    name: field.name().clone(),
                    dtype: field.data_type().to_string(),
                    non_null: rows - nulls,
                    nulls,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let file_name = table
            .path()
            .file_name()
            .map_or_else(|| table.path().display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            });

        Ok(Self {
            title: title.to_string(),
            file_name,
            rows,
            columns,
        })
    }

    /// Render the summary as an aligned text block
    #[must_use]
    pub fn render(&self) -> String {
        let name_width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max("Column".len());

        let mut out = String::new();
        let _ = writeln!(out, "{} Dataset ({}):", self.title, self.file_name);
        let _ = writeln!(out, "  Rows: {}, Columns: {}", self.rows, self.columns.len());
        let _ = writeln!(
            out,
            "  {:>3}  {:<name_width$}  {:>8}  {:>6}  Dtype",
            "#", "Column", "Non-Null", "Nulls"
        );
        for (idx, column) in self.columns.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>3}  {:<name_width$}  {:>8}  {:>6}  {}",
                idx, column.name, column.non_null, column.nulls, column.dtype
            );
        }
        out
    }
}

/// Print the summary of a table to standard output
pub fn print_table_summary(title: &str, table: &Table) -> Result<TableSummary> {
    let summary = TableSummary::from_table(title, table)?;
    println!("{}", summary.render());
    Ok(summary)
}
