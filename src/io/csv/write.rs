//! Delimited text writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use ndarray::Array2;
use polars::{frame::DataFrame, io::SerWriter, prelude::{Column, CsvWriter, NamedFrom}, series::Series};

/// Write a matrix to a headerless delimited file at `path`.
pub fn write_matrix(matrix: &Array2<f64>, path: &Path, delimiter: u8) -> Result<()> {
    let mut df = matrix_to_frame(matrix)?;
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create matrix file: {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(false)
        .with_separator(delimiter)
        .finish(&mut df)
        .with_context(|| format!("[io::csv::write] Failed to write matrix to {:?}", path))
}

/// Write a matrix to a headerless delimited string.
pub fn write_matrix_string(matrix: &Array2<f64>, delimiter: u8) -> Result<String> {
    let mut df = matrix_to_frame(matrix)?;
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(false)
        .with_separator(delimiter)
        .finish(&mut df)
        .context("[io::csv::write] Failed to write matrix to string")?;
    String::from_utf8(buffer)
        .context("[io::csv::write] Matrix output is not valid UTF-8")
}

/// One f64 column per matrix column.
fn matrix_to_frame(matrix: &Array2<f64>) -> Result<DataFrame> {
    let columns = matrix.columns().into_iter()
        .enumerate()
        .map(|(j, values)| Series::new(format!("column_{}", j + 1).into(), values.to_vec()).into())
        .collect::<Vec<Column>>();
    DataFrame::new(columns).context("[io::csv::write] Failed to build matrix frame")
}
