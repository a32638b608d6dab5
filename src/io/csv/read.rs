//! Delimited text reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result, ensure};
use ndarray::Array2;
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader}};

/// Reads a headerless delimited matrix file from `path`.
pub fn read_matrix(path: &Path, delimiter: u8) -> Result<Array2<f64>> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open matrix file: {}", path.display()))?;
    let df = CsvReader::new(file)
        .with_options(matrix_options(delimiter))
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read matrix from {:?}", path))?;
    frame_to_matrix(df)
        .with_context(|| format!("[io::csv::read] Invalid matrix in {}", path.display()))
}

/// Reads a headerless delimited matrix from a string.
pub fn read_matrix_str(text: &str, delimiter: u8) -> Result<Array2<f64>> {
    let df = CsvReader::new(Cursor::new(text.as_bytes()))
        .with_options(matrix_options(delimiter))
        .finish()
        .context("[io::csv::read] Failed to read matrix from string")?;
    frame_to_matrix(df)
}

/// Headerless, every column read as text, custom separator.
fn matrix_options(delimiter: u8) -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|po| po.with_separator(delimiter))
}

/// Parse every cell as f64, ignoring surrounding whitespace, into a dense row-major matrix.
fn frame_to_matrix(df: DataFrame) -> Result<Array2<f64>> {
    ensure!(df.height() > 0 && df.width() > 0, "[io::csv::read] Matrix has no entries");

    let mut matrix = Array2::<f64>::zeros((df.height(), df.width()));
    for (col, column) in df.get_columns().iter().enumerate() {
        let cells = column.str()
            .with_context(|| format!("[io::csv::read] Column {col} is not text"))?;

        for (row, cell) in cells.into_iter().enumerate() {
            let cell = cell.map(str::trim).filter(|cell| !cell.is_empty())
                .with_context(|| format!("[io::csv::read] Missing entry at row {row}, column {col}"))?;
            matrix[[row, col]] = cell.parse()
                .with_context(|| format!("[io::csv::read] Non-numeric entry {cell:?} at row {row}, column {col}"))?;
        }
    }
    Ok(matrix)
}
