//! Reading delimited numeric files and fixed-precision matrix output.

use crate::error::SymNmfError;
use crate::Matrix;
use std::fs;
use std::path::Path;

/// Reads a comma-delimited numeric text file into an N x d matrix.
///
/// Each non-empty line becomes one row, so a file with one value per
/// line parses directly to an N x 1 matrix. Ragged rows and non-numeric
/// fields are rejected.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix, SymNmfError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| SymNmfError::Io(format!("cannot read {}: {}", path.display(), e)))?;
    parse_matrix(&contents)
}

/// Parses delimited text into a rectangular matrix.
pub fn parse_matrix(contents: &str) -> Result<Matrix, SymNmfError> {
    let mut values = Vec::new();
    let mut n_rows = 0;
    let mut n_cols = None;

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row_len = 0;
        for field in line.split(',') {
            let value: f64 = field.trim().parse().map_err(|_| {
                SymNmfError::Format(format!(
                    "line {}: '{}' is not a number",
                    line_no + 1,
                    field.trim()
                ))
            })?;
            values.push(value);
            row_len += 1;
        }

        match n_cols {
            None => n_cols = Some(row_len),
            Some(expected) if expected != row_len => {
                return Err(SymNmfError::Format(format!(
                    "line {}: expected {} entries, found {}",
                    line_no + 1,
                    expected,
                    row_len
                )));
            }
            Some(_) => {}
        }
        n_rows += 1;
    }

    let n_cols =
        n_cols.ok_or_else(|| SymNmfError::Format("input contains no data".to_string()))?;

    Matrix::from_shape_vec((n_rows, n_cols), values)
        .map_err(|e| SymNmfError::Format(format!("cannot shape input into a matrix: {}", e)))
}

/// Formats a matrix as comma-separated rows with four digits after the
/// decimal point, one row per line.
pub fn format_matrix(m: &Matrix) -> String {
    let mut out = String::new();
    for row in m.outer_iter() {
        let line = row
            .iter()
            .map(|v| format!("{:.4}", v))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
