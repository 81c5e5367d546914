use crate::error::SymNmfError;
use crate::Matrix;
use ndarray::Axis;

/// Computes the diagonal degree matrix of a similarity matrix.
///
/// Entry (i, i) is the sum of row i of `a`; all off-diagonal entries are
/// exactly zero.
pub fn degree_matrix(a: &Matrix) -> Result<Matrix, SymNmfError> {
    if a.nrows() != a.ncols() {
        return Err(SymNmfError::Format(format!(
            "similarity matrix must be square, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }
    if a.nrows() == 0 {
        return Err(SymNmfError::Format(
            "similarity matrix must have at least one row".to_string(),
        ));
    }

    let degrees = a.sum_axis(Axis(1));
    Ok(Matrix::from_diag(&degrees))
}
